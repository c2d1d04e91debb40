//! Property tests for dinosaur attributes and the same-diet comparison.

use proptest::prelude::*;

use dinopark::Dinosaur;

fn dinosaur() -> impl Strategy<Value = Dinosaur> {
    ("[A-Z][a-z]{2,12}", any::<bool>(), -50i64..50)
        .prop_map(|(genus, carnivorous, length)| {
            Dinosaur::new(genus, carnivorous).with_length(length)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: same diet holds exactly when every compared dinosaur eats like self.
    #[test]
    fn property_same_diet_matches_all(
        me in dinosaur(),
        first in dinosaur(),
        rest in proptest::collection::vec(dinosaur(), 0..8),
    ) {
        let expected = first.is_carnivorous() == me.is_carnivorous()
            && rest.iter().all(|d| d.is_carnivorous() == me.is_carnivorous());

        prop_assert_eq!(me.has_same_diet_as(&first, &rest), expected);
    }

    /// PROPERTY: genus and length never affect the diet comparison.
    #[test]
    fn property_genus_and_length_are_irrelevant(
        carnivorous in any::<bool>(),
        a in "[A-Z][a-z]{2,12}",
        b in "[A-Z][a-z]{2,12}",
        la in any::<i64>(),
        lb in any::<i64>(),
    ) {
        let me = Dinosaur::new(a, carnivorous).with_length(la);
        let other = Dinosaur::new(b, carnivorous).with_length(lb);

        prop_assert!(me.has_same_diet_as(&other, &[]));
    }

    /// PROPERTY: the last length set is the length read back.
    #[test]
    fn property_set_length_reads_back(
        d in dinosaur(),
        lengths in proptest::collection::vec(any::<i64>(), 1..6),
    ) {
        let mut d = d;
        for length in &lengths {
            d.set_length(*length);
        }

        prop_assert_eq!(d.length(), *lengths.last().unwrap());
    }

    /// PROPERTY: description always names genus, diet and length.
    #[test]
    fn property_description_mentions_fields(d in dinosaur()) {
        let description = d.description();
        let diet = if d.is_carnivorous() { "carnivorous" } else { "non-carnivorous" };

        prop_assert_eq!(
            description,
            format!("The {} {} dinosaur is {} meters long", d.genus(), diet, d.length())
        );
    }
}
