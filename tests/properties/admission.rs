//! Property tests for enclosure admission.

use proptest::prelude::*;

use dinopark::{Diet, Dinosaur, Enclosure, Security};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after any sequence of admission attempts, occupants share one diet
    /// and every failed attempt left the enclosure untouched.
    #[test]
    fn property_admitted_dinosaurs_share_a_diet(
        diets in proptest::collection::vec(any::<bool>(), 0..16),
    ) {
        let mut enclosure = Enclosure::with_basic_security();

        for (i, carnivorous) in diets.iter().enumerate() {
            let before = enclosure.dinosaurs().len();
            let result = enclosure.add_dinosaur(Dinosaur::new("Dino", *carnivorous).with_length(i as i64)).map(|_| ());
            let after = enclosure.dinosaurs().len();

            if result.is_ok() {
                prop_assert_eq!(after, before + 1);
            } else {
                prop_assert_eq!(after, before);
            }
        }

        let admitted = enclosure.dinosaurs();
        if let Some(first) = admitted.first() {
            prop_assert!(admitted.iter().all(|d| d.diet() == first.diet()));
            prop_assert_eq!(enclosure.diet(), Some(first.diet()));
            prop_assert!(admitted.iter().all(|d| d.diet() == Diet::from_carnivorous(diets[0])));
        }
    }

    /// PROPERTY: without an active security nothing is ever admitted.
    #[test]
    fn property_inactive_securities_admit_nothing(
        inactive in 0usize..5,
        carnivorous in any::<bool>(),
    ) {
        let mut enclosure = Enclosure::new();
        for _ in 0..inactive {
            enclosure.add_security(Security::new("Helpful Sign", false, enclosure.id()));
        }

        let result = enclosure.add_dinosaur(Dinosaur::new("Dino", carnivorous));

        prop_assert!(result.is_err());
        prop_assert!(enclosure.dinosaurs().is_empty());
    }

    /// PROPERTY: one active security among any number of inactive ones is enough.
    #[test]
    fn property_any_active_security_admits(
        inactive_before in 0usize..4,
        inactive_after in 0usize..4,
    ) {
        let mut enclosure = Enclosure::new();
        for _ in 0..inactive_before {
            enclosure.add_security(Security::new("Guard tower", false, enclosure.id()));
        }
        enclosure.add_security(Security::new("Electric fence", true, enclosure.id()));
        for _ in 0..inactive_after {
            enclosure.add_security(Security::new("Guard tower", false, enclosure.id()));
        }

        prop_assert!(enclosure.is_security_active());
        prop_assert!(enclosure.add_dinosaur(Dinosaur::new("Dino", true)).is_ok());
    }
}
