//! Property tests for the TOML store.

use proptest::prelude::*;
use tempfile::tempdir;

use dinopark::infrastructure::TomlEnclosureStore;
use dinopark::{Dinosaur, Enclosure, EntityManager};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: whatever was flushed is what load_all returns.
    #[test]
    fn property_flushed_enclosure_reads_back(
        carnivorous in any::<bool>(),
        lengths in proptest::collection::vec(-100i64..100, 0..6),
        genus in "[A-Z][a-z]{2,12}",
    ) {
        let dir = tempdir().unwrap();
        let store = TomlEnclosureStore::with_path(dir.path().join("store.toml"));

        let enclosure = Enclosure::try_new(
            true,
            lengths
                .iter()
                .map(|l| Dinosaur::new(genus.clone(), carnivorous).with_length(*l)),
        )
        .unwrap();

        store.persist(&enclosure).unwrap();
        store.flush().unwrap();

        prop_assert_eq!(store.load_all().unwrap(), vec![enclosure]);
    }
}
