//! Integration tests for saving and reloading the gallery across launches

use super::common::fixtures::{png_bytes, TestGallery};
use picroll::{Collection, Config, Record, Slot};
use proptest::prelude::*;

#[test]
fn test_first_launch_is_empty() {
    let env = TestGallery::new();
    let gallery = env.open(&Config::default());
    assert!(gallery.is_empty());
}

#[test]
fn test_import_survives_relaunch() {
    let env = TestGallery::new();
    let config = Config::default();

    let reference = {
        let mut gallery = env.open(&config);
        let record = gallery.import_bytes(&png_bytes(4, 4)).unwrap();
        record.image_reference().to_string()
    };

    let gallery = env.open(&config);
    assert_eq!(gallery.len(), 1);
    let record = gallery.get(0).unwrap();
    assert_eq!(record.display_name, "Unknown");
    assert_eq!(record.image_reference(), reference);
    assert!(gallery.image_path(0).unwrap().is_file());
}

#[test]
fn test_rename_survives_relaunch() {
    let env = TestGallery::new();
    let config = Config::default();

    {
        let mut gallery = env.open(&config);
        gallery.import_bytes(&png_bytes(4, 4)).unwrap();
        gallery.import_bytes(&png_bytes(2, 2)).unwrap();
    }
    let second_reference = env.open(&config).get(1).unwrap().image_reference().to_string();

    {
        let mut gallery = env.open(&config);
        gallery.rename_to(1, "Alice").unwrap();
    }

    let gallery = env.open(&config);
    let names: Vec<&str> = gallery
        .records()
        .iter()
        .map(|r| r.display_name.as_str())
        .collect();
    assert_eq!(names, vec!["Unknown", "Alice"]);
    assert_eq!(gallery.get(1).unwrap().image_reference(), second_reference);
}

#[test]
fn test_corrupt_blob_in_database_starts_empty() {
    let env = TestGallery::new();
    let config = Config::default();
    env.store(&config)
        .slot()
        .write(&config.slot_key, b"\xff\xfe not json")
        .unwrap();

    let mut gallery = env.open(&config);
    assert!(gallery.is_empty());

    // The next save replaces the unreadable blob
    gallery.import_bytes(&png_bytes(1, 1)).unwrap();
    assert_eq!(env.store(&config).try_load().unwrap().len(), 1);
}

#[test]
fn test_slot_key_separates_galleries() {
    let env = TestGallery::new();
    let family = Config {
        slot_key: "family".to_string(),
        ..Config::default()
    };
    let friends = Config {
        slot_key: "friends".to_string(),
        ..Config::default()
    };

    env.open(&family).import_bytes(&png_bytes(2, 2)).unwrap();

    assert_eq!(env.open(&family).len(), 1);
    assert!(env.open(&friends).is_empty());
}

#[test]
fn test_save_is_idempotent_in_database() {
    let env = TestGallery::new();
    let config = Config::default();
    let store = env.store(&config);
    let people: Collection = vec![Record::new("Alice", "a.jpg")].into();

    store.save(&people).unwrap();
    let once = store.slot().read(&config.slot_key).unwrap();
    store.save(&people).unwrap();
    let twice = store.slot().read(&config.slot_key).unwrap();

    assert_eq!(once, twice);
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (any::<String>(), "[A-Za-z0-9-]{1,40}\\.jpg").prop_map(|(name, image)| Record::new(name, image))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_saved_collection_loads_back(records in prop::collection::vec(record_strategy(), 0..16)) {
        let env = TestGallery::new();
        let store = env.store(&Config::default());
        let people: Collection = records.into();

        store.save(&people).unwrap();
        prop_assert_eq!(store.try_load().unwrap(), people);
    }
}
