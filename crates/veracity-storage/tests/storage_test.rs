//! ValidationStore: migrations, round-trips, ordering, counts, file-backed reopen.

use serde_json::json;
use veracity_core::models::{Modality, ValidationRecord, Verdict};
use veracity_core::traits::IValidationStore;
use veracity_storage::migrations::LATEST_VERSION;
use veracity_storage::ValidationStore;

fn record(input_type: Modality, input: &str, result: Verdict, score: f64) -> ValidationRecord {
    ValidationRecord {
        input_type,
        input_data: input.to_string(),
        input_hash: format!("hash-{input}"),
        result,
        confidence_score: score,
        details: json!({
            "analysis": ["Valid URL format"],
            "modality": input_type.as_str(),
        }),
    }
}

#[test]
fn fresh_store_is_at_latest_schema() {
    let store = ValidationStore::open_in_memory().unwrap();
    assert_eq!(store.schema_version().unwrap(), LATEST_VERSION);
}

#[test]
fn insert_then_get_round_trips_every_column() {
    let store = ValidationStore::open_in_memory().unwrap();
    let rec = record(Modality::Url, "https://github.com", Verdict::Authentic, 87.46);
    let id = store.insert(&rec).unwrap();

    let stored = store.get(&id).unwrap().expect("row exists");
    assert_eq!(stored.id, id);
    assert_eq!(stored.input_type, Modality::Url);
    assert_eq!(stored.input_data, "https://github.com");
    assert_eq!(stored.input_hash, "hash-https://github.com");
    assert_eq!(stored.result, Verdict::Authentic);
    assert_eq!(stored.confidence_score, 87.46);
    assert_eq!(stored.details, rec.details);
}

#[test]
fn ids_are_unique_uuids() {
    let store = ValidationStore::open_in_memory().unwrap();
    let rec = record(Modality::Text, "same", Verdict::Fake, 10.0);
    let a = store.insert(&rec).unwrap();
    let b = store.insert(&rec).unwrap();
    assert_ne!(a, b);
    assert!(uuid_like(&a));
}

fn uuid_like(id: &str) -> bool {
    id.len() == 36 && id.chars().filter(|c| *c == '-').count() == 4
}

#[test]
fn missing_id_is_none() {
    let store = ValidationStore::open_in_memory().unwrap();
    assert!(store.get("does-not-exist").unwrap().is_none());
}

#[test]
fn recent_is_newest_first_and_limited() {
    let store = ValidationStore::open_in_memory().unwrap();
    let mut ids = Vec::new();
    for i in 0..5 {
        let rec = record(Modality::Text, &format!("text {i}"), Verdict::Authentic, 60.0);
        ids.push(store.insert(&rec).unwrap());
        std::thread::sleep(std::time::Duration::from_millis(2));
    }
    let recent = store.recent(3).unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].id, ids[4]);
    assert_eq!(recent[2].id, ids[2]);
    assert!(recent.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[test]
fn verdict_counts_are_per_modality() {
    let store = ValidationStore::open_in_memory().unwrap();
    store.insert(&record(Modality::Image, "a", Verdict::Authentic, 80.0)).unwrap();
    store.insert(&record(Modality::Image, "b", Verdict::Fake, 20.0)).unwrap();
    store.insert(&record(Modality::Image, "c", Verdict::Fake, 30.0)).unwrap();
    store.insert(&record(Modality::Video, "d", Verdict::Authentic, 95.0)).unwrap();

    let image = store.verdict_counts(Modality::Image).unwrap();
    assert_eq!((image.authentic, image.fake), (1, 2));
    assert_eq!(image.total(), 3);
    assert_eq!(store.verdict_counts(Modality::Url).unwrap().total(), 0);
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("veracity.db");

    let id = {
        let store = ValidationStore::open(&path).unwrap();
        store
            .insert(&record(Modality::Url, "https://x.test", Verdict::Fake, 12.5))
            .unwrap()
    };

    let reopened = ValidationStore::open(&path).unwrap();
    assert_eq!(reopened.schema_version().unwrap(), LATEST_VERSION);
    let stored = reopened.get(&id).unwrap().expect("persisted");
    assert_eq!(stored.result, Verdict::Fake);
}

#[test]
fn open_fails_for_unwritable_location() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("veracity.db");
    assert!(ValidationStore::open(&path).is_err());
}
