//! End-to-end persistence through the file backend

use std::sync::Arc;

use styler_history::{HistoryStore, JsonFileBackend};
use styler_types::{Advisory, GenerationRequest, GenerationResult, ImageAsset};

fn record(label: &str) -> styler_types::HistoryRecord {
    let request = GenerationRequest::new(
        ImageAsset::from_bytes(b"subject", "image/png"),
        ImageAsset::from_bytes(b"garment", "image/jpeg"),
    )
    .with_product_label(label);
    let result = GenerationResult {
        composed_image: ImageAsset::from_bytes(b"composed", "image/png"),
        advisory: Advisory::fresh("advice"),
    };
    styler_types::HistoryRecord::from_generation(&request, &result)
}

#[test]
fn history_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    {
        let mut store = HistoryStore::load(Arc::new(JsonFileBackend::new(&path)), 5);
        store.insert(record("denim jacket"));
        store.insert(record("silk scarf"));
    }

    let store = HistoryStore::load(Arc::new(JsonFileBackend::new(&path)), 5);
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[0].product_label, "silk scarf");
    assert_eq!(store.list()[1].product_label, "denim jacket");
}

#[test]
fn corrupt_file_on_disk_starts_empty_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let mut store = HistoryStore::load(Arc::new(JsonFileBackend::new(&path)), 5);
    assert!(store.is_empty());

    // The first insert overwrites the corrupt file with valid contents.
    store.insert(record("fresh start"));
    let reloaded = HistoryStore::load(Arc::new(JsonFileBackend::new(&path)), 5);
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn delete_is_reflected_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = HistoryStore::load(Arc::new(JsonFileBackend::new(&path)), 5);
    store.insert(record("kept"));
    store.insert(record("deleted"));
    let victim = store.list()[0].id.clone();
    assert!(store.delete(&victim));

    let reloaded = HistoryStore::load(Arc::new(JsonFileBackend::new(&path)), 5);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.list()[0].product_label, "kept");
}
