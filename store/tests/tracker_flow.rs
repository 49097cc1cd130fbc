//! End-to-end walk of a tracker session against a real storage file.

use chrono::NaiveDate;

use larder_common::listing::SortOrder;
use larder_store::backend::{FileBackend, StorageBackend};
use larder_store::error::StoreError;
use larder_store::session::{NewProduct, Tracker};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn draft(kind: &str, name: &str, quantity: u32, expiry: &str) -> NewProduct {
    NewProduct {
        kind: kind.into(),
        name: name.into(),
        quantity,
        expiry: expiry.into(),
        details: String::new(),
    }
}

#[test]
fn full_session_walkthrough() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    // Step 1: a fresh session starts empty.
    let mut tracker = Tracker::open_at(FileBackend::open(&path), today());
    assert!(tracker.on_view_reload().unwrap().is_empty());

    // Step 2: add records across the whole tier spectrum. Yogurt is already
    // ten days past its date; Honey has most of a year left.
    for (kind, name, expiry) in [
        ("Grocery Item", "Honey", "2026-01-01"),
        ("Food Item", "Milk", "2025-06-20"),
        ("Food Item", "Yogurt", "2025-06-05"),
        ("Food Item", "Cheddar", "2025-07-25"),
    ] {
        tracker
            .submit_new_product(draft(kind, name, 2, expiry), SortOrder::Unsorted)
            .unwrap();
    }

    // Step 3: time-left sort walks the tiers from expired to good standing.
    let rows = tracker.request_sort(SortOrder::TimeLeft);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Yogurt", "Milk", "Cheddar", "Honey"]);
    let severities: Vec<&str> = rows.iter().map(|r| r.severity.as_str()).collect();
    assert_eq!(severities, vec!["expired", "critical", "monitor", "good"]);
    assert_eq!(rows[0].days_label, "Expired");
    assert_eq!(rows[1].days_label, "5 days left");

    // Step 4: search matches by name fragment and ignores the sort order.
    let rows = tracker.request_search("mil");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Milk");

    // A date fragment works too.
    let rows = tracker.request_search("2025-06-05");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Yogurt");

    // Step 5: duplicate names are rejected and nothing changes.
    let err = tracker
        .submit_new_product(draft("Medicine", "Milk", 1, "2025-12-01"), SortOrder::Unsorted)
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateName(_)));
    assert_eq!(tracker.products().len(), 4);

    // Step 6: deletion goes by name, so the sorted view cannot mislead it.
    let rows = tracker.request_delete("Yogurt", SortOrder::TimeLeft).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.name != "Yogurt"));

    // Step 7: demo data replaces the collection and flips the view to the
    // critical records only.
    let rows = tracker.request_load_demo_data().unwrap();
    assert_eq!(tracker.products().len(), 64);
    assert!(tracker.critical_only());
    assert!(rows.iter().all(|r| r.severity.as_str() == "critical"));

    // Step 8: the flag survives into the next session on the same file.
    drop(tracker);
    let mut tracker = Tracker::open_at(FileBackend::open(&path), today());
    assert!(tracker.critical_only());

    // A full view reload resets it and shows everything again.
    let rows = tracker.on_view_reload().unwrap();
    assert_eq!(rows.len(), 64);
    assert!(!tracker.critical_only());

    // Step 9: clearing empties the store and the file, twice over.
    assert!(tracker.request_clear_all().unwrap().is_empty());
    assert!(tracker.request_clear_all().unwrap().is_empty());
    drop(tracker);

    let backend = FileBackend::open(&path);
    assert_eq!(backend.get("products"), None);
    assert_eq!(backend.get("showCriticalOnly"), None);
}

#[test]
fn damaged_storage_file_degrades_to_an_empty_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, r#"{"products": "[{\"type\": oops"}"#).unwrap();

    let mut tracker = Tracker::open_at(FileBackend::open(&path), today());
    assert!(tracker.products().is_empty());

    // The session is fully usable afterwards.
    let rows = tracker
        .submit_new_product(draft("Food Item", "Milk", 2, "2025-06-20"), SortOrder::Unsorted)
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn source_indexes_from_a_sorted_view_address_storage_positions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut tracker = Tracker::open_at(FileBackend::open(&path), today());
    for (name, expiry) in [("Honey", "2026-01-01"), ("Milk", "2025-06-20")] {
        tracker
            .submit_new_product(draft("Food Item", name, 1, expiry), SortOrder::Unsorted)
            .unwrap();
    }

    let rows = tracker.request_sort(SortOrder::TimeLeft);
    assert_eq!(rows[0].name, "Milk");
    assert_eq!(rows[0].source_index, 1);
    assert_eq!(tracker.products()[rows[0].source_index].name, "Milk");
}
