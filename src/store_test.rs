use super::*;

#[test]
fn new_store_is_empty() {
    let store = MemoryStore::new();
    assert_eq!(store.load("theme"), None);
    assert_eq!(store.writes(), 0);
}

#[test]
fn save_then_load_returns_value() {
    let mut store = MemoryStore::new();
    store.save("theme", "dark").unwrap();
    assert_eq!(store.load("theme").as_deref(), Some("dark"));
    assert_eq!(store.writes(), 1);
}

#[test]
fn save_overwrites_previous_value() {
    let mut store = MemoryStore::with_entry("theme", "dark");
    store.save("theme", "light").unwrap();
    assert_eq!(store.load("theme").as_deref(), Some("light"));
}

#[test]
fn keys_are_independent() {
    let store = MemoryStore::with_entry("theme", "dark");
    assert_eq!(store.load("other"), None);
}

#[test]
fn unavailable_store_reads_absent() {
    let store = MemoryStore::unavailable();
    assert_eq!(store.load("theme"), None);
}

#[test]
fn unavailable_store_rejects_writes() {
    let mut store = MemoryStore::unavailable();
    let err = store.save("theme", "dark").unwrap_err();
    assert!(matches!(err, StoreError::Unavailable));
    assert_eq!(store.writes(), 0);
    assert_eq!(store.load("theme"), None);
}

#[test]
fn default_store_accepts_writes() {
    let mut store = MemoryStore::default();
    store.save("theme", "dark").unwrap();
    assert_eq!(store.load("theme").as_deref(), Some("dark"));
    assert_eq!(store.writes(), 1);
}
