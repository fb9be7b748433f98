use super::*;

const KEY: &str = "items-wishlist";

fn shared(storage: &MemoryStorage) -> Arc<dyn KeyValueStorage> {
    Arc::new(storage.clone())
}

// =============================================================
// PersistedValue::open
// =============================================================

#[test]
fn open_returns_stored_value() {
    let storage = MemoryStorage::new().with_entry(KEY, "stored");
    let cell = PersistedValue::open(shared(&storage), KEY, "fallback");
    assert_eq!(cell.get(), "stored");
    assert_eq!(cell.key(), KEY);
}

#[test]
fn open_missing_key_uses_default() {
    let storage = MemoryStorage::new();
    let cell = PersistedValue::open(shared(&storage), KEY, "fallback");
    assert_eq!(cell.get(), "fallback");
}

#[test]
fn open_empty_value_uses_default() {
    let storage = MemoryStorage::new().with_entry(KEY, "");
    let cell = PersistedValue::open(shared(&storage), KEY, "fallback");
    assert_eq!(cell.get(), "fallback");
}

#[test]
fn open_failed_read_uses_default() {
    let storage = MemoryStorage::new().with_entry(KEY, "stored");
    storage.set_fail_reads(true);
    let cell = PersistedValue::open(shared(&storage), KEY, "fallback");
    assert_eq!(cell.get(), "fallback");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_outside_browser_uses_default() {
    let cell = PersistedValue::open(Arc::new(BrowserStorage), KEY, "fallback");
    assert_eq!(cell.get(), "fallback");
}

#[test]
fn pending_holds_default_until_reload() {
    let storage = MemoryStorage::new().with_entry(KEY, "stored");
    let mut cell = PersistedValue::pending(shared(&storage), KEY, "fallback");
    assert_eq!(cell.get(), "fallback");

    cell.reload("fallback");
    assert_eq!(cell.get(), "stored");
}

#[test]
fn reload_with_failing_read_falls_back() {
    let storage = MemoryStorage::new().with_entry(KEY, "stored");
    let mut cell = PersistedValue::open(shared(&storage), KEY, "fallback");
    storage.set_fail_reads(true);

    cell.reload("fallback");
    assert_eq!(cell.get(), "fallback");
}

// =============================================================
// PersistedValue::set / update
// =============================================================

#[test]
fn set_persists_and_updates_cache() {
    let storage = MemoryStorage::new();
    let mut cell = PersistedValue::open(shared(&storage), KEY, "fallback");

    assert_eq!(cell.set("next"), WriteOutcome::Persisted);
    assert_eq!(cell.get(), "next");
    assert_eq!(storage.raw(KEY).as_deref(), Some("next"));
}

#[test]
fn set_failure_is_dropped_and_keeps_cache() {
    let storage = MemoryStorage::new().with_entry(KEY, "before");
    let mut cell = PersistedValue::open(shared(&storage), KEY, "fallback");
    storage.set_fail_writes(true);

    let outcome = cell.set("after");
    assert!(matches!(outcome, WriteOutcome::Dropped(StorageError::Write(_))));
    assert!(!outcome.is_persisted());
    assert_eq!(cell.get(), "before");
    assert_eq!(storage.raw(KEY).as_deref(), Some("before"));
}

#[test]
fn update_applies_function_to_last_known_value() {
    let storage = MemoryStorage::new().with_entry(KEY, "a");
    let mut cell = PersistedValue::open(shared(&storage), KEY, "fallback");

    assert!(cell.update(|old| format!("{old}b")).is_persisted());
    assert!(cell.update(|old| format!("{old}c")).is_persisted());
    assert_eq!(cell.get(), "abc");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_outside_browser_drops_writes() {
    let mut cell = PersistedValue::open(Arc::new(BrowserStorage), KEY, "fallback");
    assert_eq!(cell.set("next"), WriteOutcome::Dropped(StorageError::Unavailable));
    assert_eq!(cell.get(), "fallback");
}

// =============================================================
// Shared key visibility
// =============================================================

#[test]
fn successful_write_is_visible_to_next_open_on_same_key() {
    let storage = MemoryStorage::new();
    let mut writer = PersistedValue::open(shared(&storage), KEY, "fallback");
    let stale = PersistedValue::open(shared(&storage), KEY, "fallback");

    assert!(writer.set("fresh").is_persisted());

    // Existing cells are not pushed the new value.
    assert_eq!(stale.get(), "fallback");
    let reader = PersistedValue::open(shared(&storage), KEY, "fallback");
    assert_eq!(reader.get(), "fresh");
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set_item(KEY, "v").expect("write");
    assert_eq!(b.get_item(KEY).expect("read").as_deref(), Some("v"));
}

#[test]
fn storage_error_messages_are_descriptive() {
    assert_eq!(
        StorageError::Unavailable.to_string(),
        "durable storage is unavailable"
    );
    assert_eq!(
        StorageError::Write("quota".to_owned()).to_string(),
        "storage write failed: quota"
    );
}
