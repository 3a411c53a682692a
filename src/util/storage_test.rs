use super::*;

#[test]
fn memory_storage_round_trips_and_removes() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());

    storage.set_item("token", "abc").expect("write");
    assert_eq!(storage.get_item("token").as_deref(), Some("abc"));
    assert!(!storage.is_empty());

    storage.remove_item("token");
    assert_eq!(storage.get_item("token"), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_overwrites_existing_value() {
    let storage = MemoryStorage::new();
    storage.set_item("k", "1").expect("write");
    storage.set_item("k", "2").expect("write");
    assert_eq!(storage.get_item("k").as_deref(), Some("2"));

    storage.remove_item("k");
    assert!(storage.is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_unavailable_natively() {
    let storage = BrowserStorage;
    assert_eq!(storage.get_item("token"), None);
    assert_eq!(storage.set_item("token", "x"), Err(StorageError::Unavailable));
    storage.remove_item("token");
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Write { key: "token".to_owned(), message: "QuotaExceededError".to_owned() };
    assert_eq!(err.to_string(), "failed to write storage key `token`: QuotaExceededError");
}
