use super::*;

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_empty_without_browser() {
    let storage = BrowserStorage;
    assert_eq!(storage.get("auth_user"), None);
    assert!(storage.set("auth_user", "{}").is_err());
    storage.remove("auth_user");
}

#[test]
fn memory_storage_round_trips_and_removes() {
    let storage = MemoryStorage::default();
    assert_eq!(storage.set("k", "v"), Ok(()));
    assert_eq!(storage.get("k").as_deref(), Some("v"));
    storage.remove("k");
    assert_eq!(storage.get("k"), None);
}

#[test]
fn memory_storage_can_reject_writes() {
    let storage = MemoryStorage::default().rejecting_writes();
    assert!(storage.set("k", "v").is_err());
    assert_eq!(storage.get("k"), None);
}
