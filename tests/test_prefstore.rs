use std::time::Duration;

use rpawogen::history::HistoryEntry;
use rpawogen::pools::PoolId;
use rpawogen::prefstore::{PrefStore, DEFAULT_LENGTH, KEY_LENGTH};
use tempfile::tempdir;

fn test_store() -> (tempfile::TempDir, PrefStore) {
    let dir = tempdir().expect("Failed to create temp directory");
    let store = PrefStore::open(&dir.path().join("prefs")).expect("Failed to open store");
    (dir, store)
}

#[test]
fn test_string_preferences_roundtrip() {
    let (_dir, store) = test_store();

    assert_eq!(store.get_str("charpool.digits").unwrap(), None);
    store.put_str("charpool.digits", "01234").unwrap();
    assert_eq!(store.get_str("charpool.digits").unwrap(), Some("01234".to_string()));

    store.remove("charpool.digits").unwrap();
    assert_eq!(store.get_str("charpool.digits").unwrap(), None);
}

#[test]
fn test_bool_preferences_with_default() {
    let (_dir, store) = test_store();

    assert!(store.get_bool("enabled.upper", true).unwrap());
    assert!(!store.get_bool("enabled.upper", false).unwrap());

    store.put_bool("enabled.upper", false).unwrap();
    assert!(!store.get_bool("enabled.upper", true).unwrap());

    store.put_bool("enabled.upper", true).unwrap();
    assert!(store.get_bool("enabled.upper", false).unwrap());
}

#[test]
fn test_length_falls_back_when_missing_or_invalid() {
    let (_dir, store) = test_store();

    assert_eq!(store.get_length().unwrap(), DEFAULT_LENGTH);

    store.put_length(24).unwrap();
    assert_eq!(store.get_length().unwrap(), 24);

    // 非数字的存量值回退到默认长度
    store.put_str(KEY_LENGTH, "not-a-number").unwrap();
    assert_eq!(store.get_length().unwrap(), DEFAULT_LENGTH);
}

#[test]
fn test_load_pool_resolution() {
    let (_dir, store) = test_store();

    // unset key falls back to the built-in default set
    let pool = store.load_pool(PoolId::Lower).unwrap();
    assert_eq!(pool.len(), 26);

    // configured characters win
    store.put_str(&PoolId::Lower.pool_key(), "xyz").unwrap();
    let pool = store.load_pool(PoolId::Lower).unwrap();
    assert_eq!(pool.chars(), &['x', 'y', 'z']);

    // an explicitly empty string stays an empty pool
    store.put_str(&PoolId::Lower.pool_key(), "").unwrap();
    let pool = store.load_pool(PoolId::Lower).unwrap();
    assert!(pool.is_empty());
}

#[test]
fn test_history_persists_in_generation_order() {
    let (_dir, store) = test_store();

    store.append_history(&HistoryEntry::new("first")).unwrap();
    store.append_history(&HistoryEntry::new("second")).unwrap();

    let entries = store.load_history().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].password, "first");
    assert_eq!(entries[1].password, "second");

    store.clear_history().unwrap();
    assert!(store.load_history().unwrap().is_empty());
}

#[test]
fn test_export_import_roundtrip() {
    let (_dir, store) = test_store();
    store.put_str(&PoolId::Digits.pool_key(), "0123").unwrap();
    store.put_bool(&PoolId::Upper.enabled_key(), false).unwrap();
    store.put_length(24).unwrap();

    let exported = store.export_prefs().unwrap();
    assert_eq!(exported.digits.characters, Some("0123".to_string()));
    assert!(!exported.upper.enabled);
    assert!(exported.lower.characters.is_none());
    assert_eq!(exported.length, 24);

    // change everything, then restore from the export
    store.put_str(&PoolId::Digits.pool_key(), "999").unwrap();
    store.put_str(&PoolId::Lower.pool_key(), "abc").unwrap();
    store.put_bool(&PoolId::Upper.enabled_key(), true).unwrap();
    store.put_length(8).unwrap();

    store.import_prefs(&exported).unwrap();
    assert_eq!(
        store.get_str(&PoolId::Digits.pool_key()).unwrap(),
        Some("0123".to_string())
    );
    // lower had no custom characters, so the import removes the key
    assert_eq!(store.get_str(&PoolId::Lower.pool_key()).unwrap(), None);
    assert!(!store.get_bool(&PoolId::Upper.enabled_key(), true).unwrap());
    assert_eq!(store.get_length().unwrap(), 24);
}

#[test]
fn test_watch_pools_reports_charpool_changes() {
    let (_dir, store) = test_store();
    let mut subscriber = store.watch_pools();

    store.put_str(&PoolId::Digits.pool_key(), "42").unwrap();

    let event = subscriber
        .next_timeout(Duration::from_secs(1))
        .expect("Expected a change event");
    match event {
        sled::Event::Insert { key, value } => {
            assert_eq!(key.as_ref(), b"charpool.digits");
            assert_eq!(value.as_ref(), b"42");
        }
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[test]
fn test_watch_pools_ignores_other_keys() {
    let (_dir, store) = test_store();
    let mut subscriber = store.watch_pools();

    store.put_length(42).unwrap();
    store.put_bool(&PoolId::Digits.enabled_key(), false).unwrap();

    assert!(subscriber.next_timeout(Duration::from_millis(100)).is_err());
}
