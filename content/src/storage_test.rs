use serde::{Deserialize, Serialize};

use super::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Note {
    id: i64,
    text: String,
}

fn note(id: i64, text: &str) -> Note {
    Note { id, text: text.to_owned() }
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_get_missing_is_none() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("absent").unwrap(), None);
}

#[test]
fn memory_storage_set_then_get() {
    let store = MemoryStorage::new();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn memory_storage_remove_is_idempotent() {
    let store = MemoryStorage::new();
    store.set("k", "v").unwrap();
    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let other = store.clone();
    store.set("shared", "yes").unwrap();
    assert_eq!(other.get("shared").unwrap().as_deref(), Some("yes"));
}

// =============================================================
// JsonRepository
// =============================================================

#[test]
fn json_repository_load_missing_key_is_empty() {
    let repo: JsonRepository<_, Note> = JsonRepository::new(MemoryStorage::new(), "notes");
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn json_repository_save_all_overwrites_snapshot() {
    let store = MemoryStorage::new();
    let repo = JsonRepository::new(store.clone(), "notes");
    repo.save_all(&[note(1, "a"), note(2, "b")]).unwrap();
    repo.save_all(&[note(3, "c")]).unwrap();

    assert_eq!(repo.load().unwrap(), vec![note(3, "c")]);
    assert_eq!(store.get("notes").unwrap().as_deref(), Some(r#"[{"id":3,"text":"c"}]"#));
}

#[test]
fn json_repository_rejects_malformed_snapshot() {
    let store = MemoryStorage::new();
    store.set("notes", "{not json").unwrap();
    let repo: JsonRepository<_, Note> = JsonRepository::new(store, "notes");

    let err = repo.load().unwrap_err();
    assert!(matches!(err, Error::Storage(msg) if msg.starts_with("decode notes")));
}

#[test]
fn json_repository_reports_key() {
    let repo: JsonRepository<_, Note> = JsonRepository::new(MemoryStorage::new(), MESSAGES_KEY);
    assert_eq!(repo.key(), "messages");
}
