use chrono::{TimeZone, Utc};

use super::*;
use crate::clock::FixedClock;
use crate::storage::{JsonRepository, KeyValueStore, MESSAGES_KEY, MemoryStorage};

fn clock_at(secs: u32) -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, secs).unwrap())
}

fn contact(name: &str, subject: &str) -> ContactDraft {
    ContactDraft {
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        subject: subject.into(),
        message: "Would love to collaborate on a dashboard.".into(),
    }
}

fn inbox(store: &MemoryStorage) -> InboxStore<JsonRepository<MemoryStorage, Message>> {
    InboxStore::load(JsonRepository::new(store.clone(), MESSAGES_KEY)).unwrap()
}

// =============================================================
// ContactDraft
// =============================================================

#[test]
fn contact_draft_builds_unread_message() {
    let msg = contact("Ada", "Hello").submit(&clock_at(0)).unwrap();
    assert_eq!(msg.status, MessageStatus::Unread);
    assert_eq!(msg.email, "ada@example.com");
    assert_eq!(msg.id, clock_at(0).now().timestamp_millis());
}

#[test]
fn contact_draft_requires_every_field() {
    let mut draft = contact("Ada", "Hello");
    draft.subject = "  ".into();
    assert_eq!(draft.submit(&clock_at(0)).unwrap_err(), Error::Validation("subject is required".into()));
}

#[test]
fn contact_draft_rejects_email_without_at() {
    let mut draft = contact("Ada", "Hello");
    draft.email = "ada.example.com".into();
    assert!(matches!(draft.submit(&clock_at(0)), Err(Error::Validation(_))));
}

// =============================================================
// InboxStore
// =============================================================

#[test]
fn append_writes_through_to_storage() {
    let store = MemoryStorage::new();
    let mut inbox = inbox(&store);
    inbox.append(contact("Ada", "Hello").submit(&clock_at(0)).unwrap()).unwrap();

    let raw = store.get(MESSAGES_KEY).unwrap().unwrap();
    let saved: Vec<Message> = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved, inbox.messages());
}

#[test]
fn load_hydrates_messages_written_by_contact_form() {
    let store = MemoryStorage::new();
    inbox(&store).append(contact("Ada", "Hello").submit(&clock_at(0)).unwrap()).unwrap();

    let admin_view = inbox(&store);
    assert_eq!(admin_view.len(), 1);
    assert_eq!(admin_view.unread_count(), 1);
}

#[test]
fn mark_read_twice_is_a_noop_the_second_time() {
    let store = MemoryStorage::new();
    let mut inbox = inbox(&store);
    let msg = contact("Ada", "Hello").submit(&clock_at(0)).unwrap();
    let id = msg.id;
    inbox.append(msg).unwrap();

    inbox.mark_read(id).unwrap();
    let snapshot = store.get(MESSAGES_KEY).unwrap();
    inbox.mark_read(id).unwrap();

    assert_eq!(inbox.messages()[0].status, MessageStatus::Read);
    assert_eq!(store.get(MESSAGES_KEY).unwrap(), snapshot);
    assert_eq!(inbox.unread_count(), 0);
}

#[test]
fn append_gives_same_millisecond_messages_distinct_ids() {
    let store = MemoryStorage::new();
    let mut inbox = inbox(&store);
    inbox.append(contact("Ada", "First").submit(&clock_at(0)).unwrap()).unwrap();
    inbox.append(contact("Grace", "Second").submit(&clock_at(0)).unwrap()).unwrap();

    let ids: Vec<i64> = inbox.messages().iter().map(|m| m.id).collect();
    assert_ne!(ids[0], ids[1]);

    inbox.mark_read(ids[1]).unwrap();
    assert_eq!(inbox.messages()[0].status, MessageStatus::Unread);
    assert_eq!(inbox.messages()[1].status, MessageStatus::Read);
}

#[test]
fn mark_read_unknown_id_is_not_found() {
    let store = MemoryStorage::new();
    let mut inbox = inbox(&store);
    assert_eq!(inbox.mark_read(7).unwrap_err(), Error::NotFound { kind: "message", id: 7 });
    assert_eq!(store.get(MESSAGES_KEY).unwrap(), None);
}

#[test]
fn query_matches_any_text_field_case_insensitively() {
    let store = MemoryStorage::new();
    let mut inbox = inbox(&store);
    inbox.append(contact("Ada", "Consulting").submit(&clock_at(0)).unwrap()).unwrap();
    inbox.append(contact("Grace", "Speaking").submit(&clock_at(1)).unwrap()).unwrap();

    assert_eq!(inbox.query("GRACE@").len(), 1);
    assert_eq!(inbox.query("consult").len(), 1);
    assert_eq!(inbox.query("dashboard").len(), 2);
    assert_eq!(inbox.query("").len(), 2);
    assert!(inbox.query("invoice").is_empty());
}

#[test]
fn recent_returns_newest_first() {
    let store = MemoryStorage::new();
    let mut inbox = inbox(&store);
    for (i, name) in ["Ada", "Grace", "Linus", "Ken"].iter().enumerate() {
        let secs = u32::try_from(i).unwrap();
        inbox.append(contact(name, "Hi").submit(&clock_at(secs)).unwrap()).unwrap();
    }
    let recent = inbox.recent("", 3);
    let names: Vec<&str> = recent.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Ken", "Linus", "Grace"]);
}

#[test]
fn message_status_serializes_lowercase() {
    let msg = contact("Ada", "Hello").submit(&clock_at(0)).unwrap();
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["status"], "unread");
    assert_eq!(json["timestamp"], "2024-05-02T09:00:00Z");
}
