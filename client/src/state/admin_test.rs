use chrono::{TimeZone, Utc};
use content::Error;
use content::clock::FixedClock;
use content::inbox::{ContactDraft, MessageStatus};
use content::payments::PaymentDraft;
use content::posts::{Category, CategoryFilter};
use content::storage::{JsonRepository, MESSAGES_KEY, MemoryStorage, PAYMENTS_KEY};

use super::*;
use crate::state::toast::ToastVariant;
use crate::state::ui::AdminTab;

type MemRepo<T> = JsonRepository<MemoryStorage, T>;

fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
}

fn later(secs: u32) -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, secs).unwrap())
}

fn state(store: &MemoryStorage) -> AdminState<MemRepo<Message>, MemRepo<Payment>> {
    AdminState {
        posts: ContentStore::seeded(),
        inbox: InboxStore::load(JsonRepository::new(store.clone(), MESSAGES_KEY)).unwrap(),
        ledger: PaymentLedger::load(JsonRepository::new(store.clone(), PAYMENTS_KEY)).unwrap(),
    }
}

fn contact(name: &str, at: u32) -> Message {
    ContactDraft {
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        subject: "Project inquiry".into(),
        message: "Are you available next month?".into(),
    }
    .submit(&later(at))
    .unwrap()
}

fn payment(email: &str, amount: &str, at: u32) -> Payment {
    PaymentDraft {
        email: email.into(),
        amount: amount.into(),
        screenshot: Some("data:image/png;base64,AAAA".into()),
        ..PaymentDraft::default()
    }
    .submit(&later(at))
    .unwrap()
}

// =============================================================================
// dispatch: posts
// =============================================================================

#[test]
fn create_post_prepends_and_toasts() {
    let mut admin = state(&MemoryStorage::new());
    let draft = PostDraft { title: "Rust on the web".into(), content: "Leptos notes".into(), ..PostDraft::default() };
    let toast = admin.dispatch(AdminAction::CreatePost(draft), &clock()).unwrap();
    assert_eq!(toast.title, "Post Created! ✨");
    assert_eq!(admin.posts.len(), 3);
    assert_eq!(admin.posts.posts()[0].title, "Rust on the web");
    assert!(!admin.posts.posts()[0].published);
}

#[test]
fn create_post_without_title_fails_and_leaves_store() {
    let mut admin = state(&MemoryStorage::new());
    let draft = PostDraft { content: "body only".into(), ..PostDraft::default() };
    let err = admin.dispatch(AdminAction::CreatePost(draft), &clock()).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(admin.posts.len(), 2);
}

#[test]
fn toggle_publish_reports_new_visibility() {
    let mut admin = state(&MemoryStorage::new());
    let hidden = admin.dispatch(AdminAction::TogglePublish(1), &clock()).unwrap();
    assert_eq!(hidden.title, "Post Unpublished! 📤");
    let shown = admin.dispatch(AdminAction::TogglePublish(1), &clock()).unwrap();
    assert_eq!(shown.title, "Post Published! 📢");
}

#[test]
fn save_delete_and_duplicate_post() {
    let mut admin = state(&MemoryStorage::new());
    let patch = PostPatch { title: Some("Healthcare ML".into()), ..PostPatch::default() };
    admin.dispatch(AdminAction::SavePost(1, patch), &clock()).unwrap();
    assert_eq!(admin.posts.get(1).unwrap().title, "Healthcare ML");

    let toast = admin.dispatch(AdminAction::DuplicatePost(1), &clock()).unwrap();
    assert_eq!(toast.title, "Post Duplicated! 📋");
    assert_eq!(admin.posts.posts()[0].title, "Healthcare ML (Copy)");

    admin.dispatch(AdminAction::DeletePost(2), &clock()).unwrap();
    assert!(admin.posts.get(2).is_none());
    assert_eq!(admin.posts.len(), 2);
}

#[test]
fn delete_unknown_post_is_not_found() {
    let mut admin = state(&MemoryStorage::new());
    let err = admin.dispatch(AdminAction::DeletePost(99), &clock()).unwrap_err();
    assert_eq!(err, Error::NotFound { kind: "post", id: 99 });
}

// =============================================================================
// dispatch: inbox and ledger
// =============================================================================

#[test]
fn mark_read_persists_through_repository() {
    let store = MemoryStorage::new();
    let mut admin = state(&store);
    let msg = contact("Grace", 1);
    admin.inbox.append(msg.clone()).unwrap();
    admin.dispatch(AdminAction::MarkRead(msg.id), &clock()).unwrap();

    let reloaded = state(&store);
    assert_eq!(reloaded.inbox.messages()[0].status, MessageStatus::Read);
    assert_eq!(reloaded.inbox.unread_count(), 0);
}

#[test]
fn payment_status_toast_names_status() {
    let mut admin = state(&MemoryStorage::new());
    let p = payment("buyer@example.com", "$49", 1);
    admin.ledger.append(p.clone()).unwrap();
    let toast = admin.dispatch(AdminAction::SetPaymentStatus(p.id, PaymentStatus::Completed), &clock()).unwrap();
    assert_eq!(toast.description, "Payment marked as completed.");
    assert_eq!(toast.variant, ToastVariant::Default);
    assert_eq!(admin.ledger.pending_count(), 0);
}

#[test]
fn terminal_payment_cannot_change() {
    let mut admin = state(&MemoryStorage::new());
    let p = payment("buyer@example.com", "19", 1);
    admin.ledger.append(p.clone()).unwrap();
    admin.dispatch(AdminAction::SetPaymentStatus(p.id, PaymentStatus::Rejected), &clock()).unwrap();
    let err = admin.dispatch(AdminAction::SetPaymentStatus(p.id, PaymentStatus::Completed), &clock()).unwrap_err();
    assert!(matches!(err, Error::InvalidTransition { .. }));
}

// =============================================================================
// views
// =============================================================================

#[test]
fn visible_posts_follow_category_and_search() {
    let admin = state(&MemoryStorage::new());
    let mut ui = AdminUi { active_tab: AdminTab::Posts, ..AdminUi::default() };
    assert_eq!(admin.visible_posts(&ui).len(), 2);

    ui.category = CategoryFilter::Only(Category::Project);
    let posts = admin.visible_posts(&ui);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 2);

    ui.category = CategoryFilter::All;
    ui.post_search = "healthcare".into();
    assert_eq!(admin.visible_posts(&ui)[0].id, 1);
}

#[test]
fn global_search_overrides_post_search() {
    let admin = state(&MemoryStorage::new());
    let ui = AdminUi {
        active_tab: AdminTab::Posts,
        post_search: "healthcare".into(),
        global_search: "dashboard".into(),
        ..AdminUi::default()
    };
    let posts = admin.visible_posts(&ui);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 2);
}

#[test]
fn visible_messages_and_payments_use_global_search() {
    let mut admin = state(&MemoryStorage::new());
    admin.inbox.append(contact("Ada", 1)).unwrap();
    admin.inbox.append(contact("Linus", 2)).unwrap();
    admin.ledger.append(payment("ada@example.com", "29", 3)).unwrap();
    admin.ledger.append(payment("bob@example.com", "59", 4)).unwrap();

    let ui = AdminUi { global_search: "ada".into(), ..AdminUi::default() };
    assert_eq!(admin.visible_messages(&ui).len(), 1);
    assert_eq!(admin.visible_payments(&ui).len(), 1);
}

#[test]
fn dashboard_counts_and_recent_lists() {
    let mut admin = state(&MemoryStorage::new());
    for (i, name) in ["Ada", "Grace", "Linus", "Ken"].into_iter().enumerate() {
        admin.inbox.append(contact(name, i as u32)).unwrap();
    }
    admin.ledger.append(payment("ada@example.com", "29", 10)).unwrap();
    admin.dispatch(AdminAction::TogglePublish(2), &clock()).unwrap();

    let dash = admin.dashboard(&AdminUi::default());
    assert_eq!(dash.total_posts, 2);
    assert_eq!(dash.published_posts, 1);
    assert_eq!(dash.messages, 4);
    assert_eq!(dash.unread_messages, 4);
    assert_eq!(dash.pending_payments, 1);
    let names: Vec<&str> = dash.recent_messages.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Ken", "Linus", "Grace"]);
    assert_eq!(dash.recent_payments.len(), 1);
}
