use std::io;
use std::sync::{Arc, Mutex};

use super::*;
use crate::error::SyncError;
use crate::trello::fake::FakeTrello;

/// Collects formatted log lines for the current thread's subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap())
            .lines()
            .map(String::from)
            .collect()
    }
}

#[tokio::test]
async fn workspace_is_created_once() {
    let fake = FakeTrello::new();
    let sync = Synchronizer::new(&fake);

    let first = sync.ensure_workspace("MazeBreak Development", "desc").await.unwrap();
    let second = sync.ensure_workspace("MazeBreak Development", "desc").await.unwrap();

    assert!(first.was_created());
    assert_eq!(second, Outcome::Existing(first.id().to_string()));
    assert_eq!(fake.create_count(), 1);
}

#[tokio::test]
async fn existing_workspace_is_reused_without_update() {
    let fake = FakeTrello::new();
    let id = fake.seed("organization", "me", "Team", Some("old description"));
    let sync = Synchronizer::new(&fake);

    let outcome = sync.ensure_workspace("Team", "new description").await.unwrap();

    assert_eq!(outcome, Outcome::Existing(id));
    assert_eq!(fake.create_count(), 0);
    assert_eq!(
        fake.records("organization")[0].extra.as_deref(),
        Some("old description")
    );
}

#[tokio::test]
async fn board_lookup_is_scoped_to_workspace() {
    let fake = FakeTrello::new();
    fake.seed("board", "other-org", "Core", None);
    let sync = Synchronizer::new(&fake);

    let outcome = sync.ensure_board("org-1", "Core", "desc").await.unwrap();

    assert!(outcome.was_created());
    assert_eq!(fake.children("board", "org-1").len(), 1);
}

#[tokio::test]
async fn list_match_is_exact() {
    let fake = FakeTrello::new();
    fake.seed("list", "b1", "backlog", None);
    let sync = Synchronizer::new(&fake);

    let outcome = sync.ensure_list("b1", "Backlog").await.unwrap();

    assert!(outcome.was_created());
    assert_eq!(fake.children("list", "b1").len(), 2);
}

#[tokio::test]
async fn label_requires_name_and_color_to_match() {
    let fake = FakeTrello::new();
    let red = fake.seed("label", "b1", "Server", Some("red"));
    fake.seed("label", "b1", "Client", Some("green"));
    let sync = Synchronizer::new(&fake);

    let same = sync.ensure_label("b1", "Server", "red").await.unwrap();
    let recoloured = sync.ensure_label("b1", "Client", "blue").await.unwrap();

    assert_eq!(same, Outcome::Existing(red));
    assert!(recoloured.was_created());
    let clients: Vec<_> = fake
        .children("label", "b1")
        .into_iter()
        .filter(|l| l.name == "Client")
        .collect();
    assert_eq!(clients.len(), 2);
}

#[tokio::test]
async fn colourless_label_never_matches() {
    let fake = FakeTrello::new();
    fake.seed("label", "b1", "UI", None);
    let sync = Synchronizer::new(&fake);

    assert!(sync.ensure_label("b1", "UI", "yellow").await.unwrap().was_created());
}

#[tokio::test]
async fn card_is_created_with_labels_and_description() {
    let fake = FakeTrello::new();
    let sync = Synchronizer::new(&fake);
    let labels = vec!["label-1".to_string(), "label-2".to_string()];

    sync.ensure_card("list-1", "[S0-01] Setup", "body", &labels)
        .await
        .unwrap();

    let cards = fake.children("card", "list-1");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "[S0-01] Setup");
    assert_eq!(cards[0].extra.as_deref(), Some("body"));
    assert_eq!(cards[0].label_ids, labels);
}

#[tokio::test]
async fn existing_card_keeps_its_description() {
    let fake = FakeTrello::new();
    fake.seed("card", "list-1", "[S0-01] Setup", Some("old body"));
    let sync = Synchronizer::new(&fake);

    let outcome = sync
        .ensure_card("list-1", "[S0-01] Setup", "new body", &[])
        .await
        .unwrap();

    assert!(!outcome.was_created());
    assert_eq!(fake.children("card", "list-1")[0].extra.as_deref(), Some("old body"));
}

#[tokio::test]
async fn checklist_is_found_by_title() {
    let fake = FakeTrello::new();
    let id = fake.seed("checklist", "card-1", "Acceptance Tests", None);
    let sync = Synchronizer::new(&fake);

    let outcome = sync.ensure_checklist("card-1", "Acceptance Tests").await.unwrap();

    assert_eq!(outcome.into_id(), id);
}

#[tokio::test]
async fn duplicate_check_item_is_a_noop() {
    let fake = FakeTrello::new();
    let sync = Synchronizer::new(&fake);

    assert!(sync.ensure_check_item("cl-1", "Write tests").await.unwrap());
    assert!(!sync.ensure_check_item("cl-1", "Write tests").await.unwrap());
    assert!(sync.ensure_check_item("cl-1", "Ship").await.unwrap());

    let names: Vec<String> = fake
        .children("checkItem", "cl-1")
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["Write tests", "Ship"]);
}

#[tokio::test]
async fn check_items_are_logged_like_other_resources() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let fake = FakeTrello::new();
    let sync = Synchronizer::new(&fake);
    sync.ensure_check_item("cl-1", "Write tests").await.unwrap();
    sync.ensure_check_item("cl-1", "Write tests").await.unwrap();

    let lines = logs.lines();
    let items: Vec<&String> = lines
        .iter()
        .filter(|l| l.contains("kind=check item") && l.contains("Write tests"))
        .collect();
    assert_eq!(items.len(), 2, "{lines:#?}");
    assert!(items[0].contains("created"));
    assert!(items[1].contains("exists"));
}

#[tokio::test]
async fn comment_with_same_prefix_is_not_reposted() {
    let fake = FakeTrello::new();
    let sync = Synchronizer::new(&fake);
    let original = "DEV NOTES (Architecture & Pitfalls)\n- keep it small";
    let edited = "DEV NOTES (Architecture & Pitfalls)\n- keep it tiny and boring";

    assert!(sync.ensure_comment("card-1", original).await.unwrap());
    assert!(!sync.ensure_comment("card-1", edited).await.unwrap());

    assert_eq!(fake.children("comment", "card-1").len(), 1);
}

#[tokio::test]
async fn comment_with_different_prefix_is_posted() {
    let fake = FakeTrello::new();
    fake.seed("comment", "card-1", "Looks good to me", None);
    let sync = Synchronizer::new(&fake);

    assert!(sync.ensure_comment("card-1", "DEV NOTES: a different note").await.unwrap());
    assert_eq!(fake.children("comment", "card-1").len(), 2);
}

#[test]
fn comment_prefix_counts_characters_not_bytes() {
    let candidate = "é".repeat(45);
    let existing = format!("{}tail", "é".repeat(40));
    assert!(comment_matches(&existing, &candidate));
    assert!(!comment_matches(&"é".repeat(39), &candidate));
}

#[test]
fn short_comment_needs_full_text_as_prefix() {
    assert!(comment_matches("ok, merged", "ok"));
    assert!(!comment_matches("o", "ok"));
}

#[tokio::test]
async fn each_call_lists_then_creates_at_most_once() {
    let fake = FakeTrello::new();
    let sync = Synchronizer::new(&fake);

    sync.ensure_list("b1", "Done").await.unwrap();
    assert_eq!(fake.call_count(), 2);

    sync.ensure_list("b1", "Done").await.unwrap();
    assert_eq!(fake.call_count(), 3);
}

#[tokio::test]
async fn remote_failure_is_propagated() {
    let fake = FakeTrello::new().with_failure_at(1);
    let sync = Synchronizer::new(&fake);

    let err = sync.ensure_list("b1", "Done").await.unwrap_err();

    assert!(matches!(err, SyncError::Api { status: 500, .. }));
    assert_eq!(fake.create_count(), 0);
}

#[test]
fn resource_kinds_display_lowercase() {
    assert_eq!(ResourceKind::CheckItem.to_string(), "check item");
    assert_eq!(ResourceKind::ALL.len(), 8);
}
