pub mod client;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::SyncResult;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub display_name: String,
}

/// Shape shared by boards, lists, cards, checklists and check-items:
/// only the id and the name matter for lookups.
#[derive(Debug, Clone, Deserialize)]
pub struct Named {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub id: String,
    #[serde(default)]
    pub name: String,
    // Trello returns null for colourless labels.
    pub color: Option<String>,
}

/// A `commentCard` action on a card.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentAction {
    #[serde(default)]
    pub data: Option<CommentData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentData {
    pub text: Option<String>,
}

impl CommentAction {
    pub fn text(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.text.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Created {
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct NewCard<'a> {
    pub list_id: &'a str,
    pub name: &'a str,
    pub desc: &'a str,
    pub label_ids: &'a [String],
}

/// The slice of the Trello REST API the board sync needs: one list call and
/// one create call per resource kind. Create calls return the new id.
#[async_trait]
pub trait TrelloApi: Send + Sync {
    async fn list_organizations(&self) -> SyncResult<Vec<Organization>>;
    async fn create_organization(&self, display_name: &str, desc: &str) -> SyncResult<String>;

    async fn list_boards(&self, organization_id: &str) -> SyncResult<Vec<Named>>;
    async fn create_board(&self, organization_id: &str, name: &str, desc: &str)
        -> SyncResult<String>;

    async fn list_lists(&self, board_id: &str) -> SyncResult<Vec<Named>>;
    async fn create_list(&self, board_id: &str, name: &str) -> SyncResult<String>;

    async fn list_labels(&self, board_id: &str) -> SyncResult<Vec<Label>>;
    async fn create_label(&self, board_id: &str, name: &str, color: &str) -> SyncResult<String>;

    async fn list_cards(&self, list_id: &str) -> SyncResult<Vec<Named>>;
    async fn create_card(&self, card: NewCard<'_>) -> SyncResult<String>;

    async fn list_checklists(&self, card_id: &str) -> SyncResult<Vec<Named>>;
    async fn create_checklist(&self, card_id: &str, name: &str) -> SyncResult<String>;

    async fn list_check_items(&self, checklist_id: &str) -> SyncResult<Vec<Named>>;
    async fn create_check_item(&self, checklist_id: &str, name: &str) -> SyncResult<String>;

    async fn list_comments(&self, card_id: &str) -> SyncResult<Vec<CommentAction>>;
    async fn create_comment(&self, card_id: &str, text: &str) -> SyncResult<String>;
}
