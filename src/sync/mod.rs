//! Find-or-create primitives, one per Trello resource kind.
//!
//! Each call lists the parent's children once, looks for the natural key with
//! exact string equality and only creates the resource when nothing matches.
//! Existing resources are never updated, and nothing is cached between calls.

use std::fmt;

use tracing::info;

use crate::error::SyncResult;
use crate::trello::{NewCard, TrelloApi};

/// Comments match when an existing one starts with this many leading
/// characters of the candidate text.
pub const COMMENT_PREFIX_CHARS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Workspace,
    Board,
    List,
    Label,
    Card,
    Checklist,
    CheckItem,
    Comment,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Workspace,
        ResourceKind::Board,
        ResourceKind::List,
        ResourceKind::Label,
        ResourceKind::Card,
        ResourceKind::Checklist,
        ResourceKind::CheckItem,
        ResourceKind::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Workspace => "workspace",
            ResourceKind::Board => "board",
            ResourceKind::List => "list",
            ResourceKind::Label => "label",
            ResourceKind::Card => "card",
            ResourceKind::Checklist => "checklist",
            ResourceKind::CheckItem => "check item",
            ResourceKind::Comment => "comment",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Existing(String),
    Created(String),
}

impl Outcome {
    #[cfg(test)]
    pub fn id(&self) -> &str {
        match self {
            Outcome::Existing(id) | Outcome::Created(id) => id,
        }
    }

    pub fn into_id(self) -> String {
        match self {
            Outcome::Existing(id) | Outcome::Created(id) => id,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, Outcome::Created(_))
    }
}

/// Whether `existing` counts as the same comment as `candidate`.
pub fn comment_matches(existing: &str, candidate: &str) -> bool {
    let prefix: String = candidate.chars().take(COMMENT_PREFIX_CHARS).collect();
    existing.starts_with(&prefix)
}

fn reuse(kind: ResourceKind, name: &str, id: String) -> Outcome {
    info!(%kind, name, id = %id, "exists");
    Outcome::Existing(id)
}

fn created(kind: ResourceKind, name: &str, id: String) -> Outcome {
    info!(%kind, name, id = %id, "created");
    Outcome::Created(id)
}

pub struct Synchronizer<'a> {
    api: &'a dyn TrelloApi,
}

impl<'a> Synchronizer<'a> {
    pub fn new(api: &'a dyn TrelloApi) -> Self {
        Self { api }
    }

    pub async fn ensure_workspace(&self, display_name: &str, desc: &str) -> SyncResult<Outcome> {
        let kind = ResourceKind::Workspace;
        let orgs = self.api.list_organizations().await?;
        if let Some(org) = orgs.into_iter().find(|o| o.display_name == display_name) {
            return Ok(reuse(kind, display_name, org.id));
        }
        let id = self.api.create_organization(display_name, desc).await?;
        Ok(created(kind, display_name, id))
    }

    pub async fn ensure_board(
        &self,
        workspace_id: &str,
        name: &str,
        desc: &str,
    ) -> SyncResult<Outcome> {
        let kind = ResourceKind::Board;
        let boards = self.api.list_boards(workspace_id).await?;
        if let Some(board) = boards.into_iter().find(|b| b.name == name) {
            return Ok(reuse(kind, name, board.id));
        }
        let id = self.api.create_board(workspace_id, name, desc).await?;
        Ok(created(kind, name, id))
    }

    pub async fn ensure_list(&self, board_id: &str, name: &str) -> SyncResult<Outcome> {
        let kind = ResourceKind::List;
        let lists = self.api.list_lists(board_id).await?;
        if let Some(list) = lists.into_iter().find(|l| l.name == name) {
            return Ok(reuse(kind, name, list.id));
        }
        let id = self.api.create_list(board_id, name).await?;
        Ok(created(kind, name, id))
    }

    /// Matches on name and colour together; a same-named label with another
    /// colour does not count.
    pub async fn ensure_label(&self, board_id: &str, name: &str, color: &str) -> SyncResult<Outcome> {
        let kind = ResourceKind::Label;
        let labels = self.api.list_labels(board_id).await?;
        if let Some(label) = labels
            .into_iter()
            .find(|l| l.name == name && l.color.as_deref() == Some(color))
        {
            return Ok(reuse(kind, name, label.id));
        }
        let id = self.api.create_label(board_id, name, color).await?;
        Ok(created(kind, name, id))
    }

    pub async fn ensure_card(
        &self,
        list_id: &str,
        name: &str,
        desc: &str,
        label_ids: &[String],
    ) -> SyncResult<Outcome> {
        let kind = ResourceKind::Card;
        let cards = self.api.list_cards(list_id).await?;
        if let Some(card) = cards.into_iter().find(|c| c.name == name) {
            return Ok(reuse(kind, name, card.id));
        }
        let id = self
            .api
            .create_card(NewCard {
                list_id,
                name,
                desc,
                label_ids,
            })
            .await?;
        Ok(created(kind, name, id))
    }

    pub async fn ensure_checklist(&self, card_id: &str, title: &str) -> SyncResult<Outcome> {
        let kind = ResourceKind::Checklist;
        let checklists = self.api.list_checklists(card_id).await?;
        if let Some(checklist) = checklists.into_iter().find(|c| c.name == title) {
            return Ok(reuse(kind, title, checklist.id));
        }
        let id = self.api.create_checklist(card_id, title).await?;
        Ok(created(kind, title, id))
    }

    /// Returns true when the item had to be created.
    pub async fn ensure_check_item(&self, checklist_id: &str, name: &str) -> SyncResult<bool> {
        let kind = ResourceKind::CheckItem;
        let items = self.api.list_check_items(checklist_id).await?;
        if let Some(item) = items.into_iter().find(|i| i.name == name) {
            reuse(kind, name, item.id);
            return Ok(false);
        }
        let id = self.api.create_check_item(checklist_id, name).await?;
        created(kind, name, id);
        Ok(true)
    }

    /// Returns true when the comment had to be posted.
    pub async fn ensure_comment(&self, card_id: &str, text: &str) -> SyncResult<bool> {
        let kind = ResourceKind::Comment;
        let comments = self.api.list_comments(card_id).await?;
        if comments
            .iter()
            .filter_map(|c| c.text())
            .any(|existing| comment_matches(existing, text))
        {
            info!(%kind, card_id, "exists");
            return Ok(false);
        }
        self.api.create_comment(card_id, text).await?;
        info!(%kind, card_id, "created");
        Ok(true)
    }
}

#[cfg(test)]
mod tests;
