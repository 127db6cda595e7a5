use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{CommentAction, CommentData, Label, NewCard, Named, Organization, TrelloApi};
use crate::error::{SyncError, SyncResult};

/// A created resource as the fake remembers it.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: String,
    pub parent: String,
    pub name: String,
    /// Label colour, card description or organization description.
    pub extra: Option<String>,
    pub label_ids: Vec<String>,
}

#[derive(Debug, Default)]
struct State {
    next_id: u32,
    calls: u32,
    creates: Vec<(&'static str, String)>,
    records: HashMap<&'static str, Vec<Record>>,
}

/// In-memory Trello used by the sync and pipeline tests. Records every
/// create call and can be told to fail the Nth request.
#[derive(Clone, Default)]
pub struct FakeTrello {
    state: Arc<Mutex<State>>,
    fail_at_call: Option<u32>,
}

impl FakeTrello {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the request with this 1-based index with an HTTP 500.
    pub fn with_failure_at(mut self, call: u32) -> Self {
        self.fail_at_call = Some(call);
        self
    }

    /// Shares state with `self` but never fails.
    pub fn healthy(&self) -> Self {
        Self {
            state: self.state.clone(),
            fail_at_call: None,
        }
    }

    pub fn create_count(&self) -> usize {
        self.state.lock().unwrap().creates.len()
    }

    pub fn call_count(&self) -> u32 {
        self.state.lock().unwrap().calls
    }

    pub fn records(&self, kind: &'static str) -> Vec<Record> {
        self.state
            .lock()
            .unwrap()
            .records
            .get(kind)
            .cloned()
            .unwrap_or_default()
    }

    pub fn children(&self, kind: &'static str, parent: &str) -> Vec<Record> {
        self.records(kind)
            .into_iter()
            .filter(|r| r.parent == parent)
            .collect()
    }

    /// Inserts a resource directly, as if it existed before the run.
    pub fn seed(&self, kind: &'static str, parent: &str, name: &str, extra: Option<&str>) -> String {
        let mut state = self.state.lock().unwrap();
        Self::insert(&mut state, kind, parent, name, extra, Vec::new())
    }

    fn insert(
        state: &mut State,
        kind: &'static str,
        parent: &str,
        name: &str,
        extra: Option<&str>,
        label_ids: Vec<String>,
    ) -> String {
        state.next_id += 1;
        let id = format!("{kind}-{}", state.next_id);
        state.records.entry(kind).or_default().push(Record {
            id: id.clone(),
            parent: parent.to_string(),
            name: name.to_string(),
            extra: extra.map(String::from),
            label_ids,
        });
        id
    }

    fn tick(&self, endpoint: &str) -> SyncResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if self.fail_at_call == Some(state.calls) {
            return Err(SyncError::Api {
                endpoint: endpoint.to_string(),
                status: 500,
                body: r#"{"message":"injected failure"}"#.to_string(),
            });
        }
        Ok(())
    }

    fn list(&self, kind: &'static str, parent: &str) -> SyncResult<Vec<Record>> {
        self.tick(&format!("GET {kind}"))?;
        Ok(self.children(kind, parent))
    }

    fn create(
        &self,
        kind: &'static str,
        parent: &str,
        name: &str,
        extra: Option<&str>,
        label_ids: Vec<String>,
    ) -> SyncResult<String> {
        self.tick(&format!("POST {kind}"))?;
        let mut state = self.state.lock().unwrap();
        state.creates.push((kind, name.to_string()));
        Ok(Self::insert(&mut state, kind, parent, name, extra, label_ids))
    }

    fn named(records: Vec<Record>) -> Vec<Named> {
        records
            .into_iter()
            .map(|r| Named {
                id: r.id,
                name: r.name,
            })
            .collect()
    }
}

#[async_trait]
impl TrelloApi for FakeTrello {
    async fn list_organizations(&self) -> SyncResult<Vec<Organization>> {
        Ok(self
            .list("organization", "me")?
            .into_iter()
            .map(|r| Organization {
                id: r.id,
                display_name: r.name,
            })
            .collect())
    }

    async fn create_organization(&self, display_name: &str, desc: &str) -> SyncResult<String> {
        self.create("organization", "me", display_name, Some(desc), Vec::new())
    }

    async fn list_boards(&self, organization_id: &str) -> SyncResult<Vec<Named>> {
        Ok(Self::named(self.list("board", organization_id)?))
    }

    async fn create_board(
        &self,
        organization_id: &str,
        name: &str,
        desc: &str,
    ) -> SyncResult<String> {
        self.create("board", organization_id, name, Some(desc), Vec::new())
    }

    async fn list_lists(&self, board_id: &str) -> SyncResult<Vec<Named>> {
        Ok(Self::named(self.list("list", board_id)?))
    }

    async fn create_list(&self, board_id: &str, name: &str) -> SyncResult<String> {
        self.create("list", board_id, name, None, Vec::new())
    }

    async fn list_labels(&self, board_id: &str) -> SyncResult<Vec<Label>> {
        Ok(self
            .list("label", board_id)?
            .into_iter()
            .map(|r| Label {
                id: r.id,
                name: r.name,
                color: r.extra,
            })
            .collect())
    }

    async fn create_label(&self, board_id: &str, name: &str, color: &str) -> SyncResult<String> {
        self.create("label", board_id, name, Some(color), Vec::new())
    }

    async fn list_cards(&self, list_id: &str) -> SyncResult<Vec<Named>> {
        Ok(Self::named(self.list("card", list_id)?))
    }

    async fn create_card(&self, card: NewCard<'_>) -> SyncResult<String> {
        self.create(
            "card",
            card.list_id,
            card.name,
            Some(card.desc),
            card.label_ids.to_vec(),
        )
    }

    async fn list_checklists(&self, card_id: &str) -> SyncResult<Vec<Named>> {
        Ok(Self::named(self.list("checklist", card_id)?))
    }

    async fn create_checklist(&self, card_id: &str, name: &str) -> SyncResult<String> {
        self.create("checklist", card_id, name, None, Vec::new())
    }

    async fn list_check_items(&self, checklist_id: &str) -> SyncResult<Vec<Named>> {
        Ok(Self::named(self.list("checkItem", checklist_id)?))
    }

    async fn create_check_item(&self, checklist_id: &str, name: &str) -> SyncResult<String> {
        self.create("checkItem", checklist_id, name, None, Vec::new())
    }

    async fn list_comments(&self, card_id: &str) -> SyncResult<Vec<CommentAction>> {
        Ok(self
            .list("comment", card_id)?
            .into_iter()
            .map(|r| CommentAction {
                data: Some(CommentData { text: Some(r.name) }),
            })
            .collect())
    }

    async fn create_comment(&self, card_id: &str, text: &str) -> SyncResult<String> {
        self.create("comment", card_id, text, None, Vec::new())
    }
}
