//! Provisions a [`BoardPlan`] top-down as an ordered sequence of steps:
//! workspace, board, lists, labels, then every card with its comment and
//! checklists. Each step takes the ids produced by the previous ones, and the
//! first error ends the run.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::{info, info_span, Instrument};

use crate::error::{SyncError, SyncResult};
use crate::model::plan::{BoardPlan, CardSpec, LabelKey, DEFINITION_OF_DONE_TITLE};
use crate::sync::{Outcome, ResourceKind, Synchronizer};
use crate::trello::TrelloApi;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub created: usize,
    pub existing: usize,
}

/// Created vs. already-present counts per resource kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    tallies: BTreeMap<ResourceKind, Tally>,
}

impl RunSummary {
    fn record(&mut self, kind: ResourceKind, created: bool) {
        let tally = self.tallies.entry(kind).or_default();
        if created {
            tally.created += 1;
        } else {
            tally.existing += 1;
        }
    }

    fn outcome(&mut self, kind: ResourceKind, outcome: Outcome) -> String {
        self.record(kind, outcome.was_created());
        outcome.into_id()
    }

    #[cfg(test)]
    pub fn get(&self, kind: ResourceKind) -> Tally {
        self.tallies.get(&kind).copied().unwrap_or_default()
    }

    pub fn total_created(&self) -> usize {
        self.tallies.values().map(|t| t.created).sum()
    }

    pub fn total_existing(&self) -> usize {
        self.tallies.values().map(|t| t.existing).sum()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = ResourceKind::ALL
            .iter()
            .filter_map(|kind| {
                self.tallies
                    .get(kind)
                    .map(|t| format!("{kind}: {} created, {} existing", t.created, t.existing))
            })
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Ids handed from the board steps to the card step.
#[derive(Debug, Clone)]
pub struct BoardIds {
    pub board_id: String,
    pub lists: HashMap<&'static str, String>,
    pub labels: HashMap<LabelKey, String>,
}

pub struct Pipeline<'a> {
    sync: Synchronizer<'a>,
    plan: &'a BoardPlan,
    summary: RunSummary,
}

impl<'a> Pipeline<'a> {
    pub fn new(api: &'a dyn TrelloApi, plan: &'a BoardPlan) -> Self {
        Self {
            sync: Synchronizer::new(api),
            plan,
            summary: RunSummary::default(),
        }
    }

    pub async fn run(mut self) -> SyncResult<RunSummary> {
        let ids = self.provision_board().await?;
        self.materialize_cards(&ids).await?;
        Ok(self.summary)
    }

    async fn provision_board(&mut self) -> SyncResult<BoardIds> {
        let workspace_id = self
            .ensure_workspace()
            .instrument(info_span!("workspace"))
            .await?;
        let board_id = self
            .ensure_board(&workspace_id)
            .instrument(info_span!("board"))
            .await?;
        let lists = self
            .ensure_lists(&board_id)
            .instrument(info_span!("lists"))
            .await?;
        let labels = self
            .ensure_labels(&board_id)
            .instrument(info_span!("labels"))
            .await?;
        info!(workspace_id = %workspace_id, board_id = %board_id, "board ready");
        Ok(BoardIds {
            board_id,
            lists,
            labels,
        })
    }

    async fn ensure_workspace(&mut self) -> SyncResult<String> {
        let outcome = self
            .sync
            .ensure_workspace(self.plan.workspace_name, self.plan.workspace_desc)
            .await?;
        Ok(self.summary.outcome(ResourceKind::Workspace, outcome))
    }

    async fn ensure_board(&mut self, workspace_id: &str) -> SyncResult<String> {
        let outcome = self
            .sync
            .ensure_board(workspace_id, self.plan.board_name, self.plan.board_desc)
            .await?;
        Ok(self.summary.outcome(ResourceKind::Board, outcome))
    }

    async fn ensure_lists(&mut self, board_id: &str) -> SyncResult<HashMap<&'static str, String>> {
        let mut lists = HashMap::new();
        for &name in self.plan.lists {
            let outcome = self.sync.ensure_list(board_id, name).await?;
            lists.insert(name, self.summary.outcome(ResourceKind::List, outcome));
        }
        Ok(lists)
    }

    async fn ensure_labels(&mut self, board_id: &str) -> SyncResult<HashMap<LabelKey, String>> {
        let mut labels = HashMap::new();
        for &key in self.plan.labels {
            let outcome = self
                .sync
                .ensure_label(board_id, key.name(), key.color())
                .await?;
            labels.insert(key, self.summary.outcome(ResourceKind::Label, outcome));
        }
        Ok(labels)
    }

    async fn materialize_cards(&mut self, ids: &BoardIds) -> SyncResult<()> {
        let list_id = match ids.lists.get(self.plan.card_list) {
            Some(id) => id.clone(),
            // The card list is not among the plan's lists; make sure it exists.
            None => {
                let outcome = self.sync.ensure_list(&ids.board_id, self.plan.card_list).await?;
                self.summary.outcome(ResourceKind::List, outcome)
            }
        };

        for card in self.plan.cards {
            self.materialize_card(card, &list_id, &ids.labels)
                .instrument(info_span!("card", id = card.id))
                .await?;
        }
        Ok(())
    }

    async fn materialize_card(
        &mut self,
        card: &CardSpec,
        list_id: &str,
        labels: &HashMap<LabelKey, String>,
    ) -> SyncResult<()> {
        let label_ids = card
            .labels
            .iter()
            .map(|key| {
                labels
                    .get(key)
                    .cloned()
                    .ok_or_else(|| SyncError::UnresolvedLabel(key.to_string()))
            })
            .collect::<SyncResult<Vec<_>>>()?;

        let outcome = self
            .sync
            .ensure_card(
                list_id,
                &card.full_title(),
                &card.full_description(),
                &label_ids,
            )
            .await?;
        let card_id = self.summary.outcome(ResourceKind::Card, outcome);

        if let Some(notes) = card.dev_notes_text() {
            let created = self.sync.ensure_comment(&card_id, &notes).await?;
            self.summary.record(ResourceKind::Comment, created);
        }

        self.ensure_checklist(&card_id, DEFINITION_OF_DONE_TITLE, self.plan.definition_of_done)
            .await?;
        for checklist in card.checklists {
            self.ensure_checklist(&card_id, checklist.title, checklist.items)
                .await?;
        }
        Ok(())
    }

    async fn ensure_checklist(
        &mut self,
        card_id: &str,
        title: &str,
        items: &[&str],
    ) -> SyncResult<()> {
        let outcome = self.sync.ensure_checklist(card_id, title).await?;
        let checklist_id = self.summary.outcome(ResourceKind::Checklist, outcome);
        for item in items {
            let created = self.sync.ensure_check_item(&checklist_id, item).await?;
            self.summary.record(ResourceKind::CheckItem, created);
        }
        info!(title, items = items.len(), "checklist ready");
        Ok(())
    }
}
