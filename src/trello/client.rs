use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{CommentAction, Created, Label, NewCard, Named, Organization, TrelloApi};
use crate::config::TrelloConfig;
use crate::error::{SyncError, SyncResult};

/// Talks to the Trello REST API. Every request carries the key and token as
/// query parameters and is bounded by the configured timeout.
pub struct TrelloClient {
    api_key: String,
    token: String,
    base_url: String,
    client: reqwest::Client,
}

impl TrelloClient {
    pub fn new(config: &TrelloConfig) -> SyncResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| SyncError::Transport {
                endpoint: "client setup".into(),
                source,
            })?;
        Ok(Self {
            api_key: config.api_key.clone(),
            token: config.token.clone(),
            base_url: config.base_url.clone(),
            client,
        })
    }

    fn auth_params(&self) -> [(&str, &str); 2] {
        [("key", &self.api_key), ("token", &self.token)]
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{path}", self.base_url))
            .query(&self.auth_params())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> SyncResult<T> {
        let endpoint = format!("{method} {path}");
        debug!(%endpoint, "trello request");

        // reqwest puts the full URL, key and token included, in its errors.
        let transport = |source: reqwest::Error| SyncError::Transport {
            endpoint: endpoint.clone(),
            source: source.without_url(),
        };

        let resp = self
            .request(method.clone(), path)
            .query(params)
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = read_error_body(resp.text().await);
            return Err(SyncError::Api {
                endpoint: endpoint.clone(),
                status: status.as_u16(),
                body,
            });
        }

        resp.json().await.map_err(transport)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> SyncResult<T> {
        self.send(Method::GET, path, params).await
    }

    async fn create(&self, path: &str, params: &[(&str, &str)]) -> SyncResult<String> {
        let created: Created = self.send(Method::POST, path, params).await?;
        Ok(created.id)
    }
}

/// The body of a failed response, or why it could not be read.
fn read_error_body(body: reqwest::Result<String>) -> String {
    body.unwrap_or_else(|err| format!("unreadable response body: {}", err.without_url()))
}

#[async_trait]
impl TrelloApi for TrelloClient {
    async fn list_organizations(&self) -> SyncResult<Vec<Organization>> {
        self.get("/members/me/organizations", &[]).await
    }

    async fn create_organization(&self, display_name: &str, desc: &str) -> SyncResult<String> {
        self.create(
            "/organizations",
            &[("displayName", display_name), ("desc", desc)],
        )
        .await
    }

    async fn list_boards(&self, organization_id: &str) -> SyncResult<Vec<Named>> {
        self.get(&format!("/organizations/{organization_id}/boards"), &[])
            .await
    }

    async fn create_board(
        &self,
        organization_id: &str,
        name: &str,
        desc: &str,
    ) -> SyncResult<String> {
        self.create(
            "/boards",
            &[
                ("name", name),
                ("idOrganization", organization_id),
                ("defaultLists", "false"),
                ("desc", desc),
            ],
        )
        .await
    }

    async fn list_lists(&self, board_id: &str) -> SyncResult<Vec<Named>> {
        self.get(&format!("/boards/{board_id}/lists"), &[]).await
    }

    async fn create_list(&self, board_id: &str, name: &str) -> SyncResult<String> {
        self.create("/lists", &[("name", name), ("idBoard", board_id)])
            .await
    }

    async fn list_labels(&self, board_id: &str) -> SyncResult<Vec<Label>> {
        self.get(&format!("/boards/{board_id}/labels"), &[]).await
    }

    async fn create_label(&self, board_id: &str, name: &str, color: &str) -> SyncResult<String> {
        self.create(
            "/labels",
            &[("idBoard", board_id), ("name", name), ("color", color)],
        )
        .await
    }

    async fn list_cards(&self, list_id: &str) -> SyncResult<Vec<Named>> {
        self.get(&format!("/lists/{list_id}/cards"), &[]).await
    }

    async fn create_card(&self, card: NewCard<'_>) -> SyncResult<String> {
        let label_ids = card.label_ids.join(",");
        let mut params = vec![
            ("idList", card.list_id),
            ("name", card.name),
            ("desc", card.desc),
        ];
        if !label_ids.is_empty() {
            params.push(("idLabels", label_ids.as_str()));
        }
        self.create("/cards", &params).await
    }

    async fn list_checklists(&self, card_id: &str) -> SyncResult<Vec<Named>> {
        self.get(&format!("/cards/{card_id}/checklists"), &[]).await
    }

    async fn create_checklist(&self, card_id: &str, name: &str) -> SyncResult<String> {
        self.create("/checklists", &[("idCard", card_id), ("name", name)])
            .await
    }

    async fn list_check_items(&self, checklist_id: &str) -> SyncResult<Vec<Named>> {
        self.get(&format!("/checklists/{checklist_id}/checkItems"), &[])
            .await
    }

    async fn create_check_item(&self, checklist_id: &str, name: &str) -> SyncResult<String> {
        self.create(
            &format!("/checklists/{checklist_id}/checkItems"),
            &[("name", name), ("pos", "bottom")],
        )
        .await
    }

    async fn list_comments(&self, card_id: &str) -> SyncResult<Vec<CommentAction>> {
        self.get(
            &format!("/cards/{card_id}/actions"),
            &[("filter", "commentCard")],
        )
        .await
    }

    async fn create_comment(&self, card_id: &str, text: &str) -> SyncResult<String> {
        self.create(&format!("/cards/{card_id}/actions/comments"), &[("text", text)])
            .await
    }
}
