//! Notion database workspace
//!
//! Implements the `Workspace` port against a single Notion database.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::adapters::http::{client, endpoint, read_json};
use crate::config::{Config, NOTION_VERSION};
use crate::core::models::{RecordDraft, RecordKey, RecordRef, WorkspaceStatus};
use crate::core::ports::Workspace;
use crate::error::Service;

use super::blocks::{NotionBlock, to_children};
use super::properties::{Filter, PageProperties, Properties, draft_properties, status_properties};

#[derive(Debug, Serialize)]
struct QueryRequest {
    filter: Filter,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Page>,
}

#[derive(Debug, Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(Debug, Serialize)]
struct CreatePage<'a> {
    parent: Parent<'a>,
    properties: Properties,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<NotionBlock>,
}

#[derive(Debug, Serialize)]
struct UpdatePage {
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Page {
    id: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    properties: PageProperties,
}

impl From<Page> for RecordRef {
    fn from(page: Page) -> Self {
        let status = page.properties.status();
        Self {
            id: page.id,
            url: page.url,
            title: page.properties.title(),
            status,
        }
    }
}

/// Workspace backed by a Notion database
#[derive(Debug, Clone)]
pub struct NotionWorkspace {
    client: Client,
    api_url: String,
    token: String,
    database_id: String,
}

impl NotionWorkspace {
    /// Create a workspace; fails when the token or database id is missing
    pub fn new(config: &Config) -> Result<Self> {
        let (token, database_id) = config.require_notion()?;
        Ok(Self {
            client: client(Service::Notion)?,
            api_url: config.notion.api_url.clone(),
            token: token.to_string(),
            database_id: database_id.to_string(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, endpoint(&self.api_url, path))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
    }
}

#[async_trait]
impl Workspace for NotionWorkspace {
    async fn find(&self, key: &RecordKey) -> Result<Vec<RecordRef>> {
        let request = self
            .request(Method::POST, &format!("/v1/databases/{}/query", self.database_id))
            .json(&QueryRequest {
                filter: Filter::from(key),
            });

        let response: QueryResponse = read_json(Service::Notion, request).await?;
        log::debug!("Notion query {key} matched {} page(s)", response.results.len());
        Ok(response.results.into_iter().map(RecordRef::from).collect())
    }

    async fn create(&self, draft: &RecordDraft) -> Result<RecordRef> {
        let body = CreatePage {
            parent: Parent {
                database_id: &self.database_id,
            },
            properties: draft_properties(draft),
            children: to_children(&draft.children),
        };

        let page: Page = read_json(Service::Notion, self.request(Method::POST, "/v1/pages").json(&body))
            .await?;
        log::info!("Created Notion page {} for '{}'", page.id, draft.title);
        Ok(page.into())
    }

    async fn patch_status(&self, id: &str, status: WorkspaceStatus) -> Result<RecordRef> {
        let body = UpdatePage {
            properties: status_properties(status),
        };

        let request = self.request(Method::PATCH, &format!("/v1/pages/{id}")).json(&body);
        let page: Page = read_json(Service::Notion, request).await?;
        log::info!("Updated Notion page {} to {status}", page.id);
        Ok(page.into())
    }
}
