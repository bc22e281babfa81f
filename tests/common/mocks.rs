//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations. Interior state sits behind a `Mutex`
//! because the ports are `Send + Sync`.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use repo_pulse::core::models::{
    ActivityItem, Notification, RecordDraft, RecordKey, RecordRef, WorkspaceStatus,
};
use repo_pulse::core::ports::{IssueTracker, NarrativeOracle, Notifier, Workspace};
use repo_pulse::{Error, Result, Service};

fn failure(service: Service) -> Error {
    Error::upstream(service, 500, "mock failure")
}

/// Mock implementation of IssueTracker
#[derive(Default)]
pub struct MockTracker {
    pub issues: Vec<ActivityItem>,
    pub pulls: Vec<ActivityItem>,
    pub open_count: usize,
    pub commit_count: usize,
    pub fail: bool,
    pub calls: Mutex<Vec<String>>,
}

impl MockTracker {
    pub fn with_issues(issues: Vec<ActivityItem>) -> Self {
        Self {
            issues,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) -> Result<()> {
        self.calls.lock().unwrap().push(call.to_string());
        if self.fail { Err(failure(Service::GitHub)) } else { Ok(()) }
    }
}

#[async_trait]
impl IssueTracker for MockTracker {
    async fn list_issues(&self, _repo: &str, _since: DateTime<Utc>) -> Result<Vec<ActivityItem>> {
        self.record("list_issues")?;
        Ok(self.issues.clone())
    }

    async fn count_open_issues(&self, _repo: &str) -> Result<usize> {
        self.record("count_open_issues")?;
        Ok(self.open_count)
    }

    async fn list_pull_requests(
        &self,
        _repo: &str,
        _since: DateTime<Utc>,
    ) -> Result<Vec<ActivityItem>> {
        self.record("list_pull_requests")?;
        Ok(self.pulls.clone())
    }

    async fn count_commits(&self, _repo: &str, _since: DateTime<Utc>) -> Result<usize> {
        self.record("count_commits")?;
        Ok(self.commit_count)
    }
}

/// A record held by [`MockWorkspace`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
    pub status: WorkspaceStatus,
    pub children: usize,
}

/// Mock implementation of Workspace
#[derive(Default)]
pub struct MockWorkspace {
    records: Mutex<Vec<StoredRecord>>,
    creates: Mutex<usize>,
    patches: Mutex<Vec<(String, WorkspaceStatus)>>,
    queries: Mutex<Vec<RecordKey>>,
    pub fail: bool,
}

impl MockWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_record(self, title: &str, url: Option<&str>, status: WorkspaceStatus) -> Self {
        {
            let mut records = self.records.lock().unwrap();
            let id = format!("page-{}", records.len() + 1);
            records.push(StoredRecord {
                id,
                title: title.to_string(),
                url: url.map(String::from),
                status,
                children: 0,
            });
        }
        self
    }

    pub fn records(&self) -> Vec<StoredRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn create_count(&self) -> usize {
        *self.creates.lock().unwrap()
    }

    pub fn patches(&self) -> Vec<(String, WorkspaceStatus)> {
        self.patches.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<RecordKey> {
        self.queries.lock().unwrap().clone()
    }

    /// Any interaction at all
    pub fn touched(&self) -> bool {
        !self.queries().is_empty() || self.create_count() > 0 || !self.patches().is_empty()
    }

    fn to_ref(record: &StoredRecord) -> RecordRef {
        RecordRef {
            id: record.id.clone(),
            url: Some(format!("https://notion.so/{}", record.id)),
            title: Some(record.title.clone()),
            status: Some(record.status),
        }
    }
}

#[async_trait]
impl Workspace for MockWorkspace {
    async fn find(&self, key: &RecordKey) -> Result<Vec<RecordRef>> {
        self.queries.lock().unwrap().push(key.clone());
        if self.fail {
            return Err(failure(Service::Notion));
        }

        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| match key {
                RecordKey::Url(url) => r.url.as_deref() == Some(url.as_str()),
                RecordKey::TitleContains(text) | RecordKey::ItemReference(text) => {
                    r.title.contains(text.as_str())
                }
            })
            .map(Self::to_ref)
            .collect())
    }

    async fn create(&self, draft: &RecordDraft) -> Result<RecordRef> {
        if self.fail {
            return Err(failure(Service::Notion));
        }
        *self.creates.lock().unwrap() += 1;

        let mut records = self.records.lock().unwrap();
        let record = StoredRecord {
            id: format!("page-{}", records.len() + 1),
            title: draft.title.clone(),
            url: draft.url.clone(),
            status: draft.status,
            children: draft.children.len(),
        };
        let reference = Self::to_ref(&record);
        records.push(record);
        Ok(reference)
    }

    async fn patch_status(&self, id: &str, status: WorkspaceStatus) -> Result<RecordRef> {
        if self.fail {
            return Err(failure(Service::Notion));
        }
        self.patches.lock().unwrap().push((id.to_string(), status));

        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::upstream(Service::Notion, 404, "no such page"))?;
        record.status = status;
        Ok(Self::to_ref(record))
    }
}

/// Mock implementation of Notifier
#[derive(Default)]
pub struct MockNotifier {
    sent: Mutex<Vec<Notification>>,
    pub fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn post(&self, notification: &Notification) -> Result<()> {
        if self.fail {
            return Err(failure(Service::Slack));
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

/// Mock implementation of NarrativeOracle
///
/// Answers every prompt with the canned text, or fails when there is none.
#[derive(Default)]
pub struct MockOracle {
    answer: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockOracle {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrativeOracle for MockOracle {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer.clone().ok_or_else(|| failure(Service::Gemini))
    }
}
