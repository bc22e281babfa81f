//! Test fixtures and builders
//!
//! Provides convenient builders for creating test data.

use chrono::{DateTime, TimeZone, Utc};
use repo_pulse::config::Config;
use repo_pulse::core::models::{ActivityItem, ItemKind, ItemState, PullDetails, SourceEvent};

/// Fixed instant on 2024-05-`day` at `hour`:00 UTC
pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
}

/// "Now" used by pipeline tests; the 24h window starts at `at(1, 12)`
pub fn now() -> DateTime<Utc> {
    at(2, 12)
}

/// Config for `octo/repo` with everything else at defaults
pub fn config() -> Config {
    Config {
        repository: "octo/repo".to_string(),
        ..Config::default()
    }
}

/// Builder for creating test items
pub struct ItemBuilder {
    item: ActivityItem,
}

impl ItemBuilder {
    pub fn issue(id: u64) -> Self {
        Self {
            item: ActivityItem::new(
                id,
                format!("issue {id}"),
                ItemKind::Issue,
                format!("https://github.com/octo/repo/issues/{id}"),
            ),
        }
    }

    pub fn pull(id: u64) -> Self {
        Self {
            item: ActivityItem::new(
                id,
                format!("pull {id}"),
                ItemKind::PullRequest,
                format!("https://github.com/octo/repo/pull/{id}"),
            ),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.item.title = title.to_string();
        self
    }

    pub fn labels(mut self, labels: &[&str]) -> Self {
        self.item = self.item.with_labels(labels.iter().copied());
        self
    }

    pub fn assignees(mut self, assignees: &[&str]) -> Self {
        self.item = self.item.with_assignees(assignees.iter().copied());
        self
    }

    pub fn state(mut self, state: ItemState) -> Self {
        self.item.state = state;
        self
    }

    pub fn created(mut self, ts: DateTime<Utc>) -> Self {
        self.item.created_at = Some(ts);
        self.item.updated_at = Some(self.item.updated_at.map_or(ts, |u| u.max(ts)));
        self
    }

    pub fn closed(mut self, ts: DateTime<Utc>) -> Self {
        self.item.closed_at = Some(ts);
        if self.item.state == ItemState::Open {
            self.item.state = ItemState::Closed;
        }
        self.item.updated_at = Some(self.item.updated_at.map_or(ts, |u| u.max(ts)));
        self
    }

    pub fn updated(mut self, ts: DateTime<Utc>) -> Self {
        self.item.updated_at = Some(ts);
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.item.body = Some(body.to_string());
        self
    }

    pub fn build(self) -> ActivityItem {
        self.item
    }
}

/// Event on `item` by `kim`
pub fn event(action: &str, item: ActivityItem) -> SourceEvent {
    let pull = (item.kind == ItemKind::PullRequest).then(|| PullDetails {
        head: "feature/x".to_string(),
        base: "main".to_string(),
        draft: false,
    });
    SourceEvent {
        action: action.to_string(),
        item,
        author: "kim".to_string(),
        pull,
    }
}
