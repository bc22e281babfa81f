//! Severity classifier - maps label sets to severity tiers
//!
//! This module contains pure classification logic with no I/O dependencies.

use std::collections::HashSet;

use crate::core::models::{ActivityItem, Severity};

/// Labels that make an item critical
pub const CRITICAL_LABELS: [&str; 3] = ["critical", "urgent", "priority-critical"];

/// Labels that make an item major
pub const MAJOR_LABELS: [&str; 3] = ["bug", "high", "priority-high"];

/// Classify a set of label names
///
/// Labels are compared case-insensitively. Critical keywords win over
/// major keywords, so an item carrying both is critical. Total over any
/// input, including an empty set.
#[must_use]
pub fn classify_labels<S: AsRef<str>>(labels: &[S]) -> Severity {
    let lowered: Vec<String> = labels.iter().map(|l| l.as_ref().to_lowercase()).collect();
    let hits = |keywords: &[&str]| lowered.iter().any(|l| keywords.contains(&l.as_str()));

    if hits(&CRITICAL_LABELS) {
        Severity::Critical
    } else if hits(&MAJOR_LABELS) {
        Severity::Major
    } else {
        Severity::Normal
    }
}

/// Classify an activity item by its labels
#[must_use]
pub fn classify(item: &ActivityItem) -> Severity {
    classify_labels(&item.labels)
}

/// Items grouped by severity, each group in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeverityBuckets {
    critical: Vec<ActivityItem>,
    major: Vec<ActivityItem>,
    normal: Vec<ActivityItem>,
}

impl SeverityBuckets {
    /// Classify and group items, keeping their order within each group
    #[must_use]
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a ActivityItem>,
    {
        let mut buckets = Self::default();
        for item in items {
            buckets.bucket_mut(classify(item)).push(item.clone());
        }
        buckets
    }

    fn bucket_mut(&mut self, severity: Severity) -> &mut Vec<ActivityItem> {
        match severity {
            Severity::Critical => &mut self.critical,
            Severity::Major => &mut self.major,
            Severity::Normal => &mut self.normal,
        }
    }

    /// Items of one tier
    #[must_use]
    pub fn get(&self, severity: Severity) -> &[ActivityItem] {
        match severity {
            Severity::Critical => &self.critical,
            Severity::Major => &self.major,
            Severity::Normal => &self.normal,
        }
    }

    /// Number of items in one tier
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.get(severity).len()
    }

    /// Total number of items
    #[must_use]
    pub fn total(&self) -> usize {
        self.critical.len() + self.major.len() + self.normal.len()
    }

    /// Non-empty tiers in report order (critical, major, normal)
    pub fn non_empty(&self) -> impl Iterator<Item = (Severity, &[ActivityItem])> {
        Severity::ALL
            .into_iter()
            .map(|s| (s, self.get(s)))
            .filter(|(_, items)| !items.is_empty())
    }

    /// All items, most severe first
    pub fn iter(&self) -> impl Iterator<Item = &ActivityItem> {
        self.critical.iter().chain(&self.major).chain(&self.normal)
    }
}

/// Items to triage: created issues, then closed ones not already listed
///
/// An issue opened and closed in the same window is listed once.
#[must_use]
pub fn triage_items(created: &[ActivityItem], closed: &[ActivityItem]) -> Vec<ActivityItem> {
    let mut seen = HashSet::new();
    created
        .iter()
        .chain(closed)
        .filter(|item| seen.insert(item.id))
        .cloned()
        .collect()
}
