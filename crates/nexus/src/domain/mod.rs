//! Domain types for issue tracking.
//!
//! This module contains the core domain types for the nexus issue tracker.
//! The serialized field names (`id`, `title`, `description`, `priority`,
//! `status`, `createdAt`, `updatedAt`) form the persisted layout and must not
//! change without a migration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an issue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(pub String);

impl IssueId {
    /// Create a new issue ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for IssueId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for IssueId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Represents an issue in the tracking system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique identifier, assigned at creation
    pub id: IssueId,

    /// Short single-line summary
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Priority level
    pub priority: IssuePriority,

    /// Current status
    pub status: IssueStatus,

    /// Creation timestamp, never modified after creation
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    /// Returns `true` if the title or description contains `needle`.
    ///
    /// `needle` must already be lowercased; the issue text is lowercased here.
    fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Priority of an issue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssuePriority {
    /// Can wait
    Low,

    /// Normal priority
    #[default]
    Medium,

    /// Needs attention first
    High,
}

impl IssuePriority {
    /// All priorities, lowest first
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// The persisted name of this priority
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of an issue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    /// Issue is open and ready to work on
    #[default]
    Open,

    /// Issue is currently being worked on
    InProgress,

    /// Issue has been completed
    Closed,
}

impl IssueStatus {
    /// All statuses in workflow order
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Closed];

    /// The persisted name of this status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data for creating a new issue
///
/// The caller is responsible for validating that `title` and `description`
/// are non-empty; the service stores whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    /// Issue title
    pub title: String,

    /// Issue description
    pub description: String,

    /// Priority level
    pub priority: IssuePriority,

    /// Initial status
    pub status: IssueStatus,
}

/// Data for updating an existing issue
///
/// Only the mutable attributes appear here. `id` and `created_at` have no
/// counterpart, so an update can never overwrite them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueUpdate {
    /// New title (if updating)
    pub title: Option<String>,

    /// New description (if updating)
    pub description: Option<String>,

    /// New priority (if updating)
    pub priority: Option<IssuePriority>,

    /// New status (if updating)
    pub status: Option<IssueStatus>,
}

impl IssueUpdate {
    /// Returns `true` if no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }

    /// Merge the provided fields onto `issue`.
    ///
    /// Timestamps are left alone; the caller refreshes `updated_at`.
    pub fn apply_to(self, issue: &mut Issue) {
        if let Some(title) = self.title {
            issue.title = title;
        }
        if let Some(description) = self.description {
            issue.description = description;
        }
        if let Some(priority) = self.priority {
            issue.priority = priority;
        }
        if let Some(status) = self.status {
            issue.status = status;
        }
    }
}

/// Filter for querying issues
///
/// Every criterion is optional; an absent criterion places no constraint on
/// that dimension. Present criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
    /// Filter by status
    pub status: Option<IssueStatus>,

    /// Filter by priority
    pub priority: Option<IssuePriority>,

    /// Case-insensitive substring matched against title or description
    pub search: Option<String>,
}

impl IssueFilter {
    /// Restrict to a status
    #[must_use]
    pub fn with_status(mut self, status: IssueStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to a priority
    #[must_use]
    pub fn with_priority(mut self, priority: IssuePriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restrict to issues mentioning `search`
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns `true` if no criterion is set.
    ///
    /// An empty search string counts as unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.search_needle().is_none()
    }

    /// Lowercased search text, or `None` if absent or empty.
    fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Returns `true` if `issue` satisfies every present criterion.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        self.status.is_none_or(|s| issue.status == s)
            && self.priority.is_none_or(|p| issue.priority == p)
            && self
                .search_needle()
                .is_none_or(|needle| issue.mentions(&needle))
    }

    /// Apply the filter to a collection, keeping the original order.
    ///
    /// Criteria run in sequence: status, then priority, then search.
    #[must_use]
    pub fn apply(&self, issues: Vec<Issue>) -> Vec<Issue> {
        if self.is_empty() {
            return issues;
        }

        let needle = self.search_needle();
        issues
            .into_iter()
            .filter(|i| self.status.is_none_or(|s| i.status == s))
            .filter(|i| self.priority.is_none_or(|p| i.priority == p))
            .filter(|i| needle.as_deref().is_none_or(|n| i.mentions(n)))
            .collect()
    }
}
