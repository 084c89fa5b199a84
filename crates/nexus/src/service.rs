//! Issue queries and mutations.
//!
//! [`IssueService`] is the boundary the presentation layer talks to. Every
//! operation loads the full collection from the [`RecordStore`], works on it
//! in memory and, for mutations, writes the whole collection back before
//! returning. Nothing is cached between calls.
//!
//! # Concurrency
//!
//! Mutations take `&mut self`, so on one service handle they cannot overlap.
//! Two handles over the same slot are last-write-wins: if their
//! read-modify-write cycles interleave, the later `save` silently replaces the
//! earlier one. Callers that share a slot must serialize their mutations.
//!
//! # Example
//!
//! ```no_run
//! use nexus::domain::{IssueFilter, IssuePriority, IssueStatus, NewIssue};
//! use nexus::service::IssueService;
//! use nexus::storage::RecordStore;
//! use nexus_kv::MemoryStore;
//! use std::sync::Arc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let store = RecordStore::new(Arc::new(MemoryStore::new()));
//!     let mut service = IssueService::new(store);
//!
//!     let issue = service
//!         .create(NewIssue {
//!             title: "Fix login redirect".to_string(),
//!             description: "Users land on a blank page".to_string(),
//!             priority: IssuePriority::High,
//!             status: IssueStatus::Open,
//!         })
//!         .await?;
//!
//!     let high = service
//!         .list(&IssueFilter::default().with_priority(IssuePriority::High))
//!         .await?;
//!     assert_eq!(high[0].id, issue.id);
//!     Ok(())
//! }
//! ```

use crate::domain::{Issue, IssueFilter, IssueId, IssueUpdate, NewIssue};
use crate::error::{Error, Result};
use crate::id_generation::IdGenerator;
use crate::stats::DashboardStats;
use crate::storage::RecordStore;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::debug;

/// Tunables for [`IssueService`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Artificial delay awaited before every operation.
    ///
    /// Stands in for a network round-trip; zero disables it.
    pub latency: Duration,
}

/// Read and write operations over the issue collection.
#[derive(Debug, Clone)]
pub struct IssueService {
    store: RecordStore,
    options: ServiceOptions,
}

impl IssueService {
    /// Create a service with default options.
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self::with_options(store, ServiceOptions::default())
    }

    /// Create a service with explicit options.
    #[must_use]
    pub fn with_options(store: RecordStore, options: ServiceOptions) -> Self {
        Self { store, options }
    }

    /// The underlying record store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// List issues matching `filter`, in stored (newest-created first) order.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded.
    pub async fn list(&self, filter: &IssueFilter) -> Result<Vec<Issue>> {
        self.simulate_latency().await;

        let issues = self.store.load().await?;
        let total = issues.len();
        let matched = filter.apply(issues);

        debug!(total, matched = matched.len(), "Listed issues");
        Ok(matched)
    }

    /// Get an issue by ID.
    ///
    /// Returns `None` if the issue doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded.
    pub async fn get(&self, id: &IssueId) -> Result<Option<Issue>> {
        self.simulate_latency().await;

        let issues = self.store.load().await?;
        Ok(issues.into_iter().find(|i| &i.id == id))
    }

    /// Create a new issue.
    ///
    /// Generates a fresh ID, stamps both timestamps with the current time and
    /// prepends the issue so it is listed first. The input is stored as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded or saved, or if no
    /// unique ID can be generated.
    pub async fn create(&mut self, new_issue: NewIssue) -> Result<Issue> {
        self.simulate_latency().await;

        let mut issues = self.store.load().await?;

        let mut generator = IdGenerator::with_existing(issues.iter().map(|i| i.id.0.clone()));
        let id = generator.generate(&new_issue.title, &new_issue.description)?;

        let now = Utc::now();
        let issue = Issue {
            id: IssueId::new(id),
            title: new_issue.title,
            description: new_issue.description,
            priority: new_issue.priority,
            status: new_issue.status,
            created_at: now,
            updated_at: now,
        };

        issues.insert(0, issue.clone());
        self.store.save(&issues).await?;

        debug!(id = %issue.id, "Created issue");
        Ok(issue)
    }

    /// Update an existing issue.
    ///
    /// Only fields present in `updates` are modified; the issue keeps its
    /// position in the collection. `updated_at` is refreshed and never moves
    /// backwards, even if the system clock does.
    ///
    /// # Errors
    ///
    /// Returns `Error::IssueNotFound` if the issue doesn't exist, in which
    /// case nothing is written.
    pub async fn update(&mut self, id: &IssueId, updates: IssueUpdate) -> Result<Issue> {
        self.simulate_latency().await;

        let mut issues = self.store.load().await?;
        let issue = issues
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| Error::IssueNotFound(id.clone()))?;

        updates.apply_to(issue);
        issue.updated_at = refreshed_timestamp(Utc::now(), issue.updated_at);
        let updated = issue.clone();

        self.store.save(&issues).await?;

        debug!(id = %updated.id, "Updated issue");
        Ok(updated)
    }

    /// Delete an issue.
    ///
    /// Deleting an ID that is not present succeeds and leaves the collection
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded or saved.
    pub async fn delete(&mut self, id: &IssueId) -> Result<()> {
        self.simulate_latency().await;

        let mut issues = self.store.load().await?;
        let before = issues.len();
        issues.retain(|i| &i.id != id);

        self.store.save(&issues).await?;

        debug!(%id, removed = before - issues.len(), "Deleted issue");
        Ok(())
    }

    /// Aggregate statistics over the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded.
    pub async fn dashboard(&self) -> Result<DashboardStats> {
        self.simulate_latency().await;

        let issues = self.store.load().await?;
        Ok(DashboardStats::from_issues(&issues))
    }

    async fn simulate_latency(&self) {
        if !self.options.latency.is_zero() {
            tokio::time::sleep(self.options.latency).await;
        }
    }
}

/// `now`, clamped so it is never earlier than `previous`.
fn refreshed_timestamp(now: DateTime<Utc>, previous: DateTime<Utc>) -> DateTime<Utc> {
    now.max(previous)
}
