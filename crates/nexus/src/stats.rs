//! Aggregate statistics for the dashboard view.

use crate::domain::{Issue, IssuePriority, IssueStatus};
use serde::Serialize;

/// Issue counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    /// Open issues
    pub open: usize,
    /// Issues in progress
    pub in_progress: usize,
    /// Closed issues
    pub closed: usize,
}

impl StatusBreakdown {
    /// Count for a single status
    #[must_use]
    pub fn get(&self, status: IssueStatus) -> usize {
        match status {
            IssueStatus::Open => self.open,
            IssueStatus::InProgress => self.in_progress,
            IssueStatus::Closed => self.closed,
        }
    }
}

/// Issue counts per priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityBreakdown {
    /// Low priority issues
    pub low: usize,
    /// Medium priority issues
    pub medium: usize,
    /// High priority issues
    pub high: usize,
}

impl PriorityBreakdown {
    /// Count for a single priority
    #[must_use]
    pub fn get(&self, priority: IssuePriority) -> usize {
        match priority {
            IssuePriority::Low => self.low,
            IssuePriority::Medium => self.medium,
            IssuePriority::High => self.high,
        }
    }
}

/// Read-only summary of a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of issues
    pub total: usize,
    /// Issues not yet closed (`total - closed`)
    pub pending: usize,
    /// High priority issues, any status
    pub high_priority: usize,
    /// Closed issues
    pub closed: usize,
    /// Distribution over statuses
    pub by_status: StatusBreakdown,
    /// Distribution over priorities
    pub by_priority: PriorityBreakdown,
}

impl DashboardStats {
    /// Compute statistics in a single pass.
    #[must_use]
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut by_status = StatusBreakdown::default();
        let mut by_priority = PriorityBreakdown::default();

        for issue in issues {
            match issue.status {
                IssueStatus::Open => by_status.open += 1,
                IssueStatus::InProgress => by_status.in_progress += 1,
                IssueStatus::Closed => by_status.closed += 1,
            }
            match issue.priority {
                IssuePriority::Low => by_priority.low += 1,
                IssuePriority::Medium => by_priority.medium += 1,
                IssuePriority::High => by_priority.high += 1,
            }
        }

        let total = issues.len();
        Self {
            total,
            pending: total - by_status.closed,
            high_priority: by_priority.high,
            closed: by_status.closed,
            by_status,
            by_priority,
        }
    }

    /// Percentage of issues closed, rounded down. Zero for an empty collection.
    #[must_use]
    pub fn completion_percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.closed * 100 / self.total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IssueId;
    use chrono::Utc;

    fn issue(priority: IssuePriority, status: IssueStatus) -> Issue {
        let now = Utc::now();
        Issue {
            id: IssueId::new(format!("{priority}-{status}")),
            title: "t".to_string(),
            description: "d".to_string(),
            priority,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_collection_has_zero_stats() {
        let stats = DashboardStats::from_issues(&[]);
        assert_eq!(stats, DashboardStats::default());
        assert_eq!(stats.completion_percent(), 0);
    }

    #[test]
    fn counts_every_dimension() {
        let issues = vec![
            issue(IssuePriority::High, IssueStatus::Open),
            issue(IssuePriority::High, IssueStatus::Closed),
            issue(IssuePriority::Low, IssueStatus::InProgress),
            issue(IssuePriority::Medium, IssueStatus::Closed),
        ];

        let stats = DashboardStats::from_issues(&issues);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.high_priority, 2);
        assert_eq!(stats.closed, 2);
        assert_eq!(stats.by_status.get(IssueStatus::InProgress), 1);
        assert_eq!(stats.by_priority.get(IssuePriority::Medium), 1);
        assert_eq!(stats.completion_percent(), 50);
    }

    #[test]
    fn breakdowns_sum_to_total() {
        let issues: Vec<Issue> = IssuePriority::ALL
            .iter()
            .flat_map(|&p| IssueStatus::ALL.iter().map(move |&s| issue(p, s)))
            .collect();

        let stats = DashboardStats::from_issues(&issues);

        let status_sum: usize = IssueStatus::ALL.iter().map(|&s| stats.by_status.get(s)).sum();
        let priority_sum: usize = IssuePriority::ALL
            .iter()
            .map(|&p| stats.by_priority.get(p))
            .sum();
        assert_eq!(status_sum, stats.total);
        assert_eq!(priority_sum, stats.total);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(DashboardStats::default()).unwrap();
        assert!(json.get("highPriority").is_some());
        assert!(json["byStatus"].get("inProgress").is_some());
    }
}
