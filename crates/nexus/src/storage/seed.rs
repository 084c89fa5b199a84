//! Fixed seed dataset written the first time a store is initialized.

use crate::domain::{Issue, IssueId, IssuePriority, IssueStatus};
use chrono::{DateTime, Duration, Utc};

/// Build the two seed issues relative to `now`.
///
/// The first issue is the most recently touched, matching the newest-first
/// ordering of the collection.
#[must_use]
pub fn seed_issues(now: DateTime<Utc>) -> Vec<Issue> {
    let one_day_ago = now - Duration::days(1);

    vec![
        Issue {
            id: IssueId::new("1"),
            title: "3D Background Flickering".to_string(),
            description: "The background grid appears to flicker when scrolling rapidly on \
                          high-refresh monitors."
                .to_string(),
            priority: IssuePriority::Medium,
            status: IssueStatus::Open,
            created_at: one_day_ago,
            updated_at: one_day_ago,
        },
        Issue {
            id: IssueId::new("2"),
            title: "Security: API Token Exposure".to_string(),
            description: "Recent logs show potential exposure of development API keys in \
                          client-side error boundaries."
                .to_string(),
            priority: IssuePriority::High,
            status: IssueStatus::InProgress,
            created_at: now - Duration::days(2),
            updated_at: now - Duration::hours(12),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_two_issues_in_fixed_order() {
        let seed = seed_issues(Utc::now());

        let ids: Vec<&str> = seed.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(seed[0].title, "3D Background Flickering");
        assert_eq!(seed[1].title, "Security: API Token Exposure");
    }

    #[test]
    fn seed_descriptions_are_single_sentences() {
        let seed = seed_issues(Utc::now());
        assert_eq!(
            seed[0].description,
            "The background grid appears to flicker when scrolling rapidly on high-refresh monitors."
        );
        assert!(!seed[1].description.contains("  "));
    }

    #[test]
    fn seed_timestamps_respect_ordering_invariant() {
        let now = Utc::now();
        for issue in seed_issues(now) {
            assert!(issue.created_at <= issue.updated_at);
            assert!(issue.updated_at < now);
        }
    }
}
