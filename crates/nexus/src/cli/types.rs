//! CLI value enums and domain type conversions.

use clap::ValueEnum;

use crate::domain::{IssuePriority, IssueStatus};

/// Issue status for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueStatusArg {
    /// Not started
    #[default]
    Open,
    /// Currently being worked on
    #[value(name = "in-progress", alias = "in_progress")]
    InProgress,
    /// Resolved
    Closed,
}

impl std::fmt::Display for IssueStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", IssueStatus::from(*self))
    }
}

impl From<IssueStatusArg> for IssueStatus {
    fn from(arg: IssueStatusArg) -> Self {
        match arg {
            IssueStatusArg::Open => IssueStatus::Open,
            IssueStatusArg::InProgress => IssueStatus::InProgress,
            IssueStatusArg::Closed => IssueStatus::Closed,
        }
    }
}

/// Issue priority for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssuePriorityArg {
    /// Can wait
    Low,
    /// Normal urgency
    #[default]
    Medium,
    /// Needs attention soon
    High,
}

impl std::fmt::Display for IssuePriorityArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", IssuePriority::from(*self))
    }
}

impl From<IssuePriorityArg> for IssuePriority {
    fn from(arg: IssuePriorityArg) -> Self {
        match arg {
            IssuePriorityArg::Low => IssuePriority::Low,
            IssuePriorityArg::Medium => IssuePriority::Medium,
            IssuePriorityArg::High => IssuePriority::High,
        }
    }
}
