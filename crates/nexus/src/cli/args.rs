//! CLI argument structs for all commands.
//!
//! Each command has its own argument struct with clap derive attributes
//! for parsing and validation.

use clap::{ArgGroup, Parser};

use super::types::{IssuePriorityArg, IssueStatusArg};
use super::validators::{validate_description, validate_issue_id, validate_title};

/// Arguments for the `init` command
#[derive(Parser, Debug, Clone, Default)]
pub struct InitArgs {
    /// Start with an empty collection instead of the example issues
    #[arg(long)]
    pub empty: bool,

    /// Suppress output messages
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `create` command
#[derive(Parser, Debug, Clone)]
pub struct CreateArgs {
    /// Issue title (required, or prompted interactively)
    ///
    /// Maximum 200 characters, single line.
    #[arg(long, value_parser = validate_title)]
    pub title: Option<String>,

    /// Detailed description (required, or prompted interactively)
    #[arg(short = 'D', long, value_parser = validate_description)]
    pub description: Option<String>,

    /// Priority level
    #[arg(short, long, value_enum, default_value_t = IssuePriorityArg::Medium)]
    pub priority: IssuePriorityArg,

    /// Initial status
    #[arg(short, long, value_enum, default_value_t = IssueStatusArg::Open)]
    pub status: IssueStatusArg,
}

/// Arguments for the `list` command
#[derive(Parser, Debug, Clone, Default)]
pub struct ListArgs {
    /// Filter by status
    #[arg(short, long, value_enum)]
    pub status: Option<IssueStatusArg>,

    /// Filter by priority
    #[arg(short, long, value_enum)]
    pub priority: Option<IssuePriorityArg>,

    /// Case-insensitive text to look for in title or description
    #[arg(short = 'q', long)]
    pub search: Option<String>,
}

/// Arguments for the `show` command
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Issue ID to display
    #[arg(value_parser = validate_issue_id)]
    pub issue_id: String,
}

/// Arguments for the `update` command
#[derive(Parser, Debug, Clone)]
#[command(group(
    ArgGroup::new("fields")
        .required(true)
        .multiple(true)
        .args(["title", "description", "priority", "status"])
))]
pub struct UpdateArgs {
    /// Issue ID to update
    #[arg(value_parser = validate_issue_id)]
    pub issue_id: String,

    /// New title (maximum 200 characters)
    #[arg(long, value_parser = validate_title)]
    pub title: Option<String>,

    /// New description
    #[arg(short = 'D', long, value_parser = validate_description)]
    pub description: Option<String>,

    /// New priority
    #[arg(short, long, value_enum)]
    pub priority: Option<IssuePriorityArg>,

    /// New status
    #[arg(short, long, value_enum)]
    pub status: Option<IssueStatusArg>,
}

/// Arguments for the `delete` command
#[derive(Parser, Debug, Clone)]
pub struct DeleteArgs {
    /// Issue ID to delete
    #[arg(value_parser = validate_issue_id)]
    pub issue_id: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `dashboard` command
#[derive(Parser, Debug, Clone, Default)]
pub struct DashboardArgs {}
