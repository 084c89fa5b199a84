//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for nexus using clap's derive API.
//! Each command has its own argument struct with validation and helpful error messages.
//!
//! # Commands
//!
//! - `init`: Initialize a new nexus repository
//! - `list`: List issues with optional filters
//! - `show`: Show issue details
//! - `create`: Create a new issue
//! - `update`: Update an existing issue
//! - `delete`: Delete an issue
//! - `dashboard`: Show aggregate statistics
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! nexus create --title "Fix login" --description "Session expires early" --priority high
//! nexus list --status open --search login
//! nexus update k3x9a0q2m --status in-progress
//! nexus delete k3x9a0q2m --force
//! ```

mod args;
mod execute;
mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use args::{
    CreateArgs, DashboardArgs, DeleteArgs, InitArgs, ListArgs, ShowArgs, UpdateArgs,
};
pub use types::{IssuePriorityArg, IssueStatusArg};
pub use validators::{MAX_TITLE_LENGTH, validate_description, validate_issue_id, validate_title};

/// Nexus - a small issue tracker
///
/// Issues live in a single JSON slot under `.nexus/data/`, so the whole
/// collection can be inspected or versioned as one file.
#[derive(Parser, Debug)]
#[command(name = "nexus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new nexus repository
    ///
    /// Creates the `.nexus/` directory with configuration and the issue slot,
    /// seeded with two example issues unless `--empty` is given.
    Init(InitArgs),

    /// List issues with optional filters
    ///
    /// Issues are shown newest first. Filters combine: every given
    /// criterion must match.
    List(ListArgs),

    /// Show detailed information about an issue
    Show(ShowArgs),

    /// Create a new issue
    ///
    /// Title and description are required; they are prompted for
    /// interactively when not given as flags.
    Create(CreateArgs),

    /// Update an existing issue
    ///
    /// Only provided fields are changed; at least one must be given.
    Update(UpdateArgs),

    /// Delete an issue permanently
    ///
    /// Deleting an unknown ID does nothing. Use `--force` to skip confirmation.
    Delete(DeleteArgs),

    /// Show issue statistics
    ///
    /// Totals, pending and high-priority counts, and the distribution of
    /// issues by status and priority.
    Dashboard(DashboardArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;
        use crate::output::OutputMode;

        let output_mode = if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };

        match &self.command {
            Some(Commands::Init(args)) => execute::execute_init(args, output_mode).await,
            Some(Commands::List(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_list(&app, args, output_mode).await
            }
            Some(Commands::Show(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_show(&app, args, output_mode).await
            }
            Some(Commands::Create(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_create(&mut app, args, output_mode).await
            }
            Some(Commands::Update(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_update(&mut app, args, output_mode).await
            }
            Some(Commands::Delete(args)) => {
                let mut app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_delete(&mut app, args, output_mode).await
            }
            Some(Commands::Dashboard(args)) => {
                let app = App::from_directory(&std::env::current_dir()?).await?;
                execute::execute_dashboard(&app, args, output_mode).await
            }
            None => {
                println!("Nexus issue tracker");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_command() {
        let cli = Cli::try_parse_from(["nexus"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn parse_global_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["nexus", "list", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }

    #[test]
    fn parse_init_flags() {
        let cli = Cli::try_parse_from(["nexus", "init", "--empty", "-q"]).unwrap();
        match cli.command {
            Some(Commands::Init(args)) => {
                assert!(args.empty);
                assert!(args.quiet);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn parse_create_defaults() {
        let cli = Cli::try_parse_from(["nexus", "create", "--title", "T", "-D", "D"]).unwrap();
        match cli.command {
            Some(Commands::Create(args)) => {
                assert_eq!(args.title.as_deref(), Some("T"));
                assert_eq!(args.description.as_deref(), Some("D"));
                assert_eq!(args.priority, IssuePriorityArg::Medium);
                assert_eq!(args.status, IssueStatusArg::Open);
            }
            _ => panic!("Expected Create command"),
        }
    }

    #[test]
    fn parse_create_without_fields_defers_to_prompt() {
        let cli = Cli::try_parse_from(["nexus", "create"]).unwrap();
        match cli.command {
            Some(Commands::Create(args)) => {
                assert!(args.title.is_none());
                assert!(args.description.is_none());
            }
            _ => panic!("Expected Create command"),
        }
    }

    #[test]
    fn parse_create_rejects_blank_title() {
        assert!(Cli::try_parse_from(["nexus", "create", "--title", "   "]).is_err());
    }

    #[test]
    fn parse_list_filters() {
        let cli = Cli::try_parse_from([
            "nexus",
            "list",
            "--status",
            "in-progress",
            "--priority",
            "high",
            "--search",
            "token",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.status, Some(IssueStatusArg::InProgress));
                assert_eq!(args.priority, Some(IssuePriorityArg::High));
                assert_eq!(args.search.as_deref(), Some("token"));
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn parse_list_rejects_unknown_status() {
        assert!(Cli::try_parse_from(["nexus", "list", "--status", "blocked"]).is_err());
    }

    #[test]
    fn parse_update_requires_a_field() {
        assert!(Cli::try_parse_from(["nexus", "update", "1"]).is_err());
    }

    #[test]
    fn parse_update_with_fields() {
        let cli = Cli::try_parse_from(["nexus", "update", "1", "-s", "closed", "-p", "low"])
            .unwrap();
        match cli.command {
            Some(Commands::Update(args)) => {
                assert_eq!(args.issue_id, "1");
                assert_eq!(args.status, Some(IssueStatusArg::Closed));
                assert_eq!(args.priority, Some(IssuePriorityArg::Low));
                assert!(args.title.is_none());
            }
            _ => panic!("Expected Update command"),
        }
    }

    #[test]
    fn parse_delete_force() {
        let cli = Cli::try_parse_from(["nexus", "delete", "2", "--force"]).unwrap();
        match cli.command {
            Some(Commands::Delete(args)) => {
                assert_eq!(args.issue_id, "2");
                assert!(args.force);
            }
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn parse_dashboard() {
        let cli = Cli::try_parse_from(["nexus", "--json", "dashboard"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Commands::Dashboard(_))));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
