//! Command execution logic.
//!
//! This module contains the implementation of all CLI commands.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use super::args::{
    CreateArgs, DashboardArgs, DeleteArgs, InitArgs, ListArgs, ShowArgs, UpdateArgs,
};
use super::validators::{validate_description, validate_title};
use crate::app::App;
use crate::domain::{IssueFilter, IssueId, IssueUpdate, NewIssue};
use crate::output::{self, OutputConfig, OutputMode};

/// Execute the init command
pub async fn execute_init(args: &InitArgs, output_mode: OutputMode) -> Result<()> {
    use crate::commands::init::{self, InitialData};

    let current_dir = std::env::current_dir()?;
    let initial = if args.empty {
        InitialData::Empty
    } else {
        InitialData::Seed
    };

    if !args.quiet && output_mode == OutputMode::Text {
        println!("Initializing nexus repository...");
    }

    let result = init::init(&current_dir, initial).await?;

    match output_mode {
        OutputMode::Json => {
            output::print_json(&serde_json::json!({
                "nexus_dir": result.nexus_dir.display().to_string(),
                "config_file": result.config_file.display().to_string(),
                "data_dir": result.data_dir.display().to_string(),
                "issue_count": result.issue_count,
            }))?;
        }
        OutputMode::Text if !args.quiet => {
            let config = OutputConfig::from_env();
            println!(
                "{} nexus in {}",
                output::success("Initialized", &config),
                result.nexus_dir.display()
            );
            println!("  Config: {}", result.config_file.display());
            println!("  Data:   {}", result.data_dir.display());
            println!("  Issues: {}", result.issue_count);
        }
        OutputMode::Text => {}
    }

    Ok(())
}

/// Execute the create command
pub async fn execute_create(
    app: &mut App,
    args: &CreateArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let title = match &args.title {
        Some(t) => t.clone(),
        None => prompt_for("Title", validate_title)?,
    };
    let description = match &args.description {
        Some(d) => d.clone(),
        None => prompt_for("Description", validate_description)?,
    };

    let new_issue = NewIssue {
        title,
        description,
        priority: args.priority.into(),
        status: args.status.into(),
    };

    let issue = app.service_mut().create(new_issue).await?;

    match output_mode {
        OutputMode::Json => output::print_json(&issue)?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            println!(
                "{} issue: {}",
                output::success("Created", &config),
                issue.id
            );
        }
    }

    Ok(())
}

/// Execute the list command
pub async fn execute_list(app: &App, args: &ListArgs, output_mode: OutputMode) -> Result<()> {
    let filter = IssueFilter {
        status: args.status.map(Into::into),
        priority: args.priority.map(Into::into),
        search: args.search.clone(),
    };

    let issues = app.service().list(&filter).await?;
    output::print_issues(&issues, output_mode)?;

    Ok(())
}

/// Execute the show command
pub async fn execute_show(app: &App, args: &ShowArgs, output_mode: OutputMode) -> Result<()> {
    let issue_id = IssueId::new(&args.issue_id);

    let issue = app
        .service()
        .get(&issue_id)
        .await?
        .ok_or(crate::error::Error::IssueNotFound(issue_id))?;

    output::print_issue(&issue, output_mode)?;

    Ok(())
}

/// Execute the update command
pub async fn execute_update(
    app: &mut App,
    args: &UpdateArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let issue_id = IssueId::new(&args.issue_id);

    let update = IssueUpdate {
        title: args.title.clone(),
        description: args.description.clone(),
        priority: args.priority.map(Into::into),
        status: args.status.map(Into::into),
    };

    let issue = app.service_mut().update(&issue_id, update).await?;

    match output_mode {
        OutputMode::Json => output::print_json(&issue)?,
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            println!(
                "{} issue: {}",
                output::success("Updated", &config),
                issue.id
            );
        }
    }

    Ok(())
}

/// Execute the delete command
///
/// Deleting an ID that does not exist is not an error.
pub async fn execute_delete(
    app: &mut App,
    args: &DeleteArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let issue_id = IssueId::new(&args.issue_id);
    let existing = app.service().get(&issue_id).await?;

    if let Some(issue) = &existing
        && !args.force
    {
        eprint!("Delete issue '{}' ({})? [y/N]: ", issue.id, issue.title);
        io::stderr().flush()?;
        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        let response = input.trim().to_lowercase();
        if response != "y" && response != "yes" {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    app.service_mut().delete(&issue_id).await?;

    match output_mode {
        OutputMode::Json => {
            output::print_json(&serde_json::json!({
                "deleted": args.issue_id,
                "existed": existing.is_some(),
            }))?;
        }
        OutputMode::Text if existing.is_some() => {
            let config = OutputConfig::from_env();
            println!(
                "{} issue: {}",
                output::success("Deleted", &config),
                args.issue_id
            );
        }
        OutputMode::Text => {
            println!("No issue with ID {}; nothing to delete.", args.issue_id);
        }
    }

    Ok(())
}

/// Execute the dashboard command
pub async fn execute_dashboard(
    app: &App,
    _args: &DashboardArgs,
    output_mode: OutputMode,
) -> Result<()> {
    let stats = app.service().dashboard().await?;
    output::print_dashboard(&stats, output_mode)?;
    Ok(())
}

/// Prompt on stderr for a required field, validating the answer.
fn prompt_for(label: &str, validate: fn(&str) -> Result<String, String>) -> Result<String> {
    eprint!("{label}: ");
    io::stderr().flush()?;
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    read_field(&input, validate)
}

fn read_field(input: &str, validate: fn(&str) -> Result<String, String>) -> Result<String> {
    validate(input).map_err(|e| anyhow::anyhow!(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompted_title_is_validated() {
        assert_eq!(read_field("  Login fails\n", validate_title).unwrap(), "Login fails");

        let err = read_field("\n", validate_title).unwrap_err();
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn prompted_description_is_validated() {
        let err = read_field("   \n", validate_description).unwrap_err();
        assert_eq!(err.to_string(), "Description is required");
    }
}
