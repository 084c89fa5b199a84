//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success/Done:  green   (closed status, completed actions)
//!   - Warning/Active: yellow (in-progress, medium priority)
//!   - Error/Urgent:  red     (high priority)
//!   - Info/Reference: cyan   (issue IDs)
//!   - Muted:         dimmed  (field labels, low priority)
//!   - Default:       white   (open status)

use crate::domain::{IssuePriority, IssueStatus};
use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply color to status text based on issue status.
pub(crate) fn colorize_status(status: IssueStatus, config: &OutputConfig) -> String {
    let text = status.to_string();
    if !config.use_colors {
        return text;
    }
    match status {
        IssueStatus::Open => text.white().to_string(),
        IssueStatus::InProgress => text.yellow().to_string(),
        IssueStatus::Closed => text.green().to_string(),
    }
}

/// Apply color to priority text based on priority level.
pub(crate) fn colorize_priority(priority: IssuePriority, config: &OutputConfig) -> String {
    let text = priority.as_str().to_uppercase();
    if !config.use_colors {
        return text;
    }
    match priority {
        IssuePriority::High => text.red().bold().to_string(),
        IssuePriority::Medium => text.yellow().to_string(),
        IssuePriority::Low => text.dimmed().to_string(),
    }
}

/// Colorize an issue ID (cyan).
pub(crate) fn colorize_id(id: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return id.to_string();
    }
    id.cyan().to_string()
}

/// Get a status icon, with ASCII fallback support.
pub(crate) fn status_icon(status: IssueStatus, config: &OutputConfig) -> String {
    let icon = if config.use_ascii {
        match status {
            IssueStatus::Open => "o",
            IssueStatus::InProgress => ">",
            IssueStatus::Closed => "+",
        }
    } else {
        match status {
            IssueStatus::Open => "○",
            IssueStatus::InProgress => "▶",
            IssueStatus::Closed => "✓",
        }
    };

    if !config.use_colors {
        return icon.to_string();
    }

    match status {
        IssueStatus::Open => icon.white().to_string(),
        IssueStatus::InProgress => icon.yellow().to_string(),
        IssueStatus::Closed => icon.green().to_string(),
    }
}

/// Dim text (field labels, secondary info).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Bold text (section headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputConfig {
        OutputConfig::new(80, true, false)
    }

    #[test]
    fn no_color_returns_plain_text() {
        let config = plain();
        assert_eq!(colorize_status(IssueStatus::InProgress, &config), "in-progress");
        assert_eq!(colorize_priority(IssuePriority::High, &config), "HIGH");
        assert_eq!(colorize_id("abc", &config), "abc");
        assert_eq!(success("ok", &config), "ok");
        assert_eq!(error("bad", &config), "bad");
    }

    #[test]
    fn ascii_icons_are_distinct() {
        let config = plain();
        let icons: Vec<String> = IssueStatus::ALL
            .iter()
            .map(|&s| status_icon(s, &config))
            .collect();
        assert_eq!(icons, vec!["o", ">", "+"]);
    }

    #[test]
    fn unicode_icons_without_color() {
        let config = OutputConfig::new(80, false, false);
        assert_eq!(status_icon(IssueStatus::Closed, &config), "✓");
    }
}
