//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers (semantic colors, icons)

pub mod color;

use crate::domain::{Issue, IssuePriority, IssueStatus};
use crate::stats::DashboardStats;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use color::{error, success};

use color::{bold, colorize_id, colorize_priority, colorize_status, dimmed, status_icon};

// ============================================================================
// Output Configuration
// ============================================================================

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const DEFAULT_MAX_CONTENT_WIDTH: usize = 80;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Configuration for output formatting.
///
/// This struct holds settings that control how output is formatted,
/// including terminal width limits, ASCII fallback mode, and color output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum content width for text wrapping.
    pub max_width: usize,
    /// Whether to use ASCII-only icons instead of Unicode.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    #[must_use]
    pub fn new(max_width: usize, use_ascii: bool, use_colors: bool) -> Self {
        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `NEXUS_MAX_WIDTH`: Maximum content width (default: 80)
    /// - `NEXUS_ASCII`: Set to "1" or "true" for ASCII-only icons (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `NEXUS_COLOR`: Set to "0" or "false" to disable colors (default: true)
    #[must_use]
    pub fn from_env() -> Self {
        let max_width = match env::var("NEXUS_MAX_WIDTH") {
            Ok(s) if !s.is_empty() => s.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    env_var = "NEXUS_MAX_WIDTH",
                    value = %s,
                    default = DEFAULT_MAX_CONTENT_WIDTH,
                    "Invalid value, using default"
                );
                DEFAULT_MAX_CONTENT_WIDTH
            }),
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        let use_ascii = env::var("NEXUS_ASCII")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("NEXUS_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);

        Self {
            max_width,
            use_ascii,
            use_colors,
        }
    }

    fn content_width(&self) -> usize {
        terminal_width().min(self.max_width).max(20)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Get the current terminal width, falling back to default if detection fails.
fn terminal_width() -> usize {
    let (terminal_size::Width(w), _) = terminal_size::terminal_size().unwrap_or((
        terminal_size::Width(DEFAULT_TERMINAL_WIDTH),
        terminal_size::Height(0),
    ));
    usize::from(w)
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print an issue with full details in the specified format
pub fn print_issue(issue: &Issue, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => write_issue_text(&mut handle, issue, &OutputConfig::from_env()),
        OutputMode::Json => write_json(&mut handle, issue),
    }
}

/// Print a list of issues in the specified format
pub fn print_issues(issues: &[Issue], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => write_issues_text(&mut handle, issues, &OutputConfig::from_env()),
        OutputMode::Json => write_json(&mut handle, &issues),
    }
}

/// Print dashboard statistics in the specified format
pub fn print_dashboard(stats: &DashboardStats, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => write_dashboard_text(&mut handle, stats, &OutputConfig::from_env()),
        OutputMode::Json => write_json(&mut handle, stats),
    }
}

/// Print a JSON-formatted result for any serializable value
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

// ============================================================================
// Text Formatting
// ============================================================================

fn write_issue_text<W: Write>(w: &mut W, issue: &Issue, config: &OutputConfig) -> io::Result<()> {
    let width = config.content_width();

    writeln!(
        w,
        "{} {}: {}",
        status_icon(issue.status, config),
        colorize_id(issue.id.as_str(), config),
        bold(&issue.title, config)
    )?;
    writeln!(w)?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Status:  ", config),
        colorize_status(issue.status, config)
    )?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Priority:", config),
        colorize_priority(issue.priority, config)
    )?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Created: ", config),
        issue.created_at.format(TIMESTAMP_FORMAT)
    )?;
    writeln!(
        w,
        "  {} {}",
        dimmed("Updated: ", config),
        issue.updated_at.format(TIMESTAMP_FORMAT)
    )?;

    if !issue.description.is_empty() {
        writeln!(w)?;
        writeln!(w, "{}", bold("Description:", config))?;
        for line in textwrap::wrap(&issue.description, width.saturating_sub(2)) {
            writeln!(w, "  {line}")?;
        }
    }

    Ok(())
}

fn write_issues_text<W: Write>(
    w: &mut W,
    issues: &[Issue],
    config: &OutputConfig,
) -> io::Result<()> {
    if issues.is_empty() {
        writeln!(w, "No issues found.")?;
        return Ok(());
    }

    writeln!(w, "Found {} issue(s):", issues.len())?;
    writeln!(w)?;

    for issue in issues {
        writeln!(
            w,
            "{} {}  {:<6}  {}",
            status_icon(issue.status, config),
            colorize_id(issue.id.as_str(), config),
            colorize_priority(issue.priority, config),
            issue.title
        )?;
    }

    Ok(())
}

fn write_dashboard_text<W: Write>(
    w: &mut W,
    stats: &DashboardStats,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{}", bold("Command Overview", config))?;
    writeln!(w)?;
    writeln!(w, "  Total issues:   {}", stats.total)?;
    writeln!(w, "  Pending:        {}", stats.pending)?;
    writeln!(w, "  High priority:  {}", stats.high_priority)?;
    writeln!(
        w,
        "  Closed:         {} ({}%)",
        stats.closed,
        stats.completion_percent()
    )?;

    let bar_width = config.content_width().saturating_sub(24).min(40);

    writeln!(w)?;
    writeln!(w, "{}", bold("By status", config))?;
    for status in IssueStatus::ALL {
        let count = stats.by_status.get(status);
        writeln!(
            w,
            "  {:<12} {:>4} {}",
            status.as_str(),
            count,
            bar(count, stats.total, bar_width, config)
        )?;
    }

    writeln!(w)?;
    writeln!(w, "{}", bold("By priority", config))?;
    for priority in IssuePriority::ALL {
        let count = stats.by_priority.get(priority);
        writeln!(
            w,
            "  {:<12} {:>4} {}",
            priority.as_str(),
            count,
            bar(count, stats.total, bar_width, config)
        )?;
    }

    Ok(())
}

/// Horizontal bar proportional to `count / total`.
fn bar(count: usize, total: usize, width: usize, config: &OutputConfig) -> String {
    if total == 0 || width == 0 {
        return String::new();
    }
    let filled = count * width / total;
    let glyph = if config.use_ascii { "#" } else { "█" };
    dimmed(&glyph.repeat(filled), config)
}
