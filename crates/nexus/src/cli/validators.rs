//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, and by the interactive prompts in `create`.

/// Maximum length of an issue title, in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Whether `c` is a control character that has no place in stored text.
///
/// Tab is always allowed; line breaks only where `allow_newlines` is set.
fn is_rejected_control(c: char, allow_newlines: bool) -> bool {
    match c {
        '\t' => false,
        '\n' | '\r' => !allow_newlines,
        _ => c.is_control(),
    }
}

/// Validate an issue title.
///
/// The title is trimmed, must be non-empty, at most [`MAX_TITLE_LENGTH`]
/// characters, on a single line and free of control characters.
pub fn validate_title(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Title is required".to_string());
    }

    let length = s.chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(format!(
            "Title cannot exceed {MAX_TITLE_LENGTH} characters, got {length} characters"
        ));
    }

    if s.contains(['\n', '\r']) {
        return Err("Title cannot contain newline characters".to_string());
    }

    if let Some(pos) = s.chars().position(|c| is_rejected_control(c, false)) {
        return Err(format!(
            "Title contains invalid control character at position {pos}"
        ));
    }

    Ok(s.to_string())
}

/// Validate an issue description.
///
/// Multi-line text is fine; the trimmed value must be non-empty.
pub fn validate_description(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Description is required".to_string());
    }

    if let Some(pos) = s.chars().position(|c| is_rejected_control(c, true)) {
        return Err(format!(
            "Description contains invalid control character at position {pos}"
        ));
    }

    Ok(s.to_string())
}

/// Validate an issue ID argument.
///
/// IDs are opaque: seeded issues use short numbers, generated ones use
/// base36 tokens. Only emptiness and embedded whitespace are rejected.
pub fn validate_issue_id(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("Issue ID cannot be empty".to_string());
    }

    if s.contains(char::is_whitespace) {
        return Err(format!("Invalid issue ID '{s}': IDs cannot contain whitespace"));
    }

    Ok(s.to_string())
}
