//! Shared utilities for CLI commands

use tabled::{Table, settings::Style};

use crate::db::Id;

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}

/// Format an optional project reference for display
pub fn format_optional_id(id: Option<Id>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "-".to_string(),
    }
}

/// Checkbox-style marker for the completed flag
pub fn format_completed(completed: bool) -> String {
    let marker = if completed { "✓" } else { " " };
    marker.to_string()
}

/// Parse an optional id typed at a prompt. Blank input means no id.
pub fn parse_optional_id(input: &str) -> Result<Option<Id>, std::num::ParseIntError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        trimmed.parse().map(Some)
    }
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}
