//! Database utility functions.

use chrono::Utc;

/// Get the current time as an ISO-8601 UTC string, e.g. `2025-01-01T09:30:00Z`.
pub fn current_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
