//! Path resolution for the todolist database.
//!
//! Provides XDG-compliant defaults with an environment override.

use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the database location.
pub const DB_PATH_ENV: &str = "TODOLIST_DB";

/// Get XDG-compliant data directory for todolist.
///
/// # Returns
/// Path to data directory: `$XDG_DATA_HOME/todolist/`, falling back to
/// `~/.local/share/todolist/`, or `./todolist` when neither variable is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from("."));

    data_home.join("todolist")
}

/// Get the default database file path.
///
/// # Returns
/// Path to database: `~/.local/share/todolist/todolist.db`
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("todolist.db")
}

/// Pick the database path: explicit flag, then `TODOLIST_DB`, then the XDG default.
pub fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| {
        env::var(DB_PATH_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    })
    .unwrap_or_else(get_db_path)
}
