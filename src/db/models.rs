//! Domain models for the todo database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// Storage-assigned integer id used for all entities.
pub type Id = i64;

/// Lowest accepted todo priority.
pub const PRIORITY_MIN: i64 = 1;
/// Highest accepted todo priority.
pub const PRIORITY_MAX: i64 = 5;
/// Priority used when the caller does not supply one.
pub const PRIORITY_DEFAULT: i64 = 3;

/// Longest accepted project title, counted after trimming.
pub const PROJECT_TITLE_MAX_CHARS: usize = 200;

/// A named group of todo items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: Id,
    pub title: String,
}

/// A persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub todo_id: Id,
    pub title: String,
    pub description: String,
    pub priority: i64,
    pub completed: bool,
    /// Owning project, if any. Removing the project removes the item.
    pub project_id: Option<Id>,
    /// ISO-8601 UTC creation time.
    pub created_at: Option<String>,
}

/// A todo item that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    pub title: String,
    pub description: String,
    pub priority: i64,
    pub completed: bool,
    pub project_id: Option<Id>,
    pub created_at: Option<String>,
}

impl NewTodoItem {
    /// Attach the id assigned by storage.
    pub fn with_id(self, todo_id: Id) -> TodoItem {
        TodoItem {
            todo_id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            completed: self.completed,
            project_id: self.project_id,
            created_at: self.created_at,
        }
    }
}

/// On-disk encoding of the `completed` flag.
///
/// The column only ever holds `yes` or `no`; the domain sees a `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletedFlag {
    Yes,
    No,
}

impl From<bool> for CompletedFlag {
    fn from(completed: bool) -> Self {
        if completed {
            CompletedFlag::Yes
        } else {
            CompletedFlag::No
        }
    }
}

impl From<CompletedFlag> for bool {
    fn from(flag: CompletedFlag) -> Self {
        flag == CompletedFlag::Yes
    }
}

impl std::fmt::Display for CompletedFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletedFlag::Yes => write!(f, "yes"),
            CompletedFlag::No => write!(f, "no"),
        }
    }
}

impl std::str::FromStr for CompletedFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(CompletedFlag::Yes),
            "no" => Ok(CompletedFlag::No),
            _ => Err(format!("Invalid completed flag: {}", s)),
        }
    }
}
