//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(todolist::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Invalid data: {message} (hint: {help})")]
    #[diagnostic(code(todolist::db::invalid_data))]
    InvalidData { message: String, help: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(todolist::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(todolist::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(todolist::db::connection_error),
        help("Check that the database path is writable, or pass --db <PATH>.")
    )]
    Connection { message: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(todolist::db::constraint))]
    Constraint { message: String },
}

impl DbError {
    /// Shorthand for a `NotFound` error on the given entity.
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        DbError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
