//! SQLite implementation of the database traits.
//!
//! This module provides a SQLite-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod helpers;
mod project;
mod todo_item;

#[cfg(test)]
mod connection_test;
#[cfg(test)]
mod critical_tests;

pub use connection::SqliteDatabase;
pub use project::SqliteProjectRepository;
pub use todo_item::SqliteTodoItemRepository;
