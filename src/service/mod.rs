//! Service layer.
//!
//! Services sit between callers and the repositories. Rejected input comes
//! back as `Ok(None)` or `Ok(false)`; storage failures propagate as
//! `Err(DbError)` untouched.

mod project;
mod todo_item;
pub mod validation;


pub use project::ProjectService;
pub use todo_item::TodoItemService;
pub use validation::PriorityValue;
