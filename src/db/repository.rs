//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic.

use crate::db::{
    DbResult,
    models::{Id, NewTodoItem, Project, TodoItem},
};

/// Repository for Project operations.
pub trait ProjectRepository {
    /// Insert a project and return the id storage assigned to it.
    async fn create(&self, title: &str) -> DbResult<Id>;

    /// Get a project by ID. Missing rows are `DbError::NotFound`.
    async fn get(&self, id: Id) -> DbResult<Project>;

    /// Get all projects, ordered by title.
    async fn list(&self) -> DbResult<Vec<Project>>;

    /// Rename the project matching `project.project_id`.
    ///
    /// Returns `false` when no row matched.
    async fn update_title(&self, project: &Project) -> DbResult<bool>;

    /// Delete a project and, through the cascade, its todo items.
    async fn delete(&self, id: Id) -> DbResult<bool>;
}

/// Repository for TodoItem operations.
///
/// Every list is ordered by priority, then by insertion order.
pub trait TodoItemRepository {
    /// Insert a todo item and return it with its assigned id.
    async fn create(&self, item: &NewTodoItem) -> DbResult<TodoItem>;

    /// Get a todo item by ID. Missing rows are `DbError::NotFound`.
    async fn get(&self, id: Id) -> DbResult<TodoItem>;

    /// Get all todo items.
    async fn list(&self) -> DbResult<Vec<TodoItem>>;

    /// Get the todo items of one project.
    async fn list_by_project(&self, project_id: Id) -> DbResult<Vec<TodoItem>>;

    /// Get the todo items of the project with the given title.
    async fn list_by_project_title(&self, title: &str) -> DbResult<Vec<TodoItem>>;

    /// Replace every mutable field of the item keyed by `item.todo_id`.
    async fn update(&self, item: &TodoItem) -> DbResult<bool>;

    /// Delete a todo item by ID.
    async fn delete(&self, id: Id) -> DbResult<bool>;
}

/// Combined database interface.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub trait Database: Send + Sync {
    type Projects<'a>: ProjectRepository
    where
        Self: 'a;
    type TodoItems<'a>: TodoItemRepository
    where
        Self: 'a;

    /// Run pending migrations.
    async fn migrate(&self) -> DbResult<()>;

    /// Get the project repository.
    fn projects(&self) -> Self::Projects<'_>;

    /// Get the todo item repository.
    fn todo_items(&self) -> Self::TodoItems<'_>;
}
