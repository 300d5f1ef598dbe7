//! Todo item lifecycle: validation, the project-existence rule, and
//! delegation to the todo item repository.

use tracing::{debug, info, instrument};

use super::ProjectService;
use super::validation::{PriorityValue, checked_priority, is_non_blank};
use crate::db::{Database, DbResult, Id, NewTodoItem, TodoItem, TodoItemRepository};
use crate::db::utils::current_timestamp;

/// Validates and orchestrates todo item operations.
pub struct TodoItemService<'a, D: Database> {
    db: &'a D,
    projects: ProjectService<'a, D>,
}

impl<'a, D: Database> TodoItemService<'a, D> {
    pub fn new(db: &'a D) -> Self {
        Self {
            db,
            projects: ProjectService::new(db),
        }
    }

    /// An integer, or a string holding one, within 1..=5.
    pub fn validate_priority<P: PriorityValue + ?Sized>(value: &P) -> bool {
        checked_priority(value).is_some()
    }

    pub fn validate_description(description: &str) -> bool {
        is_non_blank(description)
    }

    pub fn validate_title(title: &str) -> bool {
        is_non_blank(title)
    }

    /// A project reference is acceptable if absent or pointing at a live project.
    async fn project_reference_ok(&self, project_id: Option<Id>) -> DbResult<bool> {
        match project_id {
            Some(id) => self.projects.exists(id).await,
            None => Ok(true),
        }
    }

    /// Create a new, incomplete todo item.
    ///
    /// Title, description and priority are checked in that order, then the
    /// project reference. Any failure returns `Ok(None)` and nothing is written.
    #[instrument(skip(self, priority))]
    pub async fn create<P: PriorityValue>(
        &self,
        title: &str,
        description: &str,
        priority: P,
        project_id: Option<Id>,
    ) -> DbResult<Option<TodoItem>> {
        if !Self::validate_title(title) {
            debug!("rejected todo: blank title");
            return Ok(None);
        }
        if !Self::validate_description(description) {
            debug!("rejected todo: blank description");
            return Ok(None);
        }
        let Some(priority) = checked_priority(&priority) else {
            debug!("rejected todo: invalid priority");
            return Ok(None);
        };
        if !self.project_reference_ok(project_id).await? {
            debug!(?project_id, "rejected todo: unknown project");
            return Ok(None);
        }

        let draft = NewTodoItem {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            priority,
            completed: false,
            project_id,
            created_at: Some(current_timestamp()),
        };

        let item = self.db.todo_items().create(&draft).await?;
        info!(todo_id = item.todo_id, "created todo item");
        Ok(Some(item))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Id) -> DbResult<Option<TodoItem>> {
        match self.db.todo_items().get(id).await {
            Ok(item) => Ok(Some(item)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> DbResult<Vec<TodoItem>> {
        self.db.todo_items().list().await
    }

    #[instrument(skip(self))]
    pub async fn list_by_project(&self, project_id: Id) -> DbResult<Vec<TodoItem>> {
        self.db.todo_items().list_by_project(project_id).await
    }

    #[instrument(skip(self))]
    pub async fn list_by_project_title(&self, title: &str) -> DbResult<Vec<TodoItem>> {
        self.db.todo_items().list_by_project_title(title).await
    }

    /// Save every field of an existing item.
    ///
    /// The same rules as `create` apply, and a completed item cannot be
    /// marked incomplete again. A rejected item returns `Ok(false)` without
    /// a write.
    #[instrument(skip(self, item), fields(todo_id = item.todo_id))]
    pub async fn update(&self, item: &TodoItem) -> DbResult<bool> {
        if !Self::validate_title(&item.title)
            || !Self::validate_description(&item.description)
            || !Self::validate_priority(&item.priority)
        {
            debug!("rejected todo update: invalid fields");
            return Ok(false);
        }
        if !self.project_reference_ok(item.project_id).await? {
            debug!(project_id = ?item.project_id, "rejected todo update: unknown project");
            return Ok(false);
        }
        if !item.completed && self.is_completed(item.todo_id).await? {
            debug!("rejected todo update: cannot reopen a completed item");
            return Ok(false);
        }

        let cleaned = TodoItem {
            title: item.title.trim().to_string(),
            description: item.description.trim().to_string(),
            ..item.clone()
        };
        let updated = self.db.todo_items().update(&cleaned).await?;
        if updated {
            info!("updated todo item");
        }
        Ok(updated)
    }

    async fn is_completed(&self, id: Id) -> DbResult<bool> {
        Ok(self.get(id).await?.is_some_and(|current| current.completed))
    }

    /// Mark an item complete by saving it with `completed = true`.
    ///
    /// Returns `Ok(false)` when the item does not exist.
    #[instrument(skip(self))]
    pub async fn complete(&self, id: Id) -> DbResult<bool> {
        let Some(mut item) = self.get(id).await? else {
            return Ok(false);
        };
        item.completed = true;
        self.update(&item).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Id) -> DbResult<bool> {
        let deleted = self.db.todo_items().delete(id).await?;
        if deleted {
            info!(todo_id = id, "deleted todo item");
        }
        Ok(deleted)
    }
}
