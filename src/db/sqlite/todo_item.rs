//! SQLite TodoItemRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::{decode_completed, encode_completed, map_sqlx_error};
use crate::db::{DbError, DbResult, Id, NewTodoItem, TodoItem, TodoItemRepository};

/// Canonical display order: priority first, then insertion order.
const ORDER_CLAUSE: &str = "ORDER BY t.priority ASC, t.todo_id ASC";

const SELECT_COLUMNS: &str = "SELECT t.todo_id, t.title, t.description, t.priority, t.completed, t.project_id, t.created_at \
     FROM Todo_Item t";

/// SQLx-backed todo item repository.
pub struct SqliteTodoItemRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

/// Decode a `Todo_Item` row.
fn row_to_todo_item(row: &SqliteRow) -> DbResult<TodoItem> {
    let completed: String = row.try_get("completed").map_err(map_sqlx_error)?;

    Ok(TodoItem {
        todo_id: row.try_get("todo_id").map_err(map_sqlx_error)?,
        title: row.try_get("title").map_err(map_sqlx_error)?,
        description: row.try_get("description").map_err(map_sqlx_error)?,
        priority: row.try_get("priority").map_err(map_sqlx_error)?,
        completed: decode_completed(&completed)?,
        project_id: row.try_get("project_id").map_err(map_sqlx_error)?,
        created_at: row.try_get("created_at").map_err(map_sqlx_error)?,
    })
}

fn rows_to_todo_items(rows: &[SqliteRow]) -> DbResult<Vec<TodoItem>> {
    rows.iter().map(row_to_todo_item).collect()
}

impl<'a> TodoItemRepository for SqliteTodoItemRepository<'a> {
    async fn create(&self, item: &NewTodoItem) -> DbResult<TodoItem> {
        let result = sqlx::query(
            r#"
            INSERT INTO Todo_Item (title, description, priority, completed, project_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.priority)
        .bind(encode_completed(item.completed))
        .bind(item.project_id)
        .bind(&item.created_at)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(item.clone().with_id(result.last_insert_rowid()))
    }

    async fn get(&self, id: Id) -> DbResult<TodoItem> {
        let sql = format!("{} WHERE t.todo_id = ?", SELECT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let row = row.ok_or_else(|| DbError::not_found("TodoItem", id))?;
        row_to_todo_item(&row)
    }

    async fn list(&self) -> DbResult<Vec<TodoItem>> {
        let sql = format!("{} {}", SELECT_COLUMNS, ORDER_CLAUSE);
        let rows = sqlx::query(&sql)
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows_to_todo_items(&rows)
    }

    async fn list_by_project(&self, project_id: Id) -> DbResult<Vec<TodoItem>> {
        let sql = format!("{} WHERE t.project_id = ? {}", SELECT_COLUMNS, ORDER_CLAUSE);
        let rows = sqlx::query(&sql)
            .bind(project_id)
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows_to_todo_items(&rows)
    }

    async fn list_by_project_title(&self, title: &str) -> DbResult<Vec<TodoItem>> {
        let sql = format!(
            "{} JOIN Project p ON t.project_id = p.project_id WHERE p.title = ? {}",
            SELECT_COLUMNS, ORDER_CLAUSE
        );
        let rows = sqlx::query(&sql)
            .bind(title)
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows_to_todo_items(&rows)
    }

    async fn update(&self, item: &TodoItem) -> DbResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE Todo_Item
            SET title = ?, description = ?, priority = ?, completed = ?, project_id = ?
            WHERE todo_id = ?
            "#,
        )
        .bind(&item.title)
        .bind(&item.description)
        .bind(item.priority)
        .bind(encode_completed(item.completed))
        .bind(item.project_id)
        .bind(item.todo_id)
        .execute(self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, id: Id) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM Todo_Item WHERE todo_id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }
}
