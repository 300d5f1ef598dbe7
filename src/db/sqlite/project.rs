//! SQLite ProjectRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::map_sqlx_error;
use crate::db::{DbError, DbResult, Id, Project, ProjectRepository};

/// SQLx-backed project repository.
pub struct SqliteProjectRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

/// Decode a `Project` row.
fn row_to_project(row: &SqliteRow) -> DbResult<Project> {
    Ok(Project {
        project_id: row.try_get("project_id").map_err(map_sqlx_error)?,
        title: row.try_get("title").map_err(map_sqlx_error)?,
    })
}

impl<'a> ProjectRepository for SqliteProjectRepository<'a> {
    async fn create(&self, title: &str) -> DbResult<Id> {
        let result = sqlx::query("INSERT INTO Project (title) VALUES (?)")
            .bind(title)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: Id) -> DbResult<Project> {
        let row = sqlx::query("SELECT project_id, title FROM Project WHERE project_id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let row = row.ok_or_else(|| DbError::not_found("Project", id))?;
        row_to_project(&row)
    }

    async fn list(&self) -> DbResult<Vec<Project>> {
        let rows = sqlx::query("SELECT project_id, title FROM Project ORDER BY title ASC")
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_project).collect()
    }

    async fn update_title(&self, project: &Project) -> DbResult<bool> {
        let result = sqlx::query("UPDATE Project SET title = ? WHERE project_id = ?")
            .bind(&project.title)
            .bind(project.project_id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, id: Id) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM Project WHERE project_id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }
}
