//! Project lifecycle: validation in front of the project repository.

use tracing::{debug, info, instrument};

use super::validation::is_valid_project_title;
use crate::db::{Database, DbResult, Id, Project, ProjectRepository};

/// Validates and orchestrates project operations.
pub struct ProjectService<'a, D: Database> {
    db: &'a D,
}

impl<'a, D: Database> ProjectService<'a, D> {
    pub fn new(db: &'a D) -> Self {
        Self { db }
    }

    /// Rejects blank titles and titles longer than 200 characters once trimmed.
    pub fn validate_title(title: &str) -> bool {
        is_valid_project_title(title)
    }

    /// Create a project with the trimmed title.
    ///
    /// Returns `Ok(None)` without touching storage when the title is invalid.
    /// A title already in use surfaces as `DbError::Constraint`.
    #[instrument(skip(self))]
    pub async fn create(&self, title: &str) -> DbResult<Option<Project>> {
        if !Self::validate_title(title) {
            debug!("rejected project title");
            return Ok(None);
        }

        let title = title.trim();
        let project_id = self.db.projects().create(title).await?;
        info!(project_id, "created project");

        Ok(Some(Project {
            project_id,
            title: title.to_string(),
        }))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Id) -> DbResult<Option<Project>> {
        match self.db.projects().get(id).await {
            Ok(project) => Ok(Some(project)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Whether a project with this id exists right now.
    pub async fn exists(&self, id: Id) -> DbResult<bool> {
        Ok(self.get(id).await?.is_some())
    }

    /// All projects ordered by title.
    #[instrument(skip(self))]
    pub async fn list(&self) -> DbResult<Vec<Project>> {
        self.db.projects().list().await
    }

    /// Rename a project. Invalid titles return `Ok(false)` without a write.
    #[instrument(skip(self))]
    pub async fn update(&self, project: &Project) -> DbResult<bool> {
        if !Self::validate_title(&project.title) {
            debug!(project_id = project.project_id, "rejected project title");
            return Ok(false);
        }

        let trimmed = Project {
            project_id: project.project_id,
            title: project.title.trim().to_string(),
        };
        let updated = self.db.projects().update_title(&trimmed).await?;
        if updated {
            info!(project_id = project.project_id, "renamed project");
        }
        Ok(updated)
    }

    /// Delete a project together with its todo items.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Id) -> DbResult<bool> {
        let deleted = self.db.projects().delete(id).await?;
        if deleted {
            info!(project_id = id, "deleted project");
        }
        Ok(deleted)
    }
}
