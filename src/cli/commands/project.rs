use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use crate::db::{Database, Id, Project};
use crate::service::ProjectService;

#[derive(Tabled)]
struct ProjectDisplay {
    #[tabled(rename = "ID")]
    id: Id,
    #[tabled(rename = "Title")]
    title: String,
}

impl From<&Project> for ProjectDisplay {
    fn from(project: &Project) -> Self {
        Self {
            id: project.project_id,
            title: truncate_with_ellipsis(&project.title, 60),
        }
    }
}

/// List all projects
pub async fn list_projects<D: Database>(db: &D, format: &str) -> CliResult<String> {
    let projects = ProjectService::new(db).list().await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&projects)?),
        _ => Ok(format_table(&projects)),
    }
}

fn format_table(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }

    let display_projects: Vec<ProjectDisplay> = projects.iter().map(|p| p.into()).collect();
    let mut table = Table::new(display_projects);
    apply_table_style(&mut table);
    table.to_string()
}

/// Create a new project
pub async fn create_project<D: Database>(db: &D, title: &str) -> CliResult<String> {
    match ProjectService::new(db).create(title).await? {
        Some(project) => Ok(format!(
            "✓ Created project: {} ({})",
            project.title, project.project_id
        )),
        None => Ok("Failed to create project. Title may be invalid.".to_string()),
    }
}

/// Rename an existing project
pub async fn rename_project<D: Database>(db: &D, id: Id, title: &str) -> CliResult<String> {
    let service = ProjectService::new(db);

    if service.get(id).await?.is_none() {
        return Ok(format!("Project {} not found.", id));
    }

    let project = Project {
        project_id: id,
        title: title.to_string(),
    };
    if service.update(&project).await? {
        Ok(format!("✓ Renamed project: {} ({})", title.trim(), id))
    } else {
        Ok("Failed to rename project. Title may be invalid.".to_string())
    }
}

/// Delete a project together with its todo items
pub async fn delete_project<D: Database>(db: &D, id: Id) -> CliResult<String> {
    if ProjectService::new(db).delete(id).await? {
        Ok(format!("✓ Deleted project: {}", id))
    } else {
        Ok(format!("Project {} not found.", id))
    }
}
