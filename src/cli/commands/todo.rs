use tabled::{Table, Tabled};

use crate::cli::error::CliResult;
use crate::cli::utils::{
    apply_table_style, format_completed, format_optional_id, truncate_with_ellipsis,
};
use crate::db::{Database, Id, TodoItem};
use crate::service::TodoItemService;

/// Which todo items a listing covers.
#[derive(Debug, Clone, Copy)]
pub enum TodoFilter<'a> {
    All,
    Project(Id),
    ProjectTitle(&'a str),
}

#[derive(Tabled)]
struct TodoDisplay {
    #[tabled(rename = "ID")]
    id: Id,
    #[tabled(rename = "Done")]
    done: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Priority")]
    priority: i64,
    #[tabled(rename = "Project")]
    project: String,
}

impl From<&TodoItem> for TodoDisplay {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.todo_id,
            done: format_completed(item.completed),
            title: truncate_with_ellipsis(&item.title, 40),
            priority: item.priority,
            project: format_optional_id(item.project_id),
        }
    }
}

/// List todo items in display order
pub async fn list_todos<D: Database>(
    db: &D,
    filter: TodoFilter<'_>,
    format: &str,
) -> CliResult<String> {
    let service = TodoItemService::new(db);
    let items = match filter {
        TodoFilter::All => service.list().await?,
        TodoFilter::Project(id) => service.list_by_project(id).await?,
        TodoFilter::ProjectTitle(title) => service.list_by_project_title(title).await?,
    };

    match format {
        "json" => Ok(serde_json::to_string_pretty(&items)?),
        _ => Ok(format_table(&items)),
    }
}

fn format_table(items: &[TodoItem]) -> String {
    if items.is_empty() {
        return "No todo items found.".to_string();
    }

    let display_items: Vec<TodoDisplay> = items.iter().map(|t| t.into()).collect();
    let mut table = Table::new(display_items);
    apply_table_style(&mut table);
    table.to_string()
}

fn format_todo_detail(item: &TodoItem) -> String {
    use tabled::builder::Builder;

    let mut builder = Builder::default();

    builder.push_record(["Todo ID", &item.todo_id.to_string()]);
    builder.push_record(["Title", &item.title]);
    builder.push_record(["Description", &item.description]);
    builder.push_record(["Priority", &item.priority.to_string()]);
    builder.push_record(["Completed", if item.completed { "yes" } else { "no" }]);
    builder.push_record(["Project", &format_optional_id(item.project_id)]);

    if let Some(created_at) = &item.created_at {
        builder.push_record(["Created", created_at]);
    }

    let mut table = builder.build();
    apply_table_style(&mut table);
    table.to_string()
}

/// Show a single todo item
pub async fn show_todo<D: Database>(db: &D, id: Id, format: &str) -> CliResult<String> {
    let Some(item) = TodoItemService::new(db).get(id).await? else {
        return Ok(format!("Todo {} not found.", id));
    };

    match format {
        "json" => Ok(serde_json::to_string_pretty(&item)?),
        _ => Ok(format_todo_detail(&item)),
    }
}

/// Create a todo item from raw prompt input
pub async fn add_todo<D: Database>(
    db: &D,
    title: &str,
    description: &str,
    priority: &str,
    project_id: Option<Id>,
) -> CliResult<String> {
    let created = TodoItemService::new(db)
        .create(title, description, priority, project_id)
        .await?;

    match created {
        Some(item) => Ok(format!(
            "✓ Created todo: {} ({})",
            item.title, item.todo_id
        )),
        None => Ok("Failed to create todo. Check inputs and project id.".to_string()),
    }
}

/// Save an edited todo item
pub async fn update_todo<D: Database>(db: &D, item: &TodoItem) -> CliResult<String> {
    if TodoItemService::new(db).update(item).await? {
        Ok(format!("✓ Updated todo: {} ({})", item.title.trim(), item.todo_id))
    } else {
        Ok("Failed to update todo. Check inputs and project id.".to_string())
    }
}

/// Mark a todo item completed
pub async fn complete_todo<D: Database>(db: &D, id: Id) -> CliResult<String> {
    if TodoItemService::new(db).complete(id).await? {
        Ok(format!("✓ Completed todo: {}", id))
    } else {
        Ok(format!("Todo {} not found.", id))
    }
}

/// Delete a todo item
pub async fn delete_todo<D: Database>(db: &D, id: Id) -> CliResult<String> {
    if TodoItemService::new(db).delete(id).await? {
        Ok(format!("✓ Deleted todo: {}", id))
    } else {
        Ok(format!("Todo {} not found.", id))
    }
}
