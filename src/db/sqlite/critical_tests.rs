//! Critical integration tests for relationship handling.

use crate::db::{
    Database, NewTodoItem, ProjectRepository, SqliteDatabase, TodoItemRepository,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn item_for(project_id: Option<i64>, title: &str) -> NewTodoItem {
    NewTodoItem {
        title: title.to_string(),
        description: "desc".to_string(),
        priority: 3,
        completed: false,
        project_id,
        created_at: None,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn deleting_project_cascades_to_todo_items() {
    let db = setup_db().await;
    let projects = db.projects();
    let todos = db.todo_items();

    let doomed = projects.create("Doomed").await.unwrap();
    let kept = projects.create("Kept").await.unwrap();

    let a = todos.create(&item_for(Some(doomed), "a")).await.unwrap();
    let b = todos.create(&item_for(Some(doomed), "b")).await.unwrap();
    let c = todos.create(&item_for(Some(kept), "c")).await.unwrap();
    let d = todos.create(&item_for(None, "d")).await.unwrap();

    assert!(projects.delete(doomed).await.expect("Delete should succeed"));

    let remaining: Vec<i64> = todos
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.todo_id)
        .collect();
    assert_eq!(remaining, vec![c.todo_id, d.todo_id]);
    assert!(todos.get(a.todo_id).await.is_err());
    assert!(todos.get(b.todo_id).await.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn deleting_todo_item_leaves_project_untouched() {
    let db = setup_db().await;
    let project_id = db.projects().create("Stays").await.unwrap();
    let item = db
        .todo_items()
        .create(&item_for(Some(project_id), "gone"))
        .await
        .unwrap();

    assert!(db.todo_items().delete(item.todo_id).await.unwrap());
    assert!(db.projects().get(project_id).await.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn update_to_missing_project_is_rejected_by_storage() {
    let db = setup_db().await;
    let project_id = db.projects().create("Real").await.unwrap();
    let mut item = db
        .todo_items()
        .create(&item_for(Some(project_id), "moving"))
        .await
        .unwrap();

    item.project_id = Some(project_id + 100);
    let result = db.todo_items().update(&item).await;
    assert!(matches!(result, Err(crate::db::DbError::Constraint { .. })));

    let stored = db.todo_items().get(item.todo_id).await.unwrap();
    assert_eq!(stored.project_id, Some(project_id));
}
