use crate::cli::commands::project::create_project;
use crate::cli::commands::todo::*;
use crate::db::{Database, SqliteDatabase};
use crate::service::TodoItemService;

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_todos_empty() {
    let db = setup_db().await;

    let output = list_todos(&db, TodoFilter::All, "table").await.unwrap();
    assert_eq!(output, "No todo items found.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_todo_and_list() {
    let db = setup_db().await;
    create_project(&db, "Groceries").await.unwrap();

    let created = add_todo(&db, "Milk", "2%", "2", Some(1)).await.unwrap();
    assert_eq!(created, "✓ Created todo: Milk (1)");

    let table = list_todos(&db, TodoFilter::Project(1), "table").await.unwrap();
    assert!(table.contains("Milk"));
    assert!(table.contains("Priority"));

    let json = list_todos(&db, TodoFilter::ProjectTitle("Groceries"), "json")
        .await
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
    assert_eq!(parsed[0]["title"], "Milk");
    assert_eq!(parsed[0]["completed"], false);
    assert_eq!(parsed[0]["priority"], 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_todo_rejected() {
    let db = setup_db().await;

    let bad_priority = add_todo(&db, "Milk", "2%", "nine", None).await.unwrap();
    assert_eq!(
        bad_priority,
        "Failed to create todo. Check inputs and project id."
    );

    let bad_project = add_todo(&db, "Milk", "2%", "2", Some(5)).await.unwrap();
    assert_eq!(
        bad_project,
        "Failed to create todo. Check inputs and project id."
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_todo() {
    let db = setup_db().await;
    add_todo(&db, "Read", "Chapter 3", "4", None).await.unwrap();

    let detail = show_todo(&db, 1, "table").await.unwrap();
    assert!(detail.contains("Chapter 3"));
    assert!(detail.contains("Completed"));

    let missing = show_todo(&db, 2, "table").await.unwrap();
    assert_eq!(missing, "Todo 2 not found.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_complete_and_delete_todo() {
    let db = setup_db().await;
    add_todo(&db, "Run", "5k", "3", None).await.unwrap();

    assert_eq!(complete_todo(&db, 1).await.unwrap(), "✓ Completed todo: 1");
    let item = TodoItemService::new(&db).get(1).await.unwrap().unwrap();
    assert!(item.completed);

    assert_eq!(delete_todo(&db, 1).await.unwrap(), "✓ Deleted todo: 1");
    assert_eq!(complete_todo(&db, 1).await.unwrap(), "Todo 1 not found.");
    assert_eq!(delete_todo(&db, 1).await.unwrap(), "Todo 1 not found.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_todo() {
    let db = setup_db().await;
    add_todo(&db, "Draft", "v1", "3", None).await.unwrap();

    let mut item = TodoItemService::new(&db).get(1).await.unwrap().unwrap();
    item.description = "v2".to_string();
    assert_eq!(update_todo(&db, &item).await.unwrap(), "✓ Updated todo: Draft (1)");

    item.priority = 0;
    assert_eq!(
        update_todo(&db, &item).await.unwrap(),
        "Failed to update todo. Check inputs and project id."
    );
}
