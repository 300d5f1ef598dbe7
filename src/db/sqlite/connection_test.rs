//! Tests for SQLite database connection and migrations.

use crate::db::{Database, ProjectRepository, SqliteDatabase};

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_all_tables() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("Migration should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    // sqlite_sequence exists because of AUTOINCREMENT.
    // _sqlx_migrations is created by sqlx for migration tracking.
    let expected = vec!["_sqlx_migrations", "Project", "Todo_Item", "sqlite_sequence"];

    for table in &expected {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("First migration should succeed");
    db.migrate().await.expect("Second migration should succeed");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Project")
        .fetch_one(db.pool())
        .await
        .expect("Query should succeed");
    assert_eq!(count, 0, "Fresh database should have no projects");
}

#[tokio::test(flavor = "multi_thread")]
async fn foreign_keys_are_enforced() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
        .fetch_one(db.pool())
        .await
        .expect("Query should succeed");
    assert_eq!(enabled, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_file_and_parent_directories() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("todolist.db");

    let db = SqliteDatabase::open(&path)
        .await
        .expect("Open should succeed");
    db.migrate().await.expect("Migration should succeed");
    db.projects()
        .create("Persisted")
        .await
        .expect("Create should succeed");
    db.close().await;

    assert!(path.exists());

    // Data survives a reopen.
    let reopened = SqliteDatabase::open(&path)
        .await
        .expect("Reopen should succeed");
    reopened.migrate().await.expect("Migration should succeed");
    let projects = reopened.projects().list().await.expect("List should succeed");
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Persisted");
    reopened.close().await;
}
