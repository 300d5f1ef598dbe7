//! Tests for domain models.

use std::str::FromStr;

use crate::db::models::*;

#[test]
fn completed_flag_parses_database_format() {
    assert_eq!(CompletedFlag::from_str("yes"), Ok(CompletedFlag::Yes));
    assert_eq!(CompletedFlag::from_str("no"), Ok(CompletedFlag::No));
}

#[test]
fn completed_flag_rejects_other_encodings() {
    assert!(CompletedFlag::from_str("YES").is_err());
    assert!(CompletedFlag::from_str("1").is_err());
    assert!(CompletedFlag::from_str("").is_err());
}

#[test]
fn completed_flag_maps_to_bool() {
    assert!(bool::from(CompletedFlag::Yes));
    assert!(!bool::from(CompletedFlag::No));
    assert_eq!(CompletedFlag::from(true).to_string(), "yes");
    assert_eq!(CompletedFlag::from(false).to_string(), "no");
}

#[test]
fn new_todo_item_keeps_fields_when_id_attached() {
    let draft = NewTodoItem {
        title: "Milk".to_string(),
        description: "2%".to_string(),
        priority: 2,
        completed: false,
        project_id: Some(9),
        created_at: Some("2025-01-01T00:00:00Z".to_string()),
    };

    let item = draft.with_id(4);
    assert_eq!(item.todo_id, 4);
    assert_eq!(item.title, "Milk");
    assert_eq!(item.description, "2%");
    assert_eq!(item.priority, 2);
    assert!(!item.completed);
    assert_eq!(item.project_id, Some(9));
    assert_eq!(item.created_at.as_deref(), Some("2025-01-01T00:00:00Z"));
}

#[test]
fn todo_item_serializes_completed_as_bool() {
    let item = TodoItem {
        todo_id: 1,
        title: "Milk".to_string(),
        description: "2%".to_string(),
        priority: 2,
        completed: true,
        project_id: None,
        created_at: None,
    };
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["completed"], serde_json::json!(true));
    assert_eq!(json["project_id"], serde_json::Value::Null);
}
