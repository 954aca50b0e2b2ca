use axum::http::StatusCode;
use serde_json::Value;

use crate::tests::helper;

#[tokio::test]
async fn test_todo_flow() {
    let mut app = helper::setup_test_app();

    // plain note
    let note = helper::create_note(&mut app, "A", "B").await;
    assert!(!note.is_todo);
    assert!(!note.is_completed);
    assert_eq!("general", note.category_id);

    // not a todo yet
    let (status_code, _, error) = helper::maybe_toggle_note(&mut app, &note.id).await;
    assert_eq!(StatusCode::BAD_REQUEST, status_code);
    assert_eq!(Some("Note is not a todo item".to_string()), error);

    let (_, unchanged, _) = helper::single_note(&mut app, &note.id).await;
    let unchanged = unchanged.unwrap();
    assert!(!unchanged.is_completed);
    assert_eq!(note.updated_at, unchanged.updated_at);

    // make it a todo
    let mut payload = helper::note_payload("A", "B");
    payload.insert("isTodo".to_string(), Value::Bool(true));
    let (status_code, todo, _) = helper::maybe_update_note(&mut app, &note.id, &payload).await;
    assert_eq!(StatusCode::OK, status_code);
    let todo = todo.unwrap();
    assert!(todo.is_todo);
    assert!(!todo.is_completed);

    // complete it
    let (status_code, completed, _) = helper::maybe_toggle_note(&mut app, &note.id).await;
    assert_eq!(StatusCode::OK, status_code);
    let completed = completed.unwrap();
    assert!(completed.is_completed);
    assert!(completed.updated_at > todo.updated_at);

    // and back again
    let (status_code, reopened, _) = helper::maybe_toggle_note(&mut app, &note.id).await;
    assert_eq!(StatusCode::OK, status_code);
    let reopened = reopened.unwrap();
    assert!(!reopened.is_completed);
    assert!(reopened.updated_at > completed.updated_at);
}

#[tokio::test]
async fn test_create_todo() {
    let mut app = helper::setup_test_app();

    let mut payload = helper::note_payload("Groceries", "Milk");
    payload.insert("isTodo".to_string(), Value::Bool(true));
    // completion can not be set on create
    payload.insert("isCompleted".to_string(), Value::Bool(true));

    let (status_code, note, _) = helper::maybe_create_note(&mut app, &payload).await;
    assert_eq!(StatusCode::CREATED, status_code);
    let note = note.unwrap();
    assert!(note.is_todo);
    assert!(!note.is_completed);
}

#[tokio::test]
async fn test_completion_cleared_for_non_todo() {
    let mut app = helper::setup_test_app();

    let mut payload = helper::note_payload("Groceries", "Milk");
    payload.insert("isTodo".to_string(), Value::Bool(true));
    let (_, note, _) = helper::maybe_create_note(&mut app, &payload).await;
    let note = note.unwrap();

    let mut payload = helper::note_payload("Groceries", "Milk");
    payload.insert("isCompleted".to_string(), Value::Bool(true));
    let (_, completed, _) = helper::maybe_update_note(&mut app, &note.id, &payload).await;
    assert!(completed.unwrap().is_completed);

    // no longer a todo, so not completed either
    let mut payload = helper::note_payload("Groceries", "Milk");
    payload.insert("isTodo".to_string(), Value::Bool(false));
    let (status_code, plain, _) = helper::maybe_update_note(&mut app, &note.id, &payload).await;
    assert_eq!(StatusCode::OK, status_code);
    let plain = plain.unwrap();
    assert!(!plain.is_todo);
    assert!(!plain.is_completed);
}
