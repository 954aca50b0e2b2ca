use axum::http::StatusCode;

use crate::tests::helper;

#[tokio::test]
async fn test_welcome_note() {
    let mut app = helper::setup_seeded_test_app();

    let (status_code, notes) = helper::list_notes(&mut app).await;
    assert_eq!(StatusCode::OK, status_code);
    let notes = notes.unwrap();
    assert_eq!(1, notes.len());

    let welcome = &notes[0];
    assert_eq!("Welcome to Notes App", welcome.title);
    assert_eq!(
        "This is your first note! You can edit or delete it.",
        welcome.content
    );
    assert!(!welcome.is_todo);
    assert_eq!("general", welcome.category_id);

    // it is just a note
    let (status_code, _) = helper::maybe_delete_note(&mut app, &welcome.id).await;
    assert_eq!(StatusCode::NO_CONTENT, status_code);
}

#[tokio::test]
async fn test_stores_are_separate() {
    let mut seeded = helper::setup_seeded_test_app();
    let mut empty = helper::setup_test_app();

    helper::create_note(&mut empty, "A", "B").await;

    let (_, notes) = helper::list_notes(&mut seeded).await;
    assert_eq!(1, notes.unwrap().len());

    let (_, notes) = helper::list_notes(&mut empty).await;
    assert_eq!(1, notes.unwrap().len());
}
