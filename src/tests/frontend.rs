use std::fs;

use axum::http::StatusCode;

use crate::tests::helper;

const INDEX: &str = "<!doctype html><title>Notes</title>";
const SCRIPT: &str = "console.log('notes');";

#[tokio::test]
async fn test_front_end() {
    let static_dir = tempfile::tempdir().unwrap();
    fs::write(static_dir.path().join("index.html"), INDEX).unwrap();
    fs::create_dir(static_dir.path().join("static")).unwrap();
    fs::write(static_dir.path().join("static").join("app.js"), SCRIPT).unwrap();

    let mut app = helper::setup_test_app_with_front_end(static_dir.path());

    let (status_code, body) = helper::get_path(&mut app, "/").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(INDEX, body);

    let (status_code, body) = helper::get_path(&mut app, "/static/app.js").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(SCRIPT, body);

    // front end routes get the index
    let (status_code, body) = helper::get_path(&mut app, "/notes/some-id").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(INDEX, body);

    // the API is still there
    let (status_code, body) = helper::get_path(&mut app, "/api/notes").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!("[]", body);
}

#[tokio::test]
async fn test_unknown_api_route() {
    let static_dir = tempfile::tempdir().unwrap();
    fs::write(static_dir.path().join("index.html"), INDEX).unwrap();

    let mut app = helper::setup_test_app_with_front_end(static_dir.path());

    let (status_code, body) = helper::get_path(&mut app, "/api/unknown").await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
    assert_eq!(r#"{"error":"Not found"}"#, body);
}
