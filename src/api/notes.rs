//! Notes API endpoints
//!
//! Everything related to the notes management

use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::notes::Note;
use crate::storage::CreateNoteValues;
use crate::storage::Store;
use crate::storage::UpdateNoteValues;

use super::Error;
use super::Form;
use super::PathParameters;
use super::Success;
use super::trimmed;

const TITLE_AND_CONTENT_REQUIRED: &str = "Title and content are required";

/// Note response going to the user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    /// Note ID
    pub id: String,

    /// Title
    pub title: String,

    /// Content
    pub content: String,

    /// Is the note a to-do item
    pub is_todo: bool,

    /// Is the to-do item done
    pub is_completed: bool,

    /// Category ID
    pub category_id: String,

    /// Creation date
    pub created_at: DateTime<Utc>,

    /// Last updated at
    pub updated_at: DateTime<Utc>,
}

impl NoteResponse {
    /// Create a response from a [`Note`](Note)
    fn from_note(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            is_todo: note.is_todo,
            is_completed: note.is_completed,
            category_id: note.category_id,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }

    /// Create a response from multiple [`Note`](Note)s
    fn from_note_multiple(notes: Vec<Note>) -> Vec<Self> {
        notes.into_iter().map(Self::from_note).collect()
    }
}

/// List all notes, most recently updated first
///
/// Request:
/// ```sh
/// curl -v http://localhost:8080/api/notes
/// ```
///
/// Response:
/// ```json
/// [ { "id": "<uuid>", "title": "Groceries", "isTodo": true ... } ]
/// ```
pub async fn list(Extension(store): Extension<Store>) -> Success<Vec<NoteResponse>> {
    let notes = store.find_all_notes().await;

    Success::ok(NoteResponse::from_note_multiple(notes))
}

/// Get a single note
///
/// Request:
/// ```sh
/// curl -v http://localhost:8080/api/notes/<uuid>
/// ```
///
/// Response:
/// ```json
/// { "id": "<uuid>", "title": "Groceries", "isTodo": true ... }
/// ```
pub async fn single(
    Extension(store): Extension<Store>,
    PathParameters(note_id): PathParameters<String>,
) -> Result<Success<NoteResponse>, Error> {
    let note = store.find_single_note_by_id(&note_id).await?;

    Ok(Success::ok(NoteResponse::from_note(note)))
}

/// Create note form
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteForm {
    /// Title, required
    title: Option<String>,

    /// Content, required
    content: Option<String>,

    /// Make it a to-do item, defaults to `false`
    is_todo: Option<bool>,

    /// Category, defaults to the general category
    category_id: Option<String>,
}

/// Create a note based on the [`CreateNoteForm`](CreateNoteForm) form
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "title": "Groceries", "content": "Milk", "isTodo": true }' \
///     http://localhost:8080/api/notes
/// ```
///
/// Response:
/// ```json
/// { "id": "<uuid>", "title": "Groceries", "isTodo": true, "isCompleted": false ... }
/// ```
pub async fn create(
    Extension(store): Extension<Store>,
    Form(form): Form<CreateNoteForm>,
) -> Result<Success<NoteResponse>, Error> {
    let (Some(title), Some(content)) = (
        trimmed(form.title.as_deref()),
        trimmed(form.content.as_deref()),
    ) else {
        return Err(Error::bad_request(TITLE_AND_CONTENT_REQUIRED));
    };

    let values = CreateNoteValues {
        title,
        content,
        is_todo: form.is_todo.unwrap_or(false),
        category_id: trimmed(form.category_id.as_deref()),
    };

    let note = store.create_note(&values).await?;

    Ok(Success::created(NoteResponse::from_note(note)))
}

/// Update note form
///
/// Title and content are required, the rest is kept when omitted
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteForm {
    /// New title
    title: Option<String>,

    /// New content
    content: Option<String>,

    /// New to-do state
    is_todo: Option<bool>,

    /// New completion state
    is_completed: Option<bool>,

    /// New category
    category_id: Option<String>,
}

/// Replace a note based on the [`UpdateNoteForm`](UpdateNoteForm) form
///
/// Request:
/// ```sh
/// curl -v -X PUT -H 'Content-Type: application/json' \
///     -d '{ "title": "Groceries", "content": "Milk, eggs", "isTodo": true }' \
///     http://localhost:8080/api/notes/<uuid>
/// ```
///
/// Response:
/// ```json
/// { "id": "<uuid>", "title": "Groceries", "content": "Milk, eggs" ... }
/// ```
pub async fn update(
    Extension(store): Extension<Store>,
    PathParameters(note_id): PathParameters<String>,
    Form(form): Form<UpdateNoteForm>,
) -> Result<Success<NoteResponse>, Error> {
    // unknown notes are reported before invalid fields
    store.find_single_note_by_id(&note_id).await?;

    let (Some(title), Some(content)) = (
        trimmed(form.title.as_deref()),
        trimmed(form.content.as_deref()),
    ) else {
        return Err(Error::bad_request(TITLE_AND_CONTENT_REQUIRED));
    };

    let values = UpdateNoteValues {
        title,
        content,
        is_todo: form.is_todo,
        is_completed: form.is_completed,
        category_id: trimmed(form.category_id.as_deref()),
    };

    let note = store.update_note(&note_id, &values).await?;

    Ok(Success::ok(NoteResponse::from_note(note)))
}

/// Flip the completion state of a to-do item
///
/// Request:
/// ```sh
/// curl -v -X PATCH http://localhost:8080/api/notes/<uuid>/toggle
/// ```
///
/// Response:
/// ```json
/// { "id": "<uuid>", "isTodo": true, "isCompleted": true ... }
/// ```
pub async fn toggle(
    Extension(store): Extension<Store>,
    PathParameters(note_id): PathParameters<String>,
) -> Result<Success<NoteResponse>, Error> {
    let note = store.toggle_note(&note_id).await?;

    Ok(Success::ok(NoteResponse::from_note(note)))
}

/// Delete a note
///
/// Request:
/// ```sh
/// curl -v -X DELETE http://localhost:8080/api/notes/<uuid>
/// ```
pub async fn delete(
    Extension(store): Extension<Store>,
    PathParameters(note_id): PathParameters<String>,
) -> Result<Success<()>, Error> {
    store.delete_note(&note_id).await?;

    Ok(Success::no_content())
}
