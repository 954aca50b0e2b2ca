//! Notes

use chrono::DateTime;
use chrono::Utc;

/// A note, optionally a to-do item
#[derive(Clone, Debug)]
pub struct Note {
    /// Note ID
    pub id: String,

    /// Title, trimmed
    pub title: String,

    /// Content, trimmed
    pub content: String,

    /// Is the note a to-do item?
    pub is_todo: bool,

    /// Is the to-do item done?
    ///
    /// Always `false` when the note is not a to-do item
    pub is_completed: bool,

    /// The category the note belongs to
    pub category_id: String,

    /// Creation date
    pub created_at: DateTime<Utc>,

    /// Last updated at
    pub updated_at: DateTime<Utc>,
}
