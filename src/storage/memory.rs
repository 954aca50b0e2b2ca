//! Memory storage
//!
//! Will be destroyed on system shutdown

use std::sync::Arc;

use chrono::DateTime;
use chrono::TimeDelta;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::categories::Category;
use crate::categories::DEFAULT_COLOR;
use crate::categories::GENERAL_CATEGORY_ID;
use crate::notes::Note;

use super::Config;
use super::CreateCategoryValues;
use super::CreateNoteValues;
use super::Error;
use super::Result;
use super::UpdateCategoryValues;
use super::UpdateNoteValues;

const WELCOME_TITLE: &str = "Welcome to Notes App";
const WELCOME_CONTENT: &str = "This is your first note! You can edit or delete it.";

/// An in-memory store for notes and categories
///
/// Cloning is cheap, all clones share the same collections. A single lock guards
/// everything, so every operation is atomic with respect to the others.
#[derive(Clone, Debug)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
    /// All notes, in insertion order
    notes: Vec<Note>,

    /// All categories, in insertion order
    categories: Vec<Category>,

    /// Last timestamp handed out
    last_timestamp: DateTime<Utc>,
}

impl Store {
    /// Create a new store, with the general category and maybe the welcome note
    pub fn from_config(config: Config) -> Self {
        let mut inner = Inner {
            notes: Vec::new(),
            categories: vec![Category::general()],
            last_timestamp: DateTime::<Utc>::MIN_UTC,
        };

        if config.resolve() == Config::Seeded {
            let welcome = CreateNoteValues {
                title: WELCOME_TITLE,
                content: WELCOME_CONTENT,
                is_todo: false,
                category_id: None,
            };

            if let Err(err) = inner.create_note(&welcome) {
                tracing::error!("Could not seed the welcome note: {err}");
            }
        }

        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// All notes, most recently updated first
    pub async fn find_all_notes(&self) -> Vec<Note> {
        self.inner.lock().await.find_all_notes()
    }

    /// Find a single note by its ID
    pub async fn find_single_note_by_id(&self, id: &str) -> Result<Note> {
        let inner = self.inner.lock().await;

        inner
            .note_position(id)
            .map(|position| inner.notes[position].clone())
    }

    /// Create a note
    pub async fn create_note(&self, values: &CreateNoteValues<'_>) -> Result<Note> {
        self.inner.lock().await.create_note(values)
    }

    /// Replace title and content of a note, and the optional fields that are set
    pub async fn update_note(&self, id: &str, values: &UpdateNoteValues<'_>) -> Result<Note> {
        self.inner.lock().await.update_note(id, values)
    }

    /// Flip the completion state of a to-do item
    pub async fn toggle_note(&self, id: &str) -> Result<Note> {
        self.inner.lock().await.toggle_note(id)
    }

    /// Delete a note
    pub async fn delete_note(&self, id: &str) -> Result<()> {
        self.inner.lock().await.delete_note(id)
    }

    /// All categories, ordered by name
    pub async fn find_all_categories(&self) -> Vec<Category> {
        self.inner.lock().await.find_all_categories()
    }

    /// Find a single category by its ID
    pub async fn find_single_category_by_id(&self, id: &str) -> Result<Category> {
        let inner = self.inner.lock().await;

        inner
            .category_position(id)
            .map(|position| inner.categories[position].clone())
    }

    /// Create a category
    pub async fn create_category(&self, values: &CreateCategoryValues<'_>) -> Result<Category> {
        self.inner.lock().await.create_category(values)
    }

    /// Update a category
    pub async fn update_category(
        &self,
        id: &str,
        values: &UpdateCategoryValues<'_>,
    ) -> Result<Category> {
        self.inner.lock().await.update_category(id, values)
    }

    /// Delete a category, only when no note refers to it
    pub async fn delete_category(&self, id: &str) -> Result<()> {
        self.inner.lock().await.delete_category(id)
    }
}

impl Inner {
    /// Next timestamp, always later than the previous one
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();

        let timestamp = if now > self.last_timestamp {
            now
        } else {
            self.last_timestamp + TimeDelta::microseconds(1)
        };

        self.last_timestamp = timestamp;

        timestamp
    }

    fn note_position(&self, id: &str) -> Result<usize> {
        self.notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(Error::NoteNotFound)
    }

    fn category_position(&self, id: &str) -> Result<usize> {
        self.categories
            .iter()
            .position(|category| category.id == id)
            .ok_or(Error::CategoryNotFound)
    }

    /// Check a category a note wants to refer to
    fn ensure_category_exists(&self, id: &str) -> Result<()> {
        if self.categories.iter().any(|category| category.id == id) {
            Ok(())
        } else {
            Err(Error::UnknownCategory)
        }
    }

    fn find_all_notes(&self) -> Vec<Note> {
        let mut notes = self.notes.clone();

        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        notes
    }

    fn create_note(&mut self, values: &CreateNoteValues) -> Result<Note> {
        let category_id = values.category_id.unwrap_or(GENERAL_CATEGORY_ID);
        self.ensure_category_exists(category_id)?;

        let now = self.next_timestamp();

        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: values.title.to_string(),
            content: values.content.to_string(),
            is_todo: values.is_todo,
            is_completed: false,
            category_id: category_id.to_string(),
            created_at: now,
            updated_at: now,
        };

        tracing::debug!("Created note {}", note.id);

        self.notes.push(note.clone());

        Ok(note)
    }

    fn update_note(&mut self, id: &str, values: &UpdateNoteValues) -> Result<Note> {
        let position = self.note_position(id)?;

        if let Some(category_id) = values.category_id {
            self.ensure_category_exists(category_id)?;
        }

        let now = self.next_timestamp();
        let note = &mut self.notes[position];

        note.title = values.title.to_string();
        note.content = values.content.to_string();

        if let Some(is_todo) = values.is_todo {
            note.is_todo = is_todo;
        }

        if let Some(is_completed) = values.is_completed {
            note.is_completed = is_completed;
        }

        if !note.is_todo {
            note.is_completed = false;
        }

        if let Some(category_id) = values.category_id {
            note.category_id = category_id.to_string();
        }

        note.updated_at = now;

        tracing::debug!("Updated note {id}");

        Ok(note.clone())
    }

    fn toggle_note(&mut self, id: &str) -> Result<Note> {
        let position = self.note_position(id)?;

        if !self.notes[position].is_todo {
            return Err(Error::NotATodo);
        }

        let now = self.next_timestamp();
        let note = &mut self.notes[position];

        note.is_completed = !note.is_completed;
        note.updated_at = now;

        tracing::debug!("Toggled note {id}, completed: {}", note.is_completed);

        Ok(note.clone())
    }

    fn delete_note(&mut self, id: &str) -> Result<()> {
        let position = self.note_position(id)?;

        self.notes.remove(position);

        tracing::debug!("Deleted note {id}");

        Ok(())
    }

    fn find_all_categories(&self) -> Vec<Category> {
        let mut categories = self.categories.clone();

        categories.sort_by_cached_key(|category| category.name.to_lowercase());

        categories
    }

    fn create_category(&mut self, values: &CreateCategoryValues) -> Result<Category> {
        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: values.name.to_string(),
            color: values.color.unwrap_or(DEFAULT_COLOR).to_string(),
        };

        tracing::debug!("Created category {}", category.id);

        self.categories.push(category.clone());

        Ok(category)
    }

    fn update_category(&mut self, id: &str, values: &UpdateCategoryValues) -> Result<Category> {
        let position = self.category_position(id)?;
        let category = &mut self.categories[position];

        category.name = values.name.to_string();

        if let Some(color) = values.color {
            category.color = color.to_string();
        }

        tracing::debug!("Updated category {id}");

        Ok(category.clone())
    }

    fn delete_category(&mut self, id: &str) -> Result<()> {
        let position = self.category_position(id)?;

        if self.categories[position].is_general() {
            return Err(Error::GeneralCategory);
        }

        let in_use = self
            .notes
            .iter()
            .filter(|note| note.category_id == id)
            .count();

        if in_use > 0 {
            return Err(Error::CategoryInUse(in_use));
        }

        self.categories.remove(position);

        tracing::debug!("Deleted category {id}");

        Ok(())
    }
}
