//! Form types
//!
//! Values are expected to be validated and trimmed by the caller

/// Values to create a Note
pub struct CreateNoteValues<'a> {
    /// Title of the note
    pub title: &'a str,

    /// Content of the note
    pub content: &'a str,

    /// Make the note a to-do item
    pub is_todo: bool,

    /// Category of the note, the general category when `None`
    pub category_id: Option<&'a str>,
}

/// Values to update a Note
///
/// Title and content are always replaced, the rest only when set
pub struct UpdateNoteValues<'a> {
    /// New title of the note
    pub title: &'a str,

    /// New content of the note
    pub content: &'a str,

    /// New to-do state
    pub is_todo: Option<bool>,

    /// New completion state
    ///
    /// Ignored when the note ends up not being a to-do item
    pub is_completed: Option<bool>,

    /// New category
    pub category_id: Option<&'a str>,
}

/// Values to create a Category
pub struct CreateCategoryValues<'a> {
    /// Name of the category
    pub name: &'a str,

    /// Color of the category, the default color when `None`
    pub color: Option<&'a str>,
}

/// Values to update a Category
pub struct UpdateCategoryValues<'a> {
    /// New name of the category
    pub name: &'a str,

    /// New color, the current one is kept when `None`
    pub color: Option<&'a str>,
}
