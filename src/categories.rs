//! Categories

/// ID of the built-in category, used when a note is created without one
pub const GENERAL_CATEGORY_ID: &str = "general";

/// Name of the built-in category
pub const GENERAL_CATEGORY_NAME: &str = "General";

/// Color for categories created without one
pub const DEFAULT_COLOR: &str = "#6b7280";

/// A named, colored tag for notes
#[derive(Clone, Debug)]
pub struct Category {
    /// Category ID
    pub id: String,

    /// Display name, trimmed
    pub name: String,

    /// Display color
    pub color: String,
}

impl Category {
    /// The built-in category every store starts with
    pub fn general() -> Self {
        Self {
            id: GENERAL_CATEGORY_ID.to_string(),
            name: GENERAL_CATEGORY_NAME.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Is this the built-in category?
    pub fn is_general(&self) -> bool {
        self.id == GENERAL_CATEGORY_ID
    }
}
