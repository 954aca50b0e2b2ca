//! All things related to the storage of notes and categories
//!
//! Everything lives in memory and is gone on shutdown

use thiserror::Error;

pub use form_types::*;
pub use memory::Store;
pub use Config as StoreConfig;

use crate::utils::env_var_or_else;

mod form_types;
mod memory;

/// Storage errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No note with the given ID
    #[error("Note not found")]
    NoteNotFound,

    /// No category with the given ID
    #[error("Category not found")]
    CategoryNotFound,

    /// A note refers to a category that does not exist
    #[error("Category does not exist")]
    UnknownCategory,

    /// Only to-do items can be completed
    #[error("Note is not a todo item")]
    NotATodo,

    /// The built-in category is always there
    #[error("The general category can not be deleted")]
    GeneralCategory,

    /// Category still has notes referring to it
    #[error("Category is in use by {0} note(s)")]
    CategoryInUse(usize),
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Store configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Config {
    /// Detect configuration from environment
    ///
    /// Uses `SEED_WELCOME_NOTE`, seeded unless it is `false`, `0` or `no`
    DetectConfig,

    /// Start with the welcome note
    Seeded,

    /// Start without any notes
    Empty,
}

impl Config {
    /// Resolve `DetectConfig` into one of the concrete variants
    pub fn resolve(self) -> Self {
        match self {
            Config::DetectConfig => {
                let seed = env_var_or_else("SEED_WELCOME_NOTE", || String::from("true"));

                match seed.trim().to_lowercase().as_str() {
                    "false" | "0" | "no" => Config::Empty,
                    _ => Config::Seeded,
                }
            }
            config => config,
        }
    }
}
