//! Error types for catalog loading, configuration and viewport access.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FolioError {
    #[error("item \"{item}\" references unknown category \"{category}\"")]
    UnknownCategory { item: String, category: String },

    #[error("item \"{item}\" has no categories")]
    NoCategories { item: String },

    #[error("category list must start with the \"All\" wildcard")]
    MissingWildcard,

    #[error("category \"{0}\" is listed more than once")]
    DuplicateCategory(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("viewport unavailable: {0}")]
    ViewportUnavailable(String),

    #[error("element #{0} not found")]
    ElementNotFound(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
