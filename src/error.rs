//! Error types for the search bar widget

use thiserror::Error;

/// Errors raised while building the widget or persisting its settings
#[derive(Error, Debug)]
pub enum SearchBarError {
    #[error("search bar requires an on_change callback")]
    MissingOnChange,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No platform data directory available")]
    NoDataDir,
}

/// Result type alias for search bar operations
pub type Result<T> = std::result::Result<T, SearchBarError>;
