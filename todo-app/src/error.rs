//! Error types for the todo app boundary
//!
//! Reducers and the store never fail; these cover parsing input and
//! rendering output.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TodoError>;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("unknown visibility filter '{0}' (expected SHOW_ALL, SHOW_ACTIVE or SHOW_COMPLETED)")]
    ParseFilter(String),

    #[error("line {line}: {message}")]
    ParseCommand { line: usize, message: String },

    #[error("todo ids exhausted")]
    IdsExhausted,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
