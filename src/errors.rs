/*!
 * Error types for the projdoc application.
 *
 * `RenderError` is the typed failure returned by the render/export entry
 * point; it is always raised before any output exists. `AppError` wraps it
 * together with the file, configuration and snapshot failures of the
 * surrounding application, using the thiserror crate for ergonomic
 * error definitions.
 */

use std::fmt;

use thiserror::Error;

/// Free-text fields that carry a word ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// Main document content
    Content,
    /// Abstract paragraph
    Abstract,
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextField::Content => write!(f, "content"),
            TextField::Abstract => write!(f, "abstract"),
        }
    }
}

/// Fields that must be filled before a document can be exported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// Document title
    Title,
    /// At least one student with a name
    StudentName,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Title => write!(f, "title"),
            RequiredField::StudentName => write!(f, "student name"),
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur while validating and rendering a document
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Free text is longer than the active locale allows
    #[error("The {field} exceeds the {limit} word limit ({count} words)")]
    WordLimitExceeded {
        /// Which text field is over its ceiling
        field: TextField,
        /// Ceiling of the active locale
        limit: usize,
        /// Current word count
        count: usize,
    },

    /// Title or named student missing at export time
    #[error("Missing required field(s): {}", join_fields(.0))]
    MissingRequiredField(Vec<RequiredField>),

    /// External mentor set without a source
    #[error("External mentor requires a source (company or institution name)")]
    InvalidExternalMentor,

    /// Unexpected internal failure while assembling the document
    #[error("Failed to render document: {0}")]
    RenderFailure(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Snapshot record could not be parsed or written
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Error from rendering
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Snapshot(error.to_string())
    }
}
