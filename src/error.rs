//! Error types for the exam-prompt CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The two core failures (`ValidationError`, `PreconditionError`) are their own
//! enums so the controller can return them without dragging in I/O concerns.

use crate::exit_codes;
use crate::prompt::TemplateError;
use thiserror::Error;

/// A required field did not hold a usable value when generating.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The problem text was empty or whitespace only.
    #[error("問題文を入力してください。")]
    EmptyProblemText,
}

/// An operation was attempted in a state that does not allow it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    /// Copy was requested before any prompt was generated.
    #[error("先にプロンプトを生成してください。")]
    NothingGenerated,
}

/// Main error type for exam-prompt operations.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// User provided invalid arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A configured template is malformed.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// The clipboard collaborator could not take the text.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) => exit_codes::VALIDATION_FAILURE,
            AppError::Precondition(_) => exit_codes::PRECONDITION_FAILURE,
            AppError::UserError(_) | AppError::Io(_) => exit_codes::USER_ERROR,
            AppError::ConfigError(_) | AppError::Template(_) => exit_codes::CONFIG_FAILURE,
            AppError::ClipboardError(_) => exit_codes::CLIPBOARD_FAILURE,
        }
    }
}

/// Result type alias for exam-prompt operations.
pub type Result<T> = std::result::Result<T, AppError>;
