//! Error types for the promptform CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Authoring-state operations never produce errors (invalid
//! edits are defined as no-ops); only the CLI surface and the generation
//! boundary are fallible.

use crate::exit_codes;
use crate::generate::GenerationError;
use thiserror::Error;

/// Main error type for promptform operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum PromptformError {
    /// User provided invalid arguments or ended a session early.
    #[error("{0}")]
    UserError(String),

    /// The generation backend failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl PromptformError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptformError::UserError(_) => exit_codes::USER_ERROR,
            PromptformError::Generation(_) => exit_codes::GENERATION_FAILURE,
        }
    }
}

/// Result type alias for promptform operations.
pub type Result<T> = std::result::Result<T, PromptformError>;
