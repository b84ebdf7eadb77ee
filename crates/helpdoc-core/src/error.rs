//! Error types for help rendering.
//!
//! Rendering itself never fails: missing descriptions, empty flag lists and
//! absent aliases simply drop their sections. The only user-facing error is an
//! unresolvable help subject; the remaining variants guard descriptor
//! construction.

use thiserror::Error;

/// Result type alias for help operations.
pub type Result<T> = std::result::Result<T, HelpError>;

/// Core error type for help operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HelpError {
    /// The requested identifier matches neither a command nor a topic
    #[error("command {subject} not found")]
    CommandNotFound { subject: String },

    /// A descriptor violated a construction invariant
    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),
}

impl HelpError {
    pub fn not_found(subject: impl Into<String>) -> Self {
        HelpError::CommandNotFound {
            subject: subject.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        HelpError::InvalidDescriptor(message.into())
    }
}
