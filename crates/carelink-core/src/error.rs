//! Error types for the CareLink portal state engine.
//!
//! Every failure the portal surfaces is an inline display string; these
//! variants carry that text through `Display` while keeping a stable
//! machine code per category via [`Error::error_type`].

use thiserror::Error;

/// Result type alias for CareLink operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CareLink portal state.
#[derive(Debug, Error)]
pub enum Error {
    // ==========================================================================
    // Resource Not Found Errors
    // ==========================================================================
    #[error("Conversation not found: {0}")]
    ConversationNotFound(i64),

    #[error("Notification not found: {0}")]
    NotificationNotFound(i64),

    // ==========================================================================
    // Validation Errors
    // ==========================================================================
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("An account with email {0} already exists")]
    DuplicateEmail(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ==========================================================================
    // Session Errors
    // ==========================================================================
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("No user is signed in")]
    NotSignedIn,

    // ==========================================================================
    // I/O & Internal Errors
    // ==========================================================================
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns the error category string (stable code for display surfaces).
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::ConversationNotFound(_) | Self::NotificationNotFound(_) => "NOT_FOUND",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::PasswordTooShort { .. } | Self::PasswordMismatch | Self::DuplicateEmail(_) => {
                "VALIDATION_ERROR"
            }
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::InvalidCredentials | Self::NotSignedIn => "AUTH_ERROR",
            Self::Serialization(_) => "TYPE_ERROR",
            Self::Internal(_) => "UNHANDLED_EXCEPTION",
        }
    }

    /// Returns whether the error is user-correctable (fix the input and retry).
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
