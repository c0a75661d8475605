//! Error types for account operations
//!
//! Relationship and role operations on the entity itself are total. Everything
//! that touches a collaborator (store, hashing, fixtures, config) reports
//! through [`AccountError`].

/// Main error type for account operations
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("There is already an account with this email: {0}")]
    DuplicateEmail(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl AccountError {
    /// Whether the error should be shown to the end user as a form error
    /// rather than logged as an internal failure.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::DuplicateEmail(_))
    }
}

// Implement From conversions for common error types

impl From<std::io::Error> for AccountError {
    fn from(err: std::io::Error) -> Self {
        Self::Fixture(err.to_string())
    }
}

impl From<serde_json::Error> for AccountError {
    fn from(err: serde_json::Error) -> Self {
        Self::Fixture(format!("JSON error: {}", err))
    }
}

/// Result type alias for account operations
pub type Result<T> = std::result::Result<T, AccountError>;
