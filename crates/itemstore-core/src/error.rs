//! Shared error type across itemstore crates.

use thiserror::Error;

/// Client-facing error classes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Missing or empty required field.
    BadRequest,
    /// Key absent according to the operation's own check.
    NotFound,
    /// Backend or internal failure.
    Internal,
}

impl ClientCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ItemStoreError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ItemStoreError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("item not found")]
    NotFound,
    #[error("backend: {0}")]
    Backend(String),
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ItemStoreError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ItemStoreError::Validation(_) => ClientCode::BadRequest,
            ItemStoreError::NotFound => ClientCode::NotFound,
            ItemStoreError::Backend(_)
            | ItemStoreError::Config(_)
            | ItemStoreError::Internal(_) => ClientCode::Internal,
        }
    }
}
