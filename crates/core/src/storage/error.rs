use thiserror::Error;

use super::{DEFAULT_ERROR_MESSAGE, DEFAULT_ERROR_NAME};

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The store's existence condition failed for a conditional write.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// A request parameter the store would reject.
    #[error("Invalid data: {0}")]
    InvalidData(String),
    /// A stored item could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Any other failure reported by the store or its client, carrying
    /// whatever status, error name and message the store provided.
    #[error(
        "{}: {}",
        .name.as_deref().unwrap_or(DEFAULT_ERROR_NAME),
        .message.as_deref().unwrap_or(DEFAULT_ERROR_MESSAGE)
    )]
    Store {
        status: Option<u16>,
        name: Option<String>,
        message: Option<String>,
    },
}

impl RepositoryError {
    /// Builds a [`RepositoryError::Store`] from the parts a store client exposes.
    pub fn store(
        status: Option<u16>,
        name: Option<impl Into<String>>,
        message: Option<impl Into<String>>,
    ) -> Self {
        Self::Store {
            status,
            name: name.map(Into::into),
            message: message.map(Into::into),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
