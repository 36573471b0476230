//! Application state.
//!
//! The store client is built once at startup and handed to every handler
//! through this state as a repository trait object.

use std::sync::Arc;

use patients_core::storage::PatientRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request; the repository itself is shared.
#[derive(Clone)]
pub struct AppState {
    /// Patient repository backed by the configured store.
    pub patients: Arc<dyn PatientRepository>,
}

impl AppState {
    /// Creates an AppState around an already constructed repository.
    pub fn with_repository(patients: Arc<dyn PatientRepository>) -> Self {
        Self { patients }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::from_config(config).await;
            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(not(feature = "dynamodb"))]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// The configuration's store settings are ignored.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
