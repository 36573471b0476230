//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! `patients_core::storage::PatientRepository`. The backend the server runs
//! on is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//! - without `dynamodb`: in-memory storage, for local runs without a store
//!
//! The in-memory backend is always compiled for tests.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p patients
//! ```
//!
//! Build with in-memory storage:
//! ```bash
//! cargo build -p patients --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, not(feature = "dynamodb")))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(any(test, not(feature = "dynamodb")))]
pub use inmemory::InMemoryRepository;
