//! In-memory storage backend.
//!
//! Stores patients in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Keys are kept
//! ordered so scans page deterministically. Data is lost when the repository
//! is dropped.

mod repository;

pub use repository::InMemoryRepository;
