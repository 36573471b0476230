//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of
//! `PatientRepository` using `aws-sdk-dynamodb`. The table is keyed on
//! `patient_id` alone.

mod client;
mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
