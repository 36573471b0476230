//! Functional core for the patients service.
//!
//! Pure types and functions only: no I/O happens in this crate. Storage
//! backends live in the `patients` crate and implement
//! [`storage::PatientRepository`].

pub mod patient;
pub mod storage;
