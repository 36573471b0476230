use async_trait::async_trait;

use crate::patient::{Patient, PatientChanges};

use super::{Page, PageRequest, Result};

/// Repository for patient records.
///
/// Every method maps to exactly one call against the backing store.
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Scans at most `page.limit()` patients, resuming after `page.next()`.
    async fn list_patients(&self, page: PageRequest) -> Result<Page<Patient>>;

    /// Gets a patient by its ID.
    async fn get_patient(&self, id: &str) -> Result<Option<Patient>>;

    /// Inserts a patient unconditionally.
    async fn create_patient(&self, patient: &Patient) -> Result<()>;

    /// Overwrites the mutable fields of an existing patient.
    ///
    /// Fails with `RepositoryError::NotFound` when no patient has this ID.
    async fn update_patient(&self, id: &str, changes: &PatientChanges) -> Result<()>;

    /// Deletes an existing patient.
    ///
    /// Fails with `RepositoryError::NotFound` when no patient has this ID.
    async fn delete_patient(&self, id: &str) -> Result<()>;
}
