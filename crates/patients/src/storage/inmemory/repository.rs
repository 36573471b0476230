//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use patients_core::patient::{Patient, PatientChanges, PATIENT_ENTITY};
use patients_core::storage::{Page, PageRequest, PatientRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Mirrors the store's semantics: inserts overwrite, updates and deletes
/// fail with `NotFound` when the key is absent.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    patients: Arc<RwLock<BTreeMap<String, Patient>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: &str) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: PATIENT_ENTITY,
        id: id.to_string(),
    }
}

#[async_trait]
impl PatientRepository for InMemoryRepository {
    async fn list_patients(&self, page: PageRequest) -> Result<Page<Patient>> {
        let patients = self.patients.read().await;
        let limit = usize::try_from(page.limit()).unwrap_or(0);

        let start = match page.next() {
            Some(next) => Bound::Excluded(next),
            None => Bound::Unbounded,
        };

        let mut remaining = patients.range::<str, _>((start, Bound::Unbounded));
        let items: Vec<Patient> = remaining.by_ref().take(limit).map(|(_, p)| p.clone()).collect();

        let next_token = match remaining.next() {
            Some(_) => items.last().map(|p| p.patient_id.clone()),
            None => None,
        };

        Ok(Page { items, next_token })
    }

    async fn get_patient(&self, id: &str) -> Result<Option<Patient>> {
        let patients = self.patients.read().await;
        Ok(patients.get(id).cloned())
    }

    async fn create_patient(&self, patient: &Patient) -> Result<()> {
        let mut patients = self.patients.write().await;
        patients.insert(patient.patient_id.clone(), patient.clone());
        Ok(())
    }

    async fn update_patient(&self, id: &str, changes: &PatientChanges) -> Result<()> {
        let mut patients = self.patients.write().await;
        let patient = patients.get_mut(id).ok_or_else(|| not_found(id))?;
        patient.apply(changes);
        Ok(())
    }

    async fn delete_patient(&self, id: &str) -> Result<()> {
        let mut patients = self.patients.write().await;
        if patients.remove(id).is_none() {
            return Err(not_found(id));
        }
        Ok(())
    }
}
