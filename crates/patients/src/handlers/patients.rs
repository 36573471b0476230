//! Patient CRUD handlers.
//!
//! Each handler parses its request, makes a single repository call and maps
//! the outcome to a response. Handlers share nothing but the repository.

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use patients_core::patient::{
    changes_from_input, new_patient, parse_input, Operation, Patient, PATIENT_ENTITY,
};
use patients_core::storage::{Page, PageRequest, RepositoryError};

use crate::{handlers::AppError, state::AppState};

/// Query parameters for listing patients.
///
/// `limit` is kept raw so a bad value gets the same error body as any
/// other validation failure. Extractor rejections are mapped the same way.
#[derive(Debug, Deserialize)]
pub struct ListPatientsQuery {
    /// Maximum number of patients to return (default: 5)
    pub limit: Option<String>,
    /// `next_token` of the previous page
    pub next: Option<String>,
}

// ============================================================================
// List Patients
// ============================================================================

/// List patients one page at a time (GET /patients).
pub async fn list_patients(
    State(state): State<AppState>,
    query: Result<Query<ListPatientsQuery>, QueryRejection>,
) -> Result<Json<Page<Patient>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::invalid_request(e.body_text()))?;
    let page = PageRequest::from_query(query.limit.as_deref(), query.next)
        .map_err(|e| AppError::repository(e, Operation::List))?;

    tracing::debug!(limit = page.limit(), next = ?page.next(), "Listing patients");

    let result = state
        .patients
        .list_patients(page)
        .await
        .map_err(|e| AppError::repository(e, Operation::List))?;

    Ok(Json(result))
}

// ============================================================================
// Get Patient
// ============================================================================

/// Get a single patient by ID (GET /patients/{patient_id}).
pub async fn get_patient(
    State(state): State<AppState>,
    patient_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Patient>, AppError> {
    let Path(patient_id) = patient_id.map_err(|e| AppError::invalid_request(e.body_text()))?;

    let patient = state
        .patients
        .get_patient(&patient_id)
        .await
        .map_err(|e| AppError::repository(e, Operation::Get))?;

    tracing::debug!(%patient_id, found = patient.is_some(), "Fetched patient");

    match patient {
        Some(p) => Ok(Json(p)),
        None => Err(AppError::repository(
            RepositoryError::NotFound {
                entity_type: PATIENT_ENTITY,
                id: patient_id,
            },
            Operation::Get,
        )),
    }
}

// ============================================================================
// Create Patient
// ============================================================================

/// Create a new patient (POST /patients).
///
/// Responds 201 with an empty body; the new ID is in the `Location` header.
pub async fn create_patient(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let input = parse_input(&body).map_err(AppError::malformed_body)?;
    let patient = new_patient(input, Uuid::new_v4(), Utc::now());

    state
        .patients
        .create_patient(&patient)
        .await
        .map_err(|e| AppError::repository(e, Operation::Create))?;

    tracing::info!(patient_id = %patient.patient_id, "Created new patient");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/patients/{}", patient.patient_id))],
    ))
}

// ============================================================================
// Update Patient
// ============================================================================

/// Overwrite a patient's mutable fields (PUT /patients/{patient_id}).
pub async fn update_patient(
    State(state): State<AppState>,
    patient_id: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let Path(patient_id) = patient_id.map_err(|e| AppError::invalid_request(e.body_text()))?;
    let input = parse_input(&body).map_err(AppError::malformed_body)?;
    let changes = changes_from_input(input, Utc::now());

    state
        .patients
        .update_patient(&patient_id, &changes)
        .await
        .map_err(|e| AppError::repository(e, Operation::Update))?;

    tracing::info!(%patient_id, "Updated patient");

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Delete Patient
// ============================================================================

/// Delete a patient (DELETE /patients/{patient_id}).
pub async fn delete_patient(
    State(state): State<AppState>,
    patient_id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(patient_id) = patient_id.map_err(|e| AppError::invalid_request(e.body_text()))?;

    state
        .patients
        .delete_patient(&patient_id)
        .await
        .map_err(|e| AppError::repository(e, Operation::Delete))?;

    tracing::info!(%patient_id, "Deleted patient");

    Ok(StatusCode::NO_CONTENT)
}
