//! Pure functions for mapping repository errors to HTTP responses.
//!
//! Status codes and error bodies are computed here so the handlers only
//! have to put them on the wire.

use serde::{Deserialize, Serialize};

use crate::patient::{not_found_message, Operation, PATIENT_NOT_FOUND};

use super::RepositoryError;

/// Error name used when the store did not report one.
pub const DEFAULT_ERROR_NAME: &str = "Exception";

/// Error message used when the store did not report one.
pub const DEFAULT_ERROR_MESSAGE: &str = "Unknown error";

/// Error name for request bodies that are not valid JSON.
pub const SYNTAX_ERROR_NAME: &str = "SyntaxError";

const VALIDATION_ERROR_NAME: &str = "ValidationException";
const SERIALIZATION_ERROR_NAME: &str = "SerializationException";

/// JSON error body shared by every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, message: Option<String>) -> Self {
        Self {
            error: error.into(),
            message,
        }
    }
}

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `InvalidData` -> 400
/// - `Serialization` -> 500
/// - `Store` -> the store's own status, or 500 when it has none
///
/// ```
/// use patients_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Patient",
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::Serialization(_) => 500,
        RepositoryError::Store { status, .. } => status
            .filter(|code| (100..=599).contains(code))
            .unwrap_or(500),
    }
}

/// Maps a [`RepositoryError`] raised by `operation` to its JSON error body.
pub fn repository_error_to_body(error: &RepositoryError, operation: Operation) -> ErrorBody {
    match error {
        RepositoryError::NotFound { id, .. } => {
            ErrorBody::new(PATIENT_NOT_FOUND, not_found_message(operation, id))
        }
        RepositoryError::InvalidData(message) => {
            ErrorBody::new(VALIDATION_ERROR_NAME, Some(message.clone()))
        }
        RepositoryError::Serialization(message) => {
            ErrorBody::new(SERIALIZATION_ERROR_NAME, Some(message.clone()))
        }
        RepositoryError::Store { name, message, .. } => ErrorBody::new(
            name.clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_NAME.to_string()),
            Some(
                message
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
            ),
        ),
    }
}

/// Error body for a request rejected before reaching the store.
pub fn validation_error_body(message: impl Into<String>) -> ErrorBody {
    ErrorBody::new(VALIDATION_ERROR_NAME, Some(message.into()))
}

/// Error body for a request body that failed to parse as JSON.
pub fn syntax_error_body(message: impl Into<String>) -> ErrorBody {
    ErrorBody::new(SYNTAX_ERROR_NAME, Some(message.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found(id: &str) -> RepositoryError {
        RepositoryError::NotFound {
            entity_type: "Patient",
            id: id.to_string(),
        }
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(repository_error_to_status_code(&not_found("p-1")), 404);
    }

    #[test]
    fn test_invalid_data_maps_to_400() {
        let error = RepositoryError::InvalidData("bad limit".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_serialization_maps_to_500() {
        let error = RepositoryError::Serialization("missing created_at".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_store_status_passes_through() {
        let error = RepositoryError::store(
            Some(400),
            Some("ValidationException"),
            Some("One or more parameter values were invalid"),
        );
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_store_without_status_maps_to_500() {
        let error = RepositoryError::store(None, Some("DispatchFailure"), None::<String>);
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_store_with_bogus_status_maps_to_500() {
        let error = RepositoryError::store(Some(42), None::<String>, None::<String>);
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_get_not_found_body_has_only_error() {
        let body = repository_error_to_body(&not_found("p-1"), Operation::Get);

        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"Paciente não existe"}"#
        );
    }

    #[test]
    fn test_update_not_found_body() {
        let body = repository_error_to_body(&not_found("p-1"), Operation::Update);

        assert_eq!(body.error, "Paciente não existe");
        assert_eq!(
            body.message.as_deref(),
            Some("Recurso com ID p-1 não existe e não pode ser atualizado")
        );
    }

    #[test]
    fn test_delete_not_found_body() {
        let body = repository_error_to_body(&not_found("p-1"), Operation::Delete);

        assert_eq!(
            body.message.as_deref(),
            Some("Recurso com ID p-1 não existe e não pôde ser excluído")
        );
    }

    #[test]
    fn test_store_body_passes_name_and_message_through() {
        let error = RepositoryError::store(
            Some(400),
            Some("ResourceNotFoundException"),
            Some("Requested resource not found"),
        );
        let body = repository_error_to_body(&error, Operation::List);

        assert_eq!(body.error, "ResourceNotFoundException");
        assert_eq!(body.message.as_deref(), Some("Requested resource not found"));
    }

    #[test]
    fn test_validation_error_body_matches_invalid_data() {
        let error = RepositoryError::InvalidData("bad limit".to_string());

        assert_eq!(
            validation_error_body("bad limit"),
            repository_error_to_body(&error, Operation::List)
        );
    }

    #[test]
    fn test_store_body_defaults() {
        let error = RepositoryError::store(None, None::<String>, Some(""));
        let body = repository_error_to_body(&error, Operation::Create);

        assert_eq!(body.error, "Exception");
        assert_eq!(body.message.as_deref(), Some("Unknown error"));
    }

    #[test]
    fn test_syntax_error_body() {
        let body = syntax_error_body("expected value at line 1 column 1");

        assert_eq!(body.error, "SyntaxError");
        assert_eq!(
            body.message.as_deref(),
            Some("expected value at line 1 column 1")
        );
    }
}
