use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use patients_core::patient::Operation;
use patients_core::storage::{
    repository_error_to_body, repository_error_to_status_code, syntax_error_body,
    validation_error_body, ErrorBody, RepositoryError,
};

/// Handler error carrying the status and JSON body to send back.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    body: ErrorBody,
}

impl AppError {
    /// Maps a repository failure raised while running `operation`.
    pub fn repository(error: RepositoryError, operation: Operation) -> Self {
        let code = repository_error_to_status_code(&error);
        Self {
            status: StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: repository_error_to_body(&error, operation),
        }
    }

    /// A path or query string the extractors could not decode.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: validation_error_body(message),
        }
    }

    /// A request body that is not valid JSON.
    pub fn malformed_body(error: serde_json::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: syntax_error_body(error.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                error = %self.body.error,
                detail = ?self.body.message,
                "Request failed"
            );
        } else {
            tracing::warn!(
                status = %self.status,
                error = %self.body.error,
                detail = ?self.body.message,
                "Request rejected"
            );
        }

        (self.status, Json(self.body)).into_response()
    }
}
