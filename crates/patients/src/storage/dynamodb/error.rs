//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `patients_core::storage`.
//! Failed existence conditions become `NotFound`; everything else keeps the
//! status code, error code and message DynamoDB reported.

use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;

use patients_core::patient::PATIENT_ENTITY;
use patients_core::storage::RepositoryError;

/// Map any SDK error to a pass-through `RepositoryError::Store`.
pub fn map_sdk_error<E>(err: SdkError<E, HttpResponse>) -> RepositoryError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let status = err.raw_response().map(|response| response.status().as_u16());
    let name = err
        .code()
        .map(str::to_string)
        .or_else(|| client_failure_name(&err).map(str::to_string));
    let message = err
        .message()
        .map(str::to_string)
        .or_else(|| Some(DisplayErrorContext(&err).to_string()));

    RepositoryError::Store {
        status,
        name,
        message,
    }
}

/// Map an UpdateItem SDK error, turning a failed existence check into `NotFound`.
pub fn map_update_item_error(
    err: SdkError<UpdateItemError, HttpResponse>,
    id: &str,
) -> RepositoryError {
    if err
        .as_service_error()
        .is_some_and(UpdateItemError::is_conditional_check_failed_exception)
    {
        return not_found(id);
    }
    map_sdk_error(err)
}

/// Map a DeleteItem SDK error, turning a failed existence check into `NotFound`.
pub fn map_delete_item_error(
    err: SdkError<DeleteItemError, HttpResponse>,
    id: &str,
) -> RepositoryError {
    if err
        .as_service_error()
        .is_some_and(DeleteItemError::is_conditional_check_failed_exception)
    {
        return not_found(id);
    }
    map_sdk_error(err)
}

fn not_found(id: &str) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: PATIENT_ENTITY,
        id: id.to_string(),
    }
}

/// Name for failures that never reached DynamoDB.
fn client_failure_name<E>(err: &SdkError<E, HttpResponse>) -> Option<&'static str> {
    match err {
        SdkError::ConstructionFailure(_) => Some("ConstructionFailure"),
        SdkError::TimeoutError(_) => Some("TimeoutError"),
        SdkError::DispatchFailure(_) => Some("DispatchFailure"),
        SdkError::ResponseError(_) => Some("ResponseError"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::operation::scan::ScanError;

    use super::*;

    #[test]
    fn test_timeout_maps_to_store_error_without_status() {
        let err = SdkError::<ScanError, HttpResponse>::timeout_error("operation timed out");

        match map_sdk_error(err) {
            RepositoryError::Store {
                status,
                name,
                message,
            } => {
                assert_eq!(status, None);
                assert_eq!(name.as_deref(), Some("TimeoutError"));
                assert!(message.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_construction_failure_on_update_is_not_not_found() {
        let err = SdkError::<UpdateItemError, HttpResponse>::construction_failure("missing key");

        let mapped = map_update_item_error(err, "p-1");

        assert!(matches!(
            mapped,
            RepositoryError::Store { ref name, .. } if name.as_deref() == Some("ConstructionFailure")
        ));
    }
}
