mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::{
    repository_error_to_body, repository_error_to_status_code, syntax_error_body,
    validation_error_body, ErrorBody, DEFAULT_ERROR_MESSAGE, DEFAULT_ERROR_NAME, SYNTAX_ERROR_NAME,
};
pub use traits::PatientRepository;
pub use types::{Page, PageRequest, DEFAULT_PAGE_SIZE};
