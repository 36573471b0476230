mod messages;
mod operations;
mod types;

pub use messages::{not_found_message, Operation, PATIENT_ENTITY, PATIENT_NOT_FOUND};
pub use operations::{changes_from_input, new_patient, parse_input};
pub use types::{Patient, PatientChanges, PatientInput};
