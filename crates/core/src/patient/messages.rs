//! User-facing (Portuguese) messages returned by the patient operations.

/// Entity name carried by repository errors about patients.
pub const PATIENT_ENTITY: &str = "Patient";

/// Error name returned whenever a patient does not exist.
pub const PATIENT_NOT_FOUND: &str = "Paciente não existe";

/// The five patient operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// Detail message for a missing patient, if the operation has one.
///
/// Get answers with the error name alone.
pub fn not_found_message(operation: Operation, id: &str) -> Option<String> {
    match operation {
        Operation::Update => Some(format!(
            "Recurso com ID {id} não existe e não pode ser atualizado"
        )),
        Operation::Delete => Some(format!(
            "Recurso com ID {id} não existe e não pôde ser excluído"
        )),
        Operation::List | Operation::Get | Operation::Create => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_message() {
        assert_eq!(
            not_found_message(Operation::Update, "abc").as_deref(),
            Some("Recurso com ID abc não existe e não pode ser atualizado")
        );
    }

    #[test]
    fn test_delete_message() {
        assert_eq!(
            not_found_message(Operation::Delete, "abc").as_deref(),
            Some("Recurso com ID abc não existe e não pôde ser excluído")
        );
    }

    #[test]
    fn test_get_has_no_message() {
        assert_eq!(not_found_message(Operation::Get, "abc"), None);
    }
}
