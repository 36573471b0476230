use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::types::{Patient, PatientChanges, PatientInput};

/// Parses a create/update request body.
///
/// The body is read as JSON whatever the request's content type says.
pub fn parse_input(body: &[u8]) -> Result<PatientInput, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Builds a new patient record from caller input.
pub fn new_patient(input: PatientInput, id: Uuid, now: DateTime<Utc>) -> Patient {
    Patient {
        patient_id: id.to_string(),
        name: input.name,
        email: input.email,
        phone: input.phone,
        birth_date: input.birth_date,
        status: true,
        created_at: now,
        updated_at: None,
    }
}

/// Turns caller input into a full overwrite of the mutable fields.
pub fn changes_from_input(input: PatientInput, now: DateTime<Utc>) -> PatientChanges {
    PatientChanges {
        name: input.name,
        email: input.email,
        phone: input.phone,
        birth_date: input.birth_date,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-10T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_new_patient_sets_status_and_created_at() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440009").unwrap();
        let input = PatientInput {
            name: Some("João".to_string()),
            email: Some("joao@example.com".to_string()),
            phone: Some("1234".to_string()),
            birth_date: Some("2001-01-01".to_string()),
        };

        let patient = new_patient(input, id, now());

        assert_eq!(patient.patient_id, "550e8400-e29b-41d4-a716-446655440009");
        assert_eq!(patient.name.as_deref(), Some("João"));
        assert_eq!(patient.email.as_deref(), Some("joao@example.com"));
        assert_eq!(patient.phone.as_deref(), Some("1234"));
        assert_eq!(patient.birth_date.as_deref(), Some("2001-01-01"));
        assert!(patient.status);
        assert_eq!(patient.created_at, now());
        assert_eq!(patient.updated_at, None);
    }

    #[test]
    fn test_input_is_kept_verbatim() {
        let input = PatientInput {
            name: Some("   ".to_string()),
            email: Some("not-an-email".to_string()),
            phone: None,
            birth_date: Some("yesterday".to_string()),
        };

        let changes = changes_from_input(input, now());

        assert_eq!(changes.name.as_deref(), Some("   "));
        assert_eq!(changes.email.as_deref(), Some("not-an-email"));
        assert_eq!(changes.phone, None);
        assert_eq!(changes.birth_date.as_deref(), Some("yesterday"));
        assert_eq!(changes.updated_at, now());
    }

    #[test]
    fn test_parse_input_ignores_unknown_fields() {
        let input = parse_input(br#"{"name":"Ana","status":false,"patient_id":"x"}"#).unwrap();

        assert_eq!(input.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_parse_input_rejects_malformed_json() {
        assert!(parse_input(b"{not json").is_err());
        assert!(parse_input(b"").is_err());
    }
}
