use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A patient record as stored in the document table.
///
/// The four contact fields are stored exactly as the caller sent them,
/// including `None` when a field was omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    /// Always `true`; no operation changes it after creation.
    pub status: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body accepted by the create and update operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
}

/// Full overwrite of the mutable fields of an existing patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Patient {
    /// Applies an update in place. `patient_id`, `status` and `created_at`
    /// are left untouched.
    pub fn apply(&mut self, changes: &PatientChanges) {
        self.name = changes.name.clone();
        self.email = changes.email.clone();
        self.phone = changes.phone.clone();
        self.birth_date = changes.birth_date.clone();
        self.updated_at = Some(changes.updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_patient() -> Patient {
        Patient {
            patient_id: "550e8400-e29b-41d4-a716-446655440001".to_string(),
            name: Some("Maria Silva".to_string()),
            email: Some("maria@example.com".to_string()),
            phone: Some("+55 11 99999-0000".to_string()),
            birth_date: Some("1990-04-12".to_string()),
            status: true,
            created_at: DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
            updated_at: None,
        }
    }

    #[test]
    fn test_serialize_omits_missing_updated_at() {
        let json = serde_json::to_value(sample_patient()).unwrap();

        assert_eq!(json["patient_id"], "550e8400-e29b-41d4-a716-446655440001");
        assert_eq!(json["status"], true);
        assert_eq!(json["created_at"], "2024-01-15T10:30:00Z");
        assert!(json.get("updated_at").is_none());
    }

    #[test]
    fn test_apply_overwrites_mutable_fields_only() {
        let mut patient = sample_patient();
        let updated_at = DateTime::parse_from_rfc3339("2024-02-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        patient.apply(&PatientChanges {
            name: Some("Maria Souza".to_string()),
            email: None,
            phone: Some("+55 11 98888-1111".to_string()),
            birth_date: Some("1990-04-12".to_string()),
            updated_at,
        });

        assert_eq!(patient.patient_id, "550e8400-e29b-41d4-a716-446655440001");
        assert_eq!(patient.name.as_deref(), Some("Maria Souza"));
        assert_eq!(patient.email, None);
        assert!(patient.status);
        assert_eq!(patient.created_at, sample_patient().created_at);
        assert_eq!(patient.updated_at, Some(updated_at));
    }

    #[test]
    fn test_input_accepts_missing_fields() {
        let input: PatientInput = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();

        assert_eq!(input.name.as_deref(), Some("Ana"));
        assert_eq!(input.email, None);
        assert_eq!(input.phone, None);
        assert_eq!(input.birth_date, None);
    }
}
