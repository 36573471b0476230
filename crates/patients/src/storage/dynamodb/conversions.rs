//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and patients.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};

use patients_core::patient::{Patient, PatientChanges};
use patients_core::storage::RepositoryError;

// ============================================================================
// Attribute names
// ============================================================================

/// Partition key of the patients table.
pub const PATIENT_ID: &str = "patient_id";
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const BIRTH_DATE: &str = "birth_date";
pub const STATUS: &str = "status";
pub const CREATED_AT: &str = "created_at";
pub const UPDATED_AT: &str = "updated_at";

// ============================================================================
// Expressions
// ============================================================================

/// Condition shared by update and delete: the patient must already exist.
pub const EXISTS_CONDITION: &str = "attribute_exists(patient_id)";

/// Overwrites the mutable fields. `name` is a DynamoDB reserved word, so
/// every attribute goes through a placeholder.
pub const UPDATE_EXPRESSION: &str = "SET #name = :name, #birth_date = :birth_date, \
     #email = :email, #phone = :phone, #updated_at = :updated_at";

// ============================================================================
// Keys
// ============================================================================

/// Primary key of a patient.
pub fn patient_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(PATIENT_ID.to_string(), AttributeValue::S(id.to_string()))])
}

/// Scan start key for a pagination cursor.
pub fn exclusive_start_key(next: Option<&str>) -> Option<HashMap<String, AttributeValue>> {
    next.map(patient_key)
}

/// Pagination cursor from a scan's `LastEvaluatedKey`.
pub fn next_token(last_evaluated_key: Option<&HashMap<String, AttributeValue>>) -> Option<String> {
    last_evaluated_key
        .and_then(|key| key.get(PATIENT_ID))
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

// ============================================================================
// Patient conversions
// ============================================================================

/// Convert a Patient to DynamoDB item.
pub fn patient_to_item(patient: &Patient) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        PATIENT_ID.to_string(),
        AttributeValue::S(patient.patient_id.clone()),
    );
    item.insert(NAME.to_string(), optional_string(patient.name.as_deref()));
    item.insert(EMAIL.to_string(), optional_string(patient.email.as_deref()));
    item.insert(PHONE.to_string(), optional_string(patient.phone.as_deref()));
    item.insert(
        BIRTH_DATE.to_string(),
        optional_string(patient.birth_date.as_deref()),
    );
    item.insert(STATUS.to_string(), AttributeValue::Bool(patient.status));
    item.insert(
        CREATED_AT.to_string(),
        AttributeValue::S(patient.created_at.to_rfc3339()),
    );
    if let Some(updated_at) = patient.updated_at {
        item.insert(
            UPDATED_AT.to_string(),
            AttributeValue::S(updated_at.to_rfc3339()),
        );
    }

    item
}

/// Convert a DynamoDB item to Patient.
pub fn item_to_patient(item: &HashMap<String, AttributeValue>) -> Result<Patient, RepositoryError> {
    Ok(Patient {
        patient_id: get_string(item, PATIENT_ID)?,
        name: get_optional_string(item, NAME),
        email: get_optional_string(item, EMAIL),
        phone: get_optional_string(item, PHONE),
        birth_date: get_optional_string(item, BIRTH_DATE),
        status: get_bool(item, STATUS)?,
        created_at: get_datetime(item, CREATED_AT)?,
        updated_at: get_optional_string(item, UPDATED_AT)
            .map(|s| parse_datetime(UPDATED_AT, &s))
            .transpose()?,
    })
}

/// Attribute name placeholders for [`UPDATE_EXPRESSION`].
pub fn update_attribute_names() -> HashMap<String, String> {
    [NAME, BIRTH_DATE, EMAIL, PHONE, UPDATED_AT]
        .into_iter()
        .map(|attr| (format!("#{attr}"), attr.to_string()))
        .collect()
}

/// Attribute values for [`UPDATE_EXPRESSION`].
pub fn update_attribute_values(changes: &PatientChanges) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (":name".to_string(), optional_string(changes.name.as_deref())),
        (
            ":birth_date".to_string(),
            optional_string(changes.birth_date.as_deref()),
        ),
        (":email".to_string(), optional_string(changes.email.as_deref())),
        (":phone".to_string(), optional_string(changes.phone.as_deref())),
        (
            ":updated_at".to_string(),
            AttributeValue::S(changes.updated_at.to_rfc3339()),
        ),
    ])
}

// ============================================================================
// Helper functions
// ============================================================================

/// A string attribute, or an explicit null when the caller sent none.
fn optional_string(value: Option<&str>) -> AttributeValue {
    match value {
        Some(s) => AttributeValue::S(s.to_string()),
        None => AttributeValue::Null(true),
    }
}

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::Serialization(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute. Nulls read as `None`.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required boolean attribute.
fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| RepositoryError::Serialization(format!("Missing or invalid field: {}", key)))
}

/// Get a required datetime attribute (RFC 3339 format).
fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    parse_datetime(key, &s)
}

fn parse_datetime(key: &str, s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("Invalid datetime {}: {}", key, e)))
}
