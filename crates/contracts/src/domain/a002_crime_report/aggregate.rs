use crate::shared::storage::StorageError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

const REPORT_ID_PREFIX: &str = "CR";
const REPORT_ID_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Opaque report number shown to the visitor, e.g. `CR4K9Z0QW1B`.
///
/// Random and collision tolerant: uniqueness is expected, not guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    pub fn generate() -> Self {
        let mut n = Uuid::new_v4().as_u128();
        let mut id = String::with_capacity(REPORT_ID_PREFIX.len() + REPORT_ID_LEN);
        id.push_str(REPORT_ID_PREFIX);
        for _ in 0..REPORT_ID_LEN {
            id.push(BASE36[(n % 36) as usize] as char);
            n /= 36;
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Required fields of the report form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    CrimeType,
    Area,
    Description,
}

impl ReportField {
    pub fn label(&self) -> &'static str {
        match self {
            ReportField::CrimeType => "Crime type",
            ReportField::Area => "Area",
            ReportField::Description => "Description",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Please fill in all required fields.")]
    MissingField(ReportField),
    #[error("stored reports are not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

// ============================================================================
// Aggregate
// ============================================================================

/// A visitor-submitted incident description. Non-authoritative.
///
/// Field names on the wire follow the persisted `crimeReports` layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeReport {
    /// Absent on entries written before report numbers were stored.
    #[serde(rename = "reportId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReportId>,
    pub crime_type: String,
    #[serde(rename = "area")]
    pub area_label: String,
    /// Free text from the date/time input, may be empty.
    #[serde(rename = "dateTime", default, deserialize_with = "null_as_empty")]
    pub occurred_at: String,
    pub description: String,
}

impl CrimeReport {
    pub fn new(
        crime_type: impl Into<String>,
        area_label: impl Into<String>,
        occurred_at: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            crime_type: crime_type.into(),
            area_label: area_label.into(),
            occurred_at: occurred_at.into(),
            description: description.into(),
        }
    }

    /// Presence check only; `occurred_at` is optional.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.crime_type.is_empty() {
            return Err(ReportError::MissingField(ReportField::CrimeType));
        }
        if self.area_label.is_empty() {
            return Err(ReportError::MissingField(ReportField::Area));
        }
        if self.description.is_empty() {
            return Err(ReportError::MissingField(ReportField::Description));
        }
        Ok(())
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// What the confirmation surface shows after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportReceipt {
    pub id: ReportId,
    pub submitted_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_id_shape() {
        let id = ReportId::generate();
        assert_eq!(id.as_str().len(), 11);
        assert!(id.as_str().starts_with("CR"));
        assert!(id.as_str()[2..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_validate_requires_presence() {
        assert!(CrimeReport::new("Theft", "Harmu", "", "Bag stolen").validate().is_ok());
        assert!(matches!(
            CrimeReport::new("", "Harmu", "", "Bag stolen").validate(),
            Err(ReportError::MissingField(ReportField::CrimeType))
        ));
        assert!(matches!(
            CrimeReport::new("Theft", "", "", "Bag stolen").validate(),
            Err(ReportError::MissingField(ReportField::Area))
        ));
        assert!(matches!(
            CrimeReport::new("Theft", "Harmu", "", "").validate(),
            Err(ReportError::MissingField(ReportField::Description))
        ));
    }

    #[test]
    fn test_reads_legacy_entries() {
        let raw = r#"{"crimeType":"Theft","area":"Harmu","dateTime":null,"description":"Bag stolen"}"#;
        let report: CrimeReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.id, None);
        assert_eq!(report.area_label, "Harmu");
        assert_eq!(report.occurred_at, "");
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(CrimeReport::new("Theft", "Harmu", "2024-03-15T14:02", "x")).unwrap();
        assert_eq!(value["area"], "Harmu");
        assert_eq!(value["dateTime"], "2024-03-15T14:02");
        assert!(value.get("reportId").is_none());
    }
}
