//! W-2 field extraction.

use crate::models::document::FieldMap;

use super::patterns::{W2_EIN, W2_SSN, W2_WAGES};

/// Extract W-2 fields: `ssn`, `wages`, `ein`. Patterns anchor on the printed
/// box labels of the form.
pub fn extract_w2_fields(text: &str) -> FieldMap {
    let mut fields = FieldMap::new();

    if let Some(caps) = W2_SSN.captures(text) {
        fields.insert("ssn".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = W2_WAGES.captures(text) {
        fields.insert("wages".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = W2_EIN.captures(text) {
        fields.insert("ein".to_string(), caps[1].trim().to_string());
    }

    fields
}
