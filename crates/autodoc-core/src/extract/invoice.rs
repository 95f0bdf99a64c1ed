//! Invoice field extraction.

use crate::models::document::FieldMap;

use super::patterns::{INVOICE_DATE, INVOICE_NUMBER, INVOICE_TOTAL, INVOICE_VENDOR};

/// Extract invoice fields: `invoice_number`, `invoice_date`, `total_amount`,
/// `vendor_name`. Patterns that do not match omit their key.
pub fn extract_invoice_fields(text: &str) -> FieldMap {
    let mut fields = FieldMap::new();

    if let Some(caps) = INVOICE_NUMBER.captures(text) {
        fields.insert("invoice_number".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = INVOICE_DATE.captures(text) {
        fields.insert("invoice_date".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = INVOICE_TOTAL.captures(text) {
        fields.insert("total_amount".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = INVOICE_VENDOR.captures(text) {
        fields.insert("vendor_name".to_string(), caps[1].trim().to_string());
    }

    fields
}
