//! Purchase order field extraction.

use crate::models::document::FieldMap;

use super::patterns::{PO_BUYER, PO_DATE, PO_NUMBER, PO_TOTAL};

/// Extract purchase order fields: `po_number`, `po_date`, `total_amount`,
/// `buyer_name`. Same pattern shapes as the invoice extractor, with
/// PO-specific labels.
pub fn extract_po_fields(text: &str) -> FieldMap {
    let mut fields = FieldMap::new();

    if let Some(caps) = PO_NUMBER.captures(text) {
        fields.insert("po_number".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = PO_DATE.captures(text) {
        fields.insert("po_date".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = PO_TOTAL.captures(text) {
        fields.insert("total_amount".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = PO_BUYER.captures(text) {
        fields.insert("buyer_name".to_string(), caps[1].trim().to_string());
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_full_purchase_order() {
        let text = "PO Number: PO-98765\n\
                    PO Date: 2024-02-01\n\
                    Buyer: Globex Corp\n\
                    Total Amount: $5,000";

        let fields = extract_po_fields(text);

        assert_eq!(fields.get("po_number").map(String::as_str), Some("PO-98765"));
        assert_eq!(fields.get("po_date").map(String::as_str), Some("2024-02-01"));
        assert_eq!(fields.get("total_amount").map(String::as_str), Some("$5,000"));
        assert_eq!(fields.get("buyer_name").map(String::as_str), Some("Globex Corp"));
    }

    #[test]
    fn test_purchase_order_no_label() {
        let fields = extract_po_fields("Purchase Order No. 4411\nAmount: 250.00");
        assert_eq!(fields.get("po_number").map(String::as_str), Some("4411"));
        assert_eq!(fields.get("total_amount").map(String::as_str), Some("250.00"));
    }

    #[test]
    fn test_unmatched_patterns_are_omitted() {
        let fields = extract_po_fields("PO Number: PO-7");
        assert_eq!(fields.get("po_number").map(String::as_str), Some("PO-7"));
        assert!(!fields.contains_key("po_date"));
        assert!(!fields.contains_key("total_amount"));
        assert!(!fields.contains_key("buyer_name"));
    }
}
