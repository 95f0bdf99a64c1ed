//! Flood hazard determination form field extraction.

use crate::models::document::FieldMap;

use super::patterns::{
    FLOOD_BORROWER, FLOOD_COUNTY, FLOOD_DETERMINATION_ADDRESS, FLOOD_LENDER,
};

/// The printed title of the FEMA form, stored verbatim when detected.
const FORM_TITLE: &str = "Standard Flood Hazard Determination Form";

/// Extract flood form fields: `borrower`, `lender`, `determination_address`,
/// `county`, `form_type`.
///
/// `lender` and `form_type` are presence checks that store fixed literals;
/// the county pattern is case-sensitive because county names appear as
/// uppercase runs on the form.
pub fn extract_flood_form_fields(text: &str) -> FieldMap {
    let mut fields = FieldMap::new();

    if let Some(caps) = FLOOD_BORROWER.captures(text) {
        fields.insert("borrower".to_string(), caps[1].trim().to_string());
    }

    if FLOOD_LENDER.is_match(text) {
        fields.insert("lender".to_string(), "The Federal Savings Bank".to_string());
    }

    if let Some(caps) = FLOOD_DETERMINATION_ADDRESS.captures(text) {
        fields.insert("determination_address".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = FLOOD_COUNTY.captures(text) {
        fields.insert("county".to_string(), caps[1].trim().to_string());
    }

    if text.to_lowercase().contains("standard flood hazard determination form") {
        fields.insert("form_type".to_string(), FORM_TITLE.to_string());
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_flood_form() {
        let text = "STANDARD FLOOD HAZARD DETERMINATION FORM\n\
                    Borrower: KIRSHENBAUM, AHARON\n\
                    Lender: The Federal Savings Bank\n\
                    Address Determination Address: 12 SHORE RD, TOMS RIVER, NJ\n\
                    OCEAN COUNTY";

        let fields = extract_flood_form_fields(text);

        assert_eq!(fields.get("borrower").map(String::as_str), Some("KIRSHENBAUM, AHARON"));
        assert_eq!(fields.get("lender").map(String::as_str), Some("The Federal Savings Bank"));
        assert_eq!(
            fields.get("determination_address").map(String::as_str),
            Some("12 SHORE RD, TOMS RIVER, NJ"),
        );
        assert_eq!(fields.get("county").map(String::as_str), Some("OCEAN COUNTY"));
        assert_eq!(fields.get("form_type").map(String::as_str), Some(FORM_TITLE));
    }

    #[test]
    fn test_county_is_case_sensitive() {
        let fields = extract_flood_form_fields("ocean county");
        assert!(!fields.contains_key("county"));

        let fields = extract_flood_form_fields("OCEAN COUNTY");
        assert_eq!(fields.get("county").map(String::as_str), Some("OCEAN COUNTY"));
    }

    #[test]
    fn test_lender_is_presence_check() {
        let fields = extract_flood_form_fields("loan serviced by the federal savings bank");
        assert_eq!(fields.get("lender").map(String::as_str), Some("The Federal Savings Bank"));
    }

    #[test]
    fn test_missing_fields_are_omitted() {
        let fields = extract_flood_form_fields("FEMA bulletin");
        assert!(!fields.contains_key("borrower"));
        assert!(!fields.contains_key("lender"));
        assert!(!fields.contains_key("form_type"));
    }
}
