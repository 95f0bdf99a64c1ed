//! Driver license field extraction.

use crate::models::document::FieldMap;

use super::patterns::{DL_DOB, DL_NAME, DL_NUMBER};

/// Extract driver license fields: `name`, `dl_number`, `DOB`.
///
/// The name heuristic only works on specimen documents that print a literal
/// "sample" marker before the holder's name; real layouts omit the key.
pub fn extract_driver_license_fields(text: &str) -> FieldMap {
    let mut fields = FieldMap::new();

    if let Some(caps) = DL_NAME.captures(text) {
        fields.insert("name".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = DL_NUMBER.captures(text) {
        fields.insert("dl_number".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = DL_DOB.captures(text) {
        fields.insert("DOB".to_string(), caps[1].trim().to_string());
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_sample_license() {
        let text = "DRIVER LICENSE\nSAMPLE JELANI\nDLN 0123456789\nDOB 01/05/1990";

        let fields = extract_driver_license_fields(text);

        assert_eq!(fields.get("name").map(String::as_str), Some("JELANI"));
        assert_eq!(fields.get("dl_number").map(String::as_str), Some("0123456789"));
        assert_eq!(fields.get("DOB").map(String::as_str), Some("01/05/1990"));
    }

    #[test]
    fn test_name_requires_sample_marker() {
        let fields = extract_driver_license_fields("DRIVER LICENSE\nJELANI\nDL A99");
        assert!(!fields.contains_key("name"));
        assert_eq!(fields.get("dl_number").map(String::as_str), Some("A99"));
    }

    #[test]
    fn test_dob_requires_full_date_shape() {
        let fields = extract_driver_license_fields("DOB 1/5/90");
        assert!(!fields.contains_key("DOB"));
    }
}
