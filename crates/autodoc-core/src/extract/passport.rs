//! Passport field extraction.

use crate::models::document::FieldMap;

use super::patterns::{PASSPORT_NAME, PASSPORT_NUMBER};

/// Extract passport fields: `passport_number`, `name`.
pub fn extract_passport_fields(text: &str) -> FieldMap {
    let mut fields = FieldMap::new();

    if let Some(caps) = PASSPORT_NUMBER.captures(text) {
        fields.insert("passport_number".to_string(), caps[1].trim().to_string());
    }

    if let Some(caps) = PASSPORT_NAME.captures(text) {
        fields.insert("name".to_string(), caps[1].trim().to_string());
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_passport() {
        let text = "PASSPORT\nUnited States of America\nPassport No. 540123456\nSurname: DOE";

        let fields = extract_passport_fields(text);

        assert_eq!(fields.get("passport_number").map(String::as_str), Some("540123456"));
        assert_eq!(fields.get("name").map(String::as_str), Some("DOE"));
    }

    #[test]
    fn test_last_name_label() {
        let fields = extract_passport_fields("Last Name: Johnson");
        assert_eq!(fields.get("name").map(String::as_str), Some("Johnson"));
        assert!(!fields.contains_key("passport_number"));
    }

    #[test]
    fn test_number_requires_label() {
        // A bare number without the "passport no." label is not captured.
        let fields = extract_passport_fields("Document 540123456");
        assert!(!fields.contains_key("passport_number"));
    }
}
