//! Advisory per-type document validation.
//!
//! Validation checks a classified document's text for structural red flags.
//! Issues are advisory: a non-empty list never aborts processing, it is
//! surfaced to the caller alongside the extraction result.

use tracing::warn;

use crate::models::document::DocumentType;

/// Documents shorter than this are suspicious regardless of type.
const MIN_TEXT_LENGTH: usize = 50;

/// Validate a document's text against the expectations for its type.
///
/// Returns a list of human-readable issues; empty means the document looks
/// plausible. Types without specific checks only get the length check.
pub fn validate(doc_type: DocumentType, text: &str) -> Vec<String> {
    let mut issues = Vec::new();

    if text.trim().len() < MIN_TEXT_LENGTH {
        issues.push(format!("{doc_type} text too short"));
    }

    let lower = text.to_lowercase();

    match doc_type {
        DocumentType::Invoice => {
            for keyword in ["invoice", "total", "amount"] {
                if !lower.contains(keyword) {
                    issues.push(format!("missing required keyword: {keyword}"));
                }
            }
        }
        DocumentType::PurchaseOrder => {
            let found = ["purchase order", "po", "quantity"]
                .iter()
                .any(|kw| lower.contains(kw));
            if !found {
                issues.push("missing purchase order keywords".to_string());
            }
        }
        DocumentType::PayStub => {
            let hits = ["pay", "earnings", "deductions", "gross"]
                .iter()
                .filter(|kw| lower.contains(*kw))
                .count();
            if hits < 2 {
                issues.push("insufficient pay stub keywords found".to_string());
            }
        }
        _ => {}
    }

    for issue in &issues {
        warn!("validation issue: {issue}");
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_invoice() {
        let text = "INVOICE #12345\nTotal Amount: $1000\nInvoice Date: 2024-01-15";
        assert_eq!(validate(DocumentType::Invoice, text), Vec::<String>::new());
    }

    #[test]
    fn test_short_invoice_is_flagged() {
        let issues = validate(DocumentType::Invoice, "Short text");
        assert!(issues.iter().any(|i| i.contains("too short")));
        assert!(issues.iter().any(|i| i.contains("invoice")));
    }

    #[test]
    fn test_valid_purchase_order() {
        let text = "Purchase Order PO-12345\nQuantity: 100\nUnit Price: $50";
        assert_eq!(validate(DocumentType::PurchaseOrder, text), Vec::<String>::new());
    }

    #[test]
    fn test_valid_pay_stub() {
        let text = "Employee Pay Stub\nGross Pay: $3000\nEarnings YTD: $36000\nDeductions: $500";
        assert_eq!(validate(DocumentType::PayStub, text), Vec::<String>::new());
    }

    #[test]
    fn test_pay_stub_needs_two_keywords() {
        let text = "statement of pay issued to the account holder for services";
        let issues = validate(DocumentType::PayStub, text);
        assert!(issues.iter().any(|i| i.contains("insufficient")));
    }

    #[test]
    fn test_unknown_only_gets_length_check() {
        let long_text = "x".repeat(80);
        assert!(validate(DocumentType::Unknown, &long_text).is_empty());
        assert!(!validate(DocumentType::Unknown, "tiny").is_empty());
    }
}
