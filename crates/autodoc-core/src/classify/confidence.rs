//! Keyword-overlap confidence scoring.
//!
//! Each document type carries a small fixed keyword list used only for
//! scoring, never for classification. The score is the fraction of keywords
//! found in the text: a static lexical-overlap ratio, not a probability.

use crate::models::document::DocumentType;

/// The scoring keyword list for a document type.
pub fn scoring_keywords(doc_type: DocumentType) -> &'static [&'static str] {
    match doc_type {
        DocumentType::PayStub => &["pay stub", "gross pay", "net pay", "deductions", "earnings"],
        DocumentType::FloodForm => &["flood hazard", "fema", "federal emergency"],
        DocumentType::W2 => &["w-2", "form w-2", "wage and tax"],
        DocumentType::Passport => &["passport", "united states of america", "date of birth"],
        DocumentType::DriverLicense => &["driver license", "driver's license", "dl number"],
        DocumentType::Invoice => &["invoice", "invoice number", "bill to", "total amount"],
        DocumentType::PurchaseOrder => &["purchase order", "po number", "quantity", "unit price"],
        DocumentType::Unknown => &[],
    }
}

/// Keyword-overlap confidence for `doc_type` over the given text, in [0, 1].
///
/// [`DocumentType::Unknown`] always scores 0.0.
pub fn score(text: &str, doc_type: DocumentType) -> f32 {
    let keywords = scoring_keywords(doc_type);
    if keywords.is_empty() {
        return 0.0;
    }

    let lower = text.to_lowercase();
    let hits = keywords.iter().filter(|kw| lower.contains(*kw)).count();

    (hits as f32 / keywords.len() as f32).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_scores_zero() {
        assert_eq!(score("INVOICE #12345", DocumentType::Unknown), 0.0);
        assert_eq!(score("", DocumentType::Unknown), 0.0);
    }

    #[test]
    fn test_score_within_unit_interval() {
        let texts = [
            "",
            "INVOICE #12345",
            "pay stub gross pay net pay deductions earnings pay stub",
            "random text",
        ];
        for text in texts {
            for doc_type in DocumentType::ALL {
                let s = score(text, doc_type);
                assert!((0.0..=1.0).contains(&s), "score {s} out of range");
            }
        }
    }

    #[test]
    fn test_pay_stub_score_exact() {
        // Matches "pay stub", "gross pay" and "deductions": 3 of 5 keywords.
        let text = "Pay Stub for Employee\nGross Pay: $3000\nDeductions: $500";
        assert_eq!(score(text, DocumentType::PayStub), 3.0 / 5.0);
    }

    #[test]
    fn test_invoice_score_exact() {
        // "invoice", "invoice number", "bill to", "total amount": all 4 present.
        let text = "INVOICE #12345\nInvoice Number: INV-001\nBill To: Customer\nTotal Amount: $1000";
        assert_eq!(score(text, DocumentType::Invoice), 1.0);
    }

    #[test]
    fn test_low_score_for_wrong_type() {
        // No purchase-order keywords in an invoice heading.
        let confidence = score("INVOICE #12345", DocumentType::PurchaseOrder);
        assert!(confidence < 0.5);
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_repeated_keywords_do_not_inflate_score() {
        let text = "invoice invoice invoice invoice invoice";
        assert_eq!(score(text, DocumentType::Invoice), 1.0 / 4.0);
    }
}
