//! Document type taxonomy and classification results.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sparse map of extracted field name to value.
///
/// Absent fields are omitted entirely; extractors never insert empty or
/// placeholder values. A `BTreeMap` keeps iteration and serialization
/// deterministic.
pub type FieldMap = BTreeMap<String, String>;

/// Closed set of document categories the classifier can assign.
///
/// Adding a category means adding a classification rule and an extractor
/// arm; existing variants are never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Vendor invoice.
    Invoice,
    /// Purchase order.
    PurchaseOrder,
    /// Driver license (sample-document layouts).
    DriverLicense,
    /// US passport.
    Passport,
    /// IRS form W-2.
    W2,
    /// Payroll stub.
    PayStub,
    /// FEMA standard flood hazard determination form.
    FloodForm,
    /// No rule matched.
    Unknown,
}

impl DocumentType {
    /// All classifiable types, in classifier priority order.
    pub const ALL: [DocumentType; 8] = [
        DocumentType::PayStub,
        DocumentType::FloodForm,
        DocumentType::W2,
        DocumentType::Passport,
        DocumentType::DriverLicense,
        DocumentType::Invoice,
        DocumentType::PurchaseOrder,
        DocumentType::Unknown,
    ];

    /// The snake_case label used in storage and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "invoice",
            DocumentType::PurchaseOrder => "purchase_order",
            DocumentType::DriverLicense => "driver_license",
            DocumentType::Passport => "passport",
            DocumentType::W2 => "w2",
            DocumentType::PayStub => "pay_stub",
            DocumentType::FloodForm => "flood_form",
            DocumentType::Unknown => "unknown",
        }
    }

    /// Parse a snake_case label back into a type.
    pub fn from_str(label: &str) -> Option<Self> {
        match label {
            "invoice" => Some(DocumentType::Invoice),
            "purchase_order" => Some(DocumentType::PurchaseOrder),
            "driver_license" => Some(DocumentType::DriverLicense),
            "passport" => Some(DocumentType::Passport),
            "w2" => Some(DocumentType::W2),
            "pay_stub" => Some(DocumentType::PayStub),
            "flood_form" => Some(DocumentType::FloodForm),
            "unknown" => Some(DocumentType::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification outcome for a single document.
///
/// Created once per document and never mutated afterwards. The confidence is
/// a lexical keyword-overlap ratio in [0, 1], not a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Assigned document type.
    pub doc_type: DocumentType,
    /// Keyword-overlap confidence for the assigned type.
    pub confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for doc_type in DocumentType::ALL {
            assert_eq!(DocumentType::from_str(doc_type.as_str()), Some(doc_type));
        }
        assert_eq!(DocumentType::from_str("receipt"), None);
    }

    #[test]
    fn test_serde_labels_match_as_str() {
        for doc_type in DocumentType::ALL {
            let json = serde_json::to_string(&doc_type).unwrap();
            assert_eq!(json, format!("\"{}\"", doc_type.as_str()));
        }
    }
}
