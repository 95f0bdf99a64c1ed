//! End-to-end processing pipeline: classify, score, extract.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::classify_with_confidence;
use crate::extract::extract;
use crate::models::document::{ClassificationResult, DocumentType, FieldMap};

/// Result of running the pipeline over one document's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Assigned document type.
    pub doc_type: DocumentType,
    /// Keyword-overlap confidence for the assigned type.
    pub confidence: f32,
    /// Extracted fields; empty for `unknown` documents.
    pub fields: FieldMap,
}

impl ProcessedDocument {
    /// The classification half of the result.
    pub fn classification(&self) -> ClassificationResult {
        ClassificationResult {
            doc_type: self.doc_type,
            confidence: self.confidence,
        }
    }
}

/// Classify raw text, score the chosen type, and extract its fields.
///
/// A straight-line pure computation: no retries, no partial results, and no
/// failure path. Unrecognized text yields `unknown` with confidence 0.0 and
/// an empty field map, which is a valid terminal result rather than an error.
/// Identical input always yields an identical result, so callers may
/// re-invoke freely.
pub fn process(text: &str) -> ProcessedDocument {
    let classification = classify_with_confidence(text);
    let fields = extract(classification.doc_type, text);

    debug!(
        "processed document: type={} confidence={:.2} fields={}",
        classification.doc_type,
        classification.confidence,
        fields.len(),
    );

    ProcessedDocument {
        doc_type: classification.doc_type,
        confidence: classification.confidence,
        fields,
    }
}
