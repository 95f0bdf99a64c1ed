//! Core library for automatic document classification and field extraction.
//!
//! This crate provides:
//! - Text ingestion from PDFs, with a degradable OCR slot for scans
//! - Rule-based document type classification with confidence scoring
//! - Per-type structured field extraction into sparse field maps
//! - SQLite persistence of classification results and extracted fields

pub mod classify;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod utils;
pub mod validate;

pub use error::{AutodocError, IngestionError, Result, StorageError};
pub use models::config::AutodocConfig;
pub use models::document::{ClassificationResult, DocumentType, FieldMap};

pub use classify::{classify, classify_with_confidence, score};
pub use extract::extract;
pub use ingest::extract_text;
pub use pipeline::{process, ProcessedDocument};
pub use storage::{DocumentRecord, DocumentStore};
pub use validate::validate;
