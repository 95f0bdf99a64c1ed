//! Error types for the autodoc-core library.

use thiserror::Error;

/// Main error type for the autodoc library.
#[derive(Error, Debug)]
pub enum AutodocError {
    /// Text ingestion error.
    #[error("ingestion error: {0}")]
    Ingestion(#[from] IngestionError),

    /// Persistence error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to text ingestion from document files.
///
/// The classification/extraction core itself is total and never fails;
/// these errors belong to the file-reading edge in front of it.
#[derive(Error, Debug)]
pub enum IngestionError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The file extension is not one we ingest.
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    /// The file exceeds the configured upload limit.
    #[error("file size {size} bytes exceeds limit of {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    /// The file does not exist.
    #[error("file not found: {0}")]
    NotFound(String),

    /// I/O error while reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to document persistence.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed.
    #[error("migration failed: {0}")]
    Migration(String),
}

/// Result type for the autodoc library.
pub type Result<T> = std::result::Result<T, AutodocError>;
