//! Document text ingestion.
//!
//! Extracts raw text from PDF files via their embedded text layer, with an
//! OCR slot for scanned input. No OCR backend ships with this build, so the
//! slot degrades to an empty string instead of failing the pipeline; the
//! classifier then reports such documents as `unknown`.

use std::fs;
use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

use crate::error::IngestionError;

/// Image extensions routed to the OCR slot.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff"];

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestionError>;

/// Extract raw text from a document file.
///
/// PDFs use the embedded text layer; image files go to the OCR slot. Any
/// other extension is an [`IngestionError::UnsupportedType`].
pub fn extract_text(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension == "pdf" {
        return extract_pdf_text(path);
    }

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return Ok(ocr_image_text(path));
    }

    Err(IngestionError::UnsupportedType(format!(".{extension}")))
}

/// Extract the embedded text layer of a PDF, falling back to the OCR slot
/// for PDFs with no usable text.
fn extract_pdf_text(path: &Path) -> Result<String> {
    let data = fs::read(path)?;

    let document = Document::load_mem(&data).map_err(|e| IngestionError::Parse(e.to_string()))?;
    if document.is_encrypted() {
        return Err(IngestionError::Encrypted);
    }
    if document.get_pages().is_empty() {
        return Err(IngestionError::NoPages);
    }

    match pdf_extract::extract_text_from_mem(&data) {
        Ok(text) if !text.trim().is_empty() => {
            debug!("extracted {} chars of embedded text from {}", text.len(), path.display());
            Ok(text.trim().to_string())
        }
        Ok(_) => {
            warn!("{} has no embedded text, trying OCR", path.display());
            Ok(ocr_pdf_pages(path))
        }
        Err(e) => {
            warn!("embedded text extraction failed for {}: {e}", path.display());
            Ok(ocr_pdf_pages(path))
        }
    }
}

/// OCR slot for image-only PDFs. Degrades to empty text when no backend is
/// available rather than failing ingestion.
fn ocr_pdf_pages(path: &Path) -> String {
    warn!("no OCR backend available for {}, returning empty text", path.display());
    String::new()
}

/// OCR slot for scanned image files. Same degradation contract as
/// [`ocr_pdf_pages`].
fn ocr_image_text(path: &Path) -> String {
    warn!("no OCR backend available for {}, returning empty text", path.display());
    String::new()
}
