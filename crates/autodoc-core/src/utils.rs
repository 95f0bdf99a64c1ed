//! File and text utilities shared by the pipeline front-ends.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Local, SecondsFormat};
use sha2::{Digest, Sha256};

use crate::error::IngestionError;
use crate::models::config::IngestionConfig;

/// SHA-256 of a file's contents, streamed in 4 KiB blocks. Hex digest.
pub fn file_sha256(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 4096];

    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Check a file's existence, extension and size against the ingestion limits.
pub fn validate_file(path: &Path, config: &IngestionConfig) -> Result<(), IngestionError> {
    if !path.exists() {
        return Err(IngestionError::NotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();

    if !config.allowed_extensions.contains(&extension) {
        return Err(IngestionError::UnsupportedType(extension));
    }

    let size = path.metadata()?.len();
    if size > config.max_file_size {
        return Err(IngestionError::FileTooLarge {
            size,
            limit: config.max_file_size,
        });
    }

    Ok(())
}

/// Sanitize a client-supplied filename for safe storage: strip any path
/// components and replace spaces and special characters with underscores.
pub fn sanitize_filename(filename: &str) -> String {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");

    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || "-_.()".contains(c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Format a timestamp as an ISO-8601 string; `None` formats the current time.
pub fn format_timestamp(dt: Option<DateTime<Local>>) -> String {
    dt.unwrap_or_else(Local::now)
        .to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Truncate text to `max_length` characters, ending in "..." when shortened.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let prefix: String = text.chars().take(max_length.saturating_sub(3)).collect();
    format!("{prefix}...")
}
