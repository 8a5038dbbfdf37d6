//! Error types for the termcal ecosystem.

use thiserror::Error;

/// Errors that can occur while building or exporting worklist calendars.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Malformed section data in section {section_index} ({field}): {reason}")]
    MalformedSection {
        field: &'static str,
        section_index: usize,
        reason: String,
    },

    #[error("Section JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for termcal operations.
pub type ExportResult<T> = Result<T, ExportError>;
