//! The ingestion error type.
//!
//! Two classes only. Structural errors (`Read`, `Malformed`) mean a
//! document could not be obtained or decoded at all. Semantic errors
//! (`Field`, `ErrorConflict`, `RunLabel`) mean decoded data violates a
//! domain rule. Every variant aborts the batch; there is no local
//! recovery. The tolerated irregularities (blank login, index-data
//! failure beside a clean summary, banned account with a stale
//! registration timestamp) are warnings, not errors, and never appear
//! here.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A document file could not be read.
    #[error("{}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document file was not JSON of the expected shape.
    #[error("{}: malformed JSON: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    /// A decoded field violates a domain rule. The message names the
    /// found value and, where one exists, the expected value.
    #[error("{}: {field}: {message}", .path.display())]
    Field {
        path: PathBuf,
        field: String,
        message: String,
    },

    /// The two sources report an error combination outside the known
    /// table. Never resolved silently; an operator has to look.
    #[error(
        "summary {} / index-data {}: {detail}",
        .summary_path.display(),
        .index_data_path.display()
    )]
    ErrorConflict {
        summary_path: PathBuf,
        index_data_path: PathBuf,
        detail: String,
    },

    /// A run label that does not denote a download-tree timestamp.
    #[error("invalid run label {label:?}: {source}")]
    RunLabel {
        label: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl IngestError {
    pub(crate) fn field(
        path: &Path,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> IngestError {
        IngestError::Field {
            path: path.to_path_buf(),
            field: field.into(),
            message: message.into(),
        }
    }
}
