//! Cross-source error reconciliation.
//!
//! The two documents are fetched independently and can disagree. The
//! combination of their error states decides whether the racer exists,
//! exists with partial data, or does not exist — and two of the
//! combinations are unmodeled and must abort the batch. Ambiguity never
//! defaults to "not found": misclassifying an existing racer corrupts
//! every downstream aggregate irrecoverably.

use std::path::Path;

use gridstats_model::{HIDDEN_PROFILE_ERROR, IndexDataDoc, SummaryDoc};
use tracing::{info, warn};

use crate::error::IngestError;

/// Outcome of comparing the two sources' error states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Both documents are clean. Assemble from both.
    BothOk,
    /// Summary clean, index data reports a hidden profile. The racer
    /// exists and legitimately has no index data.
    HiddenProfile,
    /// Summary clean, index data failed some other known way. The racer
    /// exists; the stats are unusable.
    IndexDataFailed,
    /// Both documents report the same known error. No such racer.
    NotFound,
}

impl Verdict {
    /// Whether both sources agree the racer does not exist.
    pub fn confirmed_missing(self) -> bool {
        matches!(self, Verdict::NotFound)
    }
}

/// Decide the combined verdict. Evaluated in priority order; the first
/// matching row wins. Both error codes have already been checked against
/// the known sets by the validators.
pub fn reconcile(
    summary: &SummaryDoc,
    index_data: &IndexDataDoc,
    summary_path: &Path,
    index_data_path: &Path,
) -> Result<Verdict, IngestError> {
    match (summary.error(), index_data.error()) {
        (None, None) => Ok(Verdict::BothOk),

        (None, Some(HIDDEN_PROFILE_ERROR)) => Ok(Verdict::HiddenProfile),

        (Some(summary_err), None) => Err(IngestError::ErrorConflict {
            summary_path: summary_path.to_path_buf(),
            index_data_path: index_data_path.to_path_buf(),
            detail: format!(
                "summary reports error {summary_err:?} but index data succeeded"
            ),
        }),

        (None, Some(index_data_err)) => {
            // Observed upstream: the index-data endpoint can fail for a
            // racer whose summary is clean and who is not even blocked.
            warn!(
                index_data_err,
                summary_path = %summary_path.display(),
                index_data_path = %index_data_path.display(),
                "index data failed for an existing racer, continuing without stats"
            );
            Ok(Verdict::IndexDataFailed)
        }

        (Some(summary_err), Some(index_data_err)) if summary_err == index_data_err => {
            info!(
                err = summary_err,
                summary_path = %summary_path.display(),
                "both sources agree the racer does not exist"
            );
            Ok(Verdict::NotFound)
        }

        (Some(summary_err), Some(index_data_err)) => Err(IngestError::ErrorConflict {
            summary_path: summary_path.to_path_buf(),
            index_data_path: index_data_path.to_path_buf(),
            detail: format!(
                "sources report different errors: summary {summary_err:?}, index data {index_data_err:?}"
            ),
        }),
    }
}
