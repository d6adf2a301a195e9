//! The batch driver.
//!
//! Sweeps an inclusive id range in ascending order and yields one tagged
//! outcome per id. The first fatal failure ends the iteration: the
//! remaining range is not processed, because a rule violation means the
//! upstream contract changed and an operator has to look before any more
//! data is classified.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use gridstats_model::{Blocked, RacerRecord};
use tracing::info;

use crate::assemble::assemble;
use crate::error::IngestError;
use crate::index_data::validate_index_data;
use crate::reconcile::reconcile;
use crate::source::DocumentSource;
use crate::summary::validate_summary;

/// The outcome for one swept id.
#[derive(Debug, Clone, PartialEq)]
pub struct RacerOutcome {
    pub racer_id: i64,
    pub record: RacerRecord,
}

/// Running counts over a sweep, folded by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct BatchSummary {
    pub handled: u64,
    pub existing: u64,
    pub missing: u64,
}

impl BatchSummary {
    pub fn absorb(&mut self, outcome: &RacerOutcome) {
        self.handled += 1;
        if outcome.record.exists() {
            self.existing += 1;
        } else {
            self.missing += 1;
        }
    }
}

/// Iterator over one sweep. Yields `Ok` outcomes in ascending id order
/// and fuses after yielding the first error.
pub struct Batch<'a, S: DocumentSource> {
    source: &'a S,
    imported_at: DateTime<Utc>,
    next_id: i64,
    last_id: i64,
    total: u64,
    handled: u64,
    failed: bool,
}

impl<'a, S: DocumentSource> Batch<'a, S> {
    pub fn new(source: &'a S, imported_at: DateTime<Utc>, ids: RangeInclusive<i64>) -> Self {
        let (first_id, last_id) = (*ids.start(), *ids.end());
        Batch {
            source,
            imported_at,
            next_id: first_id,
            last_id,
            total: if first_id <= last_id {
                (last_id - first_id + 1) as u64
            } else {
                0
            },
            handled: 0,
            failed: false,
        }
    }
}

impl<S: DocumentSource> Iterator for Batch<'_, S> {
    type Item = Result<RacerOutcome, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next_id > self.last_id {
            return None;
        }

        let racer_id = self.next_id;
        self.next_id += 1;
        self.handled += 1;
        info!(racer_id, "handling racer ({} / {})", self.handled, self.total);

        let result = process_racer(self.source, self.imported_at, racer_id);
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

/// Run the whole pipeline for one id: load both documents, validate
/// each, reconcile their error states, and assemble the record.
pub fn process_racer<S: DocumentSource>(
    source: &S,
    imported_at: DateTime<Utc>,
    racer_id: i64,
) -> Result<RacerOutcome, IngestError> {
    let (summary, summary_path) = source.load_summary(racer_id)?;
    let (index_data, index_data_path) = source.load_index_data(racer_id)?;

    validate_summary(racer_id, &summary, &summary_path)?;
    let blocked = summary.blocked.and_then(Blocked::from_code);
    validate_index_data(racer_id, blocked, &index_data, &index_data_path)?;

    let verdict = reconcile(&summary, &index_data, &summary_path, &index_data_path)?;
    let record = assemble(
        imported_at,
        racer_id,
        verdict,
        &summary,
        &index_data,
        &summary_path,
        &index_data_path,
    )?;

    if record.exists() {
        info!(racer_id, "racer parsed from both documents");
    } else {
        info!(racer_id, "racer confirmed non-existent");
    }

    Ok(RacerOutcome { racer_id, record })
}
