//! Index-data document validation.
//!
//! Not self-sufficient: the blocked status learned from the summary is
//! passed in explicitly, because banned accounts (and only banned
//! accounts) may carry a non-positive registration timestamp. That case
//! is logged and accepted; every other rule violation is fatal.

use std::path::Path;

use gridstats_model::{
    Blocked, Car, HIDDEN_PROFILE_ERROR, INVALID_ID_ERROR, IndexDataDoc, OK_VALUE,
    REFS_STORAGE_ERROR,
};
use tracing::warn;

use crate::error::IngestError;

const KNOWN_ERRORS: [&str; 3] = [INVALID_ID_ERROR, HIDDEN_PROFILE_ERROR, REFS_STORAGE_ERROR];

/// Validate a decoded index-data document against the id it was fetched
/// for and the blocked status its summary reported.
pub fn validate_index_data(
    racer_id: i64,
    blocked: Option<Blocked>,
    doc: &IndexDataDoc,
    path: &Path,
) -> Result<(), IngestError> {
    if let Some(err) = doc.error() {
        if !KNOWN_ERRORS.contains(&err) {
            return Err(IngestError::field(
                path,
                "err",
                format!("unknown error {err:?}"),
            ));
        }
        return Ok(());
    }

    if doc.ok != Some(OK_VALUE) {
        return Err(IngestError::field(
            path,
            "ok",
            format!("found {:?}, expected {OK_VALUE}", doc.ok),
        ));
    }

    let Some(bio) = doc.bio.as_ref() else {
        return Err(IngestError::field(path, "bio", "missing"));
    };
    if bio.user_id != racer_id {
        return Err(IngestError::field(
            path,
            "bio.userId",
            format!("found {}, expected {racer_id}", bio.user_id),
        ));
    }
    // bio free text (text, oldText, editedDate) is deliberately unchecked.

    let Some(stats) = doc.stats.as_ref() else {
        return Err(IngestError::field(path, "stats", "missing"));
    };

    let Some(registered) = stats.registered else {
        return Err(IngestError::field(path, "stats.registered", "missing"));
    };
    let Some(sec) = registered.sec else {
        return Err(IngestError::field(path, "stats.registered.sec", "missing"));
    };
    if sec <= 0 {
        if blocked.is_some_and(Blocked::tolerates_stale_registration) {
            warn!(
                racer_id,
                sec,
                path = %path.display(),
                "banned racer carries a non-positive registration timestamp"
            );
        } else {
            return Err(IngestError::field(
                path,
                "stats.registered.sec",
                format!("found {sec}, expected a positive value for a non-banned racer"),
            ));
        }
    }
    match registered.usec {
        None => {
            return Err(IngestError::field(path, "stats.registered.usec", "missing"));
        }
        Some(usec) if usec < 0 => {
            return Err(IngestError::field(
                path,
                "stats.registered.usec",
                format!("found {usec}, expected a non-negative value"),
            ));
        }
        Some(_) => {}
    }

    check_count(path, "stats.achievesCnt", stats.achievements, 0)?;
    check_count(path, "stats.totalNumRaces", stats.total_races, 0)?;

    // Absent best speed means no races in the base mode; present must be positive.
    if let Some(best_speed) = stats.best_speed
        && best_speed <= 0
    {
        return Err(IngestError::field(
            path,
            "stats.bestSpeed",
            format!("found {best_speed}, expected a positive value or null"),
        ));
    }

    check_count(path, "stats.ratingLevel", stats.rating_level, 1)?;
    check_count(path, "stats.friendsCnt", stats.friends, 0)?;
    check_count(path, "stats.vocsCnt", stats.vocabularies, 0)?;

    match stats.cars_owned {
        None => return Err(IngestError::field(path, "stats.carsCnt", "missing")),
        Some(cars_owned) if !(1..=Car::COUNT).contains(&cars_owned) => {
            return Err(IngestError::field(
                path,
                "stats.carsCnt",
                format!("found {cars_owned}, expected between 1 and {}", Car::COUNT),
            ));
        }
        Some(_) => {}
    }

    Ok(())
}

fn check_count(
    path: &Path,
    field: &str,
    value: Option<i64>,
    min: i64,
) -> Result<(), IngestError> {
    match value {
        None => Err(IngestError::field(path, field, "missing")),
        Some(found) if found < min => Err(IngestError::field(
            path,
            field,
            format!("found {found}, expected at least {min}"),
        )),
        Some(_) => Ok(()),
    }
}
