//! Summary document validation.
//!
//! Applies the domain rules to a decoded summary. An error payload is
//! valid only if it carries the single known summary error code; a
//! success payload must satisfy every field rule. The one tolerated
//! irregularity is a blank login, which is logged and accepted.

use std::path::Path;

use gridstats_model::{Blocked, Car, INVALID_ID_ERROR, MECHANIC_TITLE, Rank, SummaryDoc};
use tracing::warn;

use crate::error::IngestError;

/// Validate a decoded summary against the id it was fetched for.
pub fn validate_summary(
    racer_id: i64,
    doc: &SummaryDoc,
    path: &Path,
) -> Result<(), IngestError> {
    if let Some(err) = doc.error() {
        if err != INVALID_ID_ERROR {
            return Err(IngestError::field(
                path,
                "err",
                format!("unknown error {err:?}, the only known summary error is {INVALID_ID_ERROR:?}"),
            ));
        }
        return Ok(());
    }

    if doc.is_online.is_none() {
        return Err(IngestError::field(path, "is_online", "missing"));
    }

    let Some(level) = doc.level else {
        return Err(IngestError::field(path, "level", "missing"));
    };
    let Some(rank) = Rank::from_level(level) else {
        return Err(IngestError::field(
            path,
            "level",
            format!("no rank with level {level}"),
        ));
    };

    let title = doc.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(IngestError::field(path, "title", "missing or blank"));
    }
    if title != rank.display_name() && title != MECHANIC_TITLE {
        return Err(IngestError::field(
            path,
            "title",
            format!(
                "found {title:?}, expected {:?} or the override {MECHANIC_TITLE:?}",
                rank.display_name()
            ),
        ));
    }

    match doc.blocked {
        None => return Err(IngestError::field(path, "blocked", "missing")),
        Some(code) if Blocked::from_code(code).is_none() => {
            return Err(IngestError::field(
                path,
                "blocked",
                format!("found {code}, expected 0, 1 or 4"),
            ));
        }
        Some(_) => {}
    }

    let Some(user) = doc.user.as_ref() else {
        return Err(IngestError::field(path, "user", "missing"));
    };
    if user.id != racer_id {
        // A mismatched id means the document was filed under the wrong path.
        return Err(IngestError::field(
            path,
            "user.id",
            format!("found {}, expected {racer_id}", user.id),
        ));
    }
    match user.login.as_deref() {
        None => return Err(IngestError::field(path, "user.login", "missing")),
        Some(login) if login.trim().is_empty() => {
            warn!(racer_id, path = %path.display(), "login is blank");
        }
        Some(_) => {}
    }

    let Some(car) = doc.car.as_ref() else {
        return Err(IngestError::field(path, "car", "missing"));
    };
    if Car::from_code(car.car).is_none() {
        return Err(IngestError::field(
            path,
            "car.car",
            format!("no car with code {}", car.car),
        ));
    }
    if car.color.as_deref().map(str::trim).unwrap_or_default().is_empty() {
        return Err(IngestError::field(path, "car.color", "missing or blank"));
    }

    Ok(())
}
