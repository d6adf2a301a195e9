//! Record assembly.
//!
//! Builds the unified record from two validated documents and the
//! reconciler's verdict. Never fails for a well-formed known-error case;
//! the fallible paths here re-resolve what the validators already
//! proved, so a failure indicates the inputs were not validated first.

use std::path::Path;

use chrono::{DateTime, Utc};
use gridstats_model::{
    Blocked, IndexDataDoc, Rank, RacerProfile, RacerRecord, RacerStats, SummaryDoc,
};

use crate::error::IngestError;
use crate::reconcile::Verdict;

/// Assemble the unified record for one racer id.
pub fn assemble(
    imported_at: DateTime<Utc>,
    racer_id: i64,
    verdict: Verdict,
    summary: &SummaryDoc,
    index_data: &IndexDataDoc,
    summary_path: &Path,
    index_data_path: &Path,
) -> Result<RacerRecord, IngestError> {
    if verdict.confirmed_missing() {
        return Ok(RacerRecord::missing(imported_at, racer_id));
    }

    let stats = match verdict {
        Verdict::BothOk => Some(assemble_stats(index_data, index_data_path)?),
        _ => None,
    };

    let profile = assemble_profile(summary, stats, summary_path)?;
    Ok(RacerRecord {
        imported_at,
        racer_id,
        profile: Some(profile),
    })
}

fn assemble_profile(
    summary: &SummaryDoc,
    stats: Option<RacerStats>,
    path: &Path,
) -> Result<RacerProfile, IngestError> {
    let level = summary
        .level
        .ok_or_else(|| IngestError::field(path, "level", "missing"))?;
    let rank = Rank::from_level(level)
        .ok_or_else(|| IngestError::field(path, "level", format!("no rank with level {level}")))?;
    let blocked = summary
        .blocked
        .and_then(Blocked::from_code)
        .ok_or_else(|| IngestError::field(path, "blocked", "missing or unrecognized"))?;
    let user = summary
        .user
        .as_ref()
        .ok_or_else(|| IngestError::field(path, "user", "missing"))?;
    let login = user
        .login
        .clone()
        .ok_or_else(|| IngestError::field(path, "user.login", "missing"))?;
    let car = summary
        .car
        .as_ref()
        .ok_or_else(|| IngestError::field(path, "car", "missing"))?;
    let car_color = car
        .color
        .clone()
        .ok_or_else(|| IngestError::field(path, "car.color", "missing"))?;
    let title = summary
        .title
        .clone()
        .ok_or_else(|| IngestError::field(path, "title", "missing"))?;
    let is_online = summary
        .is_online
        .ok_or_else(|| IngestError::field(path, "is_online", "missing"))?;

    Ok(RacerProfile {
        login,
        is_online,
        rank,
        title,
        blocked,
        car_code: car.car,
        car_color,
        stats,
    })
}

fn assemble_stats(index_data: &IndexDataDoc, path: &Path) -> Result<RacerStats, IngestError> {
    let stats = index_data
        .stats
        .as_ref()
        .ok_or_else(|| IngestError::field(path, "stats", "missing"))?;
    let registered = stats
        .registered
        .and_then(|microtime| microtime.to_datetime())
        .ok_or_else(|| {
            IngestError::field(
                path,
                "stats.registered",
                "does not denote a valid instant",
            )
        })?;

    Ok(RacerStats {
        registered,
        achievements: require(stats.achievements, path, "stats.achievesCnt")?,
        total_races: require(stats.total_races, path, "stats.totalNumRaces")?,
        best_speed: stats.best_speed,
        rating_level: require(stats.rating_level, path, "stats.ratingLevel")?,
        friends: require(stats.friends, path, "stats.friendsCnt")?,
        vocabularies: require(stats.vocabularies, path, "stats.vocsCnt")?,
        cars_owned: require(stats.cars_owned, path, "stats.carsCnt")?,
    })
}

fn require(value: Option<i64>, path: &Path, field: &str) -> Result<i64, IngestError> {
    value.ok_or_else(|| IngestError::field(path, field, "missing"))
}
