//! The unified racer record.
//!
//! One record per swept id, whether or not the racer exists. Absence is
//! encoded structurally: a record without a profile is a confirmed
//! non-existent racer, a profile without stats is a racer whose index
//! data was unusable, and an absent best speed means no races in the
//! base mode. None of these collapse to zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::blocked::Blocked;
use crate::rank::Rank;

/// The assembled result for one racer id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacerRecord {
    /// When the import run started.
    pub imported_at: DateTime<Utc>,
    pub racer_id: i64,
    /// `None` when both sources agree the racer does not exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<RacerProfile>,
}

impl RacerRecord {
    /// Record for a confirmed non-existent racer. The id and timestamp
    /// are kept so the sweep stays complete over its range.
    pub fn missing(imported_at: DateTime<Utc>, racer_id: i64) -> RacerRecord {
        RacerRecord {
            imported_at,
            racer_id,
            profile: None,
        }
    }

    pub fn exists(&self) -> bool {
        self.profile.is_some()
    }
}

/// Validated summary-side fields of an existing racer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacerProfile {
    /// May be blank; the upstream allows it.
    pub login: String,
    pub is_online: bool,
    pub rank: Rank,
    /// The rank's canonical display name, or the mechanic override.
    pub title: String,
    pub blocked: Blocked,
    pub car_code: i64,
    pub car_color: String,
    /// `None` when the index data was unusable (hidden profile, or a
    /// tolerated index-data failure).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<RacerStats>,
}

/// Validated index-data statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacerStats {
    pub registered: DateTime<Utc>,
    pub achievements: i64,
    pub total_races: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_speed: Option<i64>,
    pub rating_level: i64,
    pub friends: i64,
    pub vocabularies: i64,
    pub cars_owned: i64,
}
