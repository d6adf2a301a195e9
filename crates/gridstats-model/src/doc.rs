//! Decoded upstream documents.
//!
//! Two independent JSON documents describe each racer: the summary and
//! the index data. Both are decoded tolerantly — unknown fields are
//! ignored and every field is optional at this layer. Presence rules are
//! semantic and belong to the validators in gridstats-ingest.
//!
//! An error payload carries a non-blank `err` and nothing else. The
//! known error codes are a closed set; an unrecognized code is fatal
//! upstream of this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value of `ok` in a successful index-data document.
pub const OK_VALUE: i64 = 1;

/// The only error the summary endpoint is known to return. Also returned
/// by the index-data endpoint for the same non-existent ids.
pub const INVALID_ID_ERROR: &str = "invalid user id";

/// Index-data error for racers who exist but hide their profile.
pub const HIDDEN_PROFILE_ERROR: &str = "permission blocked";

/// Index-data error from a backing-storage fault, observed for exactly
/// one historical id. Kept recognized so re-imports of old trees pass.
pub const REFS_STORAGE_ERROR: &str = "Cannot read property 'refs' of undefined";

/// A (seconds, microseconds) timestamp pair as delivered upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Microtime {
    #[serde(default)]
    pub sec: Option<i64>,
    #[serde(default)]
    pub usec: Option<i64>,
}

impl Microtime {
    /// Convert to an instant. `None` when either half is absent or the
    /// microsecond half is out of range; negative seconds convert (they
    /// denote pre-epoch instants, which banned accounts do carry).
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let sec = self.sec?;
        let usec = self.usec?;
        if !(0..1_000_000).contains(&usec) {
            return None;
        }
        DateTime::from_timestamp(sec, (usec as u32) * 1_000)
    }
}

/// Decoded summary document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryDoc {
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub user: Option<SummaryUser>,
    #[serde(default)]
    pub car: Option<SummaryCar>,
    #[serde(default)]
    pub is_online: Option<bool>,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub blocked: Option<i64>,
}

impl SummaryDoc {
    /// The error code, if this is an error payload. Blank strings count
    /// as no error.
    pub fn error(&self) -> Option<&str> {
        non_blank(&self.err)
    }
}

/// The `user` sub-object of a summary.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryUser {
    pub id: i64,
    #[serde(default)]
    pub login: Option<String>,
}

/// The `car` sub-object of a summary.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryCar {
    pub car: i64,
    #[serde(default)]
    pub color: Option<String>,
}

/// Decoded index-data document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexDataDoc {
    #[serde(default)]
    pub ok: Option<i64>,
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub bio: Option<IndexDataBio>,
    #[serde(default)]
    pub stats: Option<IndexDataStats>,
}

impl IndexDataDoc {
    /// The error code, if this is an error payload. Blank strings count
    /// as no error.
    pub fn error(&self) -> Option<&str> {
        non_blank(&self.err)
    }
}

/// The `bio` sub-object. Free-text fields are carried but never
/// validated; only the embedded racer id is.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexDataBio {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(default, rename = "oldText")]
    pub old_text: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "editedDate")]
    pub edited_date: Option<Microtime>,
}

/// The `stats` sub-object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexDataStats {
    #[serde(default)]
    pub registered: Option<Microtime>,
    #[serde(default, rename = "achievesCnt")]
    pub achievements: Option<i64>,
    #[serde(default, rename = "totalNumRaces")]
    pub total_races: Option<i64>,
    /// Absent for racers with no races in the base mode; that absence is
    /// meaningful and must not collapse to zero.
    #[serde(default, rename = "bestSpeed")]
    pub best_speed: Option<i64>,
    #[serde(default, rename = "ratingLevel")]
    pub rating_level: Option<i64>,
    #[serde(default, rename = "friendsCnt")]
    pub friends: Option<i64>,
    #[serde(default, rename = "vocsCnt")]
    pub vocabularies: Option<i64>,
    #[serde(default, rename = "carsCnt")]
    pub cars_owned: Option<i64>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
}
