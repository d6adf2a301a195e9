//! Blocked status.
//!
//! The upstream delivers this as a small integer with exactly three live
//! values. Any other value, including an absent one, is a validation
//! failure — the set is closed.

use serde::{Deserialize, Serialize};

/// Account standing of a racer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blocked {
    /// Code 0: the account is active.
    Active,
    /// Code 1: banned. Banned accounts may carry a corrupt registration
    /// timestamp, which is tolerated and logged instead of rejected.
    Banned,
    /// Code 4: frozen. No validation leniency.
    Frozen,
}

impl Blocked {
    /// Resolve an upstream code. Returns `None` outside {0, 1, 4}.
    pub fn from_code(code: i64) -> Option<Blocked> {
        match code {
            0 => Some(Blocked::Active),
            1 => Some(Blocked::Banned),
            4 => Some(Blocked::Frozen),
            _ => None,
        }
    }

    /// The upstream integer code.
    pub fn code(self) -> i64 {
        match self {
            Blocked::Active => 0,
            Blocked::Banned => 1,
            Blocked::Frozen => 4,
        }
    }

    /// Whether a non-positive registration timestamp is tolerated for
    /// this standing.
    pub fn tolerates_stale_registration(self) -> bool {
        matches!(self, Blocked::Banned)
    }
}
