//! The rank ladder.
//!
//! Ranks form a closed, strictly increasing ladder keyed by a numeric
//! level. Every level that appears in live data must resolve; lookup by
//! level is total over the declared set and fails — it does not default —
//! on anything else.

use serde::{Deserialize, Serialize};

/// Title that may replace any rank's canonical display name.
///
/// Site staff carry this title regardless of their actual rank, so a
/// summary whose title equals neither the canonical rank name nor this
/// constant is inconsistent — but this constant alone never is.
pub const MECHANIC_TITLE: &str = "Клавомеханик";

/// A rung on the rank ladder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    Novice,
    Amateur,
    Cabman,
    Pro,
    Racer,
    Maniac,
    Superman,
    Cyberracer,
    Extracyber,
}

impl Rank {
    /// All ranks in ascending level order.
    pub const LADDER: [Rank; 9] = [
        Rank::Novice,
        Rank::Amateur,
        Rank::Cabman,
        Rank::Pro,
        Rank::Racer,
        Rank::Maniac,
        Rank::Superman,
        Rank::Cyberracer,
        Rank::Extracyber,
    ];

    /// Resolve a numeric level. Returns `None` for undeclared levels.
    pub fn from_level(level: i64) -> Option<Rank> {
        match level {
            1 => Some(Rank::Novice),
            2 => Some(Rank::Amateur),
            3 => Some(Rank::Cabman),
            4 => Some(Rank::Pro),
            5 => Some(Rank::Racer),
            6 => Some(Rank::Maniac),
            7 => Some(Rank::Superman),
            8 => Some(Rank::Cyberracer),
            9 => Some(Rank::Extracyber),
            _ => None,
        }
    }

    /// The numeric level of this rank.
    pub fn level(self) -> i64 {
        match self {
            Rank::Novice => 1,
            Rank::Amateur => 2,
            Rank::Cabman => 3,
            Rank::Pro => 4,
            Rank::Racer => 5,
            Rank::Maniac => 6,
            Rank::Superman => 7,
            Rank::Cyberracer => 8,
            Rank::Extracyber => 9,
        }
    }

    /// Canonical display name, as delivered by the upstream service.
    pub fn display_name(self) -> &'static str {
        match self {
            Rank::Novice => "Новичок",
            Rank::Amateur => "Любитель",
            Rank::Cabman => "Таксист",
            Rank::Pro => "Профи",
            Rank::Racer => "Гонщик",
            Rank::Maniac => "Маньяк",
            Rank::Superman => "Супермен",
            Rank::Cyberracer => "Кибергонщик",
            Rank::Extracyber => "Экстракибер",
        }
    }

    /// Display color. Carried for record consumers; no validation rule
    /// depends on it.
    pub fn color(self) -> &'static str {
        match self {
            Rank::Novice => "#909090",
            Rank::Amateur => "#33CC33",
            Rank::Cabman => "#00CCCC",
            Rank::Pro => "#3366FF",
            Rank::Racer => "#9933FF",
            Rank::Maniac => "#CC00CC",
            Rank::Superman => "#FF3333",
            Rank::Cyberracer => "#FF9900",
            Rank::Extracyber => "#FFCC00",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_level_round_trips() {
        for rank in Rank::LADDER {
            assert_eq!(Rank::from_level(rank.level()), Some(rank));
        }
    }

    #[test]
    fn ladder_levels_strictly_increase() {
        for pair in Rank::LADDER.windows(2) {
            assert!(pair[0].level() < pair[1].level());
        }
    }

    #[test]
    fn undeclared_levels_fail() {
        assert_eq!(Rank::from_level(0), None);
        assert_eq!(Rank::from_level(10), None);
        assert_eq!(Rank::from_level(-1), None);
    }

    #[test]
    fn mechanic_title_is_not_a_canonical_name() {
        assert!(
            Rank::LADDER
                .iter()
                .all(|rank| rank.display_name() != MECHANIC_TITLE)
        );
    }
}
