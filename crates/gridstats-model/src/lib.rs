//! # gridstats-model
//!
//! Domain model for gridstats: closed enumerations (rank ladder, car
//! catalog, blocked status), the decoded shapes of the two upstream
//! documents, and the unified racer record.
//!
//! This crate holds types and total lookups only. Semantic validation,
//! error reconciliation, and assembly live in `gridstats-ingest`.
//!
//! ## Data model
//!
//! ```text
//! SummaryDoc ─┐
//!             ├─ validate / reconcile / assemble (gridstats-ingest)
//! IndexDataDoc┘            │
//!                          ▼
//!                    RacerRecord
//!                      └─ RacerProfile (absent: confirmed non-existent)
//!                           └─ RacerStats (absent: no usable index data)
//! ```

pub mod blocked;
pub mod car;
pub mod doc;
pub mod rank;
pub mod record;

pub use blocked::Blocked;
pub use car::{CATALOG, Car};
pub use doc::{
    HIDDEN_PROFILE_ERROR, INVALID_ID_ERROR, IndexDataBio, IndexDataDoc, IndexDataStats, Microtime,
    OK_VALUE, REFS_STORAGE_ERROR, SummaryCar, SummaryDoc, SummaryUser,
};
pub use rank::{MECHANIC_TITLE, Rank};
pub use record::{RacerProfile, RacerRecord, RacerStats};
