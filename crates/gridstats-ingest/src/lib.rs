//! # gridstats-ingest
//!
//! The ingestion engine: validates the two decoded documents per racer,
//! reconciles their error states, assembles the unified record, and
//! drives a fail-fast sweep over an id range.
//!
//! ## Pipeline
//!
//! ```text
//! DocumentSource (filesystem, or in-memory in tests)
//!     │  SummaryDoc + IndexDataDoc, one pair per id
//!     ▼
//! validate_summary ─ validate_index_data (blocked status passed across)
//!     ▼
//! reconcile ─ the error-combination table; ambiguity is fatal
//!     ▼
//! assemble ─ RacerRecord
//!     ▼
//! Batch ─ iterator of outcomes, fused on first error
//! ```
//!
//! Every rule violation aborts the whole batch. The engine tolerates
//! exactly three irregularities, all logged at warning level: a blank
//! login, an index-data failure beside a clean summary, and a banned
//! account with a non-positive registration timestamp.

pub mod assemble;
pub mod batch;
pub mod error;
pub mod index_data;
pub mod reconcile;
pub mod source;
pub mod summary;

pub use assemble::assemble;
pub use batch::{Batch, BatchSummary, RacerOutcome, process_racer};
pub use error::IngestError;
pub use index_data::validate_index_data;
pub use reconcile::{Verdict, reconcile};
pub use source::{DocumentSource, FsSource, RUN_LABEL_FORMAT, RunLayout};
pub use summary::validate_summary;
