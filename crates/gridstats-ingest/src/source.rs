//! Document access.
//!
//! The downloader collaborator writes one file per racer per source
//! under `<root>/<run label>/summary/<id>.json` and
//! `<root>/<run label>/index-data/<id>.json`. This module owns that
//! layout on the reading side and hides it behind `DocumentSource`, so
//! the engine can be driven from memory in tests.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use gridstats_model::{IndexDataDoc, SummaryDoc};
use serde::de::DeserializeOwned;

use crate::error::IngestError;

/// Timestamp format of a run label, e.g. `2020-12-02 00-20-00`.
pub const RUN_LABEL_FORMAT: &str = "%Y-%m-%d %H-%M-%S";

/// Per-racer access to the two decoded documents. Implementations also
/// return the path each document came from, for error messages.
pub trait DocumentSource {
    fn load_summary(&self, racer_id: i64) -> Result<(SummaryDoc, PathBuf), IngestError>;
    fn load_index_data(&self, racer_id: i64) -> Result<(IndexDataDoc, PathBuf), IngestError>;
}

/// The deterministic download-tree layout.
#[derive(Debug, Clone)]
pub struct RunLayout {
    root: PathBuf,
    run_label: String,
}

impl RunLayout {
    /// Build a layout for one run. Fails if the label is not a
    /// `RUN_LABEL_FORMAT` timestamp.
    pub fn new(root: impl Into<PathBuf>, run_label: &str) -> Result<RunLayout, IngestError> {
        NaiveDateTime::parse_from_str(run_label, RUN_LABEL_FORMAT).map_err(|source| {
            IngestError::RunLabel {
                label: run_label.to_string(),
                source,
            }
        })?;
        Ok(RunLayout {
            root: root.into(),
            run_label: run_label.to_string(),
        })
    }

    pub fn summary_path(&self, racer_id: i64) -> PathBuf {
        self.run_dir().join("summary").join(format!("{racer_id}.json"))
    }

    pub fn index_data_path(&self, racer_id: i64) -> PathBuf {
        self.run_dir().join("index-data").join(format!("{racer_id}.json"))
    }

    fn run_dir(&self) -> PathBuf {
        self.root.join(&self.run_label)
    }
}

/// Filesystem-backed source over a `RunLayout`.
#[derive(Debug, Clone)]
pub struct FsSource {
    layout: RunLayout,
}

impl FsSource {
    pub fn new(layout: RunLayout) -> FsSource {
        FsSource { layout }
    }
}

impl DocumentSource for FsSource {
    fn load_summary(&self, racer_id: i64) -> Result<(SummaryDoc, PathBuf), IngestError> {
        let path = self.layout.summary_path(racer_id);
        let doc = read_doc(&path)?;
        Ok((doc, path))
    }

    fn load_index_data(&self, racer_id: i64) -> Result<(IndexDataDoc, PathBuf), IngestError> {
        let path = self.layout.index_data_path(racer_id);
        let doc = read_doc(&path)?;
        Ok((doc, path))
    }
}

fn read_doc<T: DeserializeOwned>(path: &Path) -> Result<T, IngestError> {
    let raw = fs::read_to_string(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|e| IngestError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
