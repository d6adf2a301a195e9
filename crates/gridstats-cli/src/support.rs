use gridstats_ingest::{FsSource, RunLayout};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. Warnings always show; `--verbose`
/// raises the floor to per-racer progress. `RUST_LOG` overrides both.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn source_or_exit(root: PathBuf, run_label: &str) -> FsSource {
    let layout = RunLayout::new(root, run_label).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    });
    FsSource::new(layout)
}

pub fn ordered_range_or_exit(first_id: i64, last_id: i64) -> std::ops::RangeInclusive<i64> {
    if first_id > last_id {
        eprintln!("error: first id {first_id} is greater than last id {last_id}");
        std::process::exit(1);
    }
    first_id..=last_id
}
