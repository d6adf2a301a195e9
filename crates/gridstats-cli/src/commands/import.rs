use std::path::PathBuf;

use chrono::Utc;
use gridstats_ingest::{Batch, BatchSummary};
use serde_json::json;

use crate::support;

pub fn run(root: PathBuf, first_id: i64, last_id: i64, run_label: String, json: bool) {
    let range = support::ordered_range_or_exit(first_id, last_id);
    let source = support::source_or_exit(root, &run_label);
    let imported_at = Utc::now();

    let mut summary = BatchSummary::default();
    for outcome in Batch::new(&source, imported_at, range) {
        let outcome = outcome.unwrap_or_else(|e| {
            eprintln!("error: {e}");
            std::process::exit(1);
        });
        summary.absorb(&outcome);
    }

    if json {
        let payload = json!({
            "run": run_label,
            "imported_at": imported_at,
            "first_id": first_id,
            "last_id": last_id,
            "handled": summary.handled,
            "existing": summary.existing,
            "missing": summary.missing,
        });
        let rendered = serde_json::to_string_pretty(&payload).unwrap_or_else(|e| {
            eprintln!("error: failed to render summary: {e}");
            std::process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    println!("gridstats import, run {run_label}");
    println!();
    println!("  racer ids handled: {}", summary.handled);
    println!("  existing racers: {}", summary.existing);
    println!("  confirmed non-existent: {}", summary.missing);
}
