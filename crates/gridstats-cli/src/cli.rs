use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gridstats",
    about = "Gridstats: validate and reconcile downloaded racer documents",
    version
)]
pub struct Cli {
    /// Log per-racer progress, not only warnings
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sweep an inclusive racer id range from a downloaded run tree
    Import {
        /// Root directory holding the downloaded run trees
        root: PathBuf,

        /// First racer id (inclusive)
        first_id: i64,

        /// Last racer id (inclusive)
        last_id: i64,

        /// Run label of the tree to read (`YYYY-MM-DD HH-MM-SS`)
        #[arg(long)]
        run: String,

        /// Output the final summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a single racer id and print its unified record
    Show {
        /// Root directory holding the downloaded run trees
        root: PathBuf,

        /// Racer id
        id: i64,

        /// Run label of the tree to read (`YYYY-MM-DD HH-MM-SS`)
        #[arg(long)]
        run: String,

        /// Output the record as JSON
        #[arg(long)]
        json: bool,
    },
}
