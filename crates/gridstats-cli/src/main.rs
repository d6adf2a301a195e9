//! Gridstats CLI: the `gridstats` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_tracing(cli.verbose);

    match cli.command {
        Commands::Import {
            root,
            first_id,
            last_id,
            run,
            json,
        } => commands::import::run(root, first_id, last_id, run, json),

        Commands::Show {
            root,
            id,
            run,
            json,
        } => commands::show::run(root, id, run, json),
    }
}
