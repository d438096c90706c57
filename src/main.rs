//! ctxlab - A CLI harness for agent context sharing patterns
//!
//! ctxlab provides:
//! - A report runner that exercises two canned context sharing checks and
//!   persists JSON artifacts for manual follow-up
//! - A printer for the catalog of conceptual context flow patterns

use anyhow::Result;
use clap::Parser;

mod checks;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
