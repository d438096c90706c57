//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ctxlab - a CLI harness for demonstrating agent context sharing patterns.
#[derive(Parser, Debug)]
#[command(name = "ctxlab")]
#[command(
    author,
    version,
    about,
    long_about = r#"ctxlab exercises hypothetical context sharing patterns between
cooperating agents and records what happened.

Commands:
- report: run the canned checks and persist JSON artifacts under the
  results directory
- patterns: print the catalog of conceptual context flow patterns

Both commands run with no arguments and terminate after a single pass.

Examples:
    ctxlab report
    ctxlab report --results-dir artifacts/run1
    ctxlab patterns
"#
)]
pub struct Cli {
    /// Root directory for all operations.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory for all operations (defaults to the current directory).\n\n\
The results directory is resolved beneath this root unless --results-dir\n\
is given as an absolute path."
    )]
    pub root: PathBuf,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (suppress progress narration).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress progress narration on stdout. Artifacts are still written.\n\
The patterns catalog is the command's output and is always printed."
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the context sharing checks and persist JSON reports.
    #[command(
        long_about = "Run the two canned context sharing checks (file handoff, counter\n\
simulation) in a fixed order and write three JSON artifacts into the\n\
results directory, replacing whatever a previous run left there:\n\
  manual-test-marker.json\n\
  counter-simulation.json\n\
  test-summary.json\n\n\
Examples:\n\
  ctxlab report\n\
  ctxlab report --results-dir artifacts/run1\n"
    )]
    Report {
        /// Directory for generated JSON artifacts.
        #[arg(
            long,
            value_name = "PATH",
            long_help = "Directory for generated JSON artifacts.\n\n\
Defaults to .ctxlab/test-results under ROOT. A relative path is resolved\n\
against ROOT. The directory (and parents) are created if absent."
        )]
        results_dir: Option<PathBuf>,
    },

    /// Print the catalog of conceptual context flow patterns.
    #[command(
        long_about = "Print a fixed catalog of four context flow patterns (sequential\n\
file-based flow, parallel execution, context injection, agent spawning)\n\
plus a recommendation.\n\n\
Output is deterministic: the same text on every run.\n\n\
Example:\n\
  ctxlab patterns\n"
    )]
    Patterns,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command {
        Commands::Report { results_dir } => {
            crate::flows::report::run_report(&root, results_dir.as_deref(), cli.quiet)
        }

        Commands::Patterns => crate::flows::patterns::run_patterns(),
    }
}
