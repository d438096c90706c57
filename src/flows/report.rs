//! Report flow - Run the checks and persist the run summary
//!
//! Steps:
//! 1. File handoff check (writes the manual test marker)
//! 2. Counter simulation check (writes the counter state)
//! 3. Summary generation (writes the aggregate record)
//!
//! The sequence is strictly linear: no branching, no retries.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::checks::counter::run_counter_check;
use crate::checks::handoff::run_handoff_check;
use crate::core::clock::iso_now;
use crate::core::model::{CheckOutcome, RunSummary};
use crate::core::paths::{display_path, resolve_results_dir};
use crate::core::store::{ensure_results_dir, write_json, SUMMARY_FILE};

/// One report run over a resolved results directory
pub struct Reporter {
    results_dir: PathBuf,
    root: PathBuf,
    quiet: bool,
}

impl Reporter {
    /// Create a reporter, creating the results directory if absent
    pub fn new(root: &Path, results_dir: Option<&Path>, quiet: bool) -> Result<Self> {
        let dir = resolve_results_dir(root, results_dir);
        ensure_results_dir(&dir)?;
        Ok(Self {
            results_dir: dir,
            root: root.to_path_buf(),
            quiet,
        })
    }

    /// Results directory this run writes into
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Run both checks in order and collect their outcomes
    pub fn run_checks(&self) -> Result<Vec<CheckOutcome>> {
        let mut results = Vec::new();
        results.push(run_handoff_check(
            &self.results_dir,
            &self.root,
            self.quiet,
        )?);
        results.push(run_counter_check(&self.results_dir, self.quiet)?);
        Ok(results)
    }

    /// Build the run summary from collected outcomes, persist it, return it
    pub fn generate_summary(&self, results: Vec<CheckOutcome>) -> Result<RunSummary> {
        let summary = RunSummary::new(iso_now(), results);
        let summary_path = write_json(&self.results_dir, SUMMARY_FILE, &summary)?;

        if !self.quiet {
            println!();
            println!(
                "📄 Summary saved to: {}",
                display_path(&summary_path, &self.root)
            );
        }

        Ok(summary)
    }
}

/// Run the report flow
pub fn run_report(root: &Path, results_dir: Option<&Path>, quiet: bool) -> Result<()> {
    if !quiet {
        println!("{}", "🧪 Context Sharing Report".bold());
        println!("{}", "=".repeat(50));
    }

    let reporter = Reporter::new(root, results_dir, quiet)?;
    let results = reporter.run_checks()?;
    reporter.generate_summary(results)?;

    if !quiet {
        println!();
        println!("✅ Automated checks complete!");
        println!("📝 Drive the manual handoff test with your agent pair next");
    }

    Ok(())
}
