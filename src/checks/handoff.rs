//! File handoff check - Write a marker for the manual handoff test

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::core::clock::iso_now;
use crate::core::model::{CheckOutcome, HandoffMarker, HANDOFF_CHECK};
use crate::core::paths::display_path;
use crate::core::store::{write_json, MARKER_FILE};

/// Run the file handoff check
///
/// Writes a marker artifact telling a human which agent pair to drive next.
/// The check itself cannot verify the handoff, so it always reports that
/// manual testing is required.
pub fn run_handoff_check(results_dir: &Path, root: &Path, quiet: bool) -> Result<CheckOutcome> {
    if !quiet {
        println!();
        println!("{} File-Based Handoff", "🧪 Check:".bold());
        println!("  Verifies that agents can pass context via file IDs");
        println!("  (requires manual agent invocation)");
    }

    let marker = HandoffMarker::new(iso_now());
    let marker_path = write_json(results_dir, MARKER_FILE, &marker)?;

    if !quiet {
        println!(
            "  {} Created marker file: {}",
            "✓".green(),
            display_path(&marker_path, root)
        );
        println!("  → Now drive the handoff manually with a writer/reader agent pair");
    }

    Ok(CheckOutcome::manual(HANDOFF_CHECK, "requires_manual_testing"))
}
