//! Counter simulation check - Sequential stand-in for parallel updates
//!
//! The loop is single threaded: it records what a series of well-behaved
//! agents incrementing a shared counter would leave behind, without any
//! actual contention.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::core::clock::iso_now;
use crate::core::model::{CheckOutcome, CounterState};
use crate::core::store::{write_json, COUNTER_FILE};

/// Number of simulated agent updates
pub const UPDATE_COUNT: u32 = 5;

/// Pause between updates, purely for output pacing
pub const UPDATE_PACING: Duration = Duration::from_millis(10);

/// Build the counter state by applying sequential updates
///
/// Each iteration is one simulated read-modify-write: bump the value and
/// record which agent did it. `pacing` spaces the recorded timestamps out;
/// it is not a synchronization mechanism.
pub fn simulate_updates(count: u32, pacing: Duration) -> CounterState {
    let mut state = CounterState::new();

    for i in 0..count {
        state.apply_update(format!("test-counter-{}", i), iso_now());
        if !pacing.is_zero() {
            thread::sleep(pacing);
        }
    }

    state
}

/// Run the counter simulation check
pub fn run_counter_check(results_dir: &Path, quiet: bool) -> Result<CheckOutcome> {
    if !quiet {
        println!();
        println!("{} Counter Simulation", "🧪 Check:".bold());
        println!("  Simulating what parallel agents would do...");
    }

    let state = simulate_updates(UPDATE_COUNT, UPDATE_PACING);
    write_json(results_dir, COUNTER_FILE, &state)?;

    if !quiet {
        println!(
            "  {} Final count: {} (expected: {})",
            "✓".green(),
            state.value,
            UPDATE_COUNT
        );
    }

    Ok(CheckOutcome::counter(state.value, UPDATE_COUNT))
}
