//! Artifact store - Write JSON artifacts under the results directory
//!
//! Artifacts are pretty-printed JSON, replaced wholesale on every run. No
//! append semantics, no locking.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Artifact file names
pub const MARKER_FILE: &str = "manual-test-marker.json";
pub const COUNTER_FILE: &str = "counter-simulation.json";
pub const SUMMARY_FILE: &str = "test-summary.json";

/// Ensure the results directory exists
pub fn ensure_results_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create results directory: {:?}", dir))?;
    }
    Ok(())
}

/// Write a record as pretty-printed JSON, replacing any previous artifact
pub fn write_json<T: Serialize>(dir: &Path, filename: &str, record: &T) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&file_path, json)
        .with_context(|| format!("Failed to write artifact: {:?}", file_path))?;
    Ok(file_path)
}

/// Read an artifact back
#[allow(dead_code)]
pub fn read_json<T: DeserializeOwned>(dir: &Path, filename: &str) -> Result<T> {
    let file_path = dir.join(filename);
    let content = fs::read_to_string(&file_path)
        .with_context(|| format!("Failed to read artifact: {:?}", file_path))?;
    let record = serde_json::from_str(&content)?;
    Ok(record)
}
