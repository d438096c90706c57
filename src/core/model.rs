//! Artifact Record Model
//!
//! Every JSON artifact a report run persists maps to one of the typed
//! records here before serialization. Records are write-once: nothing in
//! ctxlab ever reads an artifact back outside of tests.

use serde::{Deserialize, Serialize};

/// Name of the file handoff check
pub const HANDOFF_CHECK: &str = "file-handoff";

/// Name of the counter simulation check
pub const COUNTER_CHECK: &str = "counter-simulation";

/// Instructions embedded in the handoff marker
pub const HANDOFF_INSTRUCTIONS: &str =
    "Use a writer agent to create a file, then a reader agent to read it back";

/// Notes attached to every run summary
pub const SUMMARY_NOTES: &str = "Some checks require manual agent invocation";

/// Marker written to signal that a manual, human-driven handoff test
/// should follow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffMarker {
    pub test: String,
    pub instructions: String,
    pub timestamp: String,
}

impl HandoffMarker {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            test: HANDOFF_CHECK.to_string(),
            instructions: HANDOFF_INSTRUCTIONS.to_string(),
            timestamp: timestamp.into(),
        }
    }
}

/// One recorded counter update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterUpdate {
    pub agent_id: String,
    pub timestamp: String,
}

/// Full state of the counter simulation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CounterState {
    pub value: u32,
    pub updates: Vec<CounterUpdate>,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one read-modify-write update and record who made it
    pub fn apply_update(&mut self, agent_id: impl Into<String>, timestamp: impl Into<String>) {
        self.value += 1;
        self.updates.push(CounterUpdate {
            agent_id: agent_id.into(),
            timestamp: timestamp.into(),
        });
    }
}

/// Outcome record of a single check, as embedded in the run summary.
///
/// The two checks report different shapes; untagged serialization keeps
/// each record's fields at the top level of the summary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckOutcome {
    Manual(ManualOutcome),
    Counter(CounterOutcome),
}

impl CheckOutcome {
    /// Outcome of a check that needs a human to finish it
    pub fn manual(test: impl Into<String>, status: impl Into<String>) -> Self {
        CheckOutcome::Manual(ManualOutcome {
            test: test.into(),
            kind: "manual".to_string(),
            status: status.into(),
        })
    }

    /// Outcome of the counter simulation
    pub fn counter(final_value: u32, expected: u32) -> Self {
        CheckOutcome::Counter(CounterOutcome {
            test: COUNTER_CHECK.to_string(),
            success: final_value == expected,
            final_value,
        })
    }

    /// Check name this outcome belongs to
    pub fn test(&self) -> &str {
        match self {
            CheckOutcome::Manual(o) => &o.test,
            CheckOutcome::Counter(o) => &o.test,
        }
    }
}

/// Outcome shape for manual checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualOutcome {
    pub test: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
}

/// Outcome shape for the counter simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterOutcome {
    pub test: String,
    pub success: bool,
    pub final_value: u32,
}

/// Aggregate record describing all checks executed in one invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub test_run: String,
    pub tests_run: usize,
    pub results: Vec<CheckOutcome>,
    pub notes: String,
}

impl RunSummary {
    /// Build a summary over the outcomes of one run, in run order
    pub fn new(test_run: impl Into<String>, results: Vec<CheckOutcome>) -> Self {
        Self {
            test_run: test_run.into(),
            tests_run: results.len(),
            results,
            notes: SUMMARY_NOTES.to_string(),
        }
    }
}
