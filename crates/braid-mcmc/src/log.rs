use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::moves::MoveKind;

/// Suffix appended to the log entry of a move skipped by the unknot guard.
pub const UNKNOT_MARKER: &str = "Unknot";

/// Result of one step of a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The move rewrote the word.
    Succeeded,
    /// The move did not apply; the word is unchanged.
    Failed,
    /// The move was skipped because it would leave the trivial braid.
    Unknot,
}

impl StepOutcome {
    /// Log line recorded for `kind` with this outcome.
    pub fn message(self, kind: MoveKind) -> String {
        match self {
            StepOutcome::Succeeded => log_message(kind, true),
            StepOutcome::Failed => log_message(kind, false),
            StepOutcome::Unknot => {
                let mut message = log_message(kind, false);
                message.push_str(UNKNOT_MARKER);
                message
            }
        }
    }
}

/// Formats the log line for an attempted move.
pub fn log_message(kind: MoveKind, succeeded: bool) -> String {
    let name = kind.as_str();
    let verdict = if succeeded { "Succeeded" } else { "Failed" };
    format!(
        "MoveType: {}, Attempted {name}: {name} {verdict}.",
        kind.code()
    )
}

/// Per-trial record of attempted moves, keyed by step index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrialLog {
    entries: BTreeMap<usize, String>,
}

impl TrialLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the message for `step`, replacing any previous entry.
    pub fn record(&mut self, step: usize, message: String) {
        self.entries.insert(step, message);
    }

    /// Message recorded at `step`, if any.
    pub fn get(&self, step: usize) -> Option<&str> {
        self.entries.get(&step).map(String::as_str)
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no step was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(step, message)` pairs in step order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.entries
            .iter()
            .map(|(step, message)| (*step, message.as_str()))
    }

    /// Mutable access to the entries, for callers editing an owned copy.
    pub fn entries_mut(&mut self) -> &mut BTreeMap<usize, String> {
        &mut self.entries
    }
}

impl FromIterator<(usize, String)> for TrialLog {
    fn from_iter<I: IntoIterator<Item = (usize, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
