use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::log::StepOutcome;
use crate::moves::MoveKind;

/// Attempt counters for a single move kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveCounter {
    /// Steps on which the move was drawn.
    pub attempted: usize,
    /// Steps on which the move rewrote the word.
    pub succeeded: usize,
    /// Steps skipped by the unknot guard.
    pub unknot: usize,
}

impl MoveCounter {
    /// Fraction of attempts that succeeded, 0 when never attempted.
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.succeeded as f64 / self.attempted as f64
        }
    }
}

/// Per-kind move statistics accumulated alongside the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveStats {
    counters: BTreeMap<MoveKind, MoveCounter>,
}

impl MoveStats {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one step.
    pub fn record(&mut self, kind: MoveKind, outcome: StepOutcome) {
        let counter = self.counters.entry(kind).or_default();
        counter.attempted += 1;
        match outcome {
            StepOutcome::Succeeded => counter.succeeded += 1,
            StepOutcome::Failed => {}
            StepOutcome::Unknot => counter.unknot += 1,
        }
    }

    /// Counters for `kind`, zeroed if the kind never ran.
    pub fn counter(&self, kind: MoveKind) -> MoveCounter {
        self.counters.get(&kind).copied().unwrap_or_default()
    }

    /// Total number of recorded steps.
    pub fn total_steps(&self) -> usize {
        self.counters.values().map(|counter| counter.attempted).sum()
    }

    /// Acceptance rate per move name, for every kind that ran.
    pub fn acceptance_rates(&self) -> BTreeMap<String, f64> {
        self.counters
            .iter()
            .map(|(kind, counter)| (kind.as_str().to_string(), counter.acceptance_rate()))
            .collect()
    }

    /// Forgets every recorded step.
    pub fn clear(&mut self) {
        self.counters.clear();
    }
}
