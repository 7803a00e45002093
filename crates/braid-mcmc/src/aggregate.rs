use braid_core::BraidWord;
use serde::{Deserialize, Serialize};

use crate::log::TrialLog;

/// Braidreps generated so far together with the log of each trial.
///
/// `braidreps[i]` is the word at the end of the trial recorded in `logs[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Aggregate {
    /// Snapshot of the working word at the end of each trial.
    pub braidreps: Vec<BraidWord>,
    /// Step log of each trial.
    pub logs: Vec<TrialLog>,
}

impl Aggregate {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one finished trial.
    pub fn push(&mut self, braidrep: BraidWord, log: TrialLog) {
        self.braidreps.push(braidrep);
        self.logs.push(log);
    }

    /// Number of recorded trials.
    pub fn len(&self) -> usize {
        self.braidreps.len()
    }

    /// Returns true if no trial has been recorded.
    pub fn is_empty(&self) -> bool {
        self.braidreps.is_empty()
    }

    /// Braidreps as plain letter sequences.
    pub fn braidrep_words(&self) -> Vec<Vec<i32>> {
        self.braidreps
            .iter()
            .map(|word| word.elements().to_vec())
            .collect()
    }

    /// Drops every recorded trial.
    pub fn clear(&mut self) {
        self.braidreps.clear();
        self.logs.clear();
    }
}
