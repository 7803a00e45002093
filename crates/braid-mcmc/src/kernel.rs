use std::collections::BTreeMap;

use braid_core::{BraidError, BraidWord, Bounds, RngHandle};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::aggregate::Aggregate;
use crate::config::RunConfig;
use crate::hash::canonical_hash;
use crate::log::{StepOutcome, TrialLog};
use crate::metrics::MoveStats;
use crate::moves::{Move, MoveKind};

/// Braid word input accepted by [`MarkovChain`]: a word or its raw letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// An already constructed word.
    Word(BraidWord),
    /// Raw letters, validated on conversion.
    Elements(Vec<i32>),
}

impl WordSource {
    /// Converts to an owned word and checks it against `bounds`.
    pub fn into_word(self, bounds: &Bounds) -> Result<BraidWord, BraidError> {
        let word = match self {
            WordSource::Word(word) => word,
            WordSource::Elements(elements) => BraidWord::new(elements)?,
        };
        word.check_bounds(bounds)?;
        Ok(word)
    }
}

impl From<BraidWord> for WordSource {
    fn from(word: BraidWord) -> Self {
        WordSource::Word(word)
    }
}

impl From<&BraidWord> for WordSource {
    fn from(word: &BraidWord) -> Self {
        WordSource::Word(word.clone())
    }
}

impl From<Vec<i32>> for WordSource {
    fn from(elements: Vec<i32>) -> Self {
        WordSource::Elements(elements)
    }
}

impl From<&[i32]> for WordSource {
    fn from(elements: &[i32]) -> Self {
        WordSource::Elements(elements.to_vec())
    }
}

/// Random walk over braid words driven by Markov moves.
///
/// The chain owns one working word. Each call to [`MarkovChain::model`] runs
/// trials on that word without resetting it, so consecutive trials (and
/// consecutive calls) continue from wherever the previous trial stopped.
/// Every accessor hands out an owned copy.
#[derive(Debug, Clone)]
pub struct MarkovChain {
    word: BraidWord,
    bounds: Bounds,
    rng: RngHandle,
    aggregate: Aggregate,
    stats: MoveStats,
}

impl MarkovChain {
    /// Creates a chain seeded from OS entropy.
    pub fn new(word: impl Into<WordSource>, bounds: Bounds) -> Result<Self, BraidError> {
        bounds.validate()?;
        let word = word.into().into_word(&bounds)?;
        Ok(Self {
            word,
            bounds,
            rng: RngHandle::from_entropy(),
            aggregate: Aggregate::new(),
            stats: MoveStats::new(),
        })
    }

    /// Creates a chain with the default bounds (maxgen 9, maxlen 10).
    pub fn with_default_bounds(word: impl Into<WordSource>) -> Result<Self, BraidError> {
        Self::new(word, Bounds::default())
    }

    /// Reseeds the random source from `seed`.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(RngHandle::from_seed(seed))
    }

    /// Replaces the random source.
    pub fn with_rng(mut self, rng: RngHandle) -> Self {
        self.rng = rng;
        self
    }

    /// Runs `num_braidreps` trials of `msteps` steps each and appends their
    /// braidreps and logs to the aggregate.
    pub fn model(&mut self, num_braidreps: usize, msteps: usize) {
        info!(
            num_braidreps,
            msteps,
            seed = ?self.rng.seed(),
            "modelling braidreps"
        );
        for trial in 0..num_braidreps {
            let mut log = TrialLog::new();
            for step in 0..msteps {
                let (kind, outcome) = self.step();
                log.record(step, outcome.message(kind));
            }
            debug!(
                trial,
                length = self.word.len(),
                largest_generator = self.word.largest_generator(),
                "trial complete"
            );
            self.aggregate.push(self.word.clone(), log);
        }
    }

    /// Draws and attempts one random move.
    ///
    /// Draw order is move kind, index, then any per-move parameter.
    fn step(&mut self) -> (MoveKind, StepOutcome) {
        let kind = MoveKind::ALL[self.rng.gen_range(0..MoveKind::ALL.len())];
        let index = self.rng.gen_range(0..self.word.len());
        let candidate = Move::draw(kind, index, &self.word, &mut self.rng);
        (kind, self.attempt(candidate))
    }

    /// Attempts a specific move on the working word and records its outcome
    /// in the move statistics.
    ///
    /// Cancelling the last pair or destabilizing the last letter is skipped
    /// and reported as [`StepOutcome::Unknot`].
    pub fn attempt(&mut self, candidate: Move) -> StepOutcome {
        let outcome = if candidate.collapses_to_unknot(&self.word) {
            StepOutcome::Unknot
        } else if candidate.apply(&mut self.word, &self.bounds) {
            StepOutcome::Succeeded
        } else {
            StepOutcome::Failed
        };
        trace!(?candidate, ?outcome, word = %self.word, "attempted move");
        self.stats.record(candidate.kind(), outcome);
        outcome
    }

    /// Empties the aggregate and the move statistics. The working word and
    /// bounds are kept.
    pub fn clear_model(&mut self) {
        self.aggregate.clear();
        self.stats.clear();
    }

    /// Replaces the working word with an owned copy of `word`.
    pub fn replace_word(&mut self, word: impl Into<WordSource>) -> Result<(), BraidError> {
        self.word = word.into().into_word(&self.bounds)?;
        Ok(())
    }

    /// Copy of the braidreps and logs.
    pub fn aggregate(&self) -> Aggregate {
        self.aggregate.clone()
    }

    /// Copy of the trial logs.
    pub fn logs(&self) -> Vec<TrialLog> {
        self.aggregate.logs.clone()
    }

    /// Copy of the braidreps as words.
    pub fn braidreps(&self) -> Vec<BraidWord> {
        self.aggregate.braidreps.clone()
    }

    /// Copy of the braidreps as plain letter sequences.
    pub fn braidrep_words(&self) -> Vec<Vec<i32>> {
        self.aggregate.braidrep_words()
    }

    /// Copy of the working word.
    pub fn word(&self) -> BraidWord {
        self.word.clone()
    }

    /// Generator and length limits.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Copy of the per-kind move statistics.
    pub fn stats(&self) -> MoveStats {
        self.stats.clone()
    }
}

/// Summary returned after a configured run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Seed the run was driven by.
    pub master_seed: u64,
    /// Working word after the last trial.
    pub final_word: BraidWord,
    /// Braidreps and logs.
    pub aggregate: Aggregate,
    /// Per-kind move statistics.
    pub stats: MoveStats,
    /// Acceptance rate per move name.
    pub acceptance_rates: BTreeMap<String, f64>,
    /// Canonical hash of the aggregate.
    pub aggregate_hash: String,
}

/// Builds a chain from `config`, runs it and summarises the result.
pub fn run(config: &RunConfig) -> Result<RunSummary, BraidError> {
    config.validate()?;
    let seed = config.seed_policy.master_seed;
    let mut chain =
        MarkovChain::new(config.initial_word.clone(), config.bounds)?.with_seed(seed);
    chain.model(config.num_braidreps, config.msteps);

    let aggregate = chain.aggregate();
    let stats = chain.stats();
    let aggregate_hash = canonical_hash(&aggregate);
    info!(
        braidreps = aggregate.len(),
        hash = %aggregate_hash,
        "run complete"
    );
    Ok(RunSummary {
        master_seed: seed,
        final_word: chain.word(),
        acceptance_rates: stats.acceptance_rates(),
        stats,
        aggregate,
        aggregate_hash,
    })
}
