use std::collections::BTreeSet;

use braid_core::{BraidWord, Bounds, RngHandle, Sign};
use braid_mcmc::{canonical_hash, run, MarkovChain, MoveKind, RunConfig, StepOutcome};
use rand::Rng;

fn seeded(seed: u64) -> MarkovChain {
    MarkovChain::with_default_bounds(vec![1, 2, 3])
        .unwrap()
        .with_seed(seed)
}

#[test]
fn repeated_models_with_same_seed_match() {
    let mut a = seeded(2024);
    let mut b = seeded(2024);
    a.model(4, 60);
    b.model(4, 60);
    assert_eq!(a.aggregate(), b.aggregate());
    assert_eq!(a.stats(), b.stats());
    assert_eq!(canonical_hash(&a.aggregate()), canonical_hash(&b.aggregate()));
}

#[test]
fn different_seeds_diverge() {
    let mut a = seeded(1);
    let mut b = seeded(2);
    a.model(3, 100);
    b.model(3, 100);
    assert_ne!(a.logs(), b.logs());
}

#[test]
fn configured_runs_are_reproducible() {
    let mut config = RunConfig::default();
    config.num_braidreps = 5;
    config.msteps = 40;
    config.seed_policy.master_seed = 77;

    let summary_a = run(&config).unwrap();
    let summary_b = run(&config).unwrap();
    assert_eq!(summary_a, summary_b);
    assert_eq!(summary_a.aggregate.len(), 5);
    assert_eq!(summary_a.aggregate_hash, canonical_hash(&summary_a.aggregate));
    assert_eq!(summary_a.stats.total_steps(), 200);
}

fn outcome(applied: bool) -> StepOutcome {
    if applied {
        StepOutcome::Succeeded
    } else {
        StepOutcome::Failed
    }
}

/// Replays one trial by hand: move type, then index, then the Insert
/// generator or Stabilize sign.
fn replay_trial(
    seed: u64,
    start: &[i32],
    msteps: usize,
) -> (BraidWord, Vec<String>, BTreeSet<MoveKind>) {
    let bounds = Bounds::default();
    let mut rng = RngHandle::from_seed(seed);
    let mut word = BraidWord::new(start.to_vec()).unwrap();
    let mut messages = Vec::new();
    let mut kinds = BTreeSet::new();
    for _ in 0..msteps {
        let kind = MoveKind::ALL[rng.gen_range(0..7)];
        let index = rng.gen_range(0..word.len());
        let result = match kind {
            MoveKind::Conjugate => outcome(word.conjugate(index)),
            MoveKind::Cancel if word.len() == 2 && word.can_cancel(index) => {
                StepOutcome::Unknot
            }
            MoveKind::Cancel => outcome(word.cancel(index)),
            MoveKind::Insert => {
                let largest = word.largest_generator() as i32;
                let generator = rng.gen_range(1..=largest + 1);
                outcome(word.insert(index, generator, &bounds))
            }
            MoveKind::Transpose => outcome(word.transpose(index)),
            MoveKind::Flip => outcome(word.flip(index)),
            MoveKind::Stabilize => {
                let sign = if rng.gen::<bool>() {
                    Sign::Positive
                } else {
                    Sign::Negative
                };
                outcome(word.stabilize(sign, &bounds))
            }
            MoveKind::Destabilize if word.len() == 1 && word.can_destabilize() => {
                StepOutcome::Unknot
            }
            MoveKind::Destabilize => outcome(word.destabilize()),
        };
        messages.push(result.message(kind));
        kinds.insert(kind);
    }
    (word, messages, kinds)
}

#[test]
fn draws_follow_kind_index_parameter_order() {
    let start = [1, 2, 3];
    for seed in [3_u64, 11, 2024] {
        let (expected_word, expected_messages, kinds) = replay_trial(seed, &start, 150);
        assert!(kinds.contains(&MoveKind::Insert));
        assert!(kinds.contains(&MoveKind::Stabilize));

        let mut mc = MarkovChain::with_default_bounds(start.to_vec())
            .unwrap()
            .with_rng(RngHandle::from_seed(seed));
        mc.model(1, 150);
        let logs = mc.logs();
        let messages: Vec<String> = logs[0].iter().map(|(_, m)| m.to_string()).collect();
        assert_eq!(messages, expected_messages, "seed {seed}");
        assert_eq!(mc.word(), expected_word, "seed {seed}");
        assert_eq!(mc.braidreps(), vec![expected_word]);
    }
}
