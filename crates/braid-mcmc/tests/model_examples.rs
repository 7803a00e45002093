use braid_core::{BraidWord, Bounds};
use braid_mcmc::{MarkovChain, TrialLog};

fn chain(letters: Vec<i32>) -> MarkovChain {
    MarkovChain::new(letters, Bounds::new(9, 10).unwrap())
        .unwrap()
        .with_seed(11)
}

#[test]
fn zero_steps_snapshot_initial_word() {
    let mut mc = chain(vec![1, 2, 3]);
    mc.model(1, 0);
    assert_eq!(mc.braidrep_words(), vec![vec![1, 2, 3]]);
    assert_eq!(mc.logs(), vec![TrialLog::new()]);
}

#[test]
fn model_appends_to_existing_aggregate() {
    let mut mc = chain(vec![1, 2, 3]);
    mc.model(2, 5);
    mc.model(3, 7);
    let aggregate = mc.aggregate();
    assert_eq!(aggregate.braidreps.len(), 5);
    assert_eq!(aggregate.logs.len(), 5);
    for log in &aggregate.logs[..2] {
        assert_eq!(log.len(), 5);
    }
    for log in &aggregate.logs[2..] {
        assert_eq!(log.len(), 7);
        assert!(log.iter().all(|(step, _)| step < 7));
    }
    assert_eq!(mc.stats().total_steps(), 2 * 5 + 3 * 7);
}

#[test]
fn working_word_carries_across_trials() {
    let mut mc = chain(vec![1, 2, 3]);
    mc.model(3, 20);
    let reps = mc.braidreps();
    assert_eq!(reps.last(), Some(&mc.word()));

    // A fresh zero-step trial starts from the last braidrep, not from [1, 2, 3].
    mc.model(1, 0);
    assert_eq!(mc.braidreps().last(), reps.last());
}

#[test]
fn log_messages_follow_format() {
    let mut mc = chain(vec![1, -2, 3, 1]);
    mc.model(2, 50);
    for log in mc.logs() {
        for (_, message) in log.iter() {
            assert!(message.starts_with("MoveType: "), "{message}");
            assert!(
                message.ends_with(" Succeeded.")
                    || message.ends_with(" Failed.")
                    || message.ends_with(" Failed.Unknot"),
                "{message}"
            );
        }
    }
}

#[test]
fn default_bounds_are_nine_and_ten() {
    let mc = MarkovChain::with_default_bounds(BraidWord::new(vec![1, 2, 3]).unwrap()).unwrap();
    assert_eq!(mc.bounds(), Bounds::new(9, 10).unwrap());
}
