use optstop::core::distribution::ScoreDistribution;
use optstop::core::trial::{evaluate_scores, run_trial};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn observation_then_first_better_candidate() {
    let scores = [0.3, 0.9, 0.1, 0.95, 0.2];
    let result = evaluate_scores(&scores, 2);

    // observed_max = 0.9; index 2 (0.1) fails, index 3 (0.95) qualifies.
    assert!(result.success);
    assert_eq!(result.selected_value, 0.95);
    assert_eq!(result.true_best, 0.95);
    assert!((result.estimator_error - 0.05).abs() < 1e-12);
}

#[test]
fn last_candidate_fallback_when_best_was_observed() {
    let scores = [0.3, 0.9, 0.1, 0.95, 0.2];
    let result = evaluate_scores(&scores, 4);

    // observed_max = 0.95 already contains the best; only index 4 remains.
    assert!(!result.success);
    assert_eq!(result.selected_value, 0.2);
    assert_eq!(result.estimator_error, 0.0);
}

#[test]
fn zero_observation_always_selects_the_first_candidate() {
    let mut rng = StdRng::seed_from_u64(101);
    for dist in ScoreDistribution::ALL {
        for _ in 0..200 {
            let result = run_trial(30, 0, dist, &mut rng);
            // With nothing observed every score beats -inf, so index 0 wins
            // iff it is the true best.
            assert_eq!(result.success, result.selected_value == result.true_best);
        }
    }
}

#[test]
fn zero_observation_selected_value_is_score_zero() {
    // Deterministic check against the generator itself: regenerate the same
    // sequence and confirm the trial picked its first element.
    for dist in ScoreDistribution::ALL {
        let mut trial_rng = StdRng::seed_from_u64(77);
        let mut gen_rng = StdRng::seed_from_u64(77);
        let result = run_trial(25, 0, dist, &mut trial_rng);
        let scores = optstop::core::distribution::generate_scores(25, dist, &mut gen_rng);
        assert_eq!(result.selected_value, scores[0]);
    }
}

#[test]
fn full_observation_always_selects_the_last_candidate() {
    for dist in ScoreDistribution::ALL {
        let mut trial_rng = StdRng::seed_from_u64(78);
        let mut gen_rng = StdRng::seed_from_u64(78);
        let result = run_trial(25, 25, dist, &mut trial_rng);
        let scores = optstop::core::distribution::generate_scores(25, dist, &mut gen_rng);
        assert_eq!(result.selected_value, scores[24]);
        assert_eq!(result.estimator_error, 0.0, "everything was observed");
    }
}

#[test]
fn estimator_error_never_negative() {
    let mut rng = StdRng::seed_from_u64(9);
    for dist in ScoreDistribution::ALL {
        for k in [1, 5, 10, 20] {
            for _ in 0..100 {
                let result = run_trial(20, k, dist, &mut rng);
                assert!(
                    result.estimator_error >= 0.0,
                    "true best is a max over a superset of the observed prefix"
                );
            }
        }
    }
}

#[test]
fn fixed_seed_reproduces_the_trial() {
    for dist in ScoreDistribution::ALL {
        let mut a = StdRng::seed_from_u64(4242);
        let mut b = StdRng::seed_from_u64(4242);
        assert_eq!(run_trial(100, 37, dist, &mut a), run_trial(100, 37, dist, &mut b));
    }
}
