use rand::Rng;

use crate::core::distribution::{ScoreDistribution, generate_scores};

/// Outcome of a single stopping-rule trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialResult {
    /// Whether the selected candidate was the overall best.
    pub success: bool,
    /// Gap between the true best score and the observation-phase maximum,
    /// i.e. how much information the decision was missing. Always >= 0.
    pub estimator_error: f64,
    pub selected_value: f64,
    pub true_best: f64,
}

/// Apply the stopping rule to a fixed score sequence.
///
/// Observe scores 0..k (observed_max = -inf when k = 0), then select the
/// first later score strictly greater than the observed maximum. When no
/// candidate qualifies the last one is taken; with k = n the selection
/// phase is empty, so the last candidate is always the fallback.
pub fn evaluate_scores(scores: &[f64], k: usize) -> TrialResult {
    let n = scores.len();
    assert!(n >= 1, "need at least one candidate");
    assert!(k <= n, "observation count k = {k} exceeds n = {n}");

    // First occurrence wins on (measure-zero) exact ties.
    let mut best_index = 0;
    let mut true_best = scores[0];
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > true_best {
            true_best = s;
            best_index = i;
        }
    }

    let observed_max = scores[..k]
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    let selected_index = scores[k..]
        .iter()
        .position(|&s| s > observed_max)
        .map(|offset| k + offset)
        .unwrap_or(n - 1);

    TrialResult {
        success: selected_index == best_index,
        estimator_error: true_best - observed_max,
        selected_value: scores[selected_index],
        true_best,
    }
}

/// Run one trial on a freshly generated candidate set.
pub fn run_trial<R: Rng + ?Sized>(
    n: usize,
    k: usize,
    dist: ScoreDistribution,
    rng: &mut R,
) -> TrialResult {
    let scores = generate_scores(n, dist, rng);
    evaluate_scores(&scores, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const SCORES: [f64; 5] = [0.3, 0.9, 0.1, 0.95, 0.2];

    #[test]
    fn selects_first_score_beating_observed_max() {
        let result = evaluate_scores(&SCORES, 2);
        assert!(result.success);
        assert_eq!(result.selected_value, 0.95);
        assert_eq!(result.true_best, 0.95);
        assert!((result.estimator_error - 0.05).abs() < 1e-12);
    }

    #[test]
    fn falls_back_to_last_candidate_when_nothing_qualifies() {
        let result = evaluate_scores(&SCORES, 4);
        assert!(!result.success, "true best was already in the observed prefix");
        assert_eq!(result.selected_value, 0.2);
        assert_eq!(result.true_best, 0.95);
        assert_eq!(result.estimator_error, 0.0);
    }

    #[test]
    fn k_zero_always_takes_the_first_candidate() {
        let result = evaluate_scores(&SCORES, 0);
        assert_eq!(result.selected_value, 0.3);
        assert!(!result.success);
        assert!(result.estimator_error.is_infinite());
    }

    #[test]
    fn k_equal_n_always_takes_the_last_candidate() {
        let result = evaluate_scores(&SCORES, SCORES.len());
        assert_eq!(result.selected_value, 0.2);
        assert!(!result.success);
    }

    #[test]
    fn exact_tie_with_observed_max_does_not_qualify() {
        // 0.9 at index 2 equals the observed max; only strictly greater wins.
        let scores = [0.3, 0.9, 0.9, 0.95, 0.2];
        let result = evaluate_scores(&scores, 2);
        assert_eq!(result.selected_value, 0.95);
        assert!(result.success);
    }

    #[test]
    fn single_candidate_is_selected_for_both_k_values() {
        for k in [0, 1] {
            let result = evaluate_scores(&[0.42], k);
            assert!(result.success);
            assert_eq!(result.selected_value, 0.42);
            assert_eq!(result.true_best, 0.42);
        }
    }

    #[test]
    fn generated_trials_have_nonnegative_error_for_positive_k() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        for dist in ScoreDistribution::ALL {
            for _ in 0..50 {
                let result = run_trial(40, 10, dist, &mut rng);
                assert!(result.estimator_error >= 0.0);
                assert!(result.true_best >= result.selected_value);
            }
        }
    }
}
