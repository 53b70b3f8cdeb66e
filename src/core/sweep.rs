use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::core::distribution::ScoreDistribution;
use crate::core::trial::run_trial;

/// Aggregated outcome of all trials at one rejection threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdResult {
    /// Observation-phase length as a fraction of n.
    pub threshold_fraction: f64,
    /// floor(n * threshold_fraction), the actual observation count.
    pub k: usize,
    /// Fraction of trials that selected the overall best candidate.
    pub success_rate: f64,
    /// Mean of (true_best - observed_max) across trials. Infinite at k = 0,
    /// where nothing is observed.
    pub mean_estimator_error: f64,
}

impl fmt::Display for ThresholdResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Threshold: {:.0}% (k = {}), Success Rate: {:.4}, Estimation Error: {:.4}",
            self.threshold_fraction * 100.0,
            self.k,
            self.success_rate,
            self.mean_estimator_error
        )
    }
}

/// Sweep the stopping rule across rejection thresholds.
///
/// For each fraction f runs `trials` independent trials with
/// k = floor(n * f), each on a fresh candidate set, and averages success and
/// estimator error. Returns one result per fraction, in input order, and
/// prints one progress line per threshold to stdout.
pub fn sweep<R: Rng + ?Sized>(
    n: usize,
    trials: usize,
    dist: ScoreDistribution,
    threshold_fractions: &[f64],
    rng: &mut R,
) -> Vec<ThresholdResult> {
    assert!(n >= 1, "candidate count must be at least 1");
    assert!(trials >= 1, "need at least one trial per threshold");

    let mut results = Vec::with_capacity(threshold_fractions.len());
    for &fraction in threshold_fractions {
        let k = threshold_for(n, fraction);
        debug!(n, k, trials, dist = %dist, "running threshold");

        let mut successes = 0usize;
        let mut error_sum = 0.0f64;
        for _ in 0..trials {
            let trial = run_trial(n, k, dist, rng);
            successes += trial.success as usize;
            error_sum += trial.estimator_error;
        }

        let result = ThresholdResult {
            threshold_fraction: fraction,
            k,
            success_rate: successes as f64 / trials as f64,
            mean_estimator_error: error_sum / trials as f64,
        };
        println!("{result}");
        results.push(result);
    }
    results
}

/// Integer truncation, not rounding.
pub fn threshold_for(n: usize, fraction: f64) -> usize {
    assert!(
        (0.0..=1.0).contains(&fraction),
        "threshold fraction {fraction} outside [0, 1]"
    );
    (n as f64 * fraction).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_truncates() {
        assert_eq!(threshold_for(1000, 0.0), 0);
        assert_eq!(threshold_for(1000, 0.1), 100);
        assert_eq!(threshold_for(7, 0.5), 3);
        assert_eq!(threshold_for(9, 0.99), 8);
        assert_eq!(threshold_for(5, 1.0), 5);
    }

    #[test]
    fn progress_line_format() {
        let result = ThresholdResult {
            threshold_fraction: 0.1,
            k: 100,
            success_rate: 0.3742,
            mean_estimator_error: 0.0123,
        };
        assert_eq!(
            result.to_string(),
            "Threshold: 10% (k = 100), Success Rate: 0.3742, Estimation Error: 0.0123"
        );
    }
}
