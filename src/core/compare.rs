use rand::Rng;
use tracing::info;

use crate::core::distribution::ScoreDistribution;
use crate::core::sweep::{ThresholdResult, sweep};

/// One distribution's full threshold sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionRun {
    pub distribution: ScoreDistribution,
    pub results: Vec<ThresholdResult>,
}

/// Run the threshold sweep once per distribution, in the given order, with
/// identical n/trials/thresholds. Runs share nothing but the rng stream.
pub fn compare<R: Rng + ?Sized>(
    n: usize,
    trials: usize,
    distributions: &[ScoreDistribution],
    threshold_fractions: &[f64],
    rng: &mut R,
) -> Vec<DistributionRun> {
    distributions
        .iter()
        .map(|&distribution| {
            info!(dist = %distribution, n, trials, "comparing distribution");
            DistributionRun {
                distribution,
                results: sweep(n, trials, distribution, threshold_fractions, rng),
            }
        })
        .collect()
}
