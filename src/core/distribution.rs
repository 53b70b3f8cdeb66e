use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gaussian parameters for [`ScoreDistribution::Normal`].
pub const NORMAL_MEAN: f64 = 0.5;
pub const NORMAL_STD_DEV: f64 = 0.15;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("unknown distribution {0:?} (expected one of: uniform, normal, exponential)")]
    UnknownDistribution(String),
}

/// Candidate score distribution. All three produce scores in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreDistribution {
    Uniform,
    Normal,
    Exponential,
}

impl ScoreDistribution {
    pub const ALL: [ScoreDistribution; 3] = [
        ScoreDistribution::Uniform,
        ScoreDistribution::Normal,
        ScoreDistribution::Exponential,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScoreDistribution::Uniform => "uniform",
            ScoreDistribution::Normal => "normal",
            ScoreDistribution::Exponential => "exponential",
        }
    }
}

impl fmt::Display for ScoreDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoreDistribution {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(ScoreDistribution::Uniform),
            "normal" => Ok(ScoreDistribution::Normal),
            "exponential" => Ok(ScoreDistribution::Exponential),
            other => Err(SimError::UnknownDistribution(other.to_string())),
        }
    }
}

/// Draw `n` independent candidate scores in [0, 1].
///
/// - uniform: i.i.d. on [0, 1)
/// - normal: Gaussian(0.5, 0.15) clamped into [0, 1]; out-of-range draws
///   pile up at the boundary (clamping, not resampling, is the documented
///   policy)
/// - exponential: i.i.d. Exp(1), then divided by the sample max so the
///   largest score is exactly 1; an all-zero sample is returned unscaled
pub fn generate_scores<R: Rng + ?Sized>(
    n: usize,
    dist: ScoreDistribution,
    rng: &mut R,
) -> Vec<f64> {
    assert!(n >= 1, "candidate count must be at least 1");
    match dist {
        ScoreDistribution::Uniform => (0..n).map(|_| rng.random::<f64>()).collect(),
        ScoreDistribution::Normal => {
            let normal =
                Normal::new(NORMAL_MEAN, NORMAL_STD_DEV).expect("valid gaussian parameters");
            (0..n)
                .map(|_| normal.sample(rng).clamp(0.0, 1.0))
                .collect()
        }
        ScoreDistribution::Exponential => {
            let exp = Exp::new(1.0).expect("valid exponential rate");
            let mut scores: Vec<f64> = (0..n).map(|_| exp.sample(rng)).collect();
            let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if max > 0.0 {
                for s in &mut scores {
                    *s /= max;
                }
            }
            scores
        }
    }
}
