use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::distribution::ScoreDistribution;

fn default_thresholds() -> Vec<f64> {
    vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    #[serde(default = "ExperimentConfig::default_n")]
    pub n: usize,
    #[serde(default = "ExperimentConfig::default_trials")]
    pub trials: usize,
    #[serde(default = "ExperimentConfig::default_distribution")]
    pub distribution: ScoreDistribution,
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<f64>,
}

impl ExperimentConfig {
    fn default_n() -> usize {
        1000
    }
    fn default_trials() -> usize {
        500
    }
    fn default_distribution() -> ScoreDistribution {
        ScoreDistribution::Uniform
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            n: Self::default_n(),
            trials: Self::default_trials(),
            distribution: Self::default_distribution(),
            thresholds: default_thresholds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    #[serde(default = "CompareConfig::default_n")]
    pub n: usize,
    #[serde(default = "CompareConfig::default_trials")]
    pub trials: usize,
    #[serde(default = "CompareConfig::default_distributions")]
    pub distributions: Vec<ScoreDistribution>,
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<f64>,
}

impl CompareConfig {
    fn default_n() -> usize {
        100
    }
    fn default_trials() -> usize {
        1000
    }
    fn default_distributions() -> Vec<ScoreDistribution> {
        ScoreDistribution::ALL.to_vec()
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            n: Self::default_n(),
            trials: Self::default_trials(),
            distributions: Self::default_distributions(),
            thresholds: default_thresholds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_plot_dir")]
    pub plot_dir: String,
}

impl OutputConfig {
    fn default_plot_dir() -> String {
        "target/plots".to_string()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            plot_dir: Self::default_plot_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub experiment: ExperimentConfig,
    #[serde(default)]
    pub compare: CompareConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, text) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(_) => {
                eprintln!("Failed to serialize default config; continuing with defaults");
            }
        }
        default_cfg
    }
}
