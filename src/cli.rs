use clap::Parser;

use crate::core::distribution::ScoreDistribution;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Compare all three score distributions instead of running one sweep
    #[arg(long, default_value_t = false)]
    pub compare: bool,

    /// Path to config TOML
    #[arg(long, default_value = "optstop.toml")]
    pub config: String,

    /// Seed for the random source (omit for an OS-seeded run)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for rendered plots (overrides config)
    #[arg(long)]
    pub plot_dir: Option<String>,

    /// Number of candidates per trial (overrides config)
    #[arg(long)]
    pub n: Option<usize>,

    /// Trials per threshold (overrides config)
    #[arg(long)]
    pub trials: Option<usize>,

    /// Score distribution for the single-sweep run (overrides config)
    #[arg(long)]
    pub distribution: Option<ScoreDistribution>,
}
