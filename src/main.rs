use std::error::Error;
use std::fs::create_dir_all;
use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use optstop::cli::Args;
use optstop::config::AppConfig;
use optstop::core::compare::compare;
use optstop::core::sweep::{ThresholdResult, sweep};
use optstop::report::{LabeledSweep, render_estimator_error_plot, render_success_rate_plot};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = AppConfig::load_or_default(&args.config);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let plot_dir = args
        .plot_dir
        .clone()
        .unwrap_or_else(|| cfg.output.plot_dir.clone());
    let out_dir = Path::new(&plot_dir);
    create_dir_all(out_dir)?;

    if args.compare {
        run_comparison(&args, &cfg, out_dir, &mut rng)
    } else {
        run_default_experiment(&args, &cfg, out_dir, &mut rng)
    }
}

fn run_default_experiment(
    args: &Args,
    cfg: &AppConfig,
    out_dir: &Path,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    let n = args.n.unwrap_or(cfg.experiment.n);
    let trials = args.trials.unwrap_or(cfg.experiment.trials);
    let distribution = args.distribution.unwrap_or(cfg.experiment.distribution);

    let results = sweep(n, trials, distribution, &cfg.experiment.thresholds, rng);

    let labeled = [LabeledSweep {
        label: distribution.name(),
        results: &results,
    }];
    render_success_rate_plot(&out_dir.join("success_rate.png"), &labeled)?;
    render_estimator_error_plot(&out_dir.join("estimation_error.png"), &labeled)?;

    if let Some(best) = best_threshold(&results) {
        println!(
            "Maximum success rate is {:.4} at a rejection threshold of {:.2}% of n.",
            best.success_rate,
            best.threshold_fraction * 100.0
        );
    }

    println!("Saved plots to {}", out_dir.display());
    Ok(())
}

fn run_comparison(
    args: &Args,
    cfg: &AppConfig,
    out_dir: &Path,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    let n = args.n.unwrap_or(cfg.compare.n);
    let trials = args.trials.unwrap_or(cfg.compare.trials);

    let runs = compare(
        n,
        trials,
        &cfg.compare.distributions,
        &cfg.compare.thresholds,
        rng,
    );

    let labeled: Vec<LabeledSweep<'_>> = runs
        .iter()
        .map(|run| LabeledSweep {
            label: run.distribution.name(),
            results: &run.results,
        })
        .collect();
    render_success_rate_plot(&out_dir.join("compare_success_rate.png"), &labeled)?;
    render_estimator_error_plot(&out_dir.join("compare_estimation_error.png"), &labeled)?;

    println!("Saved plots to {}", out_dir.display());
    Ok(())
}

/// First threshold attaining the maximum success rate.
fn best_threshold(results: &[ThresholdResult]) -> Option<&ThresholdResult> {
    results.iter().fold(None, |best, r| match best {
        Some(b) if r.success_rate <= b.success_rate => Some(b),
        _ => Some(r),
    })
}
