//! Chart rendering for sweep results. Consumes aggregated
//! [`ThresholdResult`] sequences only; the statistical core never calls
//! into this module.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::core::sweep::ThresholdResult;

const SERIES_COLORS: [RGBColor; 3] = [BLUE, RED, GREEN];

/// A labeled sweep, e.g. one per distribution in a comparison run.
pub struct LabeledSweep<'a> {
    pub label: &'a str,
    pub results: &'a [ThresholdResult],
}

/// Success rate vs rejection threshold, one curve per labeled sweep.
pub fn render_success_rate_plot(
    out_path: &Path,
    series: &[LabeledSweep<'_>],
) -> Result<(), Box<dyn Error>> {
    render_metric_plot(
        out_path,
        "Success Rate vs Rejection Threshold",
        "success rate",
        series,
        |r| r.success_rate,
    )
}

/// Mean estimator error vs rejection threshold. Non-finite points (the
/// k = 0 threshold observes nothing, so its error is infinite) are skipped.
pub fn render_estimator_error_plot(
    out_path: &Path,
    series: &[LabeledSweep<'_>],
) -> Result<(), Box<dyn Error>> {
    render_metric_plot(
        out_path,
        "Estimation Error vs Rejection Threshold",
        "mean estimator error",
        series,
        |r| r.mean_estimator_error,
    )
}

fn render_metric_plot(
    out_path: &Path,
    caption: &str,
    y_desc: &str,
    series: &[LabeledSweep<'_>],
    metric: impl Fn(&ThresholdResult) -> f64,
) -> Result<(), Box<dyn Error>> {
    let x_max = series
        .iter()
        .flat_map(|s| s.results.iter())
        .map(|r| r.threshold_fraction * 100.0)
        .fold(0.0f64, f64::max);
    let y_max = series
        .iter()
        .flat_map(|s| s.results.iter())
        .map(&metric)
        .filter(|y| y.is_finite())
        .fold(0.0f64, f64::max);

    let root = BitMapBackend::new(out_path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..x_max.max(1.0), 0.0f64..(y_max * 1.05).max(1e-6))?;

    chart
        .configure_mesh()
        .x_desc("rejection threshold (% of n)")
        .y_desc(y_desc)
        .draw()?;

    for (i, sweep) in series.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        let points: Vec<(f64, f64)> = sweep
            .results
            .iter()
            .map(|r| (r.threshold_fraction * 100.0, metric(r)))
            .filter(|(_, y)| y.is_finite())
            .collect();
        chart
            .draw_series(LineSeries::new(points, &color))?
            .label(sweep.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    if series.len() > 1 {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
