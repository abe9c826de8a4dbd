// src/figures/mod.rs

//! Chart descriptions built from distributions, comparison reports and
//! amplitude views.
//!
//! Nothing here draws. Each builder returns a [`BarChart`] (bars, annotations,
//! axis limits, titles) that a plotting front-end can render directly. All
//! options are passed explicitly; there is no global style state.

mod chart;

pub use chart::{Bar, BarChart, ChartGrid, ChartOptions};

use crate::comparison::ComparisonReport;
use crate::core::ket;
use crate::distribution::MeasurementDistribution;
use crate::statevector::StateAmplitudeView;

/// Headroom factor for signed amplitude and difference charts.
const SIGNED_HEADROOM: f64 = 1.2;
/// Fixed top of the magnitude axis; amplitudes of a normalized state never exceed 1.
const MAGNITUDE_AXIS_TOP: f64 = 1.1;

/// Histogram of one distribution in ascending label order.
///
/// When `options.show_percentage` is set and the total is positive, each bar is
/// annotated with its share of the total (`"50.0%"`).
pub fn measurement_histogram(dist: &MeasurementDistribution, options: &ChartOptions) -> BarChart {
    let total = dist.total();
    let bars = dist
        .iter()
        .map(|(label, count)| {
            let annotation = (options.show_percentage && total > 0)
                .then(|| format!("{:.1}%", count as f64 / total as f64 * 100.0));
            Bar::new(label, count as f64, annotation)
        })
        .collect();
    let top = (dist.max_count() as f64 * options.headroom).max(1.0);
    BarChart::new(options, bars, (0.0, top))
}

/// Side-by-side histograms sharing one y-axis so bar heights compare fairly.
/// Bars carry their integer count as annotation. Axis captions and headroom
/// come from `options`; each side takes its title from `titles`.
pub fn histogram_comparison(
    a: &MeasurementDistribution,
    b: &MeasurementDistribution,
    titles: (&str, &str),
    options: &ChartOptions,
) -> (BarChart, BarChart) {
    let top = (a.max_count().max(b.max_count()) as f64 * options.headroom).max(1.0);
    (
        count_chart(a, titles.0, options, top),
        count_chart(b, titles.1, options, top),
    )
}

/// Several count histograms laid out in a grid of `ncols` columns, each
/// scaled to its own tallest bar. `ncols` of 0 is treated as 1.
pub fn multiple_histograms(
    panels: &[(&str, &MeasurementDistribution)],
    ncols: usize,
    options: &ChartOptions,
) -> ChartGrid {
    let charts = panels
        .iter()
        .map(|(title, dist)| {
            let top = (dist.max_count() as f64 * options.headroom).max(1.0);
            count_chart(dist, title, options, top)
        })
        .collect();
    ChartGrid::new(charts, ncols)
}

fn count_chart(dist: &MeasurementDistribution, title: &str, options: &ChartOptions, top: f64) -> BarChart {
    let options = ChartOptions {
        title: title.to_string(),
        ..options.clone()
    };
    let bars = dist
        .iter()
        .map(|(label, count)| Bar::new(label, count as f64, Some(count.to_string())))
        .collect();
    BarChart::new(&options, bars, (0.0, top))
}

/// Magnitude bar chart with ket labels.
///
/// Only magnitudes strictly above `options.annotation_threshold` get a value
/// label; every basis state still gets a bar.
pub fn amplitude_chart(views: &[StateAmplitudeView], options: &ChartOptions) -> BarChart {
    let bars = views
        .iter()
        .map(|view| {
            let annotation = (view.magnitude > options.annotation_threshold).then(|| format!("{:.3}", view.magnitude));
            Bar::new(ket(&view.label), view.magnitude, annotation)
        })
        .collect();
    BarChart::new(options, bars, (0.0, MAGNITUDE_AXIS_TOP))
}

/// Real-part and imaginary-part charts on a shared, symmetric y-axis.
pub fn real_imag_charts(views: &[StateAmplitudeView]) -> (BarChart, BarChart) {
    let max_component = views
        .iter()
        .map(|v| v.real.abs().max(v.imag.abs()))
        .fold(0.0, f64::max);
    let limits = symmetric_limits(max_component);
    (
        component_chart(views, "Real Part", limits, |v| v.real),
        component_chart(views, "Imaginary Part", limits, |v| v.imag),
    )
}

fn component_chart(
    views: &[StateAmplitudeView],
    title: &str,
    limits: (f64, f64),
    pick: fn(&StateAmplitudeView) -> f64,
) -> BarChart {
    let options = ChartOptions::signed(title, "Amplitude");
    let bars = views.iter().map(|v| Bar::new(ket(&v.label), pick(v), None)).collect();
    BarChart::new(&options, bars, limits)
}

/// Signed per-label difference `p_B - p_A` of a comparison report.
pub fn difference_chart(report: &ComparisonReport) -> BarChart {
    let (side_a, side_b) = report.sides();
    let options = ChartOptions::signed(&format!("{} - {}", side_b, side_a), "Probability difference");
    let bars = report
        .rows()
        .iter()
        .map(|row| Bar::new(row.label.as_str(), row.difference, Some(format!("{:+.3}", row.difference))))
        .collect();
    BarChart::new(&options, bars, symmetric_limits(report.max_abs_difference()))
}

/// Views whose magnitude is at least `threshold`, for decluttered displays.
pub fn significant(views: &[StateAmplitudeView], threshold: f64) -> Vec<&StateAmplitudeView> {
    views.iter().filter(|v| v.magnitude >= threshold).collect()
}

/// Text progress indicator, e.g. `⬛⬛⬜ (2/3)`. `current` is clamped to `total`.
pub fn progress_bar(current: usize, total: usize) -> String {
    let current = current.min(total);
    format!("{}{} ({}/{})", "⬛".repeat(current), "⬜".repeat(total - current), current, total)
}

/// `±max × 1.2`, falling back to `±1` when everything is zero.
fn symmetric_limits(max_abs: f64) -> (f64, f64) {
    if max_abs > 0.0 {
        let edge = max_abs * SIGNED_HEADROOM;
        (-edge, edge)
    } else {
        (-1.0, 1.0)
    }
}
