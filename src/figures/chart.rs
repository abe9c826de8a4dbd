// src/figures/chart.rs
use crate::core::ANNOTATION_THRESHOLD;
use std::fmt;

/// Default multiplier from the tallest count bar to the top of the y-axis.
pub(crate) const COUNT_HEADROOM: f64 = 1.15;

/// Rendering options handed to the figure builders.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Chart title.
    pub title: String,
    /// X-axis caption.
    pub x_label: String,
    /// Y-axis caption.
    pub y_label: String,
    /// Annotate histogram bars with their percentage of the total.
    pub show_percentage: bool,
    /// Amplitude bars at or below this magnitude are not annotated.
    pub annotation_threshold: f64,
    /// Multiplier applied to the tallest bar to get the top of the y-axis.
    pub headroom: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Measurement Results".to_string(),
            x_label: "Measured State".to_string(),
            y_label: "Number of Measurements".to_string(),
            show_percentage: true,
            annotation_threshold: ANNOTATION_THRESHOLD,
            headroom: COUNT_HEADROOM,
        }
    }
}

impl ChartOptions {
    /// Options for a plain count histogram titled `title`.
    pub fn counts(title: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: "State".to_string(),
            y_label: "Counts".to_string(),
            show_percentage: false,
            ..Self::default()
        }
    }

    /// Options for amplitude-magnitude charts.
    pub fn amplitudes(title: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: "State".to_string(),
            y_label: "Amplitude |ψᵢ|".to_string(),
            show_percentage: false,
            ..Self::default()
        }
    }

    pub(crate) fn signed(title: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: "State".to_string(),
            y_label: y_label.to_string(),
            show_percentage: false,
            ..Self::default()
        }
    }
}

/// One bar: its x-axis label, height and optional text drawn above it.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// X-axis tick label, e.g. `"01"` or `"|01⟩"`.
    pub label: String,
    /// Bar height; negative for signed charts.
    pub height: f64,
    /// Text drawn above the bar, if any.
    pub annotation: Option<String>,
}

impl Bar {
    /// Creates a bar.
    pub fn new(label: impl Into<String>, height: f64, annotation: Option<String>) -> Self {
        Self {
            label: label.into(),
            height,
            annotation,
        }
    }
}

/// Everything a front-end needs to draw one bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    /// Chart title.
    pub title: String,
    /// X-axis caption.
    pub x_label: String,
    /// Y-axis caption.
    pub y_label: String,
    /// Bars in display order.
    pub bars: Vec<Bar>,
    /// `(bottom, top)` of the y-axis.
    pub y_limits: (f64, f64),
}

impl BarChart {
    pub(crate) fn new(options: &ChartOptions, bars: Vec<Bar>, y_limits: (f64, f64)) -> Self {
        Self {
            title: options.title.clone(),
            x_label: options.x_label.clone(),
            y_label: options.y_label.clone(),
            bars,
            y_limits,
        }
    }

    /// Bar heights in display order.
    pub fn heights(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.height).collect()
    }
}

impl fmt::Display for BarChart {
    /// Plain-text rendering, one bar per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}: {:.3}..{:.3}]", self.title, self.y_label, self.y_limits.0, self.y_limits.1)?;
        for bar in &self.bars {
            write!(f, "  {:<8} {:>10.4}", bar.label, bar.height)?;
            if let Some(note) = &bar.annotation {
                write!(f, "  {}", note)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Charts arranged row-major in a fixed number of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGrid {
    charts: Vec<BarChart>,
    nrows: usize,
    ncols: usize,
}

impl ChartGrid {
    pub(crate) fn new(charts: Vec<BarChart>, ncols: usize) -> Self {
        let ncols = ncols.max(1);
        let nrows = charts.len().div_ceil(ncols);
        Self { charts, nrows, ncols }
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Charts in row-major order.
    pub fn charts(&self) -> &[BarChart] {
        &self.charts
    }

    /// Chart at `(row, col)`, `None` for an unused trailing cell.
    pub fn get(&self, row: usize, col: usize) -> Option<&BarChart> {
        if col >= self.ncols {
            return None;
        }
        self.charts.get(row * self.ncols + col)
    }

    /// Number of grid cells left empty after the last chart.
    pub fn hidden_cells(&self) -> usize {
        self.nrows * self.ncols - self.charts.len()
    }
}
