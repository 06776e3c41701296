//! # Charts
//!
//! Drawing is delegated to an external charting library. This module only
//! prepares the data it needs ([ChartSeries]: categories, values and the
//! highlighted index) and defines the two seams used to talk to it:
//!
//!  - [ChartRenderer]: turns a series into a live chart.
//!  - [ChartHandle]: the live chart, that must be destroyed before another one
//!     takes its place (see [crate::calculator::CalculatorSession]).
//!
//! [TerminalChartRenderer] is the renderer used by the command line: it either
//! draws a text bar chart or prints the JSON series a browser chart would consume.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::configuration::chart::{MAX_CHART_BARS, TEXT_BAR_WIDTH};

/// Bar charts for pmfs, line charts for densities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// Everything the charting library needs to draw a distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    /// One label per category (the value of `k`, or the point `x`).
    pub labels: Vec<String>,
    /// The pmf or pdf at each category.
    pub values: Vec<f64>,
    /// The index of the queried value, if it is inside the drawn range.
    pub highlight: Option<usize>,
}

impl ChartSeries {
    /// A bar chart of `pmf` over `range`, highlighting `queried` if it is drawn.
    ///
    /// At most [MAX_CHART_BARS] bars are drawn: for wider ranges only the
    /// bars around `center` (usually the mode) are kept.
    pub fn discrete(
        title: String,
        x_label: &str,
        range: RangeInclusive<u64>,
        center: u64,
        pmf: impl Fn(u64) -> f64,
        queried: u64,
    ) -> ChartSeries {
        let range: RangeInclusive<u64> = bar_window(range, center, MAX_CHART_BARS);
        let first: u64 = *range.start();
        let highlight: Option<usize> = if range.contains(&queried) {
            usize::try_from(queried - first).ok()
        } else {
            None
        };

        let (labels, values): (Vec<String>, Vec<f64>) =
            range.map(|k: u64| (k.to_string(), pmf(k))).unzip();

        return ChartSeries {
            title,
            kind: ChartKind::Bar,
            x_label: x_label.to_string(),
            y_label: String::from("Probability"),
            labels,
            values,
            highlight,
        };
    }

    /// A line chart of `pdf` evaluated at `points`, highlighting the point
    /// nearest to `queried`.
    pub fn continuous(
        title: String,
        x_label: &str,
        points: &[f64],
        pdf: impl Fn(f64) -> f64,
        queried: f64,
    ) -> ChartSeries {
        let highlight: Option<usize> = points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - queried).abs().total_cmp(&(*b - queried).abs()))
            .map(|(i, _)| i);

        let labels: Vec<String> = points.iter().map(|x: &f64| format!("{x:.4}")).collect();
        let values: Vec<f64> = points.iter().map(|x: &f64| pdf(*x)).collect();

        return ChartSeries {
            title,
            kind: ChartKind::Line,
            x_label: x_label.to_string(),
            y_label: String::from("Density"),
            labels,
            values,
            highlight,
        };
    }

    #[must_use]
    pub fn len(&self) -> usize {
        return self.values.len();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        return self.values.is_empty();
    }
}

/// The (at most) `bars` consecutive values of `range` centered on `center`,
/// moved inwards when `center` is close to the ends.
fn bar_window(range: RangeInclusive<u64>, center: u64, bars: usize) -> RangeInclusive<u64> {
    let (start, end): (u64, u64) = (*range.start(), *range.end());
    let bars: u64 = bars.max(1) as u64;
    if end < start || end - start < bars {
        return range;
    }

    let first: u64 = center.saturating_sub(bars / 2).clamp(start, end - (bars - 1));
    return first..=(first + (bars - 1));
}

/// A chart that has been handed to the charting library.
///
/// The owner must call [ChartHandle::destroy] before drawing a replacement.
pub trait ChartHandle {
    /// Releases the chart and everything the charting library holds for it.
    fn destroy(self);
}

/// The external charting library.
pub trait ChartRenderer {
    type Chart: ChartHandle;

    /// Creates a new chart for `series`. The renderer does not keep track of
    /// it: ownership goes to the caller.
    fn draw(&mut self, series: &ChartSeries) -> Self::Chart;
}

/// How [TerminalChartRenderer] writes its charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartFormat {
    /// A horizontal bar chart made of text.
    #[default]
    Text,
    /// The [ChartSeries] as pretty printed JSON.
    Json,
}

/// Renders charts as text, for the command line.
#[derive(Debug, Clone, Default)]
pub struct TerminalChartRenderer {
    format: ChartFormat,
    drawn: u64,
}

/// A chart drawn by [TerminalChartRenderer].
#[derive(Debug, PartialEq, Eq)]
pub struct TerminalChart {
    id: u64,
    body: String,
}

impl TerminalChartRenderer {
    #[must_use]
    pub fn new(format: ChartFormat) -> TerminalChartRenderer {
        return TerminalChartRenderer { format, drawn: 0 };
    }

    #[must_use]
    pub fn get_format(&self) -> ChartFormat {
        return self.format;
    }
}

impl TerminalChart {
    /// Identifier of the chart, unique per renderer.
    #[must_use]
    pub fn id(&self) -> u64 {
        return self.id;
    }

    /// The rendered chart, ready to be printed.
    #[must_use]
    pub fn body(&self) -> &str {
        return &self.body;
    }
}

impl ChartHandle for TerminalChart {
    fn destroy(self) {
        tracing::trace!(chart = self.id, "chart released");
    }
}

impl ChartRenderer for TerminalChartRenderer {
    type Chart = TerminalChart;

    fn draw(&mut self, series: &ChartSeries) -> TerminalChart {
        self.drawn += 1;
        let body: String = match self.format {
            ChartFormat::Text => text_chart(series),
            ChartFormat::Json => match serde_json::to_string_pretty(series) {
                Ok(json) => json,
                Err(error) => {
                    tracing::warn!(%error, "could not serialize chart series");
                    String::new()
                }
            },
        };

        tracing::trace!(chart = self.drawn, points = series.len(), "chart drawn");
        return TerminalChart {
            id: self.drawn,
            body,
        };
    }
}

/// Draws `series` as horizontal bars scaled to [TEXT_BAR_WIDTH].
/// The highlighted bar is drawn with `#` instead of `=`.
#[must_use]
pub fn text_chart(series: &ChartSeries) -> String {
    let max: f64 = series.values.iter().copied().fold(0.0, f64::max);
    let label_width: usize = series.labels.iter().map(String::len).max().unwrap_or(0);

    let mut lines: Vec<String> = Vec::with_capacity(series.len() + 2);
    lines.push(series.title.clone());
    lines.push(format!("{} vs {}", series.y_label, series.x_label));

    for (i, (label, value)) in series.labels.iter().zip(series.values.iter()).enumerate() {
        let length: usize = if 0.0 < max {
            ((value / max) * TEXT_BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let highlighted: bool = series.highlight == Some(i);
        let fill: &str = if highlighted { "#" } else { "=" };
        let marker: &str = if highlighted { " <" } else { "" };

        lines.push(format!(
            "{label:>label_width$} | {} {value:.6}{marker}",
            fill.repeat(length)
        ));
    }

    return lines.join("\n");
}
