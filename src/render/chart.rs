use egui::Color32;

use crate::data::input::{LabeledSeries, SalesInput};
use crate::error::{InvalidInputError, InvalidInputReason};
use crate::render::figure::{FigureHandle, FigureRegistry};
use crate::state::chart_style::ChartStyle;
use crate::state::config::{AnalysisConfig, ChartLabels};
use crate::state::palette::CorporatePalette;

/// Approximate number of value ticks per axis.
const TARGET_TICKS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesKind {
    Line { width: f32 },
    Markers { radius: f32 },
}

/// One drawable series of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A full-length line across the plot, used for grid and reference lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub orientation: Orientation,
    pub value: f64,
    pub color: Color32,
    pub width: f32,
    pub dashed: bool,
}

/// Which borders of the plot area are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spines {
    pub left: bool,
    pub bottom: bool,
    pub top: bool,
    pub right: bool,
}

impl Default for Spines {
    /// Left and bottom only.
    fn default() -> Self {
        Self {
            left: true,
            bottom: true,
            top: false,
            right: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

/// A rendered chart, ready to be shown or exported.
///
/// Holds an open figure slot; call [`Chart::close`] or drop it when done.
#[derive(Debug)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Category names for integer x positions. Empty for a numeric x axis.
    pub x_ticks: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub reference_lines: Vec<GuideLine>,
    pub grid: Vec<GuideLine>,
    pub spines: Spines,
    pub bounds: Bounds,
    pub text_color: Color32,
    pub spine_color: Color32,
    pub background: Color32,
    pub style: ChartStyle,
    figure: FigureHandle,
}

impl Chart {
    pub fn figure_id(&self) -> u64 {
        self.figure.id()
    }

    /// Name for an x position, falling back to the number itself.
    pub fn x_tick_label(&self, x: f64) -> String {
        if self.x_ticks.is_empty() {
            return format_tick(x);
        }
        let rounded = x.round();
        if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        self.x_ticks
            .get(rounded as usize)
            .cloned()
            .unwrap_or_default()
    }

    pub fn close(self) {
        tracing::debug!(figure = self.figure.id(), title = %self.title, "closing chart");
    }
}

/// Builds charts in the corporate palette and shared style.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    palette: CorporatePalette,
    style: ChartStyle,
    line_labels: ChartLabels,
    scatter_labels: ChartLabels,
    figures: FigureRegistry,
}

impl ChartRenderer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            palette: config.palette,
            style: config.style,
            line_labels: config.line_chart.clone(),
            scatter_labels: config.scatter_chart.clone(),
            figures: FigureRegistry::new(),
        }
    }

    pub fn figures(&self) -> &FigureRegistry {
        &self.figures
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Validate `input` and render it as a line chart.
    pub fn render_input(&self, input: Option<&SalesInput>) -> Result<Chart, InvalidInputError> {
        let series = LabeledSeries::try_from_input(input)?;
        Ok(self.render_line_chart(&series))
    }

    /// Line chart of the series in order, with a marker on every point.
    pub fn render_line_chart(&self, series: &LabeledSeries) -> Chart {
        let points: Vec<[f64; 2]> = series
            .values()
            .iter()
            .enumerate()
            .map(|(i, v)| [i as f64, *v])
            .collect();

        let (y_min, y_max) = extent(series.values().iter().copied());
        let y_ticks = nice_ticks(y_min, y_max, TARGET_TICKS);
        let last_x = (series.len() - 1) as f64;

        let grid_color = self.grid_color();
        let mut grid: Vec<GuideLine> = (0..series.len())
            .map(|i| self.grid_line(Orientation::Vertical, i as f64, grid_color))
            .collect();
        grid.extend(
            y_ticks
                .iter()
                .map(|y| self.grid_line(Orientation::Horizontal, *y, grid_color)),
        );

        let chart = Chart {
            title: self.line_labels.title.clone(),
            x_label: self.line_labels.x_label.clone(),
            y_label: self.line_labels.y_label.clone(),
            x_ticks: series.labels().to_vec(),
            series: vec![
                ChartSeries {
                    name: self.line_labels.y_label.clone(),
                    kind: SeriesKind::Line { width: 2.5 },
                    points: points.clone(),
                    color: self.palette.secondary(),
                },
                ChartSeries {
                    name: self.line_labels.y_label.clone(),
                    kind: SeriesKind::Markers { radius: 4.0 },
                    points,
                    color: self.palette.primary(),
                },
            ],
            reference_lines: Vec::new(),
            grid,
            spines: Spines::default(),
            bounds: Bounds {
                x: [-0.5, last_x + 0.5],
                y: [y_ticks[0], y_ticks[y_ticks.len() - 1]],
            },
            text_color: self.palette.primary(),
            spine_color: self.palette.primary(),
            background: Color32::WHITE,
            style: self.style,
            figure: self.figures.open(),
        };
        tracing::debug!(
            figure = chart.figure_id(),
            points = series.len(),
            "rendered line chart"
        );
        chart
    }

    /// Scatter plot of `(x, y)` samples with dashed reference lines on both axes.
    pub fn render_scatter_chart(&self, samples: &[(f64, f64)]) -> Result<Chart, InvalidInputError> {
        if samples.is_empty() {
            return Err(InvalidInputError::empty());
        }
        if let Some(index) = samples
            .iter()
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(InvalidInputError::new(InvalidInputReason::NonFinite {
                index,
            }));
        }

        // Include the origin so the reference lines are always on screen.
        let (x_min, x_max) = extent(samples.iter().map(|(x, _)| *x).chain([0.0]));
        let (y_min, y_max) = extent(samples.iter().map(|(_, y)| *y).chain([0.0]));
        let x_ticks = nice_ticks(x_min, x_max, TARGET_TICKS);
        let y_ticks = nice_ticks(y_min, y_max, TARGET_TICKS);

        let grid_color = self.grid_color();
        let mut grid: Vec<GuideLine> = x_ticks
            .iter()
            .map(|x| self.grid_line(Orientation::Vertical, *x, grid_color))
            .collect();
        grid.extend(
            y_ticks
                .iter()
                .map(|y| self.grid_line(Orientation::Horizontal, *y, grid_color)),
        );

        let reference_lines = [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .map(|orientation| GuideLine {
                orientation,
                value: 0.0,
                color: self.palette.accent(),
                width: 1.0,
                dashed: true,
            })
            .collect();

        let chart = Chart {
            title: self.scatter_labels.title.clone(),
            x_label: self.scatter_labels.x_label.clone(),
            y_label: self.scatter_labels.y_label.clone(),
            x_ticks: Vec::new(),
            series: vec![ChartSeries {
                name: self.scatter_labels.title.clone(),
                kind: SeriesKind::Markers { radius: 3.5 },
                points: samples.iter().map(|(x, y)| [*x, *y]).collect(),
                color: self.palette.secondary().gamma_multiply(0.5),
            }],
            reference_lines,
            grid,
            spines: Spines::default(),
            bounds: Bounds {
                x: [x_ticks[0], x_ticks[x_ticks.len() - 1]],
                y: [y_ticks[0], y_ticks[y_ticks.len() - 1]],
            },
            text_color: self.palette.primary(),
            spine_color: self.palette.primary(),
            background: Color32::WHITE,
            style: self.style,
            figure: self.figures.open(),
        };
        tracing::debug!(
            figure = chart.figure_id(),
            points = samples.len(),
            "rendered scatter chart"
        );
        Ok(chart)
    }

    fn grid_color(&self) -> Color32 {
        self.palette.primary().gamma_multiply(self.style.grid_alpha)
    }

    fn grid_line(&self, orientation: Orientation, value: f64, color: Color32) -> GuideLine {
        GuideLine {
            orientation,
            value,
            color,
            width: 1.0,
            dashed: false,
        }
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Evenly spaced round tick values covering `min..=max`.
///
/// Always returns at least two ticks; a flat range is widened first.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (min, max) = if max > min {
        (min, max)
    } else {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        (min - pad, max + pad)
    };

    let step = nice_step((max - min) / target.saturating_sub(1).max(1) as f64);
    let first = (min / step).floor() * step;
    let last = (max / step).ceil() * step;
    let count = ((last - first) / step).round() as usize;

    (0..=count).map(|i| first + i as f64 * step).collect()
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
