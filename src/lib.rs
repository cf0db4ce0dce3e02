//! Sales analysis: validate a labeled sales series, compute summary metrics,
//! format the text report and build styled charts.

pub mod data;
pub mod error;
pub mod processing;
pub mod render;
pub mod report;
pub mod state;

pub use data::input::{LabeledSeries, SalesInput};
pub use data::validation::validate;
pub use error::{DataError, InvalidInputError, InvalidInputReason};
pub use processing::statistics::{analyze, compute_metrics, describe, Describe, MetricsRecord};
pub use render::chart::{Chart, ChartRenderer};
pub use render::figure::{FigureHandle, FigureRegistry};
pub use report::formatter::{dashboard_banner, format_report, format_thousands};
pub use state::chart_style::ChartStyle;
pub use state::config::AnalysisConfig;
pub use state::palette::CorporatePalette;
