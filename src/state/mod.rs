pub mod chart_style;
pub mod config;
pub mod palette;
