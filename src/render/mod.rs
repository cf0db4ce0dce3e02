pub mod chart;
pub mod figure;
pub mod plot_view;
