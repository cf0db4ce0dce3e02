use std::ops::RangeInclusive;

use eframe::egui;
use egui_plot::{GridMark, HLine, Line, LineStyle, MarkerShape, Plot, PlotPoints, PlotUi, Points, VLine};

use crate::render::chart::{Chart, GuideLine, Orientation, SeriesKind};
use crate::report::formatter::format_thousands;

/// Draw `chart` into `ui`: title above, fixed non-interactive plot below.
///
/// Returns the rect the chart occupied so callers can crop screenshots to it.
pub fn show_chart(ui: &mut egui::Ui, chart: &Chart) -> egui::Rect {
    let figure = chart.style.figure_size_px();

    egui::Frame::new()
        .fill(chart.background)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(&chart.title)
                    .size(chart.style.title_px())
                    .strong()
                    .color(chart.text_color),
            );
            ui.add_space(6.0);

            let width = figure.x.min(ui.available_width());
            let height = figure.y.min(ui.available_height().max(200.0));
            let axis_font = chart.style.axis_label_px();

            Plot::new(("sales_chart", chart.figure_id()))
                .width(width)
                .height(height)
                .show_grid(false)
                .show_background(false)
                .allow_zoom(false)
                .allow_drag(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .allow_double_click_reset(false)
                .set_margin_fraction(egui::Vec2::ZERO)
                .include_x(chart.bounds.x[0])
                .include_x(chart.bounds.x[1])
                .include_y(chart.bounds.y[0])
                .include_y(chart.bounds.y[1])
                .x_axis_label(
                    egui::RichText::new(&chart.x_label)
                        .size(axis_font)
                        .color(chart.text_color),
                )
                .y_axis_label(
                    egui::RichText::new(&chart.y_label)
                        .size(axis_font)
                        .color(chart.text_color),
                )
                .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
                    chart.x_tick_label(mark.value)
                })
                .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
                    y_tick_label(mark.value)
                })
                .show(ui, |plot_ui| {
                    for line in &chart.grid {
                        draw_guide(plot_ui, line);
                    }
                    draw_spines(plot_ui, chart);
                    for line in &chart.reference_lines {
                        draw_guide(plot_ui, line);
                    }
                    for series in &chart.series {
                        let points = PlotPoints::new(series.points.clone());
                        match series.kind {
                            SeriesKind::Line { width } => plot_ui.line(
                                Line::new(points)
                                    .color(series.color)
                                    .width(width)
                                    .name(&series.name),
                            ),
                            SeriesKind::Markers { radius } => plot_ui.points(
                                Points::new(points)
                                    .shape(MarkerShape::Circle)
                                    .filled(true)
                                    .radius(radius)
                                    .color(series.color)
                                    .name(&series.name),
                            ),
                        }
                    }
                });
        })
        .response
        .rect
}

/// Whole amounts get grouping without decimals, e.g. `14,000`.
fn y_tick_label(value: f64) -> String {
    let formatted = format_thousands(value);
    match formatted.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

fn draw_guide(plot_ui: &mut PlotUi, guide: &GuideLine) {
    let style = if guide.dashed {
        LineStyle::Dashed { length: 6.0 }
    } else {
        LineStyle::Solid
    };
    match guide.orientation {
        Orientation::Horizontal => plot_ui.hline(
            HLine::new(guide.value)
                .color(guide.color)
                .width(guide.width)
                .style(style),
        ),
        Orientation::Vertical => plot_ui.vline(
            VLine::new(guide.value)
                .color(guide.color)
                .width(guide.width)
                .style(style),
        ),
    }
}

fn draw_spines(plot_ui: &mut PlotUi, chart: &Chart) {
    let [x0, x1] = chart.bounds.x;
    let [y0, y1] = chart.bounds.y;
    let edges = [
        (chart.spines.left, [[x0, y0], [x0, y1]]),
        (chart.spines.bottom, [[x0, y0], [x1, y0]]),
        (chart.spines.top, [[x0, y1], [x1, y1]]),
        (chart.spines.right, [[x1, y0], [x1, y1]]),
    ];
    for (visible, segment) in edges {
        if visible {
            plot_ui.line(
                Line::new(PlotPoints::new(segment.to_vec()))
                    .color(chart.spine_color)
                    .width(1.5),
            );
        }
    }
}
