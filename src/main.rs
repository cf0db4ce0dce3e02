mod app;

use app::SalesApp;
use eframe::egui;
use salesplot::{dashboard_banner, ChartStyle};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    print!("{}", dashboard_banner());

    let figure = ChartStyle::default().figure_size_px();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SalesPlot")
            .with_inner_size([figure.x + 480.0, figure.y + 220.0])
            .with_min_inner_size([800.0, 600.0])
            .with_drag_and_drop(true),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "SalesPlot",
        options,
        Box::new(|cc| Ok(Box::new(SalesApp::new(cc)))),
    )
}
