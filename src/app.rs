use std::sync::{Arc, Mutex};

use eframe::egui;
use salesplot::data::loader;
use salesplot::render::plot_view;
use salesplot::{
    compute_metrics, describe, format_report, AnalysisConfig, Chart, ChartRenderer, DataError,
    Describe, InvalidInputError, InvalidInputReason, LabeledSeries, MetricsRecord, SalesInput,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which chart the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartTab {
    Line,
    Scatter,
}

/// Everything derived from one validated data set.
struct Analysis {
    metrics: MetricsRecord,
    report: String,
    summary: Describe,
    line_chart: Chart,
    scatter_chart: Option<Chart>,
}

/// Pending background file load.
struct PendingLoad {
    result: Arc<Mutex<Option<Result<SalesInput, DataError>>>>,
}

/// The sales dashboard window.
pub struct SalesApp {
    config: AnalysisConfig,
    renderer: ChartRenderer,
    input: SalesInput,
    source_name: String,
    analysis: Option<Analysis>,
    tab: ChartTab,
    error_message: Option<String>,
    pending_load: Option<PendingLoad>,
    pending_screenshot: bool,
    chart_rect: Option<egui::Rect>,
}

fn demo_input() -> SalesInput {
    SalesInput::Labeled(
        [
            ("Ene", 12500.0),
            ("Feb", 15000.0),
            ("Mar", 13800.0),
            ("Abr", 16500.0),
            ("May", 17200.0),
            ("Jun", 16100.0),
        ]
        .into_iter()
        .map(|(label, value)| (label.to_string(), value))
        .collect(),
    )
}

/// User-facing text for a rejected data set.
fn user_message(err: &InvalidInputError) -> String {
    match &err.reason {
        InvalidInputReason::Null => "No hay datos para analizar.".to_string(),
        InvalidInputReason::Empty => "El conjunto de datos está vacío.".to_string(),
        InvalidInputReason::UnsupportedType { found } => {
            format!("Tipo de datos no soportado: {found}.")
        }
        InvalidInputReason::NonFinite { index } => {
            format!("El valor en la fila {} no es un número válido.", index + 1)
        }
        InvalidInputReason::DuplicateLabel { label } => {
            format!("La etiqueta \"{label}\" está repetida.")
        }
    }
}

impl SalesApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AnalysisConfig::default();
        config.style.apply(&cc.egui_ctx);

        let mut app = Self {
            renderer: ChartRenderer::new(&config),
            config,
            input: demo_input(),
            source_name: "demo".to_string(),
            analysis: None,
            tab: ChartTab::Line,
            error_message: None,
            pending_load: None,
            pending_screenshot: false,
            chart_rect: None,
        };
        app.run_analysis();
        app
    }

    /// Validate the current input and rebuild metrics, report and charts.
    fn run_analysis(&mut self) {
        // Release the previous charts before rendering new ones.
        self.analysis = None;

        let series = match LabeledSeries::try_from_input(Some(&self.input)) {
            Ok(series) => series,
            Err(e) => {
                tracing::error!("Rejected {} data: {e}", self.source_name);
                self.error_message = Some(user_message(&e));
                return;
            }
        };

        let metrics = compute_metrics(&series);
        let report = format_report(&metrics);
        println!("{report}");

        // Deviations from the mean, one point per period.
        let center = (series.len() - 1) as f64 / 2.0;
        let deviations: Vec<(f64, f64)> = series
            .values()
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64 - center, v - metrics.mean))
            .collect();
        let scatter_chart = match self.renderer.render_scatter_chart(&deviations) {
            Ok(chart) => Some(chart),
            Err(e) => {
                tracing::warn!("Scatter chart skipped: {e}");
                None
            }
        };

        self.analysis = Some(Analysis {
            metrics,
            report,
            summary: describe(&series),
            line_chart: self.renderer.render_line_chart(&series),
            scatter_chart,
        });
        self.error_message = None;
        tracing::info!(
            "Analyzed {} points from {} ({} open figures)",
            series.len(),
            self.source_name,
            self.renderer.figures().open_count()
        );
    }

    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Data Files", &["csv", "xls", "xlsx"])
            .add_filter("All Files", &["*"])
            .pick_file()
        {
            self.load_file(&path);
        }
    }

    /// Parse a data file on a worker thread so the UI stays responsive.
    fn load_file(&mut self, path: &std::path::Path) {
        let path_buf = path.to_path_buf();
        self.source_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let result: Arc<Mutex<Option<Result<SalesInput, DataError>>>> =
            Arc::new(Mutex::new(None));
        let result_clone = Arc::clone(&result);

        std::thread::spawn(move || {
            let loaded = loader::load_file(&path_buf);
            if let Ok(mut slot) = result_clone.lock() {
                *slot = Some(loaded);
            }
        });

        self.pending_load = Some(PendingLoad { result });
    }

    fn poll_pending_load(&mut self) {
        let Some(pending) = &self.pending_load else {
            return;
        };
        let finished = match pending.result.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => Some(Err(DataError::NoData(self.source_name.clone().into()))),
        };
        let Some(result) = finished else {
            return;
        };
        self.pending_load = None;

        match result {
            Ok(input) => {
                self.input = input;
                self.run_analysis();
            }
            Err(e) => {
                tracing::error!("Failed to load file: {e}");
                self.error_message = Some(format!("Failed to load file: {e}"));
            }
        }
    }

    fn save_settings(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("salesplot.json")
            .add_filter("Settings", &["json"])
            .save_file()
        {
            if let Err(e) = self.config.save(&path) {
                tracing::error!("Failed to save settings: {e}");
                self.error_message = Some(format!("Failed to save settings: {e}"));
            }
        }
    }

    fn load_settings(&mut self, ctx: &egui::Context) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Settings", &["json"])
            .pick_file()
        {
            match AnalysisConfig::load(&path) {
                Ok(config) => {
                    config.style.apply(ctx);
                    self.renderer = ChartRenderer::new(&config);
                    self.config = config;
                    self.run_analysis();
                }
                Err(e) => {
                    self.error_message = Some(format!("Failed to load settings: {e}"));
                }
            }
        }
    }

    /// Save the chart region of a captured frame as a PNG.
    fn save_screenshot(&mut self, ctx: &egui::Context, color_image: &egui::ColorImage) {
        let ppp = ctx.pixels_per_point();
        let full_w = color_image.width();
        let full_h = color_image.height();

        let (x0, y0, x1, y1) = match self.chart_rect {
            Some(rect) => (
                ((rect.left() * ppp) as usize).min(full_w),
                ((rect.top() * ppp) as usize).min(full_h),
                ((rect.right() * ppp).ceil() as usize).min(full_w),
                ((rect.bottom() * ppp).ceil() as usize).min(full_h),
            ),
            None => (0, 0, full_w, full_h),
        };
        let width = x1.saturating_sub(x0);
        let height = y1.saturating_sub(y0);
        let mut rgba = Vec::with_capacity(width * height * 4);
        for row in y0..y1 {
            for col in x0..x1 {
                let c = color_image.pixels[row * full_w + col];
                rgba.extend_from_slice(&[c.r(), c.g(), c.b(), c.a()]);
            }
        }

        if let Some(path) = rfd::FileDialog::new()
            .set_file_name("grafico_ventas.png")
            .add_filter("PNG Image", &["png"])
            .save_file()
        {
            match image::RgbaImage::from_raw(width as u32, height as u32, rgba) {
                Some(img) => match img.save(&path) {
                    Ok(()) => tracing::info!("Saved chart to {:?}", path),
                    Err(e) => self.error_message = Some(format!("Failed to save image: {e}")),
                },
                None => self.error_message = Some("Captured image was empty".to_string()),
            }
        }
    }

    fn show_report_panel(&self, ui: &mut egui::Ui) {
        let Some(analysis) = &self.analysis else {
            ui.label(egui::RichText::new("Sin datos válidos.").weak());
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.label(egui::RichText::new(&analysis.report).monospace());
            ui.add_space(8.0);
            ui.collapsing("Resumen estadístico", |ui| {
                ui.label(egui::RichText::new(analysis.summary.report(&self.source_name)).monospace());
            });
            ui.add_space(8.0);
            let metrics = &analysis.metrics;
            let cv_color = if metrics.cv > 25.0 {
                self.config.palette.warning()
            } else {
                self.config.palette.success()
            };
            ui.colored_label(cv_color, format!("Variación relativa: {:.2}%", metrics.cv));
        });
    }
}

impl eframe::App for SalesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // No-op unless settings changed.
        self.config.style.apply(ctx);

        // ------------------------------------------------------------------
        // 0. Handle the screenshot requested on a previous frame
        // ------------------------------------------------------------------
        if self.pending_screenshot {
            let mut screenshot_image: Option<Arc<egui::ColorImage>> = None;
            ctx.input(|i| {
                for event in &i.raw.events {
                    if let egui::Event::Screenshot { image, .. } = event {
                        screenshot_image = Some(image.clone());
                    }
                }
            });
            if let Some(color_image) = screenshot_image {
                self.pending_screenshot = false;
                self.save_screenshot(ctx, &color_image);
            }
        }

        // ------------------------------------------------------------------
        // 1. Dropped files
        // ------------------------------------------------------------------
        let dropped: Option<std::path::PathBuf> =
            ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()));
        if let Some(path) = dropped {
            self.load_file(&path);
        }
        self.poll_pending_load();

        // --- Header panel ---
        let mut open_file = false;
        let mut load_settings = false;
        let mut save_settings = false;
        let mut load_demo = false;
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("SalesPlot");
                    ui.separator();
                    if ui.button("Open Data").clicked() {
                        open_file = true;
                    }
                    if ui.button("Demo Data").clicked() {
                        load_demo = true;
                    }
                    ui.separator();
                    if ui.button("Load Settings").clicked() {
                        load_settings = true;
                    }
                    if ui.button("Save Settings").clicked() {
                        save_settings = true;
                    }
                    ui.separator();
                    let can_capture = self.analysis.is_some() && !self.pending_screenshot;
                    if ui.add_enabled(can_capture, egui::Button::new("Save Chart PNG")).clicked() {
                        self.pending_screenshot = true;
                        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small(format!("v{VERSION}"));
                    });
                });
            });

        if open_file {
            self.open_file_dialog();
        }
        if load_demo {
            self.input = demo_input();
            self.source_name = "demo".to_string();
            self.run_analysis();
        }
        if load_settings {
            self.load_settings(ctx);
        }
        if save_settings {
            self.save_settings();
        }

        // --- Footer panel ---
        egui::TopBottomPanel::bottom("footer")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 6)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("Fuente: {}", self.source_name)).weak());
                    ui.separator();
                    let open = self.renderer.figures().open_count();
                    ui.label(egui::RichText::new(format!("{open} open figures")).weak());

                    if let Some(msg) = &self.error_message {
                        ui.separator();
                        ui.colored_label(self.config.palette.accent(), msg);
                        if ui.small_button("dismiss").clicked() {
                            self.error_message = None;
                        }
                    }
                });
            });

        // --- Report side panel ---
        egui::SidePanel::left("report")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| self.show_report_panel(ui));

        // --- Central chart panel ---
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.tab, ChartTab::Line, "Ventas");
                ui.selectable_value(&mut self.tab, ChartTab::Scatter, "Dispersión");
            });
            ui.separator();

            let chart = self.analysis.as_ref().and_then(|a| match self.tab {
                ChartTab::Line => Some(&a.line_chart),
                ChartTab::Scatter => a.scatter_chart.as_ref(),
            });
            match chart {
                Some(chart) => {
                    self.chart_rect = Some(plot_view::show_chart(ui, chart));
                }
                None => {
                    self.chart_rect = None;
                    ui.vertical_centered(|ui| {
                        ui.add_space(80.0);
                        ui.label(
                            egui::RichText::new(
                                "Open a CSV / Excel file with month and amount columns, or drop one here.",
                            )
                            .weak(),
                        );
                    });
                }
            }
        });

        // Show loading indicator
        if self.pending_load.is_some() {
            egui::Window::new("Loading")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading file...");
                    });
                });
            ctx.request_repaint();
        }
    }
}
