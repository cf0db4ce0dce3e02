use eframe::egui;
use serde::{Deserialize, Serialize};

/// Screen pixels per inch used to size figures.
pub const DPI: f32 = 100.0;

/// Typographic points to screen pixels at [`DPI`].
const PT_TO_PX: f32 = DPI / 72.0;

/// Text style used for chart axis titles.
pub const AXIS_LABEL_STYLE: &str = "axis_label";

/// Figure size and font sizes shared by all charts.
///
/// Sizes are given the way a print layout would give them (inches and
/// points) and converted to egui units when applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Width and height in inches.
    pub figure_size: [f32; 2],
    pub font_size: f32,
    pub axis_label_size: f32,
    pub title_size: f32,
    /// Opacity of grid lines, 0..=1.
    pub grid_alpha: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            figure_size: [12.0, 6.0],
            font_size: 10.0,
            axis_label_size: 11.0,
            title_size: 14.0,
            grid_alpha: 0.3,
        }
    }
}

impl ChartStyle {
    pub fn figure_size_px(&self) -> egui::Vec2 {
        egui::vec2(self.figure_size[0] * DPI, self.figure_size[1] * DPI)
    }

    pub fn font_px(&self) -> f32 {
        self.font_size * PT_TO_PX
    }

    pub fn axis_label_px(&self) -> f32 {
        self.axis_label_size * PT_TO_PX
    }

    pub fn title_px(&self) -> f32 {
        self.title_size * PT_TO_PX
    }

    fn text_styles(&self) -> [(egui::TextStyle, egui::FontId); 4] {
        [
            (egui::TextStyle::Body, egui::FontId::proportional(self.font_px())),
            (egui::TextStyle::Small, egui::FontId::proportional(self.font_px())),
            (
                egui::TextStyle::Name(AXIS_LABEL_STYLE.into()),
                egui::FontId::proportional(self.axis_label_px()),
            ),
            (egui::TextStyle::Heading, egui::FontId::proportional(self.title_px())),
        ]
    }

    /// Install the font sizes on `ctx`.
    ///
    /// Applying the same style again leaves the context untouched. Returns
    /// whether anything changed.
    pub fn apply(&self, ctx: &egui::Context) -> bool {
        let current = ctx.style();
        let wanted = self.text_styles();
        if wanted
            .iter()
            .all(|(text_style, font)| current.text_styles.get(text_style) == Some(font))
        {
            return false;
        }

        let mut style = (*current).clone();
        for (text_style, font) in wanted {
            style.text_styles.insert(text_style, font);
        }
        ctx.set_style(style);
        tracing::debug!(
            font = self.font_size,
            axis_label = self.axis_label_size,
            title = self.title_size,
            "applied chart style"
        );
        true
    }
}
