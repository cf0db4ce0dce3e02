use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};
use crate::state::chart_style::ChartStyle;
use crate::state::palette::CorporatePalette;

/// Title and axis captions of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

/// Settings file contents. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub palette: CorporatePalette,
    pub style: ChartStyle,
    pub line_chart: ChartLabels,
    pub scatter_chart: ChartLabels,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            palette: CorporatePalette::default(),
            style: ChartStyle::default(),
            line_chart: ChartLabels {
                title: "Ventas Mensuales".to_string(),
                x_label: "Mes".to_string(),
                y_label: "Ventas ($)".to_string(),
            },
            scatter_chart: ChartLabels {
                title: "Dispersión de Datos".to_string(),
                x_label: "Variable X".to_string(),
                y_label: "Variable Y".to_string(),
            },
        }
    }
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| DataError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&json)?;
        tracing::info!("Settings loaded from {:?}", path);
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::info!("Settings saved to {:?}", path);
        Ok(())
    }
}
