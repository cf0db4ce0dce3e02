use crate::processing::statistics::MetricsRecord;

const RULE_WIDTH: usize = 50;
const LABEL_WIDTH: usize = 27;
const VALUE_WIDTH: usize = 15;

pub const REPORT_TITLE: &str = "REPORTE DE ANÁLISIS DE VENTAS";
pub const DASHBOARD_TITLE: &str = "DASHBOARD DE VENTAS - SISTEMA INICIALIZADO";

/// Render the sales metrics as the fixed Spanish text report.
pub fn format_report(metrics: &MetricsRecord) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut lines: Vec<String> = vec![
        heavy.clone(),
        centered(REPORT_TITLE),
        heavy.clone(),
        String::new(),
        "MÉTRICAS PRINCIPALES".to_string(),
        light.clone(),
    ];
    lines.push(currency_line("Ventas totales:", metrics.total));
    lines.push(currency_line("Promedio:", metrics.mean));
    lines.push(currency_line("Mediana:", metrics.median));
    lines.push(currency_line("Venta máxima:", metrics.max));
    lines.push(currency_line("Venta mínima:", metrics.min));
    lines.push(String::new());
    lines.push("DISPERSIÓN".to_string());
    lines.push(light);
    lines.push(currency_line("Desviación estándar:", metrics.std_dev));
    lines.push(percent_line("Coeficiente de variación:", metrics.cv));
    lines.push(heavy);

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Startup banner printed by the dashboard.
pub fn dashboard_banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n    {DASHBOARD_TITLE}\n{rule}\n")
}

/// Format with two decimals and `,` grouping, e.g. `57800.0` -> `57,800.00`.
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0.00" would read oddly in a sales report.
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

fn centered(text: &str) -> String {
    format!("{text:^width$}", width = RULE_WIDTH).trim_end().to_string()
}

fn currency_line(label: &str, value: f64) -> String {
    format!(
        "{label:<label_width$}${:>value_width$}",
        format_thousands(value),
        label_width = LABEL_WIDTH,
        value_width = VALUE_WIDTH
    )
}

fn percent_line(label: &str, value: f64) -> String {
    format!(
        "{label:<label_width$}{:>value_width$}",
        format!("{value:.2}%"),
        label_width = LABEL_WIDTH + 1,
        value_width = VALUE_WIDTH
    )
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
