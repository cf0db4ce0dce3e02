use polars::prelude::*;
use salesplot::{
    analyze, compute_metrics, format_report, validate, AnalysisConfig, ChartRenderer,
    LabeledSeries, SalesInput,
};

fn monthly_sales() -> SalesInput {
    SalesInput::Labeled(vec![
        ("Jan".to_string(), 12500.0),
        ("Feb".to_string(), 15000.0),
        ("Mar".to_string(), 13800.0),
        ("Apr".to_string(), 16500.0),
    ])
}

#[test]
fn validated_series_feeds_report_and_chart() {
    let input = monthly_sales();
    validate(Some(&input)).unwrap();

    let series = LabeledSeries::try_from_input(Some(&input)).unwrap();
    let metrics = compute_metrics(&series);
    assert_eq!(metrics.total, 57800.0);
    assert_eq!(metrics.mean, 14450.0);

    let report = format_report(&metrics);
    assert!(report.contains("REPORTE DE ANÁLISIS DE VENTAS"));
    assert!(report.contains("57,800.00"));
    assert!(report.contains("14,450.00"));

    let renderer = ChartRenderer::new(&AnalysisConfig::default());
    let chart = renderer.render_line_chart(&series);
    assert_eq!(chart.x_ticks, vec!["Jan", "Feb", "Mar", "Apr"]);
    assert_eq!(renderer.figures().open_count(), 1);
    chart.close();
    assert_eq!(renderer.figures().open_count(), 0);
}

#[test]
fn polars_column_runs_through_the_pipeline() {
    let column = Series::new("ventas".into(), &[12500i64, 15000, 13800, 16500]);
    let metrics = analyze(Some(&SalesInput::Column(column))).unwrap();
    assert_eq!(metrics.total, 57800.0);
    assert_eq!(metrics.median, 14400.0);
}

#[test]
fn invalid_input_stops_both_branches() {
    let renderer = ChartRenderer::new(&AnalysisConfig::default());
    let empty = SalesInput::Values(Vec::new());

    assert_eq!(analyze(None).unwrap_err().reason(), "null");
    assert_eq!(analyze(Some(&empty)).unwrap_err().reason(), "empty");
    assert_eq!(renderer.render_input(Some(&empty)).unwrap_err().reason(), "empty");
    assert_eq!(renderer.figures().open_count(), 0);
}

#[test]
fn repeated_rendering_does_not_leak_figures() {
    let renderer = ChartRenderer::new(&AnalysisConfig::default());
    let input = monthly_sales();
    for _ in 0..10 {
        let chart = renderer.render_input(Some(&input)).unwrap();
        assert_eq!(renderer.figures().open_count(), 1);
        drop(chart);
    }
    assert_eq!(renderer.figures().open_count(), 0);
}
