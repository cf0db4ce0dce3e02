use super::*;

fn sample_sales() -> LabeledSeries {
    LabeledSeries::from_pairs([
        ("Ene", 12500.0),
        ("Feb", 15000.0),
        ("Mar", 13800.0),
        ("Abr", 16500.0),
    ])
    .unwrap()
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn four_month_example() {
    let metrics = compute_metrics(&sample_sales());
    assert_eq!(metrics.total, 57800.0);
    assert_eq!(metrics.mean, 14450.0);
    assert_eq!(metrics.median, 14400.0);
    assert_eq!(metrics.max, 16500.0);
    assert_eq!(metrics.min, 12500.0);
    // sqrt(8_730_000 / 3)
    assert_close(metrics.std_dev, 1705.872, 1e-3);
    assert_close(metrics.cv, 11.8053, 1e-3);
}

#[test]
fn single_value_collapses_every_metric() {
    let series = LabeledSeries::from_pairs([("Ene", 42.5)]).unwrap();
    let metrics = compute_metrics(&series);
    assert_eq!(metrics.total, 42.5);
    assert_eq!(metrics.mean, 42.5);
    assert_eq!(metrics.median, 42.5);
    assert_eq!(metrics.max, 42.5);
    assert_eq!(metrics.min, 42.5);
    assert_eq!(metrics.std_dev, 0.0);
    assert_eq!(metrics.cv, 0.0);
}

#[test]
fn odd_count_median_is_middle_value() {
    let series = LabeledSeries::try_from_input(Some(&SalesInput::Values(vec![9.0, 1.0, 5.0])))
        .unwrap();
    assert_eq!(compute_metrics(&series).median, 5.0);
}

#[test]
fn uniform_nonzero_series_has_zero_cv() {
    let series =
        LabeledSeries::try_from_input(Some(&SalesInput::Values(vec![7.0; 5]))).unwrap();
    let metrics = compute_metrics(&series);
    assert_eq!(metrics.std_dev, 0.0);
    assert_eq!(metrics.cv, 0.0);
}

#[test]
fn uniform_inexact_series_has_zero_spread() {
    // 0.1 + 0.1 + 0.1 rounds above 0.3, so a plain mean lands past the max.
    let series =
        LabeledSeries::try_from_input(Some(&SalesInput::Values(vec![0.1; 3]))).unwrap();
    let metrics = compute_metrics(&series);
    assert!(metrics.min <= metrics.mean && metrics.mean <= metrics.max);
    assert_eq!(metrics.mean, 0.1);
    assert_eq!(metrics.std_dev, 0.0);
    assert_eq!(metrics.cv, 0.0);

    let summary = describe(&series);
    assert_eq!(summary.mean, 0.1);
    assert_eq!(summary.std, 0.0);
}

#[test]
fn zero_mean_series_reports_zero_cv() {
    let series =
        LabeledSeries::try_from_input(Some(&SalesInput::Values(vec![-3.0, 3.0]))).unwrap();
    let metrics = compute_metrics(&series);
    assert_eq!(metrics.mean, 0.0);
    assert!(metrics.std_dev > 0.0);
    assert_eq!(metrics.cv, 0.0);
}

#[test]
fn central_values_stay_within_extrema() {
    let data = [
        vec![3.0, -2.0, 8.5, 0.0, 1.25],
        vec![100.0, 100.0, 1.0],
        vec![-5.0, -9.0],
        vec![1e6, 2.0, 3.0, 4.0, 5.0, 6.0],
        vec![0.1; 3],
        vec![0.7, 0.7, 0.7, 0.7, 0.7, 0.7, 0.7],
        vec![1e-3, 1e-3 + 1e-18, 1e-3],
    ];
    for values in data {
        let series =
            LabeledSeries::try_from_input(Some(&SalesInput::Values(values.clone()))).unwrap();
        let m = compute_metrics(&series);
        assert!(m.min <= m.median && m.median <= m.max, "{values:?}");
        assert!(m.min <= m.mean && m.mean <= m.max, "{values:?}");
    }
}

#[test]
fn input_is_not_mutated() {
    let series = sample_sales();
    let before = series.clone();
    let _ = compute_metrics(&series);
    assert_eq!(series, before);
}

#[test]
fn analyze_propagates_validation_errors() {
    assert_eq!(analyze(None).unwrap_err().reason(), "null");
    assert_eq!(
        analyze(Some(&SalesInput::Values(Vec::new()))).unwrap_err().reason(),
        "empty"
    );
    let metrics = analyze(Some(&SalesInput::Values(vec![2.0, 4.0]))).unwrap();
    assert_eq!(metrics.mean, 3.0);
}

#[test]
fn describe_uses_interpolated_quartiles() {
    let summary = describe(&sample_sales());
    assert_eq!(summary.count, 4);
    assert_eq!(summary.min, 12500.0);
    assert_eq!(summary.max, 16500.0);
    // positions 0.75, 1.5, 2.25 over [12500, 13800, 15000, 16500]
    assert_close(summary.q25, 13475.0, 1e-9);
    assert_close(summary.q50, 14400.0, 1e-9);
    assert_close(summary.q75, 15375.0, 1e-9);
    assert_close(summary.std, 1705.872, 1e-3);
}

#[test]
fn describe_report_lists_each_statistic() {
    let text = describe(&sample_sales()).report("ventas");
    for key in ["count", "mean", "std", "min", "25%", "50%", "75%", "max"] {
        assert!(text.contains(key), "missing {key}");
    }
    assert!(text.contains("ventas"));
}
