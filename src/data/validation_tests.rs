use polars::prelude::*;

use super::*;

#[test]
fn absent_input_is_null() {
    let err = validate(None).unwrap_err();
    assert_eq!(err.reason(), "null");
    assert_eq!(err.reason, InvalidInputReason::Null);
}

#[test]
fn zero_length_containers_are_empty() {
    let inputs = [
        SalesInput::Values(Vec::new()),
        SalesInput::Labeled(Vec::new()),
        SalesInput::Column(Series::new("ventas".into(), Vec::<f64>::new())),
    ];
    for input in &inputs {
        let err = validate(Some(input)).unwrap_err();
        assert_eq!(err.reason(), "empty", "input kind {}", input.kind());
    }
}

#[test]
fn accepts_numeric_sequence_and_pairs() {
    assert!(validate(Some(&SalesInput::Values(vec![1.0, 2.0]))).is_ok());
    let pairs = vec![("Ene".to_string(), 12500.0), ("Feb".to_string(), 15000.0)];
    assert!(validate(Some(&SalesInput::Labeled(pairs))).is_ok());
}

#[test]
fn accepts_integer_and_float_columns() {
    let ints = Series::new("unidades".into(), &[3i64, 5, 8]);
    let floats = Series::new("ventas".into(), &[1.5f32, 2.5]);
    assert!(validate(Some(&SalesInput::Column(ints))).is_ok());
    assert!(validate(Some(&SalesInput::Column(floats))).is_ok());
}

#[test]
fn string_column_is_unsupported_type() {
    let series = Series::new("meses".into(), &["Ene", "Feb"]);
    let err = validate(Some(&SalesInput::Column(series))).unwrap_err();
    assert_eq!(err.reason(), "unsupported_type");
}

#[test]
fn boolean_column_is_unsupported_type() {
    let series = Series::new("flags".into(), &[true, false]);
    let err = validate(Some(&SalesInput::Column(series))).unwrap_err();
    assert_eq!(err.reason(), "unsupported_type");
}

#[test]
fn empty_check_runs_before_type_check() {
    let series = Series::new("meses".into(), Vec::<String>::new());
    let err = validate(Some(&SalesInput::Column(series))).unwrap_err();
    assert_eq!(err.reason(), "empty");
}

#[test]
fn nan_and_infinity_are_rejected_with_position() {
    let err = validate(Some(&SalesInput::Values(vec![1.0, f64::NAN]))).unwrap_err();
    assert_eq!(err.reason, InvalidInputReason::NonFinite { index: 1 });

    let pairs = vec![("Ene".to_string(), f64::INFINITY)];
    let err = validate(Some(&SalesInput::Labeled(pairs))).unwrap_err();
    assert_eq!(err.reason, InvalidInputReason::NonFinite { index: 0 });
}

#[test]
fn null_slot_in_column_is_non_finite() {
    let series = Series::new("ventas".into(), &[Some(1.0f64), None, Some(3.0)]);
    let err = validate(Some(&SalesInput::Column(series))).unwrap_err();
    assert_eq!(err.reason, InvalidInputReason::NonFinite { index: 1 });
}

#[test]
fn duplicate_labels_are_rejected() {
    let pairs = vec![
        ("Ene".to_string(), 1.0),
        ("Feb".to_string(), 2.0),
        ("Ene".to_string(), 3.0),
    ];
    let err = validate(Some(&SalesInput::Labeled(pairs))).unwrap_err();
    assert_eq!(
        err.reason,
        InvalidInputReason::DuplicateLabel {
            label: "Ene".to_string()
        }
    );
}
