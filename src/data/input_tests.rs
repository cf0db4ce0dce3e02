use polars::prelude::*;

use super::*;

#[test]
fn plain_values_get_position_labels() {
    let input = SalesInput::from(vec![10.0, 20.0, 30.0]);
    let series = LabeledSeries::try_from_input(Some(&input)).unwrap();
    assert_eq!(series.labels(), &["0", "1", "2"]);
    assert_eq!(series.values(), &[10.0, 20.0, 30.0]);
}

#[test]
fn pairs_keep_their_order() {
    let series =
        LabeledSeries::from_pairs([("Mar", 3.0), ("Ene", 1.0), ("Feb", 2.0)]).unwrap();
    let collected: Vec<(&str, f64)> = series.iter().collect();
    assert_eq!(collected, vec![("Mar", 3.0), ("Ene", 1.0), ("Feb", 2.0)]);
}

#[test]
fn integer_column_is_converted_to_floats() {
    let input = SalesInput::from(Series::new("unidades".into(), &[4i32, 7, 9]));
    let series = LabeledSeries::try_from_input(Some(&input)).unwrap();
    assert_eq!(series.values(), &[4.0, 7.0, 9.0]);
    assert_eq!(series.len(), 3);
}

#[test]
fn conversion_propagates_validator_error() {
    let err = LabeledSeries::try_from_input(None).unwrap_err();
    assert_eq!(err.reason(), "null");

    let err = LabeledSeries::from_pairs(Vec::<(&str, f64)>::new()).unwrap_err();
    assert_eq!(err.reason(), "empty");
}

#[test]
fn input_len_counts_elements() {
    assert_eq!(SalesInput::Values(vec![1.0, 2.0]).len(), 2);
    assert!(SalesInput::Labeled(Vec::new()).is_empty());
}
