use std::path::PathBuf;

use super::*;

#[test]
fn reason_strings_are_stable() {
    assert_eq!(InvalidInputError::null().reason(), "null");
    assert_eq!(InvalidInputError::empty().reason(), "empty");
    assert_eq!(
        InvalidInputError::new(InvalidInputReason::UnsupportedType {
            found: "str".to_string()
        })
        .reason(),
        "unsupported_type"
    );
    assert_eq!(
        InvalidInputError::new(InvalidInputReason::NonFinite { index: 2 }).reason(),
        "non_finite"
    );
    assert_eq!(
        InvalidInputError::new(InvalidInputReason::DuplicateLabel {
            label: "Ene".to_string()
        })
        .reason(),
        "duplicate_label"
    );
}

#[test]
fn invalid_input_display_names_reason() {
    let err = InvalidInputError::empty();
    assert_eq!(err.to_string(), "Invalid input (empty): the data set is empty");

    let err = InvalidInputError::new(InvalidInputReason::NonFinite { index: 3 });
    assert!(err.to_string().contains("position 3"));
}

#[test]
fn data_error_wraps_invalid_input_transparently() {
    let err: DataError = InvalidInputError::null().into();
    assert_eq!(err.to_string(), "Invalid input (null): no data was provided");
}

#[test]
fn data_error_display_file_read() {
    let err = DataError::FileRead {
        path: PathBuf::from("ventas.csv"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("ventas.csv"));
}

#[test]
fn data_error_display_unsupported_format() {
    let err = DataError::UnsupportedFormat("txt".to_string());
    assert_eq!(err.to_string(), "Unsupported file format: .txt");
}
