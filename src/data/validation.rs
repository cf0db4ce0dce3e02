use std::collections::HashSet;

use crate::data::input::{column_values, is_numeric_dtype, SalesInput};
use crate::error::{InvalidInputError, InvalidInputReason};

/// Check that `data` is present, non-empty and of an accepted container type.
///
/// Checks run in a fixed order: null, empty, unsupported type, non-finite
/// values, duplicate labels. The first failing check decides the reason.
pub fn validate(data: Option<&SalesInput>) -> Result<(), InvalidInputError> {
    let data = data.ok_or_else(InvalidInputError::null)?;

    if data.is_empty() {
        return Err(InvalidInputError::empty());
    }

    match data {
        SalesInput::Values(values) => check_finite(values.iter().copied()),
        SalesInput::Labeled(pairs) => {
            check_finite(pairs.iter().map(|(_, v)| *v))?;
            check_unique_labels(pairs.iter().map(|(label, _)| label.as_str()))
        }
        SalesInput::Column(series) => {
            if !is_numeric_dtype(series.dtype()) {
                return Err(InvalidInputError::new(InvalidInputReason::UnsupportedType {
                    found: series.dtype().to_string(),
                }));
            }
            check_finite(column_values(series)?.into_iter())
        }
    }
}

fn check_finite(values: impl Iterator<Item = f64>) -> Result<(), InvalidInputError> {
    match values.enumerate().find(|(_, v)| !v.is_finite()) {
        Some((index, _)) => Err(InvalidInputError::new(InvalidInputReason::NonFinite {
            index,
        })),
        None => Ok(()),
    }
}

fn check_unique_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Result<(), InvalidInputError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for label in labels {
        if !seen.insert(label) {
            return Err(InvalidInputError::new(InvalidInputReason::DuplicateLabel {
                label: label.to_string(),
            }));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
