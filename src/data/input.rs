use polars::prelude::{DataType, Series};

use crate::data::validation;
use crate::error::{InvalidInputError, InvalidInputReason};

/// Raw sales data as handed over by a caller, before validation.
#[derive(Debug, Clone)]
pub enum SalesInput {
    /// Ordered values; labels are the zero-based positions.
    Values(Vec<f64>),
    /// Ordered (label, value) pairs, e.g. month abbreviations and amounts.
    Labeled(Vec<(String, f64)>),
    /// A single homogeneous column. Only numeric dtypes are accepted.
    Column(Series),
}

impl SalesInput {
    pub fn len(&self) -> usize {
        match self {
            SalesInput::Values(values) => values.len(),
            SalesInput::Labeled(pairs) => pairs.len(),
            SalesInput::Column(series) => series.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SalesInput::Values(_) => "values",
            SalesInput::Labeled(_) => "labeled",
            SalesInput::Column(_) => "column",
        }
    }
}

impl From<Vec<f64>> for SalesInput {
    fn from(values: Vec<f64>) -> Self {
        SalesInput::Values(values)
    }
}

impl From<Vec<(String, f64)>> for SalesInput {
    fn from(pairs: Vec<(String, f64)>) -> Self {
        SalesInput::Labeled(pairs)
    }
}

impl From<Series> for SalesInput {
    fn from(series: Series) -> Self {
        SalesInput::Column(series)
    }
}

/// Whether a polars dtype holds plain integers or floats.
pub(crate) fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Values of a numeric column as `f64`, with missing slots as NaN.
pub(crate) fn column_values(series: &Series) -> Result<Vec<f64>, InvalidInputError> {
    let unsupported = || {
        InvalidInputError::new(InvalidInputReason::UnsupportedType {
            found: series.dtype().to_string(),
        })
    };
    if !is_numeric_dtype(series.dtype()) {
        return Err(unsupported());
    }
    let cast = series
        .cast(&DataType::Float64)
        .map_err(|_| unsupported())?;
    let chunked = cast.f64().map_err(|_| unsupported())?;
    Ok(chunked
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}

/// A validated, ordered series of labeled sales values.
///
/// Always holds at least one point, every value is finite and labels are
/// unique. The only way to build one is through [`LabeledSeries::try_from_input`]
/// or [`LabeledSeries::from_pairs`], both of which run the validator first.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl LabeledSeries {
    /// Validate `input` and convert it into a series.
    pub fn try_from_input(input: Option<&SalesInput>) -> Result<Self, InvalidInputError> {
        validation::validate(input)?;
        let input = input.ok_or_else(InvalidInputError::null)?;

        let (labels, values) = match input {
            SalesInput::Values(values) => (position_labels(values.len()), values.clone()),
            SalesInput::Labeled(pairs) => pairs.iter().cloned().unzip(),
            SalesInput::Column(series) => {
                let values = column_values(series)?;
                (position_labels(values.len()), values)
            }
        };

        Ok(Self { labels, values })
    }

    /// Convenience for `(label, value)` literals such as `("Ene", 12500.0)`.
    pub fn from_pairs<L: Into<String>>(
        pairs: impl IntoIterator<Item = (L, f64)>,
    ) -> Result<Self, InvalidInputError> {
        let pairs: Vec<(String, f64)> = pairs.into_iter().map(|(l, v)| (l.into(), v)).collect();
        Self::try_from_input(Some(&SalesInput::Labeled(pairs)))
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

fn position_labels(count: usize) -> Vec<String> {
    (0..count).map(|i| i.to_string()).collect()
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
