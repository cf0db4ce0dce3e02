use serde::{Deserialize, Serialize};

use crate::data::input::{LabeledSeries, SalesInput};
use crate::error::InvalidInputError;

/// Summary metrics for a sales series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub total: f64,
    pub mean: f64,
    pub median: f64,
    pub max: f64,
    pub min: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std_dev: f64,
    /// Coefficient of variation in percent. Zero when the mean is exactly zero.
    pub cv: f64,
}

/// Compute the fixed set of summary metrics for a validated series.
pub fn compute_metrics(series: &LabeledSeries) -> MetricsRecord {
    let values = series.values();
    let count = values.len();

    let total: f64 = values.iter().sum();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = bounded_mean(total, count, min, max);

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    let std_dev = if min == max {
        0.0
    } else {
        sample_std_dev(values, mean)
    };

    // Zero-mean series report a CV of 0 instead of dividing by zero.
    let cv = if mean == 0.0 {
        0.0
    } else {
        std_dev / mean * 100.0
    };

    let metrics = MetricsRecord {
        total,
        mean,
        median,
        max,
        min,
        std_dev,
        cv,
    };
    tracing::debug!(count, ?metrics, "computed sales metrics");
    metrics
}

/// Validate `input` and compute its metrics in one step.
pub fn analyze(input: Option<&SalesInput>) -> Result<MetricsRecord, InvalidInputError> {
    let series = LabeledSeries::try_from_input(input)?;
    Ok(compute_metrics(&series))
}

/// `total / count` kept inside `[min, max]`; summation rounding can push it
/// just past the extrema, e.g. three copies of `0.1`.
fn bounded_mean(total: f64, count: usize, min: f64, max: f64) -> f64 {
    (total / count as f64).clamp(min, max)
}

fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Count, spread and quartile summary of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// Format as a two-column table, one statistic per line.
    pub fn report(&self, label: &str) -> String {
        format!(
            "{:<8}{:>14}\ncount{:>17}\nmean{:>18.6}\nstd{:>19.6}\nmin{:>19.6}\n25%{:>19.6}\n50%{:>19.6}\n75%{:>19.6}\nmax{:>19.6}\n",
            "", label, self.count, self.mean, self.std, self.min, self.q25, self.q50, self.q75, self.max
        )
    }
}

/// Count, mean, sample std, extrema and quartiles of a validated series.
pub fn describe(series: &LabeledSeries) -> Describe {
    let values = series.values();
    let count = values.len();
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let (min, max) = (sorted[0], sorted[count - 1]);
    let mean = bounded_mean(values.iter().sum(), count, min, max);

    Describe {
        count,
        mean,
        std: if min == max {
            0.0
        } else {
            sample_std_dev(values, mean)
        },
        min,
        q25: quantile(&sorted, 0.25),
        q50: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max,
    }
}

/// Linear-interpolated quantile of ascending, non-empty `sorted`.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

#[cfg(test)]
#[path = "statistics_tests.rs"]
mod tests;
