//! Summary statistics used by the aggregators.

use std::fmt;
use std::str::FromStr;

/// Statistic computed over each iteration window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatMethod {
    /// Middle cut point of the exclusive-method quartiles.
    #[default]
    Median,
    /// Arithmetic mean.
    Mean,
}

impl StatMethod {
    /// Apply the statistic to `values`. Returns `None` for an empty slice.
    pub fn apply(self, values: &[f64]) -> Option<f64> {
        match self {
            Self::Median => median_exclusive(values),
            Self::Mean => mean(values),
        }
    }
}

impl fmt::Display for StatMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Median => f.write_str("median"),
            Self::Mean => f.write_str("mean"),
        }
    }
}

impl FromStr for StatMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "median" => Ok(Self::Median),
            "mean" => Ok(Self::Mean),
            other => Err(format!("unknown method '{other}' (expected median or mean)")),
        }
    }
}

/// Arithmetic mean. `None` if `values` is empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Cut points dividing `values` into `n` equal-probability intervals, using the exclusive
/// method (the sample is treated as drawn from a population that can hold more extreme values).
///
/// Returns `n - 1` cut points. A single value is repeated; an empty slice or `n < 1` yields an
/// empty vector.
pub fn quantiles_exclusive(values: &[f64], n: usize) -> Vec<f64> {
    if n < 1 || values.is_empty() {
        return Vec::new();
    }

    let mut data = values.to_vec();
    data.sort_by(|a, b| a.total_cmp(b));
    let len = data.len();
    if len == 1 {
        return vec![data[0]; n - 1];
    }

    let m = len + 1;
    (1..n)
        .map(|i| {
            let j = (i * m / n).clamp(1, len - 1);
            let delta = (i * m) as f64 - (j * n) as f64;
            (data[j - 1] * (n as f64 - delta) + data[j] * delta) / n as f64
        })
        .collect()
}

/// Median as the second of the three exclusive-method quartile cut points.
pub fn median_exclusive(values: &[f64]) -> Option<f64> {
    quantiles_exclusive(values, 4).get(1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_identical_values_is_that_value() {
        assert_eq!(mean(&[7.0; 10]), Some(7.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn median_matches_textbook_median() {
        assert_eq!(median_exclusive(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median_exclusive(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median_exclusive(&[10.0, 12.0]), Some(11.0));
        assert_eq!(median_exclusive(&[5.0]), Some(5.0));
        assert_eq!(median_exclusive(&[]), None);
    }

    #[test]
    fn exclusive_quartiles_interpolate() {
        // Reference values from the exclusive-method definition on 1..=10.
        let q = quantiles_exclusive(&(1..=10).map(f64::from).collect::<Vec<_>>(), 4);
        assert_eq!(q, vec![2.75, 5.5, 8.25]);
    }

    #[test]
    fn method_parses_and_displays() {
        assert_eq!("MEAN".parse::<StatMethod>(), Ok(StatMethod::Mean));
        assert_eq!(StatMethod::Median.to_string(), "median");
        assert!("mode".parse::<StatMethod>().is_err());
    }
}
