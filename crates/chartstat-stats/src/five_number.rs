use serde::{Deserialize, Serialize};

use crate::{StatsError, quantile::quantile_sorted};

/// Interquartile-range multiplier used for box-plot whiskers.
pub const DEFAULT_WHISKER_FACTOR: f64 = 1.5;

/// Box-plot statistics of a numeric sample.
///
/// Fences are clamped to the observed range; they never extend beyond
/// `min` or `max`. Outliers are the values strictly outside the fences, in
/// ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    pub outliers: Vec<f64>,
}

impl FiveNumberSummary {
    /// Computes the summary from unsorted values with the standard `1.5 * IQR`
    /// whiskers.
    ///
    /// # Examples
    ///
    /// ```
    /// use chartstat_stats::five_number::FiveNumberSummary;
    ///
    /// let summary = FiveNumberSummary::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
    /// assert_eq!(summary.median, 3.5);
    /// assert_eq!(summary.q1, 2.25);
    /// assert_eq!(summary.q3, 4.75);
    /// assert_eq!(summary.outliers, vec![100.0]);
    /// ```
    pub fn new(values: &[f64]) -> Result<Self, StatsError> {
        Self::with_whisker_factor(values, DEFAULT_WHISKER_FACTOR)
    }

    /// Computes the summary from unsorted values, placing the unclamped fences
    /// `whisker_factor` interquartile ranges beyond the quartiles.
    pub fn with_whisker_factor(values: &[f64], whisker_factor: f64) -> Result<Self, StatsError> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, whisker_factor)
    }

    /// Computes the summary from values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    pub fn from_sorted(sorted_values: &[f64], whisker_factor: f64) -> Result<Self, StatsError> {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Err(StatsError::empty("five-number summary"));
        };
        let q = |p| quantile_sorted(sorted_values, p).unwrap_or(min);
        let q1 = q(0.25);
        let median = q(0.5);
        let q3 = q(0.75);

        let iqr = q3 - q1;
        let lower_fence = f64::max(q1 - whisker_factor * iqr, min);
        let upper_fence = f64::min(q3 + whisker_factor * iqr, max);
        let outliers = sorted_values
            .iter()
            .copied()
            .filter(|v| *v < lower_fence || *v > upper_fence)
            .collect();

        Ok(Self {
            min,
            q1,
            median,
            q3,
            max,
            lower_fence,
            upper_fence,
            outliers,
        })
    }

    /// Interquartile range (`q3 - q1`).
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_error() {
        assert_eq!(
            FiveNumberSummary::new(&[]),
            Err(StatsError::EmptyInput {
                statistic: "five-number summary"
            })
        );
    }

    #[test]
    fn test_single_value() {
        let summary = FiveNumberSummary::new(&[42.0]).unwrap();
        assert_eq!(summary.min, 42.0);
        assert_eq!(summary.q1, 42.0);
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.q3, 42.0);
        assert_eq!(summary.max, 42.0);
        assert_eq!(summary.lower_fence, 42.0);
        assert_eq!(summary.upper_fence, 42.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn test_fences_clamped_to_observed_range() {
        let summary = FiveNumberSummary::new(&[10.0, 11.0, 12.0, 13.0, 14.0]).unwrap();
        assert_eq!(summary.iqr(), 2.0);
        assert_eq!(summary.lower_fence, 10.0);
        assert_eq!(summary.upper_fence, 14.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn test_outliers_on_both_sides() {
        let values = [-50.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 90.0];
        let summary = FiveNumberSummary::new(&values).unwrap();
        assert_eq!(summary.outliers, vec![-50.0, 90.0]);
        assert!(summary.lower_fence > -50.0);
        assert!(summary.upper_fence < 90.0);
    }

    #[test]
    fn test_unsorted_input() {
        let a = FiveNumberSummary::new(&[5.0, 3.0, 1.0, 4.0, 2.0]).unwrap();
        let b = FiveNumberSummary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_whisker_factor_flags_outside_box() {
        let summary =
            FiveNumberSummary::with_whisker_factor(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.0).unwrap();
        assert_eq!(summary.lower_fence, 2.0);
        assert_eq!(summary.upper_fence, 4.0);
        assert_eq!(summary.outliers, vec![1.0, 5.0]);
    }
}
