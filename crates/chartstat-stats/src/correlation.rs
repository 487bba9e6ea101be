use serde::{Deserialize, Serialize};

use crate::{StatsError, sums::PairSums};

/// Pearson correlation coefficient between two numeric fields of the records.
///
/// Returns `0` when the denominator vanishes, i.e. when either field has zero
/// variance (this includes datasets with fewer than two records). Use
/// [`try_pearson`] to reject that case instead.
///
/// # Examples
///
/// ```
/// use chartstat_stats::correlation::pearson;
///
/// let points = [(1.0, 3.0), (2.0, 6.0), (3.0, 9.0)];
/// assert_eq!(pearson(&points, |p| p.0, |p| p.1), 1.0);
///
/// let flat = [(1.0, 5.0), (2.0, 5.0)];
/// assert_eq!(pearson(&flat, |p| p.0, |p| p.1), 0.0);
/// ```
pub fn pearson<T, X, Y>(data: &[T], x: X, y: Y) -> f64
where
    X: Fn(&T) -> f64,
    Y: Fn(&T) -> f64,
{
    let sums = PairSums::collect(data, x, y);
    let denominator = denominator(&sums);
    if denominator == 0.0 {
        return 0.0;
    }
    clamp_unit(sums.covariance_term() / denominator)
}

/// Strict variant of [`pearson`].
///
/// Fails with [`StatsError::DegenerateInput`] when the denominator vanishes.
pub fn try_pearson<T, X, Y>(data: &[T], x: X, y: Y) -> Result<f64, StatsError>
where
    X: Fn(&T) -> f64,
    Y: Fn(&T) -> f64,
{
    let sums = PairSums::collect(data, x, y);
    let denominator = denominator(&sums);
    if denominator == 0.0 {
        return Err(StatsError::degenerate(
            "pearson correlation",
            "a field has zero variance",
        ));
    }
    Ok(clamp_unit(sums.covariance_term() / denominator))
}

fn denominator(sums: &PairSums) -> f64 {
    (sums.x_variance_term() * sums.y_variance_term()).sqrt()
}

// Rounding can push a perfect correlation a few ulps past ±1.
fn clamp_unit(r: f64) -> f64 {
    if r.is_nan() { r } else { r.clamp(-1.0, 1.0) }
}

/// Verbal interpretation of a correlation coefficient.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum CorrelationStrength {
    #[display("strong positive correlation")]
    StrongPositive,
    #[display("weak positive correlation")]
    WeakPositive,
    #[display("no correlation")]
    None,
    #[display("weak negative correlation")]
    WeakNegative,
    #[display("strong negative correlation")]
    StrongNegative,
}

impl CorrelationStrength {
    /// Classifies a coefficient.
    ///
    /// `|r| > 0.5` is strong; any other non-zero value is weak.
    ///
    /// # Examples
    ///
    /// ```
    /// use chartstat_stats::correlation::CorrelationStrength;
    ///
    /// assert_eq!(CorrelationStrength::classify(0.5), CorrelationStrength::WeakPositive);
    /// assert_eq!(CorrelationStrength::classify(0.500_000_1), CorrelationStrength::StrongPositive);
    /// assert_eq!(CorrelationStrength::classify(0.0), CorrelationStrength::None);
    /// assert_eq!(
    ///     CorrelationStrength::classify(-0.7).to_string(),
    ///     "strong negative correlation"
    /// );
    /// ```
    #[must_use]
    pub fn classify(coefficient: f64) -> Self {
        if coefficient > 0.5 {
            Self::StrongPositive
        } else if coefficient > 0.0 {
            Self::WeakPositive
        } else if coefficient < -0.5 {
            Self::StrongNegative
        } else if coefficient < 0.0 {
            Self::WeakNegative
        } else {
            Self::None
        }
    }
}
