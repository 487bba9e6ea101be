//! Quantiles by linear interpolation between order statistics.
//!
//! For a quantile `p` over `n` sorted values the rank is `r = p * (n - 1)`;
//! the result interpolates between the values at `floor(r)` and `ceil(r)`.

/// Computes the `p`-quantile of values sorted in ascending order.
///
/// `p` is clamped to `[0, 1]`. Returns `None` if the input is empty.
///
/// # Panics
///
/// Panics in debug mode if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use chartstat_stats::quantile::quantile_sorted;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile_sorted(&values, 0.5), Some(2.5));
/// assert_eq!(quantile_sorted(&values, 0.25), Some(1.75));
/// assert_eq!(quantile_sorted(&[], 0.5), None);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
#[must_use]
pub fn quantile_sorted(sorted_values: &[f64], p: f64) -> Option<f64> {
    debug_assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let first = *sorted_values.first()?;
    let last = *sorted_values.last()?;
    let n = sorted_values.len();
    if p <= 0.0 || n == 1 {
        return Some(first);
    }
    if p >= 1.0 {
        return Some(last);
    }

    let rank = p * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let lo_value = sorted_values[lo];
    let hi_value = sorted_values[(lo + 1).min(n - 1)];
    Some(lo_value + (hi_value - lo_value) * (rank - lo as f64))
}

/// Computes the `p`-quantile of unsorted values.
///
/// Sorts a copy of the values first.
///
/// # Examples
///
/// ```
/// use chartstat_stats::quantile::quantile;
///
/// assert_eq!(quantile(&[5.0, 1.0, 3.0], 0.5), Some(3.0));
/// ```
#[must_use]
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    let sorted = sorted_copy(values);
    quantile_sorted(&sorted, p)
}

/// Median of unsorted values, `None` if empty.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}

pub(crate) fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
