use serde::{Deserialize, Serialize};

use crate::{StatsError, quantile};

/// The observed range of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Width of the range (`max - min`).
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Computes the minimum and maximum of the values, ignoring NaN.
///
/// Returns `None` if there is no comparable value.
///
/// # Examples
///
/// ```
/// use chartstat_stats::descriptive::extent;
///
/// let e = extent([3.0, f64::NAN, -1.0, 7.5]).unwrap();
/// assert_eq!((e.min, e.max), (-1.0, 7.5));
/// assert!(extent([f64::NAN]).is_none());
/// ```
pub fn extent<I>(values: I) -> Option<Extent>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some(Extent { min: v, max: v }),
            Some(Extent { min, max }) => Some(Extent {
                min: min.min(v),
                max: max.max(v),
            }),
        })
}

/// Descriptive statistics summarizing a dataset.
///
/// Variance and standard deviation are population measures (divided by `n`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Interpolated median.
    pub median: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chartstat_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    pub fn new<I>(values: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from values sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Err(StatsError::empty("descriptive statistics"));
        };
        let count = sorted_values.len();
        let n = count as f64;
        let sum = sorted_values.iter().sum::<f64>();
        let mean = sum / n;
        let median = quantile::quantile_sorted(sorted_values, 0.5)
            .ok_or_else(|| StatsError::empty("median"))?;
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;

        Ok(Self {
            count,
            sum,
            min,
            max,
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}
