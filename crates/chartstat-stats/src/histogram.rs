use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::{
    descriptive::{self, Extent},
    ticks,
};

/// A histogram representation of a dataset's distribution.
///
/// The domain is split at each threshold lying strictly inside it. Every bin
/// covers `[start, end)` except the last one, which also counts values equal
/// to the domain maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// The bins comprising the histogram, ordered by range.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// The range of values covered by this bin.
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram over the extent of the values, split at
    /// human-friendly thresholds (see [`ticks::ticks`]).
    ///
    /// NaN values are ignored. Returns an empty histogram if no value remains.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chartstat_stats::histogram::Histogram;
    /// let ages = [18.0, 22.0, 25.0, 31.0, 38.0, 44.0, 52.0, 67.0, 92.0];
    /// let histogram = Histogram::new(ages, 10);
    ///
    /// assert_eq!(histogram.bins.first().unwrap().range, 18.0..20.0);
    /// assert_eq!(histogram.bins.iter().map(|b| b.count).sum::<u64>(), 9);
    /// ```
    #[must_use]
    pub fn new<I>(values: I, tick_count: usize) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        let Some(domain) = descriptive::extent(values.iter().copied()) else {
            return Self { bins: vec![] };
        };
        let thresholds = ticks::ticks(domain.min, domain.max, tick_count);
        Self::with_thresholds(values, domain, &thresholds)
    }

    /// Creates a histogram over an explicit domain and thresholds.
    ///
    /// Thresholds outside `(domain.min, domain.max]` are discarded; the rest
    /// must be in ascending order. Values outside the domain are not counted.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `thresholds` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chartstat_stats::{descriptive::Extent, histogram::Histogram};
    /// let domain = Extent { min: 0.0, max: 10.0 };
    /// let histogram = Histogram::with_thresholds([1.0, 5.0, 5.0, 10.0, 11.0], domain, &[5.0]);
    ///
    /// let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
    /// assert_eq!(counts, vec![1, 3]);
    /// ```
    #[must_use]
    pub fn with_thresholds<I>(values: I, domain: Extent, thresholds: &[f64]) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        debug_assert!(
            thresholds.is_sorted_by(|a, b| a <= b),
            "thresholds must be sorted in ascending order"
        );

        let inner = thresholds
            .iter()
            .copied()
            .filter(|t| *t > domain.min && *t <= domain.max)
            .collect::<Vec<_>>();

        let mut bins = Vec::with_capacity(inner.len() + 1);
        for idx in 0..=inner.len() {
            let start = if idx == 0 { domain.min } else { inner[idx - 1] };
            let end = if idx == inner.len() {
                domain.max
            } else {
                inner[idx]
            };
            bins.push(HistogramBin {
                range: start..end,
                count: 0,
            });
        }

        for value in values {
            if !(domain.min..=domain.max).contains(&value) {
                continue;
            }
            // first threshold strictly greater than the value
            let idx = inner.partition_point(|t| *t <= value);
            bins[idx].count += 1;
        }

        Self { bins }
    }

    /// Largest bin count, or 0 for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        let histogram = Histogram::new(std::iter::empty(), 10);
        assert!(histogram.bins.is_empty());
        assert_eq!(histogram.max_count(), 0);
    }

    #[test]
    fn test_single_value() {
        let histogram = Histogram::new([7.0, 7.0], 10);
        assert_eq!(histogram.bins.len(), 1);
        assert_eq!(histogram.bins[0].range, 7.0..7.0);
        assert_eq!(histogram.bins[0].count, 2);
    }

    #[test]
    fn test_domain_max_lands_in_last_bin() {
        let histogram = Histogram::new([0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 5);
        let last = histogram.bins.last().unwrap();
        assert_eq!(last.range.end, 5.0);
        assert!(last.count >= 1);
        assert_eq!(histogram.bins.iter().map(|b| b.count).sum::<u64>(), 6);
    }

    #[test]
    fn test_threshold_value_goes_to_upper_bin() {
        let domain = Extent { min: 0.0, max: 4.0 };
        let histogram = Histogram::with_thresholds([2.0], domain, &[1.0, 2.0, 3.0]);
        let counts = histogram.bins.iter().map(|b| b.count).collect::<Vec<_>>();
        assert_eq!(counts, vec![0, 0, 1, 0]);
    }

    #[test]
    fn test_bins_are_contiguous() {
        let histogram = Histogram::new([3.2, 8.9, 15.0, 27.5, 41.1, 44.0], 10);
        for pair in histogram.bins.windows(2) {
            assert_eq!(pair[0].range.end, pair[1].range.start);
        }
    }
}
