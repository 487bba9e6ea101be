//! Kernel density estimation.
//!
//! A kernel is any function `Fn(f64) -> f64` that is unimodal, even and
//! bounded. It receives the offset `x - v` between an evaluation point and a
//! sample and returns that sample's weight at the point.
//!
//! # Examples
//!
//! ```
//! use chartstat_stats::kde::{epanechnikov, kde};
//!
//! let scores = [600.0, 650.0, 700.0];
//! let curve = kde(&scores, epanechnikov(7.0), &[600.0, 625.0, 650.0]).unwrap();
//!
//! assert_eq!(curve.len(), 3);
//! assert_eq!(curve.points()[1], (625.0, 0.0));
//! assert!(curve.max_density() > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::StatsError;

/// Epanechnikov kernel with bandwidth `h`.
///
/// The offset is scaled by the bandwidth: `K(u) = 0.75 * (1 - (u/h)^2) / h`
/// for `|u/h| <= 1`, zero otherwise.
#[must_use]
pub fn epanechnikov(bandwidth: f64) -> impl Fn(f64) -> f64 + Copy {
    move |offset| {
        let u = offset / bandwidth;
        if u.abs() <= 1.0 {
            0.75 * (1.0 - u * u) / bandwidth
        } else {
            0.0
        }
    }
}

/// Gaussian kernel with standard deviation `h`.
#[must_use]
pub fn gaussian(bandwidth: f64) -> impl Fn(f64) -> f64 + Copy {
    let norm = 1.0 / (bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    move |offset| {
        let u = offset / bandwidth;
        norm * (-0.5 * u * u).exp()
    }
}

/// An estimated density, as `(x, density)` pairs in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DensityCurve {
    points: Vec<(f64, f64)>,
}

impl DensityCurve {
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest density on the curve, or 0 for an empty curve.
    #[must_use]
    pub fn max_density(&self) -> f64 {
        self.points
            .iter()
            .map(|(_, d)| *d)
            .fold(0.0, f64::max)
    }
}

/// Estimates the density of `values` at each of `eval_points`.
///
/// `density(x)` is the mean of `kernel(x - v)` over all values. The output
/// preserves the order of `eval_points`; an empty `eval_points` yields an
/// empty curve.
///
/// Fails with [`StatsError::EmptyInput`] if `values` is empty.
#[expect(clippy::cast_precision_loss)]
pub fn kde<K>(values: &[f64], kernel: K, eval_points: &[f64]) -> Result<DensityCurve, StatsError>
where
    K: Fn(f64) -> f64,
{
    if values.is_empty() {
        return Err(StatsError::empty("kernel density estimate"));
    }
    let n = values.len() as f64;
    let points = eval_points
        .iter()
        .map(|&x| {
            let density = values.iter().map(|&v| kernel(x - v)).sum::<f64>() / n;
            (x, density)
        })
        .collect();
    Ok(DensityCurve { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_is_error() {
        let err = kde(&[], epanechnikov(1.0), &[0.0]).unwrap_err();
        assert!(matches!(err, StatsError::EmptyInput { .. }));
    }

    #[test]
    fn test_empty_eval_points() {
        let curve = kde(&[1.0, 2.0], epanechnikov(1.0), &[]).unwrap();
        assert!(curve.is_empty());
        assert_eq!(curve.max_density(), 0.0);
    }

    #[test]
    fn test_epanechnikov_shape() {
        let k = epanechnikov(2.0);
        assert_eq!(k(0.0), 0.375);
        assert_eq!(k(2.0), 0.0);
        assert_eq!(k(-2.0), 0.0);
        assert_eq!(k(3.0), 0.0);
        assert_eq!(k(1.0), k(-1.0));
    }

    #[test]
    fn test_single_sample_peaks_at_sample() {
        let curve = kde(&[5.0], epanechnikov(1.0), &[4.0, 4.5, 5.0, 5.5, 6.0]).unwrap();
        let densities = curve.points().iter().map(|(_, d)| *d).collect::<Vec<_>>();
        assert_eq!(densities, vec![0.0, 0.5625, 0.75, 0.5625, 0.0]);
        assert_eq!(curve.max_density(), 0.75);
    }

    #[test]
    fn test_preserves_eval_order() {
        let curve = kde(&[0.0], gaussian(1.0), &[3.0, -1.0, 2.0]).unwrap();
        let xs = curve.points().iter().map(|(x, _)| *x).collect::<Vec<_>>();
        assert_eq!(xs, vec![3.0, -1.0, 2.0]);
    }

    #[test]
    fn test_epanechnikov_integrates_to_one() {
        let h = 3.0;
        let step = 0.001;
        let k = epanechnikov(h);
        let area = (-4000..=4000)
            .map(|i| k(f64::from(i) * step) * step)
            .sum::<f64>();
        assert!((area - 1.0).abs() < 1e-3);
    }
}
