use serde::{Deserialize, Serialize};

use crate::{StatsError, descriptive::Extent, sums::PairSums};

/// Coefficients of an ordinary least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// The fitted `y` at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Endpoints of the fitted line over an x-range.
    ///
    /// # Examples
    ///
    /// ```
    /// use chartstat_stats::{descriptive::Extent, regression::LinearFit};
    ///
    /// let fit = LinearFit { slope: 2.0, intercept: 1.0 };
    /// let line = fit.line_over(Extent { min: 0.0, max: 10.0 });
    /// assert_eq!(line, ((0.0, 1.0), (10.0, 21.0)));
    /// ```
    #[must_use]
    pub fn line_over(&self, extent: Extent) -> ((f64, f64), (f64, f64)) {
        (
            (extent.min, self.predict(extent.min)),
            (extent.max, self.predict(extent.max)),
        )
    }
}

/// Fits `y` against `x` over the records by the normal equations.
///
/// An empty dataset yields `slope = 0, intercept = 0`. When every `x` is the
/// same the denominator vanishes and the non-finite quotient is returned as
/// is; use [`try_linear_regression`] to reject that case instead.
///
/// # Examples
///
/// ```
/// use chartstat_stats::regression::linear_regression;
///
/// let points = [(0.0, 3.0), (1.0, 5.0), (2.0, 7.0)];
/// let fit = linear_regression(&points, |p| p.0, |p| p.1);
/// assert_eq!((fit.slope, fit.intercept), (2.0, 3.0));
///
/// let empty: [(f64, f64); 0] = [];
/// let fit = linear_regression(&empty, |p| p.0, |p| p.1);
/// assert_eq!((fit.slope, fit.intercept), (0.0, 0.0));
/// ```
pub fn linear_regression<T, X, Y>(data: &[T], x: X, y: Y) -> LinearFit
where
    X: Fn(&T) -> f64,
    Y: Fn(&T) -> f64,
{
    if data.is_empty() {
        return LinearFit {
            slope: 0.0,
            intercept: 0.0,
        };
    }
    fit_sums(&PairSums::collect(data, x, y))
}

/// Strict variant of [`linear_regression`].
///
/// Fails with [`StatsError::EmptyInput`] for an empty dataset and with
/// [`StatsError::DegenerateInput`] when the `x` values have zero variance.
pub fn try_linear_regression<T, X, Y>(data: &[T], x: X, y: Y) -> Result<LinearFit, StatsError>
where
    X: Fn(&T) -> f64,
    Y: Fn(&T) -> f64,
{
    if data.is_empty() {
        return Err(StatsError::empty("linear regression"));
    }
    let sums = PairSums::collect(data, x, y);
    if sums.x_variance_term() == 0.0 {
        return Err(StatsError::degenerate(
            "linear regression",
            "x values have zero variance",
        ));
    }
    Ok(fit_sums(&sums))
}

fn fit_sums(sums: &PairSums) -> LinearFit {
    let slope = sums.covariance_term() / sums.x_variance_term();
    let intercept = (sums.y - slope * sums.x) / sums.n;
    LinearFit { slope, intercept }
}
