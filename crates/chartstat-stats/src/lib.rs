//! Statistical aggregation for descriptive charts.
//!
//! This crate turns in-memory records into the derived values a chart draws:
//! grouped sums and counts, box-plot summaries, kernel density curves,
//! regression lines and correlation coefficients. Every function is pure and
//! deterministic. Numeric fields are read through caller-supplied selector
//! closures, so any record type works and no parsing happens here.
//!
//! # Modules
//!
//! - [`group`]: Grouped reductions (sum, count, arbitrary reducer) by a key
//! - [`five_number`]: Quartiles, fences and outliers for box plots
//! - [`kde`]: Kernel density estimates for violin plots
//! - [`regression`]: Ordinary least-squares lines
//! - [`correlation`]: Pearson coefficients and their verbal interpretation
//! - [`quantile`]: Interpolated quantiles
//! - [`descriptive`]: Extent and descriptive statistics
//! - [`histogram`]: Frequency distributions split at tick thresholds
//! - [`ticks`]: Human-friendly tick values and domain rounding
//!
//! # Degenerate input
//!
//! Statistics that are undefined for empty input return
//! [`StatsError::EmptyInput`]. Regression and correlation keep conventional
//! results for degenerate input (zeros for an empty regression, `0` for a
//! zero-variance correlation); their `try_` variants return
//! [`StatsError::DegenerateInput`] instead.
//!
//! # Examples
//!
//! ## Box-plot statistics per group
//!
//! ```
//! use chartstat_stats::{five_number::FiveNumberSummary, group::group_reduce};
//!
//! let customers = [(true, 45.0), (false, 30.0), (true, 52.0), (false, 38.0)];
//! let boxes = group_reduce(&customers, |c| c.0, |group| {
//!     let ages = group.iter().map(|c| c.1).collect::<Vec<_>>();
//!     FiveNumberSummary::new(&ages)
//! });
//!
//! assert_eq!(boxes[&true].as_ref().unwrap().median, 48.5);
//! ```
//!
//! ## Regression and correlation
//!
//! ```
//! use chartstat_stats::{correlation, regression};
//!
//! let points = [(0.0, 3.0), (1.0, 5.0), (2.0, 7.0), (3.0, 9.0)];
//! let fit = regression::linear_regression(&points, |p| p.0, |p| p.1);
//! assert_eq!(fit.predict(4.0), 11.0);
//!
//! let r = correlation::pearson(&points, |p| p.0, |p| p.1);
//! assert_eq!(
//!     correlation::CorrelationStrength::classify(r),
//!     correlation::CorrelationStrength::StrongPositive
//! );
//! ```
//!
//! ## Density curve
//!
//! ```
//! use chartstat_stats::{kde, ticks};
//!
//! let scores = [580.0, 610.0, 640.0, 700.0];
//! let (lo, hi) = ticks::nice(580.0, 700.0, 10);
//! let curve = kde::kde(&scores, kde::epanechnikov(7.0), &ticks::ticks(lo, hi, 30)).unwrap();
//! assert!(curve.max_density() > 0.0);
//! ```

pub use self::error::StatsError;

pub mod correlation;
pub mod descriptive;
mod error;
pub mod five_number;
pub mod group;
pub mod histogram;
pub mod kde;
pub mod quantile;
pub mod regression;
mod sums;
pub mod ticks;
