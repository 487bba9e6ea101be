//! Summary values shared by several charts, and per-chart failure isolation.

use std::{collections::BTreeMap, fmt::Display};

use chartstat_stats::{
    StatsError,
    correlation::{self, CorrelationStrength},
    descriptive,
    regression::{self, LinearFit},
};
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;

/// A chart whose aggregation failed and was left out of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedChart {
    pub chart: String,
    pub reason: String,
}

/// Runs chart builders, keeping going after a failure.
#[derive(Debug, Default)]
pub(crate) struct ChartCollector {
    skipped: Vec<SkippedChart>,
}

impl ChartCollector {
    pub(crate) fn build<T, F>(&mut self, chart: impl Display, build: F) -> Option<T>
    where
        F: FnOnce() -> Result<T, StatsError>,
    {
        match build() {
            Ok(value) => Some(value),
            Err(err) => {
                self.skipped.push(SkippedChart {
                    chart: chart.to_string(),
                    reason: err.to_string(),
                });
                None
            }
        }
    }

    pub(crate) fn finish(self) -> Vec<SkippedChart> {
        self.skipped
    }
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the total in percent, 0 when the total is 0.
    pub percentage: f64,
}

pub(crate) fn pie_slices<K>(totals: BTreeMap<K, f64>) -> Vec<PieSlice>
where
    K: Display,
{
    let total = totals.values().sum::<f64>();
    totals
        .into_iter()
        .map(|(label, value)| PieSlice {
            label: label.to_string(),
            value,
            percentage: if total == 0.0 {
                0.0
            } else {
                value / total * 100.0
            },
        })
        .collect()
}

/// A fitted regression line over a scatter of points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterFit {
    pub point_count: usize,
    pub fit: LinearFit,
    /// Line endpoints over the x-range of the points, absent without points.
    pub line: Option<((f64, f64), (f64, f64))>,
}

impl ScatterFit {
    pub(crate) fn build<T, X, Y>(
        config: &ReportConfig,
        data: &[T],
        x: X,
        y: Y,
    ) -> Result<Self, StatsError>
    where
        X: Fn(&T) -> f64 + Copy,
        Y: Fn(&T) -> f64,
    {
        let fit = if config.strict {
            regression::try_linear_regression(data, x, y)?
        } else {
            regression::linear_regression(data, x, y)
        };
        let line = descriptive::extent(data.iter().map(x)).map(|e| fit.line_over(e));
        Ok(Self {
            point_count: data.len(),
            fit,
            line,
        })
    }
}

/// Correlation between two named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationFinding {
    pub x: String,
    pub y: String,
    pub coefficient: f64,
    pub strength: CorrelationStrength,
}

impl CorrelationFinding {
    pub(crate) fn build<T, X, Y>(
        config: &ReportConfig,
        data: &[T],
        x_name: &str,
        x: X,
        y_name: &str,
        y: Y,
    ) -> Result<Self, StatsError>
    where
        X: Fn(&T) -> f64,
        Y: Fn(&T) -> f64,
    {
        let coefficient = if config.strict {
            correlation::try_pearson(data, x, y)?
        } else {
            correlation::pearson(data, x, y)
        };
        Ok(Self {
            x: x_name.to_owned(),
            y: y_name.to_owned(),
            coefficient,
            strength: CorrelationStrength::classify(coefficient),
        })
    }
}

impl Display for CorrelationFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} between {} and {} (r = {:.4})",
            self.strength, self.x, self.y, self.coefficient
        )
    }
}
