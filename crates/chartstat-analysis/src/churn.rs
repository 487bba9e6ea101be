//! Chart summaries for the bank churn table.

use std::collections::BTreeMap;

use chartstat_stats::{
    StatsError,
    descriptive,
    five_number::FiveNumberSummary,
    group::{self, group_by},
    histogram::Histogram,
    kde::DensityCurve,
    ticks,
};
use serde::{Deserialize, Serialize};

use crate::{
    chart::{ChartCollector, CorrelationFinding, PieSlice, ScatterFit, SkippedChart, pie_slices},
    config::ReportConfig,
    record::{ChurnRecord, ExitStatus},
};

/// Domain rounding granularity of the credit-score axis.
const DOMAIN_NICE_TICKS: usize = 10;

/// Every summary drawn for the churn table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnReport {
    pub record_count: usize,
    /// Bar chart: total number of products held, per country.
    pub products_by_geography: BTreeMap<String, f64>,
    /// Pie chart: customers who left, per gender.
    pub exits_by_gender: Vec<PieSlice>,
    pub age_histogram: Histogram,
    pub age_by_exit_status: Option<BTreeMap<ExitStatus, FiveNumberSummary>>,
    /// Violin plot: credit-score density per exit status.
    pub credit_score_density: Option<BTreeMap<ExitStatus, DensityCurve>>,
    /// Regression of credit score on balance.
    pub balance_vs_credit_score: Option<ScatterFit>,
    pub correlations: Vec<CorrelationFinding>,
    pub skipped: Vec<SkippedChart>,
}

type Field = fn(&ChurnRecord) -> f64;

const CORRELATION_PAIRS: [(&str, Field, &str, Field); 3] = [
    ("CreditScore", |r| r.credit_score, "Balance", |r| r.balance),
    ("Age", |r| r.age, "Balance", |r| r.balance),
    (
        "NumOfProducts",
        |r| r.num_of_products,
        "EstimatedSalary",
        |r| r.estimated_salary,
    ),
];

impl ChurnReport {
    /// Builds every churn chart summary.
    ///
    /// A chart whose aggregation fails is listed in `skipped` and the
    /// remaining charts are still built.
    ///
    /// # Examples
    ///
    /// ```
    /// use chartstat_analysis::{churn::ChurnReport, config::ReportConfig};
    ///
    /// let report = ChurnReport::build(&[], &ReportConfig::default());
    /// assert_eq!(report.record_count, 0);
    /// assert!(report.products_by_geography.is_empty());
    /// assert!(report.skipped.is_empty());
    /// ```
    #[must_use]
    pub fn build(records: &[ChurnRecord], config: &ReportConfig) -> Self {
        let mut charts = ChartCollector::default();

        let products_by_geography =
            group::sum_by(records, |r| r.geography.clone(), |r| r.num_of_products);
        let exits_by_gender = pie_slices(group::sum_by(
            records,
            |r| r.gender.clone(),
            |r| r.exited.as_count(),
        ));
        let age_histogram = Histogram::new(records.iter().map(|r| r.age), config.histogram_ticks);

        let age_by_exit_status = charts.build("age box plot", || {
            age_box_plots(records, config.whisker_factor)
        });
        let credit_score_density = charts.build("credit score violin plot", || {
            credit_score_violins(records, config)
        });
        let balance_vs_credit_score = charts.build("balance vs credit score regression", || {
            ScatterFit::build(config, records, |r| r.balance, |r| r.credit_score)
        });

        let correlations = CORRELATION_PAIRS
            .iter()
            .filter_map(|&(x_name, x, y_name, y)| {
                charts.build(format!("{x_name}/{y_name} correlation"), || {
                    CorrelationFinding::build(config, records, x_name, x, y_name, y)
                })
            })
            .collect();

        Self {
            record_count: records.len(),
            products_by_geography,
            exits_by_gender,
            age_histogram,
            age_by_exit_status,
            credit_score_density,
            balance_vs_credit_score,
            correlations,
            skipped: charts.finish(),
        }
    }
}

fn age_box_plots(
    records: &[ChurnRecord],
    whisker_factor: f64,
) -> Result<BTreeMap<ExitStatus, FiveNumberSummary>, StatsError> {
    group_by(records, |r| r.exited)
        .into_iter()
        .map(|(status, group)| {
            let ages = group.iter().map(|r| r.age).collect::<Vec<_>>();
            Ok((
                status,
                FiveNumberSummary::with_whisker_factor(&ages, whisker_factor)?,
            ))
        })
        .collect()
}

fn credit_score_violins(
    records: &[ChurnRecord],
    config: &ReportConfig,
) -> Result<BTreeMap<ExitStatus, DensityCurve>, StatsError> {
    // All groups share the evaluation points of the common score axis.
    let eval_points = descriptive::extent(records.iter().map(|r| r.credit_score))
        .map(|e| {
            let (lo, hi) = ticks::nice(e.min, e.max, DOMAIN_NICE_TICKS);
            ticks::ticks(lo, hi, config.violin_ticks)
        })
        .unwrap_or_default();

    group_by(records, |r| r.exited)
        .into_iter()
        .map(|(status, group)| {
            let scores = group.iter().map(|r| r.credit_score).collect::<Vec<_>>();
            Ok((status, config.density(&scores, &eval_points)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(
        credit_score: f64,
        geography: &str,
        gender: &str,
        age: f64,
        balance: f64,
        exited: ExitStatus,
    ) -> ChurnRecord {
        ChurnRecord {
            credit_score,
            geography: geography.to_owned(),
            gender: gender.to_owned(),
            age,
            balance,
            num_of_products: 1.0 + (age % 3.0),
            estimated_salary: 1000.0 * age,
            exited,
        }
    }

    fn customers() -> Vec<ChurnRecord> {
        use ExitStatus::{Exited, Stayed};
        vec![
            customer(619.0, "France", "Female", 42.0, 0.0, Exited),
            customer(608.0, "Spain", "Female", 41.0, 83807.86, Stayed),
            customer(502.0, "France", "Female", 42.0, 159_660.8, Exited),
            customer(699.0, "France", "Female", 39.0, 0.0, Stayed),
            customer(850.0, "Spain", "Female", 43.0, 125_510.82, Stayed),
            customer(645.0, "Spain", "Male", 44.0, 113_755.78, Exited),
            customer(822.0, "France", "Male", 50.0, 0.0, Stayed),
            customer(376.0, "Germany", "Female", 29.0, 115_046.74, Exited),
            customer(501.0, "France", "Male", 44.0, 142_051.07, Stayed),
            customer(684.0, "France", "Male", 27.0, 134_603.88, Stayed),
        ]
    }

    #[test]
    fn test_bar_and_pie_totals() {
        let records = customers();
        let report = ChurnReport::build(&records, &ReportConfig::default());

        assert_eq!(report.record_count, 10);
        assert_eq!(
            report.products_by_geography.keys().collect::<Vec<_>>(),
            vec!["France", "Germany", "Spain"]
        );
        let total_products = report.products_by_geography.values().sum::<f64>();
        let expected = records.iter().map(|r| r.num_of_products).sum::<f64>();
        assert!((total_products - expected).abs() < 1e-9);

        let female = &report.exits_by_gender[0];
        assert_eq!(female.label, "Female");
        assert_eq!(female.value, 3.0);
        assert_eq!(female.percentage, 75.0);
    }

    #[test]
    fn test_box_plots_per_exit_status() {
        let report = ChurnReport::build(&customers(), &ReportConfig::default());
        let boxes = report.age_by_exit_status.unwrap();
        assert_eq!(boxes.len(), 2);
        let exited = &boxes[&ExitStatus::Exited];
        assert_eq!(exited.min, 29.0);
        assert_eq!(exited.max, 44.0);
        assert_eq!(exited.median, 42.0);
    }

    #[test]
    fn test_violins_share_evaluation_points() {
        let report = ChurnReport::build(&customers(), &ReportConfig::default());
        let violins = report.credit_score_density.unwrap();
        let stayed = &violins[&ExitStatus::Stayed];
        let exited = &violins[&ExitStatus::Exited];
        assert!(!stayed.is_empty());
        assert_eq!(stayed.len(), exited.len());
        // scores 376..850 round out to 350..850, sampled every 20 points
        assert_eq!(stayed.points()[0].0, 360.0);
        assert_eq!(stayed.points()[stayed.len() - 1].0, 840.0);
        assert_eq!(stayed.len(), 25);
    }

    #[test]
    fn test_histogram_counts_every_age() {
        let report = ChurnReport::build(&customers(), &ReportConfig::default());
        let total = report
            .age_histogram
            .bins
            .iter()
            .map(|b| b.count)
            .sum::<u64>();
        assert_eq!(total, 10);
    }

    #[test]
    fn test_three_correlations_in_order() {
        let report = ChurnReport::build(&customers(), &ReportConfig::default());
        let pairs = report
            .correlations
            .iter()
            .map(|c| (c.x.as_str(), c.y.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                ("CreditScore", "Balance"),
                ("Age", "Balance"),
                ("NumOfProducts", "EstimatedSalary"),
            ]
        );
        assert!(report.correlations.iter().all(|c| c.coefficient.abs() <= 1.0));
    }

    #[test]
    fn test_strict_mode_skips_degenerate_charts_only() {
        let mut records = customers();
        for r in &mut records {
            r.balance = 0.0;
        }
        let config = ReportConfig {
            strict: true,
            ..ReportConfig::default()
        };
        let report = ChurnReport::build(&records, &config);

        assert!(report.balance_vs_credit_score.is_none());
        assert_eq!(report.correlations.len(), 1);
        assert_eq!(report.skipped.len(), 3);
        assert!(report.age_by_exit_status.is_some());
        assert!(report.credit_score_density.is_some());
    }

    #[test]
    fn test_lenient_mode_keeps_conventional_values() {
        let mut records = customers();
        for r in &mut records {
            r.balance = 0.0;
        }
        let report = ChurnReport::build(&records, &ReportConfig::default());
        assert!(report.skipped.is_empty());
        assert_eq!(report.correlations[0].coefficient, 0.0);
        let scatter = report.balance_vs_credit_score.unwrap();
        assert!(!scatter.fit.slope.is_finite());
    }
}
