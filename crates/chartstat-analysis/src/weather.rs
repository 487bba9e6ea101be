//! Chart summaries for the daily weather table.

use std::collections::BTreeMap;

use chartstat_stats::{
    StatsError,
    descriptive::{self, Extent},
    five_number::FiveNumberSummary,
    group::{self, group_by},
};
use serde::{Deserialize, Serialize};

use crate::{
    chart::{ChartCollector, PieSlice, ScatterFit, SkippedChart, pie_slices},
    config::ReportConfig,
    record::WeatherRecord,
};

/// Every summary drawn for the weather table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub record_count: usize,
    /// Bar chart: total rainfall per calendar year.
    pub rainfall_by_year: BTreeMap<i32, f64>,
    /// Pie chart: number of observations per wind gust direction.
    pub wind_gust_directions: Vec<PieSlice>,
    /// Regression of rainfall on afternoon humidity, over the plausible
    /// observations only.
    pub humidity_vs_rainfall: Option<ScatterFit>,
    pub temperature_by_year: Option<BTreeMap<i32, YearTemperatureBox>>,
    pub kpi: Option<Kpi>,
    pub skipped: Vec<SkippedChart>,
}

/// Box-plot values of one year.
///
/// `min` is the lowest overnight minimum; the other four values describe the
/// daily maxima.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearTemperatureBox {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Headline figures of the whole table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub max_temperature: f64,
    pub min_temperature: f64,
    pub max_humidity: f64,
    pub wettest_location: LocationRainfall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRainfall {
    pub location: String,
    pub rainfall: f64,
}

impl WeatherReport {
    /// Builds every weather chart summary.
    ///
    /// A chart whose aggregation fails is listed in `skipped` and the
    /// remaining charts are still built.
    #[must_use]
    pub fn build(records: &[WeatherRecord], config: &ReportConfig) -> Self {
        let mut charts = ChartCollector::default();

        let rainfall_by_year = group::sum_by(records, WeatherRecord::year, |r| r.rainfall);
        #[expect(clippy::cast_precision_loss)]
        let wind_gust_directions = pie_slices(
            group::count_by(records, |r| r.wind_gust_dir.clone())
                .into_iter()
                .map(|(dir, count)| (dir, count as f64))
                .collect(),
        );

        let plausible = records
            .iter()
            .filter(|r| {
                r.humidity_3pm < config.humidity_ceiling && r.rainfall >= config.min_rainfall
            })
            .cloned()
            .collect::<Vec<_>>();
        let humidity_vs_rainfall = charts.build("humidity vs rainfall regression", || {
            ScatterFit::build(config, &plausible, |r| r.humidity_3pm, |r| r.rainfall)
        });

        let temperature_by_year =
            charts.build("temperature box plot", || temperature_boxes(records));
        let kpi = charts.build("kpi summary", || Kpi::new(records));

        Self {
            record_count: records.len(),
            rainfall_by_year,
            wind_gust_directions,
            humidity_vs_rainfall,
            temperature_by_year,
            kpi,
            skipped: charts.finish(),
        }
    }
}

fn temperature_boxes(
    records: &[WeatherRecord],
) -> Result<BTreeMap<i32, YearTemperatureBox>, StatsError> {
    group_by(records, WeatherRecord::year)
        .into_iter()
        .map(|(year, group)| Ok((year, YearTemperatureBox::from_group(&group)?)))
        .collect()
}

impl YearTemperatureBox {
    fn from_group(group: &[&WeatherRecord]) -> Result<Self, StatsError> {
        let max_temps = group.iter().map(|r| r.max_temp).collect::<Vec<_>>();
        let summary = FiveNumberSummary::new(&max_temps)?;
        let min = required_extent("yearly minimum temperature", group.iter().map(|r| r.min_temp))?
            .min;
        Ok(Self {
            min,
            q1: summary.q1,
            median: summary.median,
            q3: summary.q3,
            max: summary.max,
        })
    }
}

impl Kpi {
    fn new(records: &[WeatherRecord]) -> Result<Self, StatsError> {
        let max_temperature =
            required_extent("maximum temperature", records.iter().map(|r| r.max_temp))?.max;
        let min_temperature =
            required_extent("minimum temperature", records.iter().map(|r| r.min_temp))?.min;
        let max_humidity =
            required_extent("maximum humidity", records.iter().map(|r| r.humidity_3pm))?.max;

        let by_location = group::sum_by(records, |r| r.location.clone(), |r| r.rainfall);
        let (location, rainfall) = group::max_entry(&by_location).ok_or(StatsError::EmptyInput {
            statistic: "wettest location",
        })?;

        Ok(Self {
            max_temperature,
            min_temperature,
            max_humidity,
            wettest_location: LocationRainfall {
                location: location.clone(),
                rainfall,
            },
        })
    }
}

fn required_extent<I>(statistic: &'static str, values: I) -> Result<Extent, StatsError>
where
    I: IntoIterator<Item = f64>,
{
    descriptive::extent(values).ok_or(StatsError::EmptyInput { statistic })
}
