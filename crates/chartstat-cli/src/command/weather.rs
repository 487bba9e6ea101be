use anyhow::Context as _;
use chartstat_analysis::{config::ReportConfig, record::WeatherRecord, weather::WeatherReport};

use crate::{
    command::{ReportArg, log_skipped},
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct WeatherArg {
    #[clap(flatten)]
    report: ReportArg,
    /// Scatter points need afternoon humidity below this value
    #[arg(long)]
    humidity_ceiling: Option<f64>,
    /// Scatter points need at least this much rainfall
    #[arg(long)]
    min_rainfall: Option<f64>,
}

impl WeatherArg {
    pub(super) fn config(&self) -> anyhow::Result<ReportConfig> {
        let mut config = self.report.base_config()?;
        if let Some(x) = self.humidity_ceiling {
            config.humidity_ceiling = x;
        }
        if let Some(x) = self.min_rainfall {
            config.min_rainfall = x;
        }
        config
            .validate()
            .context("Invalid report configuration")?;
        Ok(config)
    }
}

pub(crate) fn run(arg: &WeatherArg) -> anyhow::Result<()> {
    let config = arg.config()?;

    log::info!("Loading observations from {}...", arg.report.data.display());
    let records: Vec<WeatherRecord> = util::read_json_file("weather data", &arg.report.data)?;
    log::info!("Loaded {} observations", records.len());

    log::info!("Building weather charts...");
    let report = WeatherReport::build(&records, &config);
    log_skipped(&report.skipped);
    if let Some(kpi) = &report.kpi {
        log::info!(
            "Wettest location: {} ({:.2} mm)",
            kpi.wettest_location.location,
            kpi.wettest_location.rainfall
        );
    }

    Output::save_json(&report, arg.report.output.clone())?;
    Ok(())
}
