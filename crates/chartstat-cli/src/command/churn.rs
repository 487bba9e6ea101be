use anyhow::Context as _;
use chartstat_analysis::{churn::ChurnReport, config::ReportConfig, record::ChurnRecord};

use crate::{
    command::{ReportArg, log_skipped},
    util::{self, Output},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ChurnArg {
    #[clap(flatten)]
    report: ReportArg,
    /// Bandwidth of the credit-score density kernel
    #[arg(long)]
    kde_bandwidth: Option<f64>,
    /// Approximate number of density evaluation points
    #[arg(long)]
    violin_ticks: Option<usize>,
    /// Approximate number of age histogram thresholds
    #[arg(long)]
    histogram_ticks: Option<usize>,
}

impl ChurnArg {
    pub(super) fn config(&self) -> anyhow::Result<ReportConfig> {
        let mut config = self.report.base_config()?;
        if let Some(h) = self.kde_bandwidth {
            config.kde_bandwidth = h;
        }
        if let Some(n) = self.violin_ticks {
            config.violin_ticks = n;
        }
        if let Some(n) = self.histogram_ticks {
            config.histogram_ticks = n;
        }
        config
            .validate()
            .context("Invalid report configuration")?;
        Ok(config)
    }
}

pub(crate) fn run(arg: &ChurnArg) -> anyhow::Result<()> {
    let config = arg.config()?;

    log::info!("Loading customers from {}...", arg.report.data.display());
    let records: Vec<ChurnRecord> = util::read_json_file("churn data", &arg.report.data)?;
    log::info!("Loaded {} customers", records.len());

    log::info!("Building churn charts...");
    let report = ChurnReport::build(&records, &config);
    log_skipped(&report.skipped);
    for finding in &report.correlations {
        log::info!("{finding}");
    }

    Output::save_json(&report, arg.report.output.clone())?;
    Ok(())
}
