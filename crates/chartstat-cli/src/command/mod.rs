use std::path::PathBuf;

use chartstat_analysis::{chart::SkippedChart, config::ReportConfig};
use clap::{Parser, Subcommand};

use self::{churn::ChurnArg, weather::WeatherArg};

mod churn;
mod weather;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which table to summarize
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summarize the bank customer churn table
    Churn(#[clap(flatten)] ChurnArg),
    /// Summarize the daily weather table
    Weather(#[clap(flatten)] WeatherArg),
}

/// Arguments shared by every report.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// JSON file holding an array of records
    #[arg(value_name = "DATA")]
    data: PathBuf,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// JSON file overriding the default report configuration
    #[arg(long)]
    config: Option<PathBuf>,
    /// Skip charts with zero-variance input instead of reporting conventional values
    #[arg(long)]
    strict: bool,
}

impl ReportArg {
    /// Defaults, then the config file, then the `--strict` flag.
    fn base_config(&self) -> anyhow::Result<ReportConfig> {
        let mut config = crate::util::read_config_file(self.config.as_deref())?;
        if self.strict {
            config.strict = true;
        }
        Ok(config)
    }
}

pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = CommandArgs::parse();
    match args.mode {
        Mode::Churn(arg) => churn::run(&arg)?,
        Mode::Weather(arg) => weather::run(&arg)?,
    }
    Ok(())
}

fn log_skipped(skipped: &[SkippedChart]) {
    for chart in skipped {
        log::warn!("Skipped {}: {}", chart.chart, chart.reason);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_churn_overrides() {
        let args = CommandArgs::try_parse_from([
            "chartstat",
            "churn",
            "customers.json",
            "--strict",
            "--kde-bandwidth",
            "12",
            "--violin-ticks",
            "40",
        ])
        .unwrap();
        let Mode::Churn(arg) = args.mode else {
            panic!("expected churn mode");
        };
        let config = arg.config().unwrap();
        assert!(config.strict);
        assert_eq!(config.kde_bandwidth, 12.0);
        assert_eq!(config.violin_ticks, 40);
        assert_eq!(config.histogram_ticks, 10);
    }

    #[test]
    fn test_parse_weather_overrides() {
        let args = CommandArgs::try_parse_from([
            "chartstat",
            "weather",
            "weather.json",
            "--humidity-ceiling",
            "95",
            "--output",
            "report.json",
        ])
        .unwrap();
        let Mode::Weather(arg) = args.mode else {
            panic!("expected weather mode");
        };
        let config = arg.config().unwrap();
        assert!(!config.strict);
        assert_eq!(config.humidity_ceiling, 95.0);
        assert_eq!(config.min_rainfall, 0.0);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let args =
            CommandArgs::try_parse_from(["chartstat", "churn", "c.json", "--kde-bandwidth", "0"])
                .unwrap();
        let Mode::Churn(arg) = args.mode else {
            panic!("expected churn mode");
        };
        assert!(arg.config().is_err());
    }
}
