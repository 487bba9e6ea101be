use chartstat_stats::{
    StatsError,
    five_number::DEFAULT_WHISKER_FACTOR,
    kde::{self, DensityCurve},
};
use serde::{Deserialize, Serialize};

/// Smoothing kernel for density curves.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelKind {
    #[default]
    Epanechnikov,
    Gaussian,
}

/// Tunables shared by every chart summary.
///
/// Missing fields in a config file fall back to [`ReportConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Bandwidth of the density kernel, in data units.
    pub kde_bandwidth: f64,
    pub kernel: KernelKind,
    /// Approximate number of density evaluation points.
    pub violin_ticks: usize,
    /// Approximate number of histogram thresholds.
    pub histogram_ticks: usize,
    /// IQR multiplier for box-plot fences.
    pub whisker_factor: f64,
    /// Reject zero-variance regression and correlation input instead of
    /// substituting conventional values.
    pub strict: bool,
    /// Scatter points need `humidity < humidity_ceiling`.
    pub humidity_ceiling: f64,
    /// Scatter points need `rainfall >= min_rainfall`.
    pub min_rainfall: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            kde_bandwidth: 7.0,
            kernel: KernelKind::Epanechnikov,
            violin_ticks: 30,
            histogram_ticks: 10,
            whisker_factor: DEFAULT_WHISKER_FACTOR,
            strict: false,
            humidity_ceiling: 100.0,
            min_rainfall: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("kde_bandwidth must be a positive finite number, got {value}")]
    InvalidBandwidth { value: f64 },
    #[display("whisker_factor must be a non-negative finite number, got {value}")]
    InvalidWhiskerFactor { value: f64 },
    #[display("{field} must be at least 1")]
    ZeroTicks { field: &'static str },
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.kde_bandwidth.is_finite() && self.kde_bandwidth > 0.0) {
            return Err(ConfigError::InvalidBandwidth {
                value: self.kde_bandwidth,
            });
        }
        if !(self.whisker_factor.is_finite() && self.whisker_factor >= 0.0) {
            return Err(ConfigError::InvalidWhiskerFactor {
                value: self.whisker_factor,
            });
        }
        if self.violin_ticks == 0 {
            return Err(ConfigError::ZeroTicks {
                field: "violin_ticks",
            });
        }
        if self.histogram_ticks == 0 {
            return Err(ConfigError::ZeroTicks {
                field: "histogram_ticks",
            });
        }
        Ok(())
    }

    /// Density of `values` at `eval_points` with the configured kernel.
    pub(crate) fn density(
        &self,
        values: &[f64],
        eval_points: &[f64],
    ) -> Result<DensityCurve, StatsError> {
        let h = self.kde_bandwidth;
        match self.kernel {
            KernelKind::Epanechnikov => kde::kde(values, kde::epanechnikov(h), eval_points),
            KernelKind::Gaussian => kde::kde(values, kde::gaussian(h), eval_points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(ReportConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_config_file() {
        let config: ReportConfig =
            serde_json::from_str(r#"{ "kde_bandwidth": 12.5, "kernel": "gaussian" }"#).unwrap();
        assert_eq!(config.kde_bandwidth, 12.5);
        assert_eq!(config.kernel, KernelKind::Gaussian);
        assert_eq!(config.violin_ticks, 30);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_json::from_str::<ReportConfig>(r#"{ "bandwith": 1 }"#).is_err());
    }

    #[test]
    fn test_invalid_values() {
        let config = ReportConfig {
            kde_bandwidth: 0.0,
            ..ReportConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBandwidth { .. })
        ));

        let config = ReportConfig {
            histogram_ticks: 0,
            ..ReportConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroTicks {
                field: "histogram_ticks"
            })
        );
    }
}
