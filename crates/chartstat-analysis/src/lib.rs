//! Chart summaries for the churn and weather tables
//!
//! This crate knows the two source tables and which charts are drawn from
//! each. It turns typed records into plain serializable summary values that a
//! renderer can draw without computing anything itself.
//!
//! # Overview
//!
//! 1. **Load Records** ([`record::ChurnRecord`], [`record::WeatherRecord`]): rows
//!    deserialized under the source column names
//! 2. **Configure** ([`config::ReportConfig`]): kernel bandwidth, tick counts,
//!    box-plot whiskers, scatter filters and strictness
//! 3. **Build Reports** ([`churn::ChurnReport`], [`weather::WeatherReport`]): one
//!    summary per chart
//!
//! Each chart is built independently. A chart whose aggregation fails is left
//! empty and listed with the reason in the report's `skipped` field; the other
//! charts are unaffected.
//!
//! # Examples
//!
//! ```
//! use chartstat_analysis::{
//!     config::ReportConfig,
//!     record::WeatherRecord,
//!     weather::WeatherReport,
//! };
//!
//! let records: Vec<WeatherRecord> = serde_json::from_str(r#"[
//!     { "Date": "2009-01-01", "Location": "Cobar", "MinTemp": 17.9, "MaxTemp": 35.2,
//!       "Rainfall": 0.0, "Humidity3pm": 13, "WindGustDir": "SSW" },
//!     { "Date": "2009-06-11", "Location": "Albury", "MinTemp": -2.1, "MaxTemp": 11.0,
//!       "Rainfall": 16.2, "Humidity3pm": 64, "WindGustDir": "W" }
//! ]"#).unwrap();
//!
//! let report = WeatherReport::build(&records, &ReportConfig::default());
//! let kpi = report.kpi.unwrap();
//! assert_eq!(kpi.max_temperature, 35.2);
//! assert_eq!(kpi.wettest_location.location, "Albury");
//! ```

pub mod chart;
pub mod churn;
pub mod config;
pub mod record;
pub mod weather;
