//! Typed rows of the two source tables.
//!
//! Field names on the wire follow the source column headers, so a JSON array
//! exported straight from either table deserializes as-is:
//!
//! ```json
//! [
//!   { "CreditScore": 619, "Geography": "France", "Gender": "Female", "Age": 42,
//!     "Balance": 0.0, "NumOfProducts": 1, "EstimatedSalary": 101348.88, "Exited": 1 }
//! ]
//! ```
//!
//! Numeric columns are already numbers here; the loader never parses strings.

use chrono::{Datelike as _, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Whether a bank customer left.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::Display,
)]
pub enum ExitStatus {
    Stayed,
    Exited,
}

impl ExitStatus {
    /// `1.0` for customers who left, `0.0` otherwise.
    #[must_use]
    pub fn as_count(self) -> f64 {
        match self {
            ExitStatus::Stayed => 0.0,
            ExitStatus::Exited => 1.0,
        }
    }
}

/// One row of the bank churn table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChurnRecord {
    pub credit_score: f64,
    pub geography: String,
    pub gender: String,
    pub age: f64,
    pub balance: f64,
    pub num_of_products: f64,
    pub estimated_salary: f64,
    #[serde(
        serialize_with = "serialize_exit_flag",
        deserialize_with = "deserialize_exit_flag"
    )]
    pub exited: ExitStatus,
}

fn serialize_exit_flag<S>(status: &ExitStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(match status {
        ExitStatus::Stayed => 0,
        ExitStatus::Exited => 1,
    })
}

fn deserialize_exit_flag<'de, D>(deserializer: D) -> Result<ExitStatus, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        0 => Ok(ExitStatus::Stayed),
        1 => Ok(ExitStatus::Exited),
        other => Err(serde::de::Error::custom(format!(
            "Exited must be 0 or 1, got {other}"
        ))),
    }
}

/// One row of the daily weather table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "MinTemp")]
    pub min_temp: f64,
    #[serde(rename = "MaxTemp")]
    pub max_temp: f64,
    #[serde(rename = "Rainfall")]
    pub rainfall: f64,
    #[serde(rename = "Humidity3pm")]
    pub humidity_3pm: f64,
    #[serde(rename = "WindGustDir")]
    pub wind_gust_dir: String,
}

impl WeatherRecord {
    /// Calendar year of the observation.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_churn_record_from_source_columns() {
        let json = r#"{
            "CreditScore": 619, "Geography": "France", "Gender": "Female", "Age": 42,
            "Balance": 0.0, "NumOfProducts": 1, "EstimatedSalary": 101348.88, "Exited": 1
        }"#;
        let record: ChurnRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.credit_score, 619.0);
        assert_eq!(record.geography, "France");
        assert_eq!(record.exited, ExitStatus::Exited);
    }

    #[test]
    fn test_exit_flag_rejects_other_values() {
        let json = r#"{
            "CreditScore": 619, "Geography": "France", "Gender": "Female", "Age": 42,
            "Balance": 0.0, "NumOfProducts": 1, "EstimatedSalary": 1.0, "Exited": 2
        }"#;
        let err = serde_json::from_str::<ChurnRecord>(json).unwrap_err();
        assert!(err.to_string().contains("Exited must be 0 or 1"));
    }

    #[test]
    fn test_exit_flag_serializes_as_number() {
        let record = ChurnRecord {
            credit_score: 700.0,
            geography: "Spain".to_owned(),
            gender: "Male".to_owned(),
            age: 30.0,
            balance: 10.0,
            num_of_products: 2.0,
            estimated_salary: 5.0,
            exited: ExitStatus::Stayed,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["Exited"], 0);
        assert_eq!(value["NumOfProducts"], 2.0);
    }

    #[test]
    fn test_weather_year() {
        let json = r#"{
            "Date": "2009-07-14", "Location": "Albury", "MinTemp": 4.1, "MaxTemp": 16.3,
            "Rainfall": 0.2, "Humidity3pm": 55, "WindGustDir": "W"
        }"#;
        let record: WeatherRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.year(), 2009);
        assert_eq!(record.humidity_3pm, 55.0);
    }
}
