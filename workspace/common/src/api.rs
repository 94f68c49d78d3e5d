//! Wire shapes of the prediction backend.
//!
//! Every reply carries a `success` flag. When it is `false` the only other
//! field is `error`; the HTTP status code is not consulted.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FlowError;

/// Backend routes used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    PredictDate,
    PredictDay,
    Statistics,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::PredictDate => "/predict_date",
            Endpoint::PredictDay => "/predict_day",
            Endpoint::Statistics => "/statistics",
        }
    }
}

/// Body of `POST /predict_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub hour: u8,
}

/// Body of `POST /predict_day`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRequest {
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
}

/// Successful reply of `POST /predict_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourPrediction {
    pub date: String,
    pub hour: u8,
    pub day_name: String,
    pub prediction: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub hour: u8,
    pub consumption: f64,
}

/// Successful reply of `POST /predict_day`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPrediction {
    pub date: String,
    pub day_name: String,
    pub hourly_predictions: Vec<HourlyPoint>,
    pub total_daily: f64,
    pub average_hourly: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub total_records: u64,
}

/// Successful reply of `GET /statistics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReply {
    pub statistics: DatasetStatistics,
}

/// Turns a raw reply body into the payload or the matching error kind.
pub fn decode_reply<T>(body: &str) -> Result<T, FlowError>
where
    T: DeserializeOwned,
{
    let value: Value = serde_json::from_str(body)
        .map_err(|e| FlowError::transport(format!("Failed to parse response: {}", e)))?;

    let success = value
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !success {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return Err(FlowError::application(message));
    }

    serde_json::from_value(value)
        .map_err(|e| FlowError::transport(format!("Unexpected response shape: {}", e)))
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
