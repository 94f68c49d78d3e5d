//! Parsing of raw form field values into requests.

use chrono::NaiveDate;

use crate::api::{DailyRequest, PredictionRequest};
use crate::error::FlowError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(raw: &str) -> Result<NaiveDate, FlowError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| FlowError::InvalidInput("Invalid date format".to_string()))
}

pub fn parse_hour(raw: &str) -> Result<u8, FlowError> {
    match raw.trim().parse::<u8>() {
        Ok(hour) if hour < 24 => Ok(hour),
        _ => Err(FlowError::InvalidInput("Hour must be between 0 and 23".to_string())),
    }
}

pub fn single_request(date: &str, hour: &str) -> Result<PredictionRequest, FlowError> {
    Ok(PredictionRequest {
        date: parse_date(date)?,
        hour: parse_hour(hour)?,
    })
}

pub fn daily_request(date: &str) -> Result<DailyRequest, FlowError> {
    Ok(DailyRequest { date: parse_date(date)? })
}

/// Value for a date input, e.g. today's date when the page loads.
pub fn date_input_value(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_request_from_fields() {
        let request = single_request("2024-03-07", "23").unwrap();
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(request.hour, 23);
    }

    #[test]
    fn hour_out_of_range_is_rejected() {
        let err = single_request("2024-03-07", "24").unwrap_err();
        assert_eq!(err.to_string(), "Error: Hour must be between 0 and 23");
        assert!(parse_hour("-1").is_err());
        assert!(parse_hour("noon").is_err());
    }

    #[test]
    fn empty_date_is_rejected() {
        assert_eq!(
            daily_request("").unwrap_err(),
            FlowError::InvalidInput("Invalid date format".into())
        );
    }

    #[test]
    fn date_input_value_is_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(date_input_value(date), "2025-01-02");
    }
}
