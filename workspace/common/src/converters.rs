//! Converter functions from backend replies to display text
//!
//! Each flow renders plain strings into its result region. The conversion
//! happens here so that views only copy text into place and the exact
//! formatting (decimals, units, hour labels, digit grouping) is testable
//! without a document.

use crate::api::{DatasetStatistics, DayPrediction, HourPrediction};

/// Unit appended to dataset statistics, whose reply carries no unit.
pub const DEFAULT_UNIT: &str = "MWh";

/// Separator used for grouping thousands in record counts.
pub const DEFAULT_GROUP_SEPARATOR: char = ',';

/// Formats `value` with exactly `decimals` fractional digits.
///
/// Ties round away from zero, so `2.5` with zero decimals gives `"3"`.
pub fn fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", decimals, rounded)
}

/// Formats a quantity as `"<fixed> <unit>"`.
pub fn with_unit(value: f64, decimals: usize, unit: &str) -> String {
    format!("{} {}", fixed(value, decimals), unit)
}

/// Label of an hour of day, e.g. `9` becomes `"9:00"`.
pub fn hour_label(hour: u8) -> String {
    format!("{}:00", hour)
}

/// Groups digits in threes, e.g. `1234567` becomes `"1,234,567"` with `','`.
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Text for the single prediction result region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SingleResultDisplay {
    pub date: String,
    pub hour: String,
    pub day_name: String,
    pub consumption: String,
}

impl SingleResultDisplay {
    /// The hour shown is the one the user submitted, not the echo.
    pub fn new(reply: &HourPrediction, requested_hour: u8) -> Self {
        Self {
            date: reply.date.clone(),
            hour: hour_label(requested_hour),
            day_name: reply.day_name.clone(),
            consumption: with_unit(reply.prediction, 2, &reply.unit),
        }
    }
}

/// Text for the aggregate part of the daily result region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyResultDisplay {
    pub total_daily: String,
    pub average_hourly: String,
}

impl From<&DayPrediction> for DailyResultDisplay {
    fn from(reply: &DayPrediction) -> Self {
        Self {
            total_daily: with_unit(reply.total_daily, 2, &reply.unit),
            average_hourly: with_unit(reply.average_hourly, 2, &reply.unit),
        }
    }
}

/// Text for the statistics result region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatisticsDisplay {
    pub mean: String,
    pub median: String,
    pub std: String,
    pub min: String,
    pub max: String,
    pub total_records: String,
}

impl StatisticsDisplay {
    pub fn new(stats: &DatasetStatistics, separator: char) -> Self {
        Self {
            mean: with_unit(stats.mean, 2, DEFAULT_UNIT),
            median: with_unit(stats.median, 2, DEFAULT_UNIT),
            std: with_unit(stats.std, 2, DEFAULT_UNIT),
            min: with_unit(stats.min, 0, DEFAULT_UNIT),
            max: with_unit(stats.max, 0, DEFAULT_UNIT),
            total_records: group_thousands(stats.total_records, separator),
        }
    }
}

impl From<&DatasetStatistics> for StatisticsDisplay {
    fn from(stats: &DatasetStatistics) -> Self {
        Self::new(stats, DEFAULT_GROUP_SEPARATOR)
    }
}
