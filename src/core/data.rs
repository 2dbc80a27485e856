//! Core data structures for bedtime prediction
//!
//! Every input type validates its trained domain at construction, so the
//! predictor only ever sees values the model was fitted on.

use crate::config::ClockStyle;
use crate::utils::error::{AppError, AppResult};
use crate::utils::time_format;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_DAY: u32 = 86_400;

/// Desired wake-up time as a plain time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeTime {
    hour: u8,
    minute: u8,
}

impl WakeTime {
    pub fn new(hour: u8, minute: u8) -> AppResult<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(AppError::InvalidInput(format!(
                "{:02}:{:02} is not a valid time of day",
                hour, minute
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Parse user input such as "07:00" or "7:00 am"
    pub fn parse(input: &str) -> AppResult<Self> {
        let time = time_format::parse_time_of_day(input)?;
        Self::new(time.hour() as u8, time.minute() as u8)
    }

    pub fn from_minutes(minutes: u32) -> AppResult<Self> {
        if minutes >= SECONDS_PER_DAY / 60 {
            return Err(AppError::InvalidInput(format!(
                "{} minutes is past the end of the day",
                minutes
            )));
        }
        Self::new((minutes / 60) as u8, (minutes % 60) as u8)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The model's wake feature is measured in seconds since midnight
    pub fn seconds_from_midnight(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60
    }

    pub fn minutes_from_midnight(&self) -> u32 {
        self.seconds_from_midnight() / 60
    }
}

/// Desired amount of sleep in hours, on the stepper grid the model was
/// trained against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepAmount(f64);

impl SleepAmount {
    pub const MIN_HOURS: f64 = 4.0;
    pub const MAX_HOURS: f64 = 12.0;
    pub const STEP_HOURS: f64 = 0.25;

    pub fn new(hours: f64) -> AppResult<Self> {
        if !hours.is_finite() || !(Self::MIN_HOURS..=Self::MAX_HOURS).contains(&hours) {
            return Err(AppError::InvalidInput(format!(
                "Sleep amount {} is outside {}..{} hours",
                hours,
                Self::MIN_HOURS,
                Self::MAX_HOURS
            )));
        }
        let steps = hours / Self::STEP_HOURS;
        if (steps - steps.round()).abs() > 1e-9 {
            return Err(AppError::InvalidInput(format!(
                "Sleep amount {} is not a multiple of {} hours",
                hours,
                Self::STEP_HOURS
            )));
        }
        Ok(Self(hours))
    }

    pub fn hours(&self) -> f64 {
        self.0
    }
}

/// Daily coffee intake in cups
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CoffeeIntake(u32);

impl CoffeeIntake {
    pub const MIN_CUPS: u32 = 1;
    pub const MAX_CUPS: u32 = 20;

    pub fn new(cups: u32) -> AppResult<Self> {
        if !(Self::MIN_CUPS..=Self::MAX_CUPS).contains(&cups) {
            return Err(AppError::InvalidInput(format!(
                "Coffee intake {} is outside {}..{} cups",
                cups,
                Self::MIN_CUPS,
                Self::MAX_CUPS
            )));
        }
        Ok(Self(cups))
    }

    pub fn cups(&self) -> u32 {
        self.0
    }
}

/// Recommended bedtime, as seconds since midnight in [0, 86400)
///
/// A bedtime that falls before midnight relative to the wake time wraps
/// into the previous evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bedtime {
    seconds: u32,
}

impl Bedtime {
    /// Wrap an offset from midnight (possibly negative) onto the clock face
    pub fn from_seconds_offset(offset: f64) -> Self {
        let wrapped = offset.rem_euclid(SECONDS_PER_DAY as f64).round() as u32;
        Self {
            seconds: wrapped % SECONDS_PER_DAY,
        }
    }

    pub fn seconds_from_midnight(&self) -> u32 {
        self.seconds
    }

    pub fn minutes_from_midnight(&self) -> u32 {
        self.seconds / 60
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.seconds, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    pub fn format(&self, style: ClockStyle) -> String {
        time_format::format_time_of_day(&self.to_naive_time(), style)
    }
}

/// Request schema for the JSON surface
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub wake_minutes: u32,
    pub sleep_hours: f64,
    pub coffee_cups: u32,
}

impl PredictRequest {
    /// Validate the raw schema values into model-domain inputs
    pub fn into_inputs(self) -> AppResult<(WakeTime, SleepAmount, CoffeeIntake)> {
        let wake = WakeTime::from_minutes(self.wake_minutes)?;
        let sleep = SleepAmount::new(self.sleep_hours)?;
        let coffee = CoffeeIntake::new(self.coffee_cups)?;
        Ok((wake, sleep, coffee))
    }
}

/// Response schema for the JSON surface: a bedtime or an error message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictResponse {
    #[serde(rename_all = "camelCase")]
    Bedtime { bedtime_minutes: u32 },
    Error { error: String },
}

impl PredictResponse {
    pub fn from_bedtime(bedtime: Bedtime) -> Self {
        Self::Bedtime {
            bedtime_minutes: bedtime.minutes_from_midnight(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wake_time_validation() {
        let wake = WakeTime::new(7, 0).unwrap();
        assert_eq!(wake.seconds_from_midnight(), 25_200);
        assert_eq!(wake.minutes_from_midnight(), 420);

        assert!(WakeTime::new(24, 0).is_err());
        assert!(WakeTime::new(7, 60).is_err());
    }

    #[test]
    fn test_wake_time_parse() {
        let wake = WakeTime::parse("07:00").unwrap();
        assert_eq!((wake.hour(), wake.minute()), (7, 0));

        let wake = WakeTime::parse("9:45 pm").unwrap();
        assert_eq!((wake.hour(), wake.minute()), (21, 45));

        assert!(WakeTime::parse("later").is_err());
    }

    #[test]
    fn test_wake_time_from_minutes() {
        let wake = WakeTime::from_minutes(420).unwrap();
        assert_eq!((wake.hour(), wake.minute()), (7, 0));
        assert!(WakeTime::from_minutes(1440).is_err());
    }

    #[test]
    fn test_sleep_amount_domain() {
        assert!(SleepAmount::new(4.0).is_ok());
        assert!(SleepAmount::new(12.0).is_ok());
        assert!(SleepAmount::new(8.25).is_ok());

        assert!(SleepAmount::new(3.75).is_err());
        assert!(SleepAmount::new(12.25).is_err());
        assert!(SleepAmount::new(8.1).is_err());
        assert!(SleepAmount::new(f64::NAN).is_err());
    }

    #[test]
    fn test_coffee_intake_domain() {
        assert!(CoffeeIntake::new(1).is_ok());
        assert!(CoffeeIntake::new(20).is_ok());
        assert!(CoffeeIntake::new(0).is_err());
        assert!(CoffeeIntake::new(21).is_err());
    }

    #[test]
    fn test_bedtime_wraps_across_midnight() {
        // 07:00 wake minus nine hours lands at 22:00 the previous evening
        let bedtime = Bedtime::from_seconds_offset(25_200.0 - 9.0 * 3600.0);
        assert_eq!(bedtime.seconds_from_midnight(), 79_200);
        assert_eq!(bedtime.format(ClockStyle::H24), "22:00");

        let bedtime = Bedtime::from_seconds_offset(25_200.0 - 2.0 * 3600.0);
        assert_eq!(bedtime.format(ClockStyle::H24), "05:00");
    }

    #[test]
    fn test_request_schema_camel_case() {
        let json = r#"{"wakeMinutes":420,"sleepHours":8.0,"coffeeCups":2}"#;
        let request: PredictRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.wake_minutes, 420);

        let (wake, sleep, coffee) = request.into_inputs().unwrap();
        assert_eq!(wake.seconds_from_midnight(), 25_200);
        assert_eq!(sleep.hours(), 8.0);
        assert_eq!(coffee.cups(), 2);
    }

    #[test]
    fn test_request_schema_rejects_out_of_domain() {
        let json = r#"{"wakeMinutes":420,"sleepHours":2.0,"coffeeCups":2}"#;
        let request: PredictRequest = serde_json::from_str(json).unwrap();
        assert!(request.into_inputs().is_err());
    }

    #[test]
    fn test_response_schema() {
        let response = PredictResponse::from_bedtime(Bedtime::from_seconds_offset(79_200.0));
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"bedtimeMinutes":1320}"#);

        let response = PredictResponse::Error {
            error: "Sorry, there was a problem calculating your bedtime.".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.starts_with(r#"{"error":"#));
    }
}
