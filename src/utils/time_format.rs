use crate::config::ClockStyle;
use crate::utils::error::{AppError, AppResult};
use chrono::NaiveTime;

const FORMAT_24H: &str = "%H:%M";
const FORMAT_12H: &str = "%I:%M %p";

/// Parse a wall-clock time from user input.
///
/// Accepts 24-hour "HH:MM" first, then "H:MM AM/PM" for backward
/// compatibility with 12-hour input.
pub fn parse_time_of_day(input: &str) -> AppResult<NaiveTime> {
    let trimmed = input.trim();
    if let Ok(time) = NaiveTime::parse_from_str(trimmed, FORMAT_24H) {
        return Ok(time);
    }
    NaiveTime::parse_from_str(&trimmed.to_uppercase(), FORMAT_12H).map_err(|_| {
        AppError::InvalidInput(format!(
            "Unrecognized time '{}' (expected HH:MM or H:MM AM/PM)",
            input
        ))
    })
}

pub fn format_time_of_day(time: &NaiveTime, style: ClockStyle) -> String {
    match style {
        ClockStyle::H24 => time.format(FORMAT_24H).to_string(),
        ClockStyle::H12 => time.format("%-I:%M %p").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_24_hour() {
        let time = parse_time_of_day("07:00").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(7, 0, 0).unwrap());

        let time = parse_time_of_day("22:33").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(22, 33, 0).unwrap());
    }

    #[test]
    fn test_parse_12_hour() {
        let time = parse_time_of_day("7:00 am").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(7, 0, 0).unwrap());

        let time = parse_time_of_day("10:33 PM").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(22, 33, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_time_of_day("soon").is_err());
        assert!(parse_time_of_day("25:00").is_err());
    }

    #[test]
    fn test_format_styles() {
        let time = NaiveTime::from_hms_opt(22, 33, 0).unwrap();
        assert_eq!(format_time_of_day(&time, ClockStyle::H24), "22:33");
        assert_eq!(format_time_of_day(&time, ClockStyle::H12), "10:33 PM");

        let time = NaiveTime::from_hms_opt(7, 5, 0).unwrap();
        assert_eq!(format_time_of_day(&time, ClockStyle::H12), "7:05 AM");
    }
}
