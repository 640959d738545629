//! Civil calendar dates at a fixed 00:00 wall-clock time.
//!
//! `DateSpec` is what the day-range driver iterates over. The wall clock is
//! read as UT without any zone offset.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// A calendar date whose time of day is implicitly 00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateSpec {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateSpec {
    /// Build a date without validating the fields.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Build a date, rejecting months outside 1..=12 and days past month end.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!("month {month} out of range")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(TimeError::InvalidDate(format!(
                "day {day} out of range for {year:04}-{month:02} (1-{last})"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day of 00:00 on this date, reading the wall clock as UT.
    pub fn to_julian_day(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// The date `days` calendar days later (earlier when negative).
    pub fn add_days(&self, days: i64) -> Self {
        let jd = self.to_julian_day() + days as f64;
        let (year, month, day_frac) = jd_to_calendar(jd);
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
        }
    }

    /// Naive ISO-8601 datetime at midnight: `YYYY-MM-DDT00:00:00`.
    pub fn iso_timestamp(&self) -> String {
        format!("{self}T00:00:00")
    }
}

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year` (month is 1-based).
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl Display for DateSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DateSpec {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, optionally followed by `T00:00:00`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let date_part = match s.split_once('T') {
            Some((date, time)) => {
                let time = time.trim_end_matches('Z');
                if time != "00:00:00" && time != "00:00" {
                    return Err(TimeError::Parse(format!(
                        "only midnight is supported, got time {time}"
                    )));
                }
                date
            }
            None => s,
        };

        // A leading '-' belongs to the year, not a separator.
        let (sign, body) = match date_part.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, date_part),
        };
        let parts: Vec<&str> = body.split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|e| TimeError::Parse(format!("year {:?}: {e}", parts[0])))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|e| TimeError::Parse(format!("month {:?}: {e}", parts[1])))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|e| TimeError::Parse(format!("day {:?}: {e}", parts[2])))?;
        Self::from_ymd(sign * year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_fields() {
        assert_eq!(DateSpec::new(2025, 1, 1).to_string(), "2025-01-01");
    }

    #[test]
    fn iso_timestamp_is_midnight() {
        assert_eq!(
            DateSpec::new(2025, 1, 9).iso_timestamp(),
            "2025-01-09T00:00:00"
        );
    }

    #[test]
    fn add_days_crosses_year_end() {
        let d = DateSpec::new(2024, 12, 28).add_days(5);
        assert_eq!(d, DateSpec::new(2025, 1, 2));
    }

    #[test]
    fn add_days_through_leap_february() {
        let d = DateSpec::new(2024, 2, 28).add_days(1);
        assert_eq!(d, DateSpec::new(2024, 2, 29));
        assert_eq!(d.add_days(1), DateSpec::new(2024, 3, 1));
    }

    #[test]
    fn add_negative_days() {
        let d = DateSpec::new(2025, 3, 1).add_days(-1);
        assert_eq!(d, DateSpec::new(2025, 2, 28));
    }

    #[test]
    fn julian_day_of_start_date() {
        assert_eq!(DateSpec::new(2025, 1, 1).to_julian_day(), 2_460_676.5);
    }

    #[test]
    fn parse_plain_date() {
        let d: DateSpec = "2025-01-01".parse().unwrap();
        assert_eq!(d, DateSpec::new(2025, 1, 1));
    }

    #[test]
    fn parse_with_midnight_suffix() {
        let d: DateSpec = "2025-01-05T00:00:00".parse().unwrap();
        assert_eq!(d, DateSpec::new(2025, 1, 5));
    }

    #[test]
    fn parse_rejects_non_midnight() {
        assert!("2025-01-05T05:30:00".parse::<DateSpec>().is_err());
    }

    #[test]
    fn parse_rejects_bad_day() {
        let err = "2023-02-29".parse::<DateSpec>().unwrap_err();
        assert!(matches!(err, TimeError::InvalidDate(_)), "{err}");
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "tomorrow".parse::<DateSpec>().unwrap_err();
        assert!(matches!(err, TimeError::Parse(_)), "{err}");
    }

    #[test]
    fn century_leap_rules() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
    }
}
