//! Date of Birth Value Object
//!
//! Strict `YYYY-MM-DD`: four-digit year 1000-9999, zero-padded month and day,
//! and a date that exists on the calendar (no Feb 30, no month 13, Feb 29 only
//! in leap years). Must not lie after the current date.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use thiserror::Error;

const FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DobError {
    #[error("dob must be a real date in format YYYY-MM-DD")]
    InvalidFormat,

    #[error("dob must be a date in the past")]
    NotInPast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    /// Parse and validate against `today`
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self, DobError> {
        let date = parse_calendar_date(raw).ok_or(DobError::InvalidFormat)?;

        if date > today {
            return Err(DobError::NotInPast);
        }

        Ok(Self(date))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok || bytes[0] == b'0' {
        return None;
    }

    let year: i32 = raw[0..4].parse().ok()?;
    let month: u32 = raw[5..7].parse().ok()?;
    let day: u32 = raw[8..10].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

impl std::fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl Serialize for DateOfBirth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_valid_dates() {
        let dob = DateOfBirth::parse("1990-01-31", today()).unwrap();
        assert_eq!(dob.to_string(), "1990-01-31");

        // leap day
        assert!(DateOfBirth::parse("2000-02-29", today()).is_ok());
        assert!(DateOfBirth::parse("1996-02-29", today()).is_ok());
    }

    #[test]
    fn test_impossible_dates() {
        for raw in ["2024-02-30", "2023-02-29", "1900-02-29", "2001-13-01", "2001-04-31", "2001-00-10", "2001-01-00"] {
            assert_eq!(
                DateOfBirth::parse(raw, today()),
                Err(DobError::InvalidFormat),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_strings() {
        for raw in ["", "1990-1-31", "90-01-31", "1990/01/31", "0990-01-31", "1990-01-31T00:00", " 1990-01-31", "abcd-ef-gh"] {
            assert_eq!(
                DateOfBirth::parse(raw, today()),
                Err(DobError::InvalidFormat),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_future_rejected() {
        assert_eq!(
            DateOfBirth::parse("2024-06-16", today()),
            Err(DobError::NotInPast)
        );
        assert_eq!(
            DateOfBirth::parse("2999-01-01", today()),
            Err(DobError::NotInPast)
        );
        // Today has already started
        assert!(DateOfBirth::parse("2024-06-15", today()).is_ok());
    }

    #[test]
    fn test_serializes_as_string() {
        let dob = DateOfBirth::parse("2000-02-29", today()).unwrap();
        assert_eq!(serde_json::to_string(&dob).unwrap(), r#""2000-02-29""#);
    }
}
