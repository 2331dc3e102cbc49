//! Departure time handling.
//!
//! Departures are scheduled by time of day only: hours and minutes on a
//! 24-hour clock, no date component. Output is always zero-padded "HH:MM". Times compare chronologically within a day.

use chrono::format::ParseErrorKind;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day with minute precision.
///
/// # Examples
///
/// ```
/// use departure_board::domain::DepartureTime;
///
/// let time = DepartureTime::parse_hhmm("08:30").unwrap();
/// assert_eq!(time.hour(), 8);
/// assert_eq!(time.to_string(), "08:30");
///
/// // Single-digit fields are accepted and displayed zero-padded
/// assert_eq!(DepartureTime::parse_hhmm("8:5").unwrap().to_string(), "08:05");
///
/// assert!(DepartureTime::parse_hhmm("830").is_err());
/// assert!(DepartureTime::parse_hhmm("24:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepartureTime(NaiveTime);

impl DepartureTime {
    /// Create a time from hour and minute, or `None` if out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a time written as hours and minutes separated by a colon.
    ///
    /// Each field may have one or two digits, so `8:05`, `8:5` and `08:05`
    /// are the same time. Hours run 0-23 and minutes 0-59; nothing else
    /// (spaces, signs, seconds) is allowed.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if !s.bytes().all(|b| b.is_ascii_digit() || b == b':') {
            return Err(TimeError::new("expected H:MM or HH:MM"));
        }

        NaiveTime::parse_from_str(s, "%H:%M")
            .map(Self)
            .map_err(|e| match e.kind() {
                ParseErrorKind::OutOfRange => {
                    TimeError::new("hour must be 0-23 and minute 0-59")
                }
                _ => TimeError::new("expected H:MM or HH:MM"),
            })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the underlying chrono time.
    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for DepartureTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl fmt::Debug for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepartureTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for DepartureTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DepartureTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}
