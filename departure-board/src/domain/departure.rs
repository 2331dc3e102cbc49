//! Departure record type.

use serde::{Deserialize, Deserializer, Serialize, de};

use super::DepartureTime;

/// Error returned when a train number is not a valid integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train number: {input:?}")]
pub struct InvalidTrainNumber {
    input: String,
}

/// Parse a train number as typed by a user.
///
/// Surrounding whitespace is ignored; anything else must be a base-10
/// integer with an optional sign.
///
/// ```
/// use departure_board::domain::parse_train_number;
///
/// assert_eq!(parse_train_number(" 42 ").unwrap(), 42);
/// assert!(parse_train_number("42a").is_err());
/// ```
pub fn parse_train_number(s: &str) -> Result<i64, InvalidTrainNumber> {
    s.trim().parse().map_err(|_| InvalidTrainNumber {
        input: s.to_string(),
    })
}

/// One scheduled train departure.
///
/// This is also the on-disk shape: the JSON object has `destination`,
/// `number` and `time` keys, with `time` as an "HH:MM" string. A missing
/// `destination` reads as the empty string; `number` and `time` are
/// required. `number` may be written as a float if it is a whole number
/// (`1.0`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    /// Where the train is going.
    #[serde(default)]
    pub destination: String,

    /// Train number.
    #[serde(deserialize_with = "deserialize_train_number")]
    pub number: i64,

    /// Scheduled departure time.
    pub time: DepartureTime,
}

impl Departure {
    /// Create a new departure.
    pub fn new(destination: impl Into<String>, number: i64, time: DepartureTime) -> Self {
        Self {
            destination: destination.into(),
            number,
            time,
        }
    }

    /// Whether this train leaves strictly after `time`.
    pub fn departs_after(&self, time: DepartureTime) -> bool {
        self.time > time
    }
}

/// Read a JSON number that holds a whole value within `i64` range.
fn deserialize_train_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = serde_json::Number::deserialize(deserializer)?;
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }

    match n.as_f64() {
        // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as i64)
        }
        _ => Err(de::Error::custom(format!(
            "train number must be a whole number, got {n}"
        ))),
    }
}
