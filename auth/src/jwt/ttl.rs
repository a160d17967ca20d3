use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::Deserialize;

use super::errors::TtlError;

/// Lifetime of an issued token.
///
/// Parsed from relative duration expressions such as `"+1 hour"`,
/// `"30 minutes"` or the compact `"12h"`. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct TokenTtl(Duration);

impl TokenTtl {
    /// Build a TTL from a number of seconds.
    ///
    /// # Errors
    /// * `NotPositive` - `seconds` is zero or negative
    pub fn from_seconds(seconds: i64) -> Result<Self, TtlError> {
        if seconds <= 0 {
            return Err(TtlError::NotPositive(seconds.to_string()));
        }
        Duration::try_seconds(seconds)
            .map(Self)
            .ok_or_else(|| TtlError::InvalidAmount(seconds.to_string()))
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn as_seconds(&self) -> i64 {
        self.0.num_seconds()
    }

    fn seconds_per_unit(unit: &str) -> Option<i64> {
        match unit {
            "s" | "sec" | "second" | "seconds" => Some(1),
            "m" | "min" | "minute" | "minutes" => Some(60),
            "h" | "hour" | "hours" => Some(3_600),
            "d" | "day" | "days" => Some(86_400),
            "w" | "week" | "weeks" => Some(604_800),
            _ => None,
        }
    }
}

impl FromStr for TokenTtl {
    type Err = TtlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let expression = s.trim();
        let expression = expression
            .strip_prefix('+')
            .unwrap_or(expression)
            .trim_start();

        if expression.is_empty() {
            return Err(TtlError::Empty);
        }

        let unit_start = expression
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(expression.len());
        let (amount, unit) = expression.split_at(unit_start);

        let amount: i64 = amount
            .parse()
            .map_err(|_| TtlError::InvalidAmount(s.to_string()))?;

        let unit = unit.trim().to_ascii_lowercase();
        let seconds_per_unit =
            Self::seconds_per_unit(&unit).ok_or_else(|| TtlError::UnknownUnit(unit.clone()))?;

        let seconds = amount
            .checked_mul(seconds_per_unit)
            .ok_or_else(|| TtlError::InvalidAmount(s.to_string()))?;

        Self::from_seconds(seconds).map_err(|e| match e {
            TtlError::NotPositive(_) => TtlError::NotPositive(s.to_string()),
            other => other,
        })
    }
}

impl TryFrom<String> for TokenTtl {
    type Error = TtlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TokenTtl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} seconds", self.as_seconds())
    }
}
