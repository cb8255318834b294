//! Wall-clock helpers used by the greeting resource.
use std::str::FromStr;

use chrono::{DateTime, Local, TimeZone, Utc};

const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// Which clock supplies the time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockMode {
    #[default]
    Local,
    Utc,
}

impl ClockMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ClockMode::Local => "local",
            ClockMode::Utc => "utc",
        }
    }

    /// Current time of day as `HH:MM` (24h).
    pub fn time_of_day(&self) -> String {
        match self {
            ClockMode::Local => format_time_of_day(&Local::now()),
            ClockMode::Utc => format_time_of_day(&Utc::now()),
        }
    }
}

impl FromStr for ClockMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(ClockMode::Local),
            "utc" => Ok(ClockMode::Utc),
            other => Err(format!("unknown clock `{other}`; use `local` or `utc`")),
        }
    }
}

pub fn format_time_of_day<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(TIME_OF_DAY_FORMAT).to_string()
}

/// Returns true if `value` looks like `HH:MM` with a valid 24h time.
pub fn is_time_of_day(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let hours = (digits[0] - b'0') * 10 + (digits[1] - b'0');
    let minutes = (digits[2] - b'0') * 10 + (digits[3] - b'0');
    hours < 24 && minutes < 60
}
