//! Wall-clock time of day at minute resolution.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::ClassifyError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A time of day expressed as minutes since midnight, in `[0, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self(0);

    /// Builds a time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self, ClassifyError> {
        if minutes < MINUTES_PER_DAY {
            Ok(Self(minutes))
        } else {
            Err(ClassifyError::InvalidFormat(format!("{minutes} minutes")))
        }
    }

    /// Builds a time from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, ClassifyError> {
        if hour < 24 && minute < 60 {
            Ok(Self(hour * 60 + minute))
        } else {
            Err(ClassifyError::InvalidFormat(format!("{hour}:{minute:02}")))
        }
    }

    /// Parses `HH:MM`.
    ///
    /// The hour takes one or two digits and the minute exactly two. Whitespace,
    /// seconds and signs are rejected.
    pub fn parse(s: &str) -> Result<Self, ClassifyError> {
        let (hour, minute) = split_hm(s).ok_or_else(|| ClassifyError::InvalidFormat(s.to_string()))?;
        Self::from_hm(hour, minute).map_err(|_| ClassifyError::InvalidFormat(s.to_string()))
    }

    pub const fn minutes(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    pub const fn minute(self) -> u16 {
        self.0 % 60
    }
}

/// Splits `H:MM` / `HH:MM` into numeric parts without range checks.
pub(crate) fn split_hm(s: &str) -> Option<(u16, u16)> {
    let (hour, minute) = s.split_once(':')?;
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !(1..=2).contains(&hour.len()) || minute.len() != 2 {
        return None;
    }
    if !all_digits(hour) || !all_digits(minute) {
        return None;
    }
    Some((hour.parse().ok()?, minute.parse().ok()?))
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates seconds.
    #[allow(clippy::cast_possible_truncation)]
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        Self::MIN + TimeDelta::minutes(i64::from(time.0))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_and_unpadded_hours() {
        assert_eq!(TimeOfDay::parse("09:00").unwrap().minutes(), 540);
        assert_eq!(TimeOfDay::parse("9:00").unwrap().minutes(), 540);
        assert_eq!(TimeOfDay::parse("00:00").unwrap(), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::parse("23:59").unwrap().minutes(), 1439);
    }

    #[test]
    fn rejects_out_of_range_parts() {
        for input in ["24:00", "25:00", "12:60", "99:99"] {
            let err = TimeOfDay::parse(input).unwrap_err();
            assert_eq!(err, ClassifyError::InvalidFormat(input.to_string()));
        }
    }

    #[test]
    fn rejects_malformed_strings() {
        for input in [
            "", "0900", "9", ":30", "09:0", "09:000", "123:00", " 09:00", "09:00 ", "+9:00",
            "09:00:00", "ab:cd", "09-00",
        ] {
            assert!(
                TimeOfDay::parse(input).is_err(),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn displays_zero_padded() {
        let time = TimeOfDay::parse("7:05").unwrap();
        assert_eq!(time.to_string(), "07:05");
    }

    #[test]
    fn converts_through_naive_time() {
        let time = TimeOfDay::parse("17:45").unwrap();
        let naive: NaiveTime = time.into();
        assert_eq!(naive, NaiveTime::from_hms_opt(17, 45, 0).unwrap());

        let with_seconds = NaiveTime::from_hms_opt(8, 15, 59).unwrap();
        assert_eq!(TimeOfDay::from(with_seconds).to_string(), "08:15");
    }

    #[test]
    fn from_minutes_bounds() {
        assert!(TimeOfDay::from_minutes(1439).is_ok());
        assert!(TimeOfDay::from_minutes(MINUTES_PER_DAY).is_err());
    }

    #[test]
    fn serde_uses_hh_mm_strings() {
        let time = TimeOfDay::parse("06:30").unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"06:30\"");

        let parsed: TimeOfDay = serde_json::from_str("\"6:30\"").unwrap();
        assert_eq!(parsed, time);

        let bad: Result<TimeOfDay, _> = serde_json::from_str("\"6:3\"");
        assert!(bad.is_err());
    }
}
