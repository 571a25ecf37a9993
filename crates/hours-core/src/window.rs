//! Business window configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ClassifyError;
use crate::time_of_day::{MINUTES_PER_DAY, split_hm};

/// The clock range counted as standard paid hours, as minutes since midnight.
///
/// Always satisfies `start < end <= 1440`. The default is 09:00-17:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WindowSpec", into = "WindowSpec")]
pub struct BusinessWindow {
    start: u16,
    end: u16,
}

impl BusinessWindow {
    pub const DEFAULT_START: u16 = 9 * 60;
    pub const DEFAULT_END: u16 = 17 * 60;

    /// Builds a window from minute offsets.
    pub const fn new(start: u16, end: u16) -> Result<Self, ClassifyError> {
        if start < end && end <= MINUTES_PER_DAY {
            Ok(Self { start, end })
        } else {
            Err(ClassifyError::InvalidWindow { start, end })
        }
    }

    /// Builds a window from `HH:MM` bounds. The end may be `24:00`.
    pub fn parse(start: &str, end: &str) -> Result<Self, ClassifyError> {
        let start = parse_bound(start)?;
        let end = parse_bound(end)?;
        if start == MINUTES_PER_DAY {
            return Err(ClassifyError::InvalidWindow { start, end });
        }
        Self::new(start, end)
    }

    pub const fn start(&self) -> u16 {
        self.start
    }

    pub const fn end(&self) -> u16 {
        self.end
    }

    /// Window length in minutes.
    pub const fn len_minutes(&self) -> u16 {
        self.end - self.start
    }
}

impl Default for BusinessWindow {
    fn default() -> Self {
        Self {
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
        }
    }
}

impl fmt::Display for BusinessWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_bound(self.start), format_bound(self.end))
    }
}

/// Accepts `HH:MM` for 00:00-23:59 plus `24:00`.
fn parse_bound(s: &str) -> Result<u16, ClassifyError> {
    match split_hm(s) {
        Some((24, 0)) => Ok(MINUTES_PER_DAY),
        Some((hour, minute)) if hour < 24 && minute < 60 => Ok(hour * 60 + minute),
        _ => Err(ClassifyError::InvalidFormat(s.to_string())),
    }
}

fn format_bound(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Serialized form of a [`BusinessWindow`], as written in configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub start: String,
    pub end: String,
}

impl TryFrom<WindowSpec> for BusinessWindow {
    type Error = ClassifyError;

    fn try_from(raw: WindowSpec) -> Result<Self, Self::Error> {
        Self::parse(&raw.start, &raw.end)
    }
}

impl From<BusinessWindow> for WindowSpec {
    fn from(window: BusinessWindow) -> Self {
        Self {
            start: format_bound(window.start),
            end: format_bound(window.end),
        }
    }
}
