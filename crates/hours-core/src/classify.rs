//! Business-hours / overtime classification.
//!
//! # Algorithm Summary
//!
//! 1. Convert start and end to minutes since midnight (`s`, `e`)
//! 2. Duration is `e - s`, wrapped by one day when negative; `s == e` counts as a full day
//! 3. Compare the unwrapped `s`/`e` against the business window:
//!    - entirely at or after the window end, or at or before its start: all overtime
//!    - entirely inside: all business
//!    - otherwise the overlap is business and the remainder overtime
//! 4. Each figure is converted to hours and rounded half up to two decimals
//!
//! Overnight intervals are never re-split across midnight: only the window of
//! the day the interval starts on is considered.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::time_of_day::MINUTES_PER_DAY;
use crate::{BusinessWindow, ClassifyError, Hours, TimeOfDay};

/// A reported work interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeInterval {
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parses both ends as `HH:MM`.
    pub fn parse(start: &str, end: &str) -> Result<Self, ClassifyError> {
        Ok(Self {
            start: TimeOfDay::parse(start)?,
            end: TimeOfDay::parse(end)?,
        })
    }

    /// Worked minutes, wrapping past midnight when the end is not after the start.
    pub const fn duration_minutes(&self) -> u16 {
        let start = self.start.minutes();
        let end = self.end.minutes();
        if end > start {
            end - start
        } else {
            end + MINUTES_PER_DAY - start
        }
    }

    /// Whether the interval continues past midnight.
    pub const fn is_overnight(&self) -> bool {
        self.end.minutes() <= self.start.minutes()
    }
}

/// Duration split into business hours and overtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub duration: Hours,
    pub business: Hours,
    pub overtime: Hours,
}

/// Classifies an interval given as `HH:MM` strings.
pub fn classify(
    start: &str,
    end: &str,
    window: &BusinessWindow,
) -> Result<Classification, ClassifyError> {
    let interval = TimeInterval::parse(start, end)?;
    Ok(classify_interval(interval, window))
}

/// Classifies an already parsed interval.
pub fn classify_interval(interval: TimeInterval, window: &BusinessWindow) -> Classification {
    let s = interval.start.minutes();
    let e = interval.end.minutes();
    let duration = interval.duration_minutes();

    if s == e {
        tracing::warn!(
            start = %interval.start,
            end = %interval.end,
            "start equals end, counting a full 24 hours"
        );
    }

    let business = if s >= window.end() || e <= window.start() {
        0
    } else if s >= window.start() && e <= window.end() {
        duration
    } else {
        // Only reachable when e > s, so the overlap is non-empty.
        e.min(window.end()) - s.max(window.start())
    };
    let overtime = duration - business;

    let classification = Classification {
        duration: Hours::from_minutes(u32::from(duration)),
        business: Hours::from_minutes(u32::from(business)),
        overtime: Hours::from_minutes(u32::from(overtime)),
    };
    tracing::debug!(
        start = %interval.start,
        end = %interval.end,
        %window,
        duration = %classification.duration,
        business = %classification.business,
        overtime = %classification.overtime,
        "classified interval"
    );
    classification
}

/// Classifies a batch in parallel, preserving input order.
pub fn classify_all(intervals: &[TimeInterval], window: &BusinessWindow) -> Vec<Classification> {
    intervals
        .par_iter()
        .map(|interval| classify_interval(*interval, window))
        .collect()
}
