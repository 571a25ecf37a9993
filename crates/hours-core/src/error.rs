use thiserror::Error;

/// Errors raised while classifying an interval.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// A time string is not `HH:MM` with hour 0-23 and minute 0-59.
    #[error("invalid time format: {0:?} (expected HH:MM)")]
    InvalidFormat(String),
    /// A business window does not satisfy `0 <= start < end <= 1440`.
    #[error("invalid business window: start {start} must be before end {end} within 0..=1440 minutes")]
    InvalidWindow { start: u16, end: u16 },
}
