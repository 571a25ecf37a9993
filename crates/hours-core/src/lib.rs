//! Core domain logic for employee hours.
//!
//! This crate contains the fundamental types and logic for:
//! - Classification: splitting a worked interval into business hours and overtime
//! - Business windows: the configurable clock range counted as standard hours
//! - Summaries: folding classified records into period totals

mod classify;
mod error;
mod hours;
mod summary;
pub mod task_type;
mod time_of_day;
mod window;

pub use classify::{Classification, TimeInterval, classify, classify_all, classify_interval};
pub use error::ClassifyError;
pub use hours::Hours;
pub use summary::{ClassifiedRecord, PeriodSummary};
pub use task_type::{TaskType, UnknownTaskType};
pub use time_of_day::{MINUTES_PER_DAY, TimeOfDay};
pub use window::{BusinessWindow, WindowSpec};
