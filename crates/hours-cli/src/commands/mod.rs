//! CLI subcommand implementations.

pub mod classify;
pub mod delete;
pub mod edit;
pub mod employee;
pub mod log;
pub mod recompute;
pub mod records;
pub mod report;
mod util;
