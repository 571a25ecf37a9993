//! Employee hours CLI library.
//!
//! This crate provides the CLI interface for recording and reporting hours.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, EmployeeAction, ReportAction};
pub use config::Config;
