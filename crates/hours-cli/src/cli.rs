//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::classify::ClassifyArgs;
use crate::commands::delete::DeleteArgs;
use crate::commands::edit::EditArgs;
use crate::commands::employee::AddEmployeeArgs;
use crate::commands::log::LogArgs;
use crate::commands::records::RecordsArgs;
use crate::commands::report::{MonthlyArgs, TeamArgs, YearlyArgs};

/// Employee hours tracker.
///
/// Records worked intervals, splits them into business hours and overtime,
/// and aggregates them into monthly and team reports.
#[derive(Debug, Parser)]
#[command(name = "hours", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Preview how an interval is classified without storing it.
    Classify(ClassifyArgs),

    /// Manage employees.
    #[command(subcommand)]
    Employee(EmployeeAction),

    /// Log a worked interval for an employee.
    Log(LogArgs),

    /// Edit a time record, reclassifying it when its times change.
    Edit(EditArgs),

    /// Delete a time record.
    Delete(DeleteArgs),

    /// List an employee's time records.
    Records(RecordsArgs),

    /// Generate and view reports.
    #[command(subcommand)]
    Report(ReportAction),

    /// Reclassify every stored record with the configured business window.
    Recompute,
}

/// Employee management actions.
#[derive(Debug, Subcommand)]
pub enum EmployeeAction {
    /// Register an employee.
    Add(AddEmployeeArgs),

    /// List active employees.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Report actions.
#[derive(Debug, Subcommand)]
pub enum ReportAction {
    /// Generate, store and print an employee's report for one month.
    Monthly(MonthlyArgs),

    /// List an employee's stored monthly reports.
    Yearly(YearlyArgs),

    /// Totals for every active employee over a date range.
    Team(TeamArgs),
}
