//! Log command for submitting a worked interval.
//!
//! The interval is classified before anything is written; invalid times or an
//! unknown task type reject the submission without storing partial data.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use hours_core::{BusinessWindow, TaskType, TimeInterval, classify_interval};
use hours_db::{Database, NewTimeRecord};

use super::util::{non_blank, resolve_employee};

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Employee code.
    #[arg(long)]
    pub employee: String,
    /// Work date (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,
    /// Start time (HH:MM).
    #[arg(long)]
    pub start: String,
    /// End time (HH:MM). Earlier than start means the shift ended the next day.
    #[arg(long)]
    pub end: String,
    /// Task type: translation, review, qa, desktop_publishing, voiceover, subtitle or other.
    #[arg(long, default_value = "translation")]
    pub task: String,
    #[arg(long)]
    pub project_number: Option<String>,
    #[arg(long)]
    pub project_name: Option<String>,
    #[arg(long)]
    pub client: Option<String>,
    /// Language pair or list (e.g. "English, Spanish").
    #[arg(long)]
    pub languages: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

pub fn run<W: Write>(
    writer: &mut W,
    db: &mut Database,
    args: &LogArgs,
    window: &BusinessWindow,
) -> Result<()> {
    let interval = TimeInterval::parse(&args.start, &args.end)
        .context("rejected time entry")?;
    let task_type: TaskType = args.task.parse().context("rejected time entry")?;
    let employee = resolve_employee(db, &args.employee)?;

    let classification = classify_interval(interval, window);
    let record = db.insert_time_record(&NewTimeRecord {
        employee_id: employee.id,
        work_date: args.date,
        project_number: non_blank(args.project_number.as_ref()),
        project_name: non_blank(args.project_name.as_ref()),
        task_type,
        client: non_blank(args.client.as_ref()),
        languages: non_blank(args.languages.as_ref()),
        start_time: interval.start,
        end_time: interval.end,
        classification,
        notes: non_blank(args.notes.as_ref()),
    })?;
    tracing::info!(id = record.id, employee = %employee.code, "logged time record");

    writeln!(
        writer,
        "Logged record {} for {} on {}: {}h ({}h business, {}h overtime)",
        record.id,
        employee.code,
        record.work_date,
        classification.duration,
        classification.business,
        classification.overtime
    )?;
    Ok(())
}
