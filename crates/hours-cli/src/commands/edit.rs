//! Edit command for changing a stored time record.

use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Args;
use hours_core::{BusinessWindow, TaskType, TimeOfDay, classify_interval};
use hours_db::{Database, DbError};

use super::util::non_blank;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Record ID.
    pub id: i64,
    /// New work date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// New start time (HH:MM).
    #[arg(long)]
    pub start: Option<String>,
    /// New end time (HH:MM).
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub task: Option<String>,
    /// New project number. An empty value clears it.
    #[arg(long)]
    pub project_number: Option<String>,
    /// New project name. An empty value clears it.
    #[arg(long)]
    pub project_name: Option<String>,
    /// New client. An empty value clears it.
    #[arg(long)]
    pub client: Option<String>,
    /// New languages. An empty value clears it.
    #[arg(long)]
    pub languages: Option<String>,
    /// New notes. An empty value clears them.
    #[arg(long)]
    pub notes: Option<String>,
}

impl EditArgs {
    fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.task.is_none()
            && self.project_number.is_none()
            && self.project_name.is_none()
            && self.client.is_none()
            && self.languages.is_none()
            && self.notes.is_none()
    }
}

pub fn run<W: Write>(
    writer: &mut W,
    db: &mut Database,
    args: &EditArgs,
    window: &BusinessWindow,
) -> Result<()> {
    if args.is_empty() {
        bail!("nothing to update for record {}", args.id);
    }

    // Validate everything before touching the stored record.
    let start = args
        .start
        .as_deref()
        .map(TimeOfDay::parse)
        .transpose()
        .context("rejected edit")?;
    let end = args
        .end
        .as_deref()
        .map(TimeOfDay::parse)
        .transpose()
        .context("rejected edit")?;
    let task_type = args
        .task
        .as_deref()
        .map(str::parse::<TaskType>)
        .transpose()
        .context("rejected edit")?;

    let Some(mut record) = db.get_time_record(args.id)? else {
        bail!("record not found: {}", args.id);
    };

    if let Some(date) = args.date {
        record.work_date = date;
    }
    if let Some(task_type) = task_type {
        record.task_type = task_type;
    }
    if args.project_number.is_some() {
        record.project_number = non_blank(args.project_number.as_ref());
    }
    if args.project_name.is_some() {
        record.project_name = non_blank(args.project_name.as_ref());
    }
    if args.client.is_some() {
        record.client = non_blank(args.client.as_ref());
    }
    if args.languages.is_some() {
        record.languages = non_blank(args.languages.as_ref());
    }
    if args.notes.is_some() {
        record.notes = non_blank(args.notes.as_ref());
    }

    let times_changed = start.is_some_and(|s| s != record.start_time)
        || end.is_some_and(|e| e != record.end_time);
    if let Some(start) = start {
        record.start_time = start;
    }
    if let Some(end) = end {
        record.end_time = end;
    }
    if times_changed {
        record.classification = classify_interval(record.interval(), window);
    }

    let record = match db.update_time_record(&record) {
        Ok(record) => record,
        Err(DbError::RecordNotFound(id)) => bail!("record not found: {id}"),
        Err(err) => return Err(err.into()),
    };
    tracing::info!(id = record.id, reclassified = times_changed, "edited time record");

    let c = record.classification;
    writeln!(
        writer,
        "Updated record {}: {} {}-{}, {}h ({}h business, {}h overtime)",
        record.id,
        record.work_date,
        record.start_time,
        record.end_time,
        c.duration,
        c.business,
        c.overtime
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::commands::log;
    use crate::commands::log::tests::{log_args, seeded_db};

    fn edit_args(id: i64) -> EditArgs {
        EditArgs {
            id,
            date: None,
            start: None,
            end: None,
            task: None,
            project_number: None,
            project_name: None,
            client: None,
            languages: None,
            notes: None,
        }
    }

    fn logged_db(start: &str, end: &str) -> Database {
        let mut db = seeded_db();
        let mut sink = Vec::new();
        log::run(
            &mut sink,
            &mut db,
            &log_args("2024-01-15", start, end),
            &BusinessWindow::default(),
        )
        .unwrap();
        db
    }

    #[test]
    fn changing_end_reclassifies() {
        let mut db = logged_db("09:00", "17:00");
        let mut output = Vec::new();
        let mut args = edit_args(1);
        args.end = Some("21:00".to_string());

        run(&mut output, &mut db, &args, &BusinessWindow::default()).unwrap();

        let record = db.get_time_record(1).unwrap().unwrap();
        assert_eq!(record.start_time.to_string(), "09:00");
        assert_eq!(record.end_time.to_string(), "21:00");
        assert_eq!(record.classification.duration.to_string(), "12.00");
        assert_eq!(record.classification.overtime.to_string(), "4.00");

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "Updated record 1: 2024-01-15 09:00-21:00, 12.00h (8.00h business, 4.00h overtime)\n"
        );
    }

    #[test]
    fn changing_start_only_merges_with_stored_end() {
        let mut db = logged_db("09:00", "17:00");
        let mut output = Vec::new();
        let mut args = edit_args(1);
        args.start = Some("15:00".to_string());

        run(&mut output, &mut db, &args, &BusinessWindow::default()).unwrap();

        let record = db.get_time_record(1).unwrap().unwrap();
        assert_eq!(record.classification.duration.to_string(), "2.00");
        assert_eq!(record.classification.business.to_string(), "2.00");
    }

    #[test]
    fn other_fields_keep_stored_figures() {
        let mut db = logged_db("09:00", "17:00");
        // A later window change must not leak into an edit that leaves times alone.
        let window = BusinessWindow::parse("12:00", "20:00").unwrap();
        let mut output = Vec::new();
        let mut args = edit_args(1);
        args.task = Some("review".to_string());
        args.notes = Some("checked glossary".to_string());
        args.client = Some(String::new());

        run(&mut output, &mut db, &args, &window).unwrap();

        let record = db.get_time_record(1).unwrap().unwrap();
        assert_eq!(record.task_type, TaskType::Review);
        assert_eq!(record.notes.as_deref(), Some("checked glossary"));
        assert_eq!(record.client, None);
        assert_eq!(record.classification.business.to_string(), "8.00");
    }

    #[test]
    fn invalid_time_leaves_record_untouched() {
        let mut db = logged_db("09:00", "17:00");
        let before = db.get_time_record(1).unwrap().unwrap();
        let mut output = Vec::new();
        let mut args = edit_args(1);
        args.end = Some("17:75".to_string());
        args.notes = Some("should not be saved".to_string());

        let err = run(&mut output, &mut db, &args, &BusinessWindow::default()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid time format"));
        assert_eq!(db.get_time_record(1).unwrap().unwrap(), before);
    }

    #[test]
    fn missing_record_errors() {
        let mut db = seeded_db();
        let mut output = Vec::new();
        let mut args = edit_args(7);
        args.notes = Some("x".to_string());

        let err = run(&mut output, &mut db, &args, &BusinessWindow::default()).unwrap_err();
        assert_eq!(err.to_string(), "record not found: 7");
    }

    #[test]
    fn empty_edit_errors() {
        let mut db = logged_db("09:00", "17:00");
        let mut output = Vec::new();
        let err = run(&mut output, &mut db, &edit_args(1), &BusinessWindow::default()).unwrap_err();
        assert!(err.to_string().contains("nothing to update"));
    }
}
