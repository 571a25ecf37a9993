//! Records command for listing an employee's time records.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use hours_core::{ClassifiedRecord, PeriodSummary};
use hours_db::{Database, TimeRecord};
use serde::Serialize;

use super::util::{date_range, resolve_employee};

#[derive(Debug, Args)]
pub struct RecordsArgs {
    /// Employee code.
    #[arg(long)]
    pub employee: String,
    /// First work date to include (YYYY-MM-DD).
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,
    /// Last work date to include (YYYY-MM-DD).
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct JsonRecords<'a> {
    employee: &'a str,
    records: &'a [TimeRecord],
    totals: PeriodSummary,
}

pub fn run<W: Write>(writer: &mut W, db: &Database, args: &RecordsArgs) -> Result<()> {
    let employee = resolve_employee(db, &args.employee)?;
    let range = match (args.from, args.to) {
        (Some(from), Some(to)) => Some(date_range(from, to)?),
        _ => None,
    };
    let records = db.list_time_records(employee.id, range)?;
    let totals = PeriodSummary::from_records(&records);

    if args.json {
        let output = JsonRecords {
            employee: &employee.code,
            records: &records,
            totals,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    writeln!(writer, "RECORDS: {} {}", employee.code, employee.full_name())?;
    if records.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "No records found.")?;
        return Ok(());
    }

    writeln!(
        writer,
        "{:>4}  {:<10}  {:<11}  {:<18}  {:>8}  {:>8}  {:>8}  PROJECT",
        "ID", "DATE", "TIME", "TASK", "DURATION", "BUSINESS", "OVERTIME"
    )?;
    for record in &records {
        let c = record.classification;
        let time = format!("{}-{}", record.start_time, record.end_time);
        writeln!(
            writer,
            "{:>4}  {}  {time:<11}  {:<18}  {:>8}  {:>8}  {:>8}  {}",
            record.id,
            record.work_date,
            record.task_type.as_str(),
            c.duration.to_string(),
            c.business.to_string(),
            c.overtime.to_string(),
            record.project_key().unwrap_or("-")
        )?;
    }

    writeln!(writer)?;
    writeln!(
        writer,
        "Total: {}h ({}h business, {}h overtime) across {} records",
        totals.total, totals.business, totals.overtime, totals.record_count
    )?;
    Ok(())
}
