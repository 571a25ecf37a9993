//! Report commands for monthly, yearly and team views.
//!
//! Monthly reports are generated from the stored classifications and persisted,
//! replacing any earlier report for the same month. The yearly view only reads
//! what has been persisted. The team view is computed on the fly.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use hours_core::PeriodSummary;
use hours_db::{Database, MonthlyReport};
use serde::Serialize;

use super::util::{date_range, month_range, resolve_employee};

#[derive(Debug, Args)]
pub struct MonthlyArgs {
    /// Employee code.
    #[arg(long)]
    pub employee: String,
    #[arg(long)]
    pub year: i32,
    /// Month number (1-12).
    #[arg(long)]
    pub month: u32,
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct YearlyArgs {
    /// Employee code.
    #[arg(long)]
    pub employee: String,
    /// Only show reports for this year.
    #[arg(long)]
    pub year: Option<i32>,
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct TeamArgs {
    /// First work date to include (YYYY-MM-DD).
    #[arg(long)]
    pub from: NaiveDate,
    /// Last work date to include (YYYY-MM-DD).
    #[arg(long)]
    pub to: NaiveDate,
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct JsonMonthly<'a> {
    employee: &'a str,
    #[serde(flatten)]
    report: &'a MonthlyReport,
}

#[derive(Debug, Serialize)]
struct JsonYearly<'a> {
    employee: &'a str,
    year: Option<i32>,
    reports: &'a [MonthlyReport],
    totals: PeriodSummary,
}

#[derive(Debug, Serialize)]
struct TeamRow {
    code: String,
    name: String,
    #[serde(flatten)]
    summary: PeriodSummary,
}

#[derive(Debug, Serialize)]
struct JsonTeam<'a> {
    from: NaiveDate,
    to: NaiveDate,
    employees: &'a [TeamRow],
    totals: &'a PeriodSummary,
}

// ========== Monthly ==========

/// Generates, stores and prints one month for one employee.
pub fn monthly<W: Write>(
    writer: &mut W,
    db: &mut Database,
    args: &MonthlyArgs,
    generated_at: DateTime<Utc>,
) -> Result<()> {
    let range = month_range(args.year, args.month)?;
    let employee = resolve_employee(db, &args.employee)?;

    let records = db.list_time_records(employee.id, Some(range))?;
    let report = MonthlyReport {
        employee_id: employee.id,
        year: args.year,
        month: args.month,
        summary: PeriodSummary::from_records(&records),
        generated_at,
    };
    db.upsert_monthly_report(&report)?;
    tracing::info!(
        employee = %employee.code,
        year = args.year,
        month = args.month,
        records = report.summary.record_count,
        "generated monthly report"
    );

    if args.json {
        let output = JsonMonthly {
            employee: &employee.code,
            report: &report,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    let summary = &report.summary;
    writeln!(
        writer,
        "MONTHLY REPORT: {} {}, {}",
        employee.code,
        employee.full_name(),
        range.start.format("%B %Y")
    )?;
    writeln!(writer)?;
    writeln!(writer, "Records:  {}", summary.record_count)?;
    writeln!(writer, "Projects: {}", summary.project_count)?;
    writeln!(writer, "Total:    {}h", summary.total)?;
    writeln!(writer, "Business: {}h", summary.business)?;
    writeln!(writer, "Overtime: {}h", summary.overtime)?;
    Ok(())
}

// ========== Yearly ==========

/// Lists stored monthly reports with a combined total.
pub fn yearly<W: Write>(writer: &mut W, db: &Database, args: &YearlyArgs) -> Result<()> {
    let employee = resolve_employee(db, &args.employee)?;
    let reports = db.list_monthly_reports(employee.id, args.year)?;
    let totals = reports
        .iter()
        .fold(PeriodSummary::default(), |acc, r| acc.merge(&r.summary));

    if args.json {
        let output = JsonYearly {
            employee: &employee.code,
            year: args.year,
            reports: &reports,
            totals,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    match args.year {
        Some(year) => writeln!(
            writer,
            "MONTHLY REPORTS: {} {}, {year}",
            employee.code,
            employee.full_name()
        )?,
        None => writeln!(
            writer,
            "MONTHLY REPORTS: {} {}",
            employee.code,
            employee.full_name()
        )?,
    }
    writeln!(writer)?;

    if reports.is_empty() {
        writeln!(writer, "No monthly reports stored.")?;
        writeln!(writer)?;
        writeln!(writer, "Hint: Run 'hours report monthly' to generate one.")?;
        return Ok(());
    }

    writeln!(
        writer,
        "{:<7}  {:>7}  {:>8}  {:>8}  {:>8}  {:>8}",
        "MONTH", "RECORDS", "PROJECTS", "TOTAL", "BUSINESS", "OVERTIME"
    )?;
    for report in &reports {
        write_summary_row(
            writer,
            &format!("{}-{:02}", report.year, report.month),
            &report.summary,
        )?;
    }
    write_summary_row(writer, "TOTAL", &totals)?;
    Ok(())
}

fn write_summary_row<W: Write>(writer: &mut W, label: &str, summary: &PeriodSummary) -> Result<()> {
    writeln!(
        writer,
        "{label:<7}  {:>7}  {:>8}  {:>8}  {:>8}  {:>8}",
        summary.record_count,
        summary.project_count,
        summary.total.to_string(),
        summary.business.to_string(),
        summary.overtime.to_string()
    )?;
    Ok(())
}

// ========== Team ==========

/// Summarizes every active employee over an inclusive date range.
pub fn team<W: Write>(writer: &mut W, db: &Database, args: &TeamArgs) -> Result<()> {
    let range = date_range(args.from, args.to)?;

    let mut rows = Vec::new();
    for employee in db.list_employees()? {
        let records = db.list_time_records(employee.id, Some(range))?;
        rows.push(TeamRow {
            name: employee.full_name(),
            code: employee.code,
            summary: PeriodSummary::from_records(&records),
        });
    }
    let totals = rows
        .iter()
        .fold(PeriodSummary::default(), |acc, row| acc.merge(&row.summary));
    tracing::info!(
        employees = rows.len(),
        records = totals.record_count,
        "generated team report"
    );

    if args.json {
        let output = JsonTeam {
            from: range.start,
            to: range.end,
            employees: &rows,
            totals: &totals,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    writeln!(writer, "TEAM REPORT: {} to {}", range.start, range.end)?;
    writeln!(writer)?;
    if rows.is_empty() {
        writeln!(writer, "No active employees.")?;
        return Ok(());
    }

    writeln!(
        writer,
        "{:<10} {:<24} {:>7}  {:>8}  {:>8}  {:>8}",
        "CODE", "NAME", "RECORDS", "TOTAL", "BUSINESS", "OVERTIME"
    )?;
    for row in &rows {
        write_team_row(writer, &row.code, &row.name, &row.summary)?;
    }
    write_team_row(writer, "TOTAL", "", &totals)?;
    Ok(())
}

fn write_team_row<W: Write>(
    writer: &mut W,
    code: &str,
    name: &str,
    summary: &PeriodSummary,
) -> Result<()> {
    writeln!(
        writer,
        "{code:<10} {name:<24} {:>7}  {:>8}  {:>8}  {:>8}",
        summary.record_count,
        summary.total.to_string(),
        summary.business.to_string(),
        summary.overtime.to_string()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;
    use hours_core::BusinessWindow;
    use hours_db::NewEmployee;
    use insta::assert_snapshot;

    use crate::commands::log;
    use crate::commands::log::tests::{log_args, seeded_db};

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap()
    }

    fn log_for(db: &mut Database, employee: &str, date: &str, start: &str, end: &str) {
        let mut args = log_args(date, start, end);
        args.employee = employee.to_string();
        let mut sink = Vec::new();
        log::run(&mut sink, db, &args, &BusinessWindow::default()).unwrap();
    }

    fn logged_db() -> Database {
        let mut db = seeded_db();
        log_for(&mut db, "E-001", "2024-01-15", "09:00", "17:00");
        log_for(&mut db, "E-001", "2024-01-16", "17:00", "21:00");
        log_for(&mut db, "E-001", "2024-02-01", "15:00", "19:00");
        db
    }

    fn monthly_args(year: i32, month: u32) -> MonthlyArgs {
        MonthlyArgs {
            employee: "E-001".to_string(),
            year,
            month,
            json: false,
        }
    }

    #[test]
    fn monthly_report_prints_and_stores() {
        let mut db = logged_db();
        let mut output = Vec::new();
        monthly(&mut output, &mut db, &monthly_args(2024, 1), generated_at()).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        MONTHLY REPORT: E-001 Ana Silva, January 2024

        Records:  2
        Projects: 1
        Total:    12.00h
        Business: 8.00h
        Overtime: 4.00h
        ");

        let stored = db.get_monthly_report(1, 2024, 1).unwrap().unwrap();
        assert_eq!(stored.summary.record_count, 2);
        assert_eq!(stored.summary.overtime.to_string(), "4.00");
        assert_eq!(stored.generated_at, generated_at());
    }

    #[test]
    fn regenerating_a_month_replaces_it() {
        let mut db = logged_db();
        let mut sink = Vec::new();
        monthly(&mut sink, &mut db, &monthly_args(2024, 1), generated_at()).unwrap();

        log_for(&mut db, "E-001", "2024-01-31", "22:00", "09:30");
        let later = Utc.with_ymd_and_hms(2024, 2, 2, 8, 0, 0).unwrap();
        monthly(&mut sink, &mut db, &monthly_args(2024, 1), later).unwrap();

        let reports = db.list_monthly_reports(1, Some(2024)).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].summary.record_count, 3);
        assert_eq!(reports[0].summary.total.to_string(), "23.50");
        assert_eq!(reports[0].summary.overtime.to_string(), "15.50");
        assert_eq!(reports[0].generated_at, later);
    }

    #[test]
    fn monthly_report_for_empty_month_is_zero() {
        let mut db = logged_db();
        let mut output = Vec::new();
        let mut args = monthly_args(2024, 3);
        args.json = true;
        monthly(&mut output, &mut db, &args, generated_at()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["employee"], "E-001");
        assert_eq!(value["month"], 3);
        assert_eq!(value["total"], 0.0);
        assert_eq!(value["record_count"], 0);
    }

    #[test]
    fn monthly_rejects_invalid_month() {
        let mut db = logged_db();
        let mut output = Vec::new();
        let err = monthly(&mut output, &mut db, &monthly_args(2024, 13), generated_at())
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid month: 13 (expected 1-12)");
        assert!(db.list_monthly_reports(1, None).unwrap().is_empty());
    }

    #[test]
    fn yearly_lists_stored_reports() {
        let mut db = logged_db();
        let mut sink = Vec::new();
        monthly(&mut sink, &mut db, &monthly_args(2024, 2), generated_at()).unwrap();
        monthly(&mut sink, &mut db, &monthly_args(2024, 1), generated_at()).unwrap();

        let mut output = Vec::new();
        let args = YearlyArgs {
            employee: "E-001".to_string(),
            year: Some(2024),
            json: false,
        };
        yearly(&mut output, &db, &args).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        MONTHLY REPORTS: E-001 Ana Silva, 2024

        MONTH    RECORDS  PROJECTS     TOTAL  BUSINESS  OVERTIME
        2024-01        2         1     12.00      8.00      4.00
        2024-02        1         1      4.00      2.00      2.00
        TOTAL          3         2     16.00     10.00      6.00
        ");
    }

    #[test]
    fn yearly_without_reports_shows_hint() {
        let db = logged_db();
        let mut output = Vec::new();
        let args = YearlyArgs {
            employee: "E-001".to_string(),
            year: None,
            json: false,
        };
        yearly(&mut output, &db, &args).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("No monthly reports stored."));
        assert!(output.contains("hours report monthly"));
    }

    #[test]
    fn yearly_filters_by_year() {
        let mut db = logged_db();
        log_for(&mut db, "E-001", "2023-12-29", "09:00", "12:00");
        let mut sink = Vec::new();
        monthly(&mut sink, &mut db, &monthly_args(2023, 12), generated_at()).unwrap();
        monthly(&mut sink, &mut db, &monthly_args(2024, 1), generated_at()).unwrap();

        let mut output = Vec::new();
        let args = YearlyArgs {
            employee: "E-001".to_string(),
            year: Some(2023),
            json: true,
        };
        yearly(&mut output, &db, &args).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let reports = value["reports"].as_array().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0]["month"], 12);
        assert_eq!(value["totals"]["total"], 3.0);
    }

    #[test]
    fn team_report_rows_and_total() {
        let mut db = logged_db();
        db.insert_employee(&NewEmployee {
            code: "E-002".to_string(),
            email: "ben@example.com".to_string(),
            first_name: "Ben".to_string(),
            last_name: "Okafor".to_string(),
            department: None,
            position: None,
        })
        .unwrap();
        log_for(&mut db, "E-002", "2024-01-20", "16:40", "17:01");

        let mut output = Vec::new();
        let args = TeamArgs {
            from: "2024-01-01".parse().unwrap(),
            to: "2024-01-31".parse().unwrap(),
            json: false,
        };
        team(&mut output, &db, &args).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        TEAM REPORT: 2024-01-01 to 2024-01-31

        CODE       NAME                     RECORDS     TOTAL  BUSINESS  OVERTIME
        E-001      Ana Silva                      2     12.00      8.00      4.00
        E-002      Ben Okafor                     1      0.35      0.33      0.02
        TOTAL                                     3     12.35      8.33      4.02
        ");
    }

    #[test]
    fn team_report_json() {
        let db = logged_db();
        let mut output = Vec::new();
        let args = TeamArgs {
            from: "2024-02-01".parse().unwrap(),
            to: "2024-02-29".parse().unwrap(),
            json: true,
        };
        team(&mut output, &db, &args).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["from"], "2024-02-01");
        assert_eq!(value["employees"][0]["code"], "E-001");
        assert_eq!(value["employees"][0]["business"], 2.0);
        assert_eq!(value["totals"]["record_count"], 1);
    }

    #[test]
    fn team_report_rejects_inverted_range() {
        let db = logged_db();
        let mut output = Vec::new();
        let args = TeamArgs {
            from: "2024-02-01".parse().unwrap(),
            to: "2024-01-01".parse().unwrap(),
            json: false,
        };
        assert!(team(&mut output, &db, &args).is_err());
    }
}
