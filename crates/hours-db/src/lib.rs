//! Storage layer for employee hours.
//!
//! Provides persistence for employees, time records and monthly reports using `rusqlite`.
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but not `Sync`.
//! A `Database` instance can be moved between threads but cannot be shared
//! across threads without external synchronization.
//!
//! # Schema
//!
//! ## Date and Time Formats
//!
//! - `work_date` is stored as TEXT `YYYY-MM-DD`, so lexicographic order matches
//!   calendar order and inclusive range filters are plain string comparisons.
//! - `start_time` / `end_time` are stored as TEXT `HH:MM`.
//! - Audit timestamps are stored as TEXT in RFC 3339 format, always UTC.
//!
//! ## Hour Figures
//!
//! Derived figures (duration, business, overtime and report totals) are stored as
//! INTEGER hundredths of an hour. They are written by the caller after
//! classification and never recomputed by this crate.

use std::path::Path;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use hours_core::{
    Classification, ClassifiedRecord, Hours, PeriodSummary, TaskType, TimeInterval, TimeOfDay,
};
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::Serialize;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Failed to parse a stored date.
    #[error("invalid date for record {record_id}: {value}")]
    InvalidDate {
        record_id: i64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// Failed to parse a stored audit timestamp.
    #[error("invalid timestamp for row {record_id}: {value}")]
    InvalidTimestamp {
        record_id: i64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A stored time or task type no longer parses.
    #[error("invalid data for record {record_id}: {message}")]
    InvalidRecord { record_id: i64, message: String },
    /// No time record with the given ID.
    #[error("time record not found: {0}")]
    RecordNotFound(i64),
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

/// An employee who books time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: i64,
    /// Company employee identifier (e.g. `E-001`).
    pub code: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields required to register an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub code: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub position: Option<String>,
}

/// A stored work interval with its derived classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRecord {
    pub id: i64,
    pub employee_id: i64,
    pub work_date: NaiveDate,
    pub project_number: Option<String>,
    pub project_name: Option<String>,
    pub task_type: TaskType,
    pub client: Option<String>,
    pub languages: Option<String>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub classification: Classification,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimeRecord {
    pub const fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start_time, self.end_time)
    }
}

impl ClassifiedRecord for TimeRecord {
    fn classification(&self) -> Classification {
        self.classification
    }

    fn project_number(&self) -> Option<&str> {
        self.project_number.as_deref()
    }

    fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }
}

/// A time record ready to be inserted. The classification is computed by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeRecord {
    pub employee_id: i64,
    pub work_date: NaiveDate,
    pub project_number: Option<String>,
    pub project_name: Option<String>,
    pub task_type: TaskType,
    pub client: Option<String>,
    pub languages: Option<String>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub classification: Classification,
    pub notes: Option<String>,
}

/// Per-employee totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyReport {
    pub employee_id: i64,
    pub year: i32,
    pub month: u32,
    #[serde(flatten)]
    pub summary: PeriodSummary,
    pub generated_at: DateTime<Utc>,
}

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Time record row as stored, before parsing into domain types.
struct TimeRecordRow {
    id: i64,
    employee_id: i64,
    work_date: String,
    project_number: Option<String>,
    project_name: Option<String>,
    task_type: String,
    client: Option<String>,
    languages: Option<String>,
    start_time: String,
    end_time: String,
    duration: u32,
    business: u32,
    overtime: u32,
    notes: Option<String>,
    created_at: String,
    updated_at: String,
}

const TIME_RECORD_COLUMNS: &str = "
    id, employee_id, work_date, project_number, project_name, task_type, client, languages,
    start_time, end_time, duration_hundredths, business_hundredths, overtime_hundredths,
    notes, created_at, updated_at
";

const EMPLOYEE_COLUMNS: &str = "
    id, code, email, first_name, last_name, department, position, is_active, created_at, updated_at
";

const MONTHLY_REPORT_COLUMNS: &str = "
    employee_id, year, month, total_hundredths, business_hundredths, overtime_hundredths,
    project_count, record_count, generated_at
";

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The database schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema.
    ///
    /// This is idempotent - safe to call on an already-initialized database.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS employees (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                code TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL UNIQUE,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                department TEXT,
                position TEXT,
                is_active INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            -- work_date: 'YYYY-MM-DD'; start_time/end_time: 'HH:MM'
            -- *_hundredths: derived figures in hundredths of an hour
            CREATE TABLE IF NOT EXISTS time_records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                employee_id INTEGER NOT NULL,
                work_date TEXT NOT NULL,
                project_number TEXT,
                project_name TEXT,
                task_type TEXT NOT NULL,
                client TEXT,
                languages TEXT,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                duration_hundredths INTEGER NOT NULL,
                business_hundredths INTEGER NOT NULL,
                overtime_hundredths INTEGER NOT NULL,
                notes TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY (employee_id) REFERENCES employees(id) ON DELETE CASCADE
            );

            CREATE INDEX IF NOT EXISTS idx_time_records_employee_date
                ON time_records(employee_id, work_date);

            CREATE TABLE IF NOT EXISTS monthly_reports (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                employee_id INTEGER NOT NULL,
                year INTEGER NOT NULL,
                month INTEGER NOT NULL,
                total_hundredths INTEGER NOT NULL,
                business_hundredths INTEGER NOT NULL,
                overtime_hundredths INTEGER NOT NULL,
                project_count INTEGER NOT NULL,
                record_count INTEGER NOT NULL,
                generated_at TEXT NOT NULL,
                UNIQUE (employee_id, year, month),
                FOREIGN KEY (employee_id) REFERENCES employees(id) ON DELETE CASCADE
            );
            ",
        )?;
        Ok(())
    }

    // ========== Employees ==========

    /// Registers an employee. Codes and emails must be unique.
    pub fn insert_employee(&mut self, employee: &NewEmployee) -> Result<Employee, DbError> {
        let now = format_timestamp(Utc::now());
        self.conn.execute(
            "
            INSERT INTO employees
            (code, email, first_name, last_name, department, position, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, 1, ?, ?)
            ",
            params![
                employee.code,
                employee.email,
                employee.first_name,
                employee.last_name,
                employee.department,
                employee.position,
                now,
                now,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, code = %employee.code, "inserted employee");
        self.get_employee(id)?
            .ok_or(DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    /// Looks up an employee by row ID.
    pub fn get_employee(&self, id: i64) -> Result<Option<Employee>, DbError> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?");
        let row = self
            .conn
            .query_row(&sql, [id], employee_row)
            .optional()?;
        row.map(EmployeeRow::into_employee).transpose()
    }

    /// Looks up an employee by company code.
    pub fn employee_by_code(&self, code: &str) -> Result<Option<Employee>, DbError> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE code = ?");
        let row = self
            .conn
            .query_row(&sql, [code], employee_row)
            .optional()?;
        row.map(EmployeeRow::into_employee).transpose()
    }

    /// Lists active employees ordered by code.
    pub fn list_employees(&self) -> Result<Vec<Employee>, DbError> {
        let sql =
            format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE is_active = 1 ORDER BY code ASC");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], employee_row)?;
        let mut employees = Vec::new();
        for row in rows {
            employees.push(row?.into_employee()?);
        }
        Ok(employees)
    }

    // ========== Time Records ==========

    /// Inserts a classified time record and returns it as stored.
    pub fn insert_time_record(&mut self, record: &NewTimeRecord) -> Result<TimeRecord, DbError> {
        let now = format_timestamp(Utc::now());
        self.conn.execute(
            "
            INSERT INTO time_records
            (employee_id, work_date, project_number, project_name, task_type, client, languages,
             start_time, end_time, duration_hundredths, business_hundredths, overtime_hundredths,
             notes, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
            params![
                record.employee_id,
                format_date(record.work_date),
                record.project_number,
                record.project_name,
                record.task_type.as_str(),
                record.client,
                record.languages,
                record.start_time.to_string(),
                record.end_time.to_string(),
                record.classification.duration.hundredths(),
                record.classification.business.hundredths(),
                record.classification.overtime.hundredths(),
                record.notes,
                now,
                now,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, employee_id = record.employee_id, "inserted time record");
        self.get_time_record(id)?.ok_or(DbError::RecordNotFound(id))
    }

    /// Looks up a time record by ID.
    pub fn get_time_record(&self, id: i64) -> Result<Option<TimeRecord>, DbError> {
        let sql = format!("SELECT {TIME_RECORD_COLUMNS} FROM time_records WHERE id = ?");
        let row = self
            .conn
            .query_row(&sql, [id], time_record_row)
            .optional()?;
        row.map(TimeRecordRow::into_record).transpose()
    }

    /// Overwrites every editable field of a record and bumps `updated_at`.
    pub fn update_time_record(&mut self, record: &TimeRecord) -> Result<TimeRecord, DbError> {
        let updated = self.conn.execute(
            "
            UPDATE time_records
            SET work_date = ?, project_number = ?, project_name = ?, task_type = ?, client = ?,
                languages = ?, start_time = ?, end_time = ?, duration_hundredths = ?,
                business_hundredths = ?, overtime_hundredths = ?, notes = ?, updated_at = ?
            WHERE id = ?
            ",
            params![
                format_date(record.work_date),
                record.project_number,
                record.project_name,
                record.task_type.as_str(),
                record.client,
                record.languages,
                record.start_time.to_string(),
                record.end_time.to_string(),
                record.classification.duration.hundredths(),
                record.classification.business.hundredths(),
                record.classification.overtime.hundredths(),
                record.notes,
                format_timestamp(Utc::now()),
                record.id,
            ],
        )?;
        if updated == 0 {
            return Err(DbError::RecordNotFound(record.id));
        }
        tracing::debug!(id = record.id, "updated time record");
        self.get_time_record(record.id)?
            .ok_or(DbError::RecordNotFound(record.id))
    }

    /// Deletes a time record. Returns whether a row was removed.
    pub fn delete_time_record(&mut self, id: i64) -> Result<bool, DbError> {
        let deleted = self
            .conn
            .execute("DELETE FROM time_records WHERE id = ?", [id])?;
        tracing::debug!(id, deleted, "deleted time record");
        Ok(deleted > 0)
    }

    /// Lists an employee's records ordered by work date then ID.
    ///
    /// When `range` is given, both ends are inclusive.
    pub fn list_time_records(
        &self,
        employee_id: i64,
        range: Option<DateRange>,
    ) -> Result<Vec<TimeRecord>, DbError> {
        let rows = match range {
            Some(range) => {
                if range.end < range.start {
                    return Ok(Vec::new());
                }
                let sql = format!(
                    "
                    SELECT {TIME_RECORD_COLUMNS} FROM time_records
                    WHERE employee_id = ? AND work_date >= ? AND work_date <= ?
                    ORDER BY work_date ASC, id ASC
                    "
                );
                let mut stmt = self.conn.prepare(&sql)?;
                let rows = stmt
                    .query_map(
                        params![employee_id, format_date(range.start), format_date(range.end)],
                        time_record_row,
                    )?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            None => {
                let sql = format!(
                    "
                    SELECT {TIME_RECORD_COLUMNS} FROM time_records
                    WHERE employee_id = ?
                    ORDER BY work_date ASC, id ASC
                    "
                );
                let mut stmt = self.conn.prepare(&sql)?;
                let rows = stmt
                    .query_map([employee_id], time_record_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
        };
        rows.into_iter().map(TimeRecordRow::into_record).collect()
    }

    /// Lists every record ordered by ID.
    pub fn list_all_time_records(&self) -> Result<Vec<TimeRecord>, DbError> {
        let sql = format!("SELECT {TIME_RECORD_COLUMNS} FROM time_records ORDER BY id ASC");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], time_record_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(TimeRecordRow::into_record).collect()
    }

    /// Overwrites derived figures for many records in one transaction.
    ///
    /// Returns the number of rows updated. `updated_at` is left unchanged.
    pub fn update_classifications(
        &mut self,
        updates: &[(i64, Classification)],
    ) -> Result<usize, DbError> {
        if updates.is_empty() {
            return Ok(0);
        }
        let tx = self.conn.transaction()?;
        let mut updated = 0;
        {
            let mut stmt = tx.prepare(
                "
                UPDATE time_records
                SET duration_hundredths = ?, business_hundredths = ?, overtime_hundredths = ?
                WHERE id = ?
                ",
            )?;
            for (id, classification) in updates {
                updated += stmt.execute(params![
                    classification.duration.hundredths(),
                    classification.business.hundredths(),
                    classification.overtime.hundredths(),
                    id,
                ])?;
            }
        }
        tx.commit()?;
        Ok(updated)
    }

    // ========== Monthly Reports ==========

    /// Stores a monthly report, replacing any previous one for the same month.
    pub fn upsert_monthly_report(&mut self, report: &MonthlyReport) -> Result<(), DbError> {
        self.conn.execute(
            "
            INSERT INTO monthly_reports
            (employee_id, year, month, total_hundredths, business_hundredths, overtime_hundredths,
             project_count, record_count, generated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (employee_id, year, month) DO UPDATE SET
                total_hundredths = excluded.total_hundredths,
                business_hundredths = excluded.business_hundredths,
                overtime_hundredths = excluded.overtime_hundredths,
                project_count = excluded.project_count,
                record_count = excluded.record_count,
                generated_at = excluded.generated_at
            ",
            params![
                report.employee_id,
                report.year,
                report.month,
                report.summary.total.hundredths(),
                report.summary.business.hundredths(),
                report.summary.overtime.hundredths(),
                count_to_sql(report.summary.project_count),
                count_to_sql(report.summary.record_count),
                format_timestamp(report.generated_at),
            ],
        )?;
        tracing::debug!(
            employee_id = report.employee_id,
            year = report.year,
            month = report.month,
            "stored monthly report"
        );
        Ok(())
    }

    /// Looks up the stored report for one month.
    pub fn get_monthly_report(
        &self,
        employee_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Option<MonthlyReport>, DbError> {
        let sql = format!(
            "SELECT {MONTHLY_REPORT_COLUMNS} FROM monthly_reports
             WHERE employee_id = ? AND year = ? AND month = ?"
        );
        let row = self
            .conn
            .query_row(&sql, params![employee_id, year, month], monthly_report_row)
            .optional()?;
        row.map(MonthlyReportRow::into_report).transpose()
    }

    /// Lists an employee's stored reports ordered by year then month.
    pub fn list_monthly_reports(
        &self,
        employee_id: i64,
        year: Option<i32>,
    ) -> Result<Vec<MonthlyReport>, DbError> {
        let rows = if let Some(year) = year {
            let sql = format!(
                "SELECT {MONTHLY_REPORT_COLUMNS} FROM monthly_reports
                 WHERE employee_id = ? AND year = ?
                 ORDER BY month ASC"
            );
            let mut stmt = self.conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params![employee_id, year], monthly_report_row)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        } else {
            let sql = format!(
                "SELECT {MONTHLY_REPORT_COLUMNS} FROM monthly_reports
                 WHERE employee_id = ?
                 ORDER BY year ASC, month ASC"
            );
            let mut stmt = self.conn.prepare(&sql)?;
            let rows = stmt
                .query_map([employee_id], monthly_report_row)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        };
        rows.into_iter().map(MonthlyReportRow::into_report).collect()
    }
}

// ========== Row Mapping ==========

struct EmployeeRow {
    id: i64,
    code: String,
    email: String,
    first_name: String,
    last_name: String,
    department: Option<String>,
    position: Option<String>,
    is_active: bool,
    created_at: String,
    updated_at: String,
}

fn employee_row(row: &Row<'_>) -> rusqlite::Result<EmployeeRow> {
    Ok(EmployeeRow {
        id: row.get(0)?,
        code: row.get(1)?,
        email: row.get(2)?,
        first_name: row.get(3)?,
        last_name: row.get(4)?,
        department: row.get(5)?,
        position: row.get(6)?,
        is_active: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

impl EmployeeRow {
    fn into_employee(self) -> Result<Employee, DbError> {
        Ok(Employee {
            created_at: parse_timestamp(&self.created_at, self.id)?,
            updated_at: parse_timestamp(&self.updated_at, self.id)?,
            id: self.id,
            code: self.code,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            department: self.department,
            position: self.position,
            is_active: self.is_active,
        })
    }
}

fn time_record_row(row: &Row<'_>) -> rusqlite::Result<TimeRecordRow> {
    Ok(TimeRecordRow {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        work_date: row.get(2)?,
        project_number: row.get(3)?,
        project_name: row.get(4)?,
        task_type: row.get(5)?,
        client: row.get(6)?,
        languages: row.get(7)?,
        start_time: row.get(8)?,
        end_time: row.get(9)?,
        duration: row.get(10)?,
        business: row.get(11)?,
        overtime: row.get(12)?,
        notes: row.get(13)?,
        created_at: row.get(14)?,
        updated_at: row.get(15)?,
    })
}

impl TimeRecordRow {
    fn into_record(self) -> Result<TimeRecord, DbError> {
        let id = self.id;
        let invalid = |message: String| DbError::InvalidRecord {
            record_id: id,
            message,
        };
        let task_type = self
            .task_type
            .parse::<TaskType>()
            .map_err(|e| invalid(e.to_string()))?;
        let start_time = TimeOfDay::parse(&self.start_time).map_err(|e| invalid(e.to_string()))?;
        let end_time = TimeOfDay::parse(&self.end_time).map_err(|e| invalid(e.to_string()))?;

        Ok(TimeRecord {
            id,
            employee_id: self.employee_id,
            work_date: parse_date(&self.work_date, id)?,
            project_number: self.project_number,
            project_name: self.project_name,
            task_type,
            client: self.client,
            languages: self.languages,
            start_time,
            end_time,
            classification: Classification {
                duration: Hours::from_hundredths(self.duration),
                business: Hours::from_hundredths(self.business),
                overtime: Hours::from_hundredths(self.overtime),
            },
            notes: self.notes,
            created_at: parse_timestamp(&self.created_at, id)?,
            updated_at: parse_timestamp(&self.updated_at, id)?,
        })
    }
}

struct MonthlyReportRow {
    employee_id: i64,
    year: i32,
    month: u32,
    total: u32,
    business: u32,
    overtime: u32,
    project_count: i64,
    record_count: i64,
    generated_at: String,
}

fn monthly_report_row(row: &Row<'_>) -> rusqlite::Result<MonthlyReportRow> {
    Ok(MonthlyReportRow {
        employee_id: row.get(0)?,
        year: row.get(1)?,
        month: row.get(2)?,
        total: row.get(3)?,
        business: row.get(4)?,
        overtime: row.get(5)?,
        project_count: row.get(6)?,
        record_count: row.get(7)?,
        generated_at: row.get(8)?,
    })
}

impl MonthlyReportRow {
    fn into_report(self) -> Result<MonthlyReport, DbError> {
        Ok(MonthlyReport {
            employee_id: self.employee_id,
            year: self.year,
            month: self.month,
            summary: PeriodSummary {
                total: Hours::from_hundredths(self.total),
                business: Hours::from_hundredths(self.business),
                overtime: Hours::from_hundredths(self.overtime),
                project_count: count_from_sql(self.project_count),
                record_count: count_from_sql(self.record_count),
            },
            generated_at: parse_timestamp(&self.generated_at, self.employee_id)?,
        })
    }
}

fn parse_date(value: &str, record_id: i64) -> Result<NaiveDate, DbError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| DbError::InvalidDate {
        record_id,
        value: value.to_string(),
        source,
    })
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn parse_timestamp(value: &str, record_id: i64) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| DbError::InvalidTimestamp {
            record_id,
            value: value.to_string(),
            source,
        })
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn count_to_sql(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

fn count_from_sql(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}
