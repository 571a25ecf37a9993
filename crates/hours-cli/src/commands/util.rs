//! Shared utilities for CLI commands.

use anyhow::{Context, Result, bail};
use chrono::{Months, NaiveDate};
use hours_db::{Database, DateRange, Employee};

/// Looks up an employee by code, failing if unknown.
pub fn resolve_employee(db: &Database, code: &str) -> Result<Employee> {
    db.employee_by_code(code)
        .with_context(|| format!("failed to look up employee {code}"))?
        .with_context(|| format!("employee not found: {code}"))
}

/// Returns the inclusive first-to-last-day range of a calendar month.
pub fn month_range(year: i32, month: u32) -> Result<DateRange> {
    if !(1..=12).contains(&month) {
        bail!("invalid month: {month} (expected 1-12)");
    }
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .with_context(|| format!("invalid year: {year}"))?;
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .with_context(|| format!("month out of range: {year}-{month:02}"))?;
    Ok(DateRange { start, end })
}

/// Builds an inclusive range, rejecting an end before the start.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<DateRange> {
    if end < start {
        bail!("end date {end} is before start date {start}");
    }
    Ok(DateRange { start, end })
}

/// Treats blank optional text as absent.
pub fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_range_handles_lengths() {
        let feb = month_range(2024, 2).unwrap();
        assert_eq!(feb.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(feb.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let dec = month_range(2023, 12).unwrap();
        assert_eq!(dec.end, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn month_range_rejects_bad_month() {
        assert!(month_range(2024, 0).is_err());
        let err = month_range(2024, 13).unwrap_err();
        assert!(err.to_string().contains("invalid month: 13"));
    }

    #[test]
    fn date_range_rejects_inverted() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(date_range(b, a).is_ok());
        assert!(date_range(a, b).is_err());
    }

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank(Some(&"  PROJ-1 ".to_string())), Some("PROJ-1".to_string()));
        assert_eq!(non_blank(Some(&"   ".to_string())), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn resolve_employee_reports_missing() {
        let db = Database::open_in_memory().unwrap();
        let err = resolve_employee(&db, "E-404").unwrap_err();
        assert_eq!(err.to_string(), "employee not found: E-404");
    }
}
