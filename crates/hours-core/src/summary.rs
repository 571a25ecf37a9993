//! Period totals over classified records.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Classification, Hours};

/// A record carrying an already computed classification.
///
/// This trait allows summaries to work with different record representations
/// (e.g., `TimeRecord` from hours-db, or test fixtures).
pub trait ClassifiedRecord {
    /// Returns the stored classification.
    fn classification(&self) -> Classification;

    /// Returns the project number, if any.
    fn project_number(&self) -> Option<&str>;

    /// Returns the project name, if any.
    fn project_name(&self) -> Option<&str>;

    /// Key used to count distinct projects: the project number, falling back
    /// to the project name. Blank values are ignored.
    fn project_key(&self) -> Option<&str> {
        non_blank(self.project_number()).or_else(|| non_blank(self.project_name()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Totals over a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub total: Hours,
    pub business: Hours,
    pub overtime: Hours,
    pub project_count: usize,
    pub record_count: usize,
}

impl PeriodSummary {
    /// Sums stored classifications. The classifier is not re-run.
    pub fn from_records<'a, R, I>(records: I) -> Self
    where
        R: ClassifiedRecord + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut summary = Self::default();
        let mut projects: HashSet<&str> = HashSet::new();
        for record in records {
            let classification = record.classification();
            summary.total += classification.duration;
            summary.business += classification.business;
            summary.overtime += classification.overtime;
            summary.record_count += 1;
            if let Some(key) = record.project_key() {
                projects.insert(key);
            }
        }
        summary.project_count = projects.len();
        summary
    }

    /// Combines two summaries. Project counts are added, so the same project
    /// in both is counted twice.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            total: self.total + other.total,
            business: self.business + other.business,
            overtime: self.overtime + other.overtime,
            project_count: self.project_count + other.project_count,
            record_count: self.record_count + other.record_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        classification: Classification,
        project_number: Option<&'static str>,
        project_name: Option<&'static str>,
    }

    impl ClassifiedRecord for Fixture {
        fn classification(&self) -> Classification {
            self.classification
        }

        fn project_number(&self) -> Option<&str> {
            self.project_number
        }

        fn project_name(&self) -> Option<&str> {
            self.project_name
        }
    }

    fn fixture(
        duration: u32,
        business: u32,
        number: Option<&'static str>,
        name: Option<&'static str>,
    ) -> Fixture {
        Fixture {
            classification: Classification {
                duration: Hours::from_hundredths(duration),
                business: Hours::from_hundredths(business),
                overtime: Hours::from_hundredths(duration - business),
            },
            project_number: number,
            project_name: name,
        }
    }

    #[test]
    fn empty_summary_is_zero() {
        let records: Vec<Fixture> = Vec::new();
        assert_eq!(PeriodSummary::from_records(&records), PeriodSummary::default());
    }

    #[test]
    fn sums_figures_and_counts_records() {
        let records = vec![
            fixture(800, 800, Some("PROJ-001"), None),
            fixture(400, 0, Some("PROJ-002"), None),
            fixture(400, 200, Some("PROJ-001"), None),
        ];
        let summary = PeriodSummary::from_records(&records);
        assert_eq!(summary.total.to_string(), "16.00");
        assert_eq!(summary.business.to_string(), "10.00");
        assert_eq!(summary.overtime.to_string(), "6.00");
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.project_count, 2);
    }

    #[test]
    fn project_key_falls_back_to_name_and_skips_blank() {
        let records = vec![
            fixture(100, 100, None, Some("Website Localization")),
            fixture(100, 100, Some("  "), Some("Website Localization")),
            fixture(100, 100, None, None),
            fixture(100, 100, Some(""), Some(" ")),
        ];
        let summary = PeriodSummary::from_records(&records);
        assert_eq!(summary.project_count, 1);
        assert_eq!(summary.record_count, 4);
    }

    #[test]
    fn merge_adds_fields() {
        let a = PeriodSummary::from_records(&[fixture(800, 600, Some("A"), None)]);
        let b = PeriodSummary::from_records(&[fixture(150, 0, Some("B"), None)]);
        let merged = a.merge(&b);
        assert_eq!(merged.total.to_string(), "9.50");
        assert_eq!(merged.business.to_string(), "6.00");
        assert_eq!(merged.overtime.to_string(), "3.50");
        assert_eq!(merged.project_count, 2);
        assert_eq!(merged.record_count, 2);
    }
}
