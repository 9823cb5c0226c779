use chrono::NaiveDateTime;
use serde::Serialize;
use tabled::Tabled;

use crate::error::AppError;
use crate::util::parse_bound;

/// Source column holding the complaint creation timestamp.
pub const COL_CREATED_DATE: &str = "Created Date";
/// Source column holding the free-text complaint category.
pub const COL_COMPLAINT_TYPE: &str = "Complaint Type";
/// Source column holding the borough name.
pub const COL_BOROUGH: &str = "Borough";

/// Required columns, in the order schema validation checks them. The first
/// missing one is the one reported.
pub const REQUIRED_COLUMNS: [&str; 3] = [COL_CREATED_DATE, COL_COMPLAINT_TYPE, COL_BOROUGH];

/// One complaint row after cleaning: timestamp parsed (or not), borough
/// normalized. All other source columns are dropped at load time.
///
/// `created_at` is `None` when the source value did not match the fixed
/// `MM/DD/YYYY HH:MM:SS AM/PM` format. That is a policy, not an error:
/// such rows are kept here and excluded later by the range filter.
#[derive(Debug, Clone)]
pub struct ComplaintRecord {
    pub created_at: Option<NaiveDateTime>,
    pub complaint_type: String,
    pub borough: String,
}

/// Inclusive date window supplied on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Parse the two CLI date arguments and enforce `start <= end`.
    ///
    /// Runs before any file I/O so a bad range never touches the input.
    pub fn from_args(start: &str, end: &str) -> Result<Self, AppError> {
        let start_dt =
            parse_bound(start).ok_or_else(|| AppError::InvalidDate(start.to_string()))?;
        let end_dt = parse_bound(end).ok_or_else(|| AppError::InvalidDate(end.to_string()))?;
        if end_dt < start_dt {
            return Err(AppError::EndBeforeStart);
        }
        Ok(DateRange {
            start: start_dt,
            end: end_dt,
        })
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t <= self.end
    }
}

/// One output row of the count table. The renames keep the serialized and
/// previewed column names aligned with the fixed output header.
#[derive(Debug, Serialize, Tabled, Clone, PartialEq, Eq)]
pub struct CountRow {
    #[serde(rename = "Complaint Type")]
    #[tabled(rename = "Complaint Type")]
    pub complaint_type: String,
    #[serde(rename = "Borough")]
    #[tabled(rename = "Borough")]
    pub borough: String,
    #[serde(rename = "count")]
    #[tabled(rename = "count")]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn range_accepts_date_only_bounds() {
        let r = DateRange::from_args("2024-03-01", "2024-03-31").unwrap();
        assert_eq!(r.start, dt(2024, 3, 1, 0, 0));
        assert_eq!(r.end, dt(2024, 3, 31, 0, 0));
    }

    #[test]
    fn range_accepts_date_time_bounds() {
        let r = DateRange::from_args("2024-03-01 08:30", "2024-03-01 17:00").unwrap();
        assert_eq!(r.start, dt(2024, 3, 1, 8, 30));
        assert_eq!(r.end, dt(2024, 3, 1, 17, 0));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let r = DateRange::from_args("2024-03-01", "2024-03-31").unwrap();
        assert!(r.contains(dt(2024, 3, 1, 0, 0)));
        assert!(r.contains(dt(2024, 3, 31, 0, 0)));
        assert!(!r.contains(dt(2024, 3, 31, 0, 1)));
        assert!(!r.contains(dt(2024, 2, 29, 23, 59)));
    }

    #[test]
    fn range_rejects_end_before_start() {
        let err = DateRange::from_args("2024-02-01", "2024-01-01").unwrap_err();
        assert!(matches!(err, AppError::EndBeforeStart));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn range_rejects_garbage_dates() {
        let err = DateRange::from_args("yesterday", "2024-01-01").unwrap_err();
        assert!(matches!(err, AppError::InvalidDate(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn equal_bounds_are_valid() {
        let r = DateRange::from_args("2024-01-01", "2024-01-01").unwrap();
        assert!(r.contains(dt(2024, 1, 1, 0, 0)));
    }
}
