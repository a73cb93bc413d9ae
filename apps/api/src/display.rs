//! Formatting helpers for the dashboard and table: dates as people read
//! them, status badge labels, and relative ages.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::models::JobApplication;

/// `2024-03-05` → `Mar 5, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Today's date in UTC. New application forms default to it.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Applications whose date falls in the same week of the same year as `today`.
pub fn count_in_week(applications: &[JobApplication], today: NaiveDate) -> usize {
    applications
        .iter()
        .filter(|app| {
            app.application_date.year() == today.year()
                && week_number(app.application_date) == week_number(today)
        })
        .count()
}

pub fn count_in_month(applications: &[JobApplication], today: NaiveDate) -> usize {
    applications
        .iter()
        .filter(|app| {
            app.application_date.year() == today.year()
                && app.application_date.month() == today.month()
        })
        .count()
}

/// Week of the year, counting the partial first week (Sunday-start) as week 1.
pub fn week_number(date: NaiveDate) -> u32 {
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    let offset = jan1.weekday().num_days_from_sunday();
    (date.ordinal0() + offset + 1).div_ceil(7)
}

pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Absolute number of days between two dates.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> u64 {
    (a - b).num_days().unsigned_abs()
}

/// A table row: the record plus its display strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    #[serde(flatten)]
    pub application: JobApplication,
    pub status_label: &'static str,
    pub formatted_date: String,
    pub days_ago: u64,
}

impl ApplicationRow {
    pub fn new(application: JobApplication, today: NaiveDate) -> Self {
        ApplicationRow {
            status_label: application.status.label(),
            formatted_date: format_date(application.application_date),
            days_ago: days_between(today, application.application_date),
            application,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 3, 5)), "Mar 5, 2024");
        assert_eq!(format_date(date(2023, 12, 31)), "Dec 31, 2023");
    }

    #[test]
    fn test_week_number() {
        // 2023-01-01 was a Sunday.
        assert_eq!(week_number(date(2023, 1, 1)), 1);
        assert_eq!(week_number(date(2023, 1, 7)), 1);
        assert_eq!(week_number(date(2023, 1, 8)), 2);
        // 2024-01-01 was a Monday, so Saturday the 6th closes week 1.
        assert_eq!(week_number(date(2024, 1, 6)), 1);
        assert_eq!(week_number(date(2024, 1, 7)), 2);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(date(2024, 2, 29)), "February");
    }

    #[test]
    fn test_days_between_is_absolute() {
        assert_eq!(days_between(date(2024, 3, 1), date(2024, 2, 1)), 29);
        assert_eq!(days_between(date(2024, 2, 1), date(2024, 3, 1)), 29);
        assert_eq!(days_between(date(2024, 2, 1), date(2024, 2, 1)), 0);
    }

    #[test]
    fn test_week_and_month_counts() {
        let mk = |d: NaiveDate| JobApplication {
            id: d.to_string(),
            company_name: "Acme".to_string(),
            job_title: "SRE".to_string(),
            application_date: d,
            status: JobStatus::Applied,
            notes: String::new(),
        };
        let apps = vec![
            mk(date(2024, 3, 4)),
            mk(date(2024, 3, 9)),
            mk(date(2024, 3, 10)),
            mk(date(2023, 3, 5)),
        ];
        // 2024-03-09 is a Saturday; the 10th starts a new week.
        assert_eq!(count_in_week(&apps, date(2024, 3, 6)), 2);
        assert_eq!(count_in_month(&apps, date(2024, 3, 6)), 3);
    }

    #[test]
    fn test_row_flattens_record() {
        let app = JobApplication {
            id: "x".to_string(),
            company_name: "Acme".to_string(),
            job_title: "SRE".to_string(),
            application_date: date(2024, 3, 5),
            status: JobStatus::Rejected,
            notes: String::new(),
        };
        let json = serde_json::to_value(ApplicationRow::new(app, date(2024, 3, 15))).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["statusLabel"], "Rejected");
        assert_eq!(json["formattedDate"], "Mar 5, 2024");
        assert_eq!(json["daysAgo"], 10);
    }
}
