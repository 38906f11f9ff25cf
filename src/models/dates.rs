//! Calendar bucketing for dated entries
//!
//! Months are keyed `YYYY-MM`. Weeks follow ISO 8601: they start on Monday
//! and belong to the year holding their Thursday, so 2024-12-30 is in
//! `2025-W01`.

use chrono::{Datelike, IsoWeek, NaiveDate};

/// `YYYY-MM` key of the month containing `date`
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// ISO week containing `date`
pub fn iso_week(date: NaiveDate) -> IsoWeek {
    date.iso_week()
}

/// `YYYY-Www` key of the ISO week containing `date`
pub fn week_key(date: NaiveDate) -> String {
    let week = iso_week(date);
    format!("{:04}-W{:02}", week.year(), week.week())
}
