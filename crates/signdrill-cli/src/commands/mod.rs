pub mod due;
pub mod init;
pub mod recognize;
pub mod review;
pub mod signs;
pub mod stats;

use chrono::{Local, NaiveDate};

/// The given date, or today's local calendar date.
pub fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
