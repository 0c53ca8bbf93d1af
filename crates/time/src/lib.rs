pub use chrono;

use chrono::{Datelike as _, Days, Local, NaiveDate};
use thiserror::Error;

pub const DAYS_IN_WEEK: u64 = 7;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date: {0:?}")]
    Invalid(String),
    #[error("Date is out of range: {0}")]
    OutOfRange(NaiveDate),
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| DateError::Invalid(value.to_owned()))
}

/// Sunday that opens the week containing `date`.
pub fn at_sunday(date: NaiveDate) -> Result<NaiveDate, DateError> {
    let offset = date.weekday().num_days_from_sunday() as u64;
    date.checked_sub_days(Days::new(offset))
        .ok_or(DateError::OutOfRange(date))
}

/// Saturday that closes the week opened by `sunday`.
pub fn at_saturday(sunday: NaiveDate) -> Result<NaiveDate, DateError> {
    sunday
        .checked_add_days(Days::new(DAYS_IN_WEEK - 1))
        .ok_or(DateError::OutOfRange(sunday))
}

pub fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate, DateError> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or(DateError::OutOfRange(date))
}

pub fn shift_weeks(date: NaiveDate, weeks: i64) -> Result<NaiveDate, DateError> {
    let days = weeks
        .checked_mul(DAYS_IN_WEEK as i64)
        .ok_or(DateError::OutOfRange(date))?;
    shift_days(date, days)
}
