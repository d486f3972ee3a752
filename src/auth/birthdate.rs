//! Date of birth checks

use chrono::{Datelike, NaiveDate};

/// Builds a calendar date from the three form values.
///
/// Returns `None` unless every part parses and the combination exists, so
/// `31/02` or `31/04` never roll over into the following month.
pub fn parse_birth_date(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    let day: u32 = day.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let year: i32 = year.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The same calendar day `years` earlier; Feb 29 maps to Mar 1 in a
/// non-leap target year.
pub fn years_before(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    let year = date.year().checked_sub(i32::try_from(years).ok()?)?;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

pub fn is_in_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// True when `date` lies before the earliest accepted birth date.
pub fn is_older_than(date: NaiveDate, today: NaiveDate, max_age_years: u32) -> bool {
    match years_before(today, max_age_years) {
        Some(earliest) => date < earliest,
        None => false,
    }
}
