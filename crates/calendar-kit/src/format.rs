//! Presentation strings: week and month labels, `YYYY-MM-DD` dates.
//!
//! The label formats (`2025년 7월 1주`, `2025년 7월`) are consumed verbatim by
//! the front-end, so month and week numbers are not zero-padded.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::grid::first_weekday_of_month;

/// Default width for [`zero_pad`].
pub const DEFAULT_PAD_WIDTH: usize = 2;

/// The Gregorian calendar repeats its weekday layout every 400 years.
const GREGORIAN_CYCLE_YEARS: i32 = 400;

/// The Thursday of `date`'s Sunday-first week, as a date plus a year
/// correction.
///
/// At the ends of chrono's range that Thursday may not be representable; the
/// same week is then located one Gregorian cycle inward and the returned year
/// offset restores the real year.
fn thursday_of_week(date: NaiveDate) -> (NaiveDate, i32) {
    let offset =
        Weekday::Thu.num_days_from_sunday() as i64 - date.weekday().num_days_from_sunday() as i64;

    if let Some(thursday) = date.checked_add_signed(Duration::days(offset)) {
        return (thursday, 0);
    }

    let shift = if offset > 0 {
        -GREGORIAN_CYCLE_YEARS
    } else {
        GREGORIAN_CYCLE_YEARS
    };
    date.with_year(date.year() + shift)
        .and_then(|proxy| proxy.checked_add_signed(Duration::days(offset)))
        .map(|thursday| (thursday, -shift))
        .unwrap_or((date, 0))
}

/// Label the week containing `date` as `"{year}년 {month}월 {week}주"`.
///
/// Weeks belong to the month of their Thursday. `date` is moved to the
/// Thursday of its Sunday-first week; that Thursday's year and month name
/// the label, and the week number counts whole weeks from the first Thursday
/// of that month, starting at 1. Defined for every `NaiveDate`, including the
/// ends of chrono's range.
pub fn format_week_label(date: NaiveDate) -> String {
    let (thursday, year_offset) = thursday_of_week(date);

    let first_weekday = first_weekday_of_month(thursday);
    let first_thursday_day = 1 + (Weekday::Thu.num_days_from_sunday() + 7 - first_weekday) % 7;

    let week = thursday.day().saturating_sub(first_thursday_day) / 7 + 1;

    format!(
        "{}년 {}월 {}주",
        thursday.year() + year_offset,
        thursday.month(),
        week
    )
}

/// Label the month containing `date` as `"{year}년 {month}월"`.
pub fn format_month_label(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// Left-pad `value` with zeros to [`DEFAULT_PAD_WIDTH`] characters.
pub fn zero_pad(value: u64) -> String {
    zero_pad_width(value, DEFAULT_PAD_WIDTH)
}

/// Left-pad `value` with zeros to `width` characters. Wider values are left
/// as is.
pub fn zero_pad_width(value: u64, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

/// Format as `YYYY-MM-DD`, optionally replacing the day of month.
///
/// The override is not validated against the month: `(2025-02-10, Some(31))`
/// formats as `2025-02-31`, which is what a grid cell label expects.
pub fn format_iso_date(date: NaiveDate, day: Option<u32>) -> String {
    let day = day.unwrap_or_else(|| date.day());
    format!(
        "{}-{}-{}",
        date.year(),
        zero_pad(date.month() as u64),
        zero_pad(day as u64)
    )
}
