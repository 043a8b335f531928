//! Month and week grid arithmetic.
//!
//! Weeks are Sunday-first throughout: slot 0 is Sunday, slot 6 is Saturday.

use chrono::{Datelike, Duration, NaiveDate};

use crate::event::Event;
use crate::timestamp::try_parse_date;

/// One displayed week of a month: a day number per weekday, `None` for days
/// that fall outside the month.
pub type WeekRow = [Option<u32>; 7];

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Weekday (Sunday = 0) of the 1st of the month containing `date`.
pub(crate) fn first_weekday_of_month(date: NaiveDate) -> u32 {
    (date.weekday().num_days_from_sunday() + 7 - (date.day() - 1) % 7) % 7
}

/// Number of days in a 1-indexed month, or 0 if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// The seven dates, Sunday through Saturday, of the week containing `date`.
///
/// `None` when part of that week lies outside chrono's representable range
/// (the first and last weeks of `NaiveDate::MIN..=NaiveDate::MAX`).
pub fn week_dates_containing(date: NaiveDate) -> Option<[NaiveDate; 7]> {
    let sunday = date.checked_sub_signed(Duration::days(
        date.weekday().num_days_from_sunday() as i64,
    ))?;
    sunday.checked_add_signed(Duration::days(6))?;
    Some(std::array::from_fn(|i| sunday + Duration::days(i as i64)))
}

/// Lay out the month containing `date` as Sunday-first week rows.
///
/// A row is emitted when Saturday is filled or when the month's last day is
/// placed, so the first row carries leading `None`s up to the weekday of the
/// 1st and the last row may carry trailing `None`s.
pub fn weeks_in_month(date: NaiveDate) -> Vec<WeekRow> {
    let last_day = days_in_month(date.year(), date.month());
    let first_weekday = first_weekday_of_month(date);

    let mut weeks = Vec::with_capacity(6);
    let mut week: WeekRow = [None; 7];

    for day in 1..=last_day {
        let slot = ((first_weekday + day - 1) % 7) as usize;
        week[slot] = Some(day);
        if slot == 6 || day == last_day {
            weeks.push(week);
            week = [None; 7];
        }
    }

    weeks
}

/// Events whose `date` falls on the given day of the month (any month).
///
/// Returns nothing for `day` outside 1..=31. Events with an unparseable date
/// never match.
pub fn events_on_day(events: &[Event], day: u32) -> Vec<&Event> {
    if !(1..=31).contains(&day) {
        return Vec::new();
    }

    events
        .iter()
        .filter(|event| try_parse_date(&event.date).is_ok_and(|d| d.day() == day))
        .collect()
}

/// Whether `start <= value <= end`.
///
/// An inverted range (`start > end`) contains nothing. Unordered values such
/// as [`crate::Timestamp::Invalid`] are never within any range.
pub fn is_within_range<T: PartialOrd>(value: &T, start: &T, end: &T) -> bool {
    if start > end {
        return false;
    }

    value >= start && value <= end
}
