//! Local wall-clock timestamps built from separate date and time fields.
//!
//! Event dates (`YYYY-MM-DD`) and times (`HH:mm`) are validated field by field
//! and combined with chrono's calendar constructors. Anything that does not
//! name a real moment (`2025-13-01`, `25:00`, `14:30` given as a date) becomes
//! [`Timestamp::Invalid`] on the total path, or a [`CalendarError`] on the
//! strict `try_*` path.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CalendarError, Result};

/// A point in local wall-clock time, or the invalid sentinel.
///
/// `Invalid` behaves like a floating-point NaN: it is not equal to anything
/// (itself included) and is unordered against every value, so `<`, `<=`, `>`
/// and `>=` involving it are all `false`. Use [`Timestamp::is_invalid`] to
/// test for it.
#[derive(Debug, Clone, Copy)]
pub enum Timestamp {
    Valid(NaiveDateTime),
    Invalid,
}

impl Timestamp {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Timestamp::Invalid)
    }

    pub fn is_valid(&self) -> bool {
        !self.is_invalid()
    }

    /// The underlying datetime, if valid.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Timestamp::Valid(dt) => Some(*dt),
            Timestamp::Invalid => None,
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Timestamp::Valid(dt)
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Timestamp::Valid(a), Timestamp::Valid(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Timestamp::Valid(a), Timestamp::Valid(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Valid(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Timestamp::Invalid => f.write_str("Invalid Date"),
        }
    }
}

/// Parse a fixed-width run of ASCII digits.
fn fixed_digits(s: &str, width: usize) -> Option<u32> {
    if s.len() == width && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Parse a `YYYY-MM-DD` calendar date, rejecting impossible dates.
pub fn try_parse_date(s: &str) -> Result<NaiveDate> {
    let invalid = || CalendarError::InvalidDate(s.to_string());

    let fields: Vec<&str> = s.split('-').collect();
    let [year, month, day] = fields.as_slice() else {
        return Err(invalid());
    };

    let year = fixed_digits(year, 4).ok_or_else(invalid)?;
    let month = fixed_digits(month, 2).ok_or_else(invalid)?;
    let day = fixed_digits(day, 2).ok_or_else(invalid)?;

    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid)
}

/// Parse an `HH:mm` (or `HH:mm:ss`) wall-clock time.
///
/// Hours run 0-23; `24:00` is rejected.
pub fn try_parse_time(s: &str) -> Result<NaiveTime> {
    let invalid = || CalendarError::InvalidTime(s.to_string());

    let fields: Vec<&str> = s.split(':').collect();
    let (hour, minute, second) = match fields.as_slice() {
        [h, m] => (*h, *m, "00"),
        [h, m, sec] => (*h, *m, *sec),
        _ => return Err(invalid()),
    };

    let hour = fixed_digits(hour, 2).ok_or_else(invalid)?;
    let minute = fixed_digits(minute, 2).ok_or_else(invalid)?;
    let second = fixed_digits(second, 2).ok_or_else(invalid)?;

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)
}

/// Combine a date string and a time string into a local datetime.
pub fn try_parse_date_time(date: &str, time: &str) -> Result<NaiveDateTime> {
    let date = try_parse_date(date)?;
    let time = try_parse_time(time)?;
    Ok(date.and_time(time))
}

/// Combine a date string and a time string into a [`Timestamp`].
///
/// Never fails: empty or malformed fields, and combinations that are not a
/// real calendar moment, yield [`Timestamp::Invalid`].
pub fn parse_date_time(date: &str, time: &str) -> Timestamp {
    match try_parse_date_time(date, time) {
        Ok(dt) => Timestamp::Valid(dt),
        Err(e) => {
            tracing::debug!(date, time, error = %e, "degrading to invalid timestamp");
            Timestamp::Invalid
        }
    }
}
