//! # calendar-kit
//!
//! Calendar arithmetic and event-overlap detection for calendar front-ends.
//!
//! Everything in this crate is a pure function over dates and borrowed event
//! records. Malformed date/time strings never panic or error on the main API:
//! they degrade to [`Timestamp::Invalid`], an empty list, `false`, or `0`.
//!
//! ## Modules
//!
//! - [`grid`] — days in a month, week listings, month → week rows, day lookups
//! - [`format`] — week/month labels, zero padding, `YYYY-MM-DD` formatting
//! - [`timestamp`] — strict date/time field parsing and the invalid sentinel
//! - [`overlap`] — event → time range, pairwise overlap, conflict search
//! - [`event`] — the event record and JSON loading
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod format;
pub mod grid;
pub mod overlap;
pub mod timestamp;

pub use error::CalendarError;
pub use event::{load_events, Event};
pub use format::{
    format_iso_date, format_month_label, format_week_label, zero_pad, zero_pad_width,
};
pub use grid::{
    days_in_month, events_on_day, is_within_range, week_dates_containing, weeks_in_month, WeekRow,
};
pub use overlap::{
    convert_event_to_date_range, find_conflicts, find_overlapping_events, is_overlapping,
    Conflict, DateRange,
};
pub use timestamp::{parse_date_time, Timestamp};
