//! Detect overlapping events.
//!
//! Events are converted to half-open `[start, end)` ranges of local wall-clock
//! time. Two ranges overlap when `a.start < b.end && b.start < a.end`, so events
//! that merely touch (one ends exactly when the other starts) do NOT overlap.
//! A range with an invalid timestamp overlaps nothing.

use crate::event::Event;
use crate::timestamp::{parse_date_time, Timestamp};

/// The time span an event occupies. Derived on demand, never stored.
///
/// `start <= end` is not enforced; an inverted range is compared with the same
/// formula as any other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl DateRange {
    pub fn is_valid(&self) -> bool {
        self.start.is_valid() && self.end.is_valid()
    }

    /// Half-open intersection test. Always `false` if either range is invalid.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }

        self.start < other.end && other.start < self.end
    }

    /// Length of the shared span in minutes, or `None` if the ranges do not
    /// overlap. Inverted ranges that pass the overlap test report 0.
    pub fn overlap_minutes(&self, other: &DateRange) -> Option<i64> {
        if !self.overlaps(other) {
            return None;
        }

        let (Some(a_start), Some(a_end), Some(b_start), Some(b_end)) = (
            self.start.as_datetime(),
            self.end.as_datetime(),
            other.start.as_datetime(),
            other.end.as_datetime(),
        ) else {
            return None;
        };

        Some((a_end.min(b_end) - a_start.max(b_start)).num_minutes().max(0))
    }
}

/// A pair of events whose time ranges overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict<'a> {
    pub event_a: &'a Event,
    pub event_b: &'a Event,
    pub overlap_minutes: i64,
}

/// Convert an event's date and start/end times into a [`DateRange`].
///
/// Invalid fields propagate as [`Timestamp::Invalid`] on the affected end.
pub fn convert_event_to_date_range(event: &Event) -> DateRange {
    DateRange {
        start: parse_date_time(&event.date, &event.start_time),
        end: parse_date_time(&event.date, &event.end_time),
    }
}

/// Whether two events overlap in time.
pub fn is_overlapping(a: &Event, b: &Event) -> bool {
    convert_event_to_date_range(a).overlaps(&convert_event_to_date_range(b))
}

/// Events from `events` that overlap `candidate`, in input order.
///
/// Any event with the candidate's `id` is skipped, so the candidate can be
/// checked against a list that already contains it. Identity is by `id` only.
pub fn find_overlapping_events<'a>(candidate: &Event, events: &'a [Event]) -> Vec<&'a Event> {
    let candidate_range = convert_event_to_date_range(candidate);

    events
        .iter()
        .filter(|event| event.id != candidate.id)
        .filter(|event| candidate_range.overlaps(&convert_event_to_date_range(event)))
        .collect()
}

/// Find every overlapping pair within a single event list.
///
/// Pairs are reported once, as `(events[i], events[j])` with `i < j`, in input
/// order. Pairs sharing an `id` are skipped.
pub fn find_conflicts(events: &[Event]) -> Vec<Conflict<'_>> {
    let ranges: Vec<DateRange> = events.iter().map(convert_event_to_date_range).collect();
    let mut conflicts = Vec::new();

    for (i, (a, a_range)) in events.iter().zip(&ranges).enumerate() {
        for (b, b_range) in events[i + 1..].iter().zip(&ranges[i + 1..]) {
            if a.id == b.id {
                continue;
            }
            if let Some(overlap_minutes) = a_range.overlap_minutes(b_range) {
                conflicts.push(Conflict {
                    event_a: a,
                    event_b: b,
                    overlap_minutes,
                });
            }
        }
    }

    conflicts
}
