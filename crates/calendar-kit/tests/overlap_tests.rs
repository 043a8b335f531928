//! Tests for date/time parsing and event overlap detection.

use calendar_kit::timestamp::{try_parse_date, try_parse_date_time, try_parse_time};
use calendar_kit::{
    convert_event_to_date_range, find_conflicts, find_overlapping_events, is_overlapping,
    load_events, parse_date_time, CalendarError, Event, Timestamp,
};
use chrono::{NaiveDate, NaiveDateTime};

/// Helper: a local datetime on the given day.
fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

/// Helper: the events from the JSON fixture.
fn fixture_events() -> Vec<Event> {
    let json = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/events.json"
    ))
    .expect("events.json fixture must exist");
    load_events(&json).expect("fixture must parse")
}

// ─────────────────────────────────────────────────────────────────────────────
// parse_date_time
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parses_date_and_time_into_local_datetime() {
    let result = parse_date_time("2025-07-01", "14:30");
    assert_eq!(result, Timestamp::Valid(at(2025, 7, 1, 14, 30)));
}

#[test]
fn time_string_in_date_position_is_invalid() {
    assert!(parse_date_time("14:30", "14:30").is_invalid());
}

#[test]
fn date_string_in_time_position_is_invalid() {
    assert!(parse_date_time("2025-07-01", "2025-07-01").is_invalid());
}

#[test]
fn empty_date_is_invalid() {
    assert!(parse_date_time("", "14:30").is_invalid());
}

#[test]
fn empty_time_is_invalid() {
    assert!(parse_date_time("2025-07-01", "").is_invalid());
}

#[test]
fn out_of_range_components_are_invalid() {
    for (date, time) in [
        ("2025-13-01", "09:00"),
        ("2025-00-10", "09:00"),
        ("2025-07-00", "09:00"),
        ("2025-02-29", "09:00"),
        ("9999-99-99", "09:00"),
        ("2025-07-01", "25:00"),
        ("2025-07-01", "24:00"),
        ("2025-07-01", "99:60"),
        ("2025-07-01", "12:60"),
    ] {
        assert!(
            parse_date_time(date, time).is_invalid(),
            "{} {} should be invalid",
            date,
            time
        );
    }
}

#[test]
fn loosely_shaped_fields_are_invalid() {
    for (date, time) in [
        ("2025-7-1", "09:00"),
        ("2025/07/01", "09:00"),
        (" 2025-07-01", "09:00"),
        ("2025-07-01", "9:00"),
        ("2025-07-01", "09:00 "),
        ("2025-07-01", "+9:00"),
    ] {
        assert!(
            parse_date_time(date, time).is_invalid(),
            "{:?} {:?} should be invalid",
            date,
            time
        );
    }
}

#[test]
fn leap_day_and_seconds_are_accepted() {
    assert_eq!(
        parse_date_time("2024-02-29", "23:59"),
        Timestamp::Valid(at(2024, 2, 29, 23, 59))
    );
    assert_eq!(
        try_parse_time("08:15:30").unwrap(),
        chrono::NaiveTime::from_hms_opt(8, 15, 30).unwrap()
    );
}

#[test]
fn invalid_sentinel_is_never_equal() {
    let a = parse_date_time("", "");
    let b = parse_date_time("bad", "bad");
    assert!(a.is_invalid() && b.is_invalid());
    let same = a;
    assert_ne!(a, b);
    assert_ne!(a, same);
}

#[test]
fn strict_parsers_report_which_field_failed() {
    assert!(matches!(
        try_parse_date("2025-13-01"),
        Err(CalendarError::InvalidDate(s)) if s == "2025-13-01"
    ));
    assert!(matches!(
        try_parse_date_time("2025-07-01", "noon"),
        Err(CalendarError::InvalidTime(s)) if s == "noon"
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// convert_event_to_date_range
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn event_converts_to_start_and_end() {
    let event = &fixture_events()[0];
    let range = convert_event_to_date_range(event);

    assert_eq!(range.start, Timestamp::Valid(at(2025, 7, 1, 9, 0)));
    assert_eq!(range.end, Timestamp::Valid(at(2025, 7, 1, 10, 0)));
    assert!(range.is_valid());
}

#[test]
fn invalid_date_makes_both_ends_invalid() {
    let event = Event {
        date: "9999-99-99".to_string(),
        ..fixture_events()[0].clone()
    };
    let range = convert_event_to_date_range(&event);

    assert!(range.start.is_invalid());
    assert!(range.end.is_invalid());
}

#[test]
fn invalid_times_make_both_ends_invalid() {
    let event = Event {
        start_time: "99:60".to_string(),
        end_time: "99:99".to_string(),
        ..fixture_events()[0].clone()
    };
    let range = convert_event_to_date_range(&event);

    assert!(range.start.is_invalid());
    assert!(range.end.is_invalid());
}

#[test]
fn one_bad_time_only_invalidates_that_end() {
    let event = Event::new("1", "2025-07-01", "09:00", "nope");
    let range = convert_event_to_date_range(&event);

    assert_eq!(range.start, Timestamp::Valid(at(2025, 7, 1, 9, 0)));
    assert!(range.end.is_invalid());
    assert!(!range.is_valid());
}

// ─────────────────────────────────────────────────────────────────────────────
// is_overlapping
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn same_day_partial_overlap_detected() {
    let events = fixture_events();
    let moved = Event {
        date: "2025-07-01".to_string(),
        ..events[1].clone()
    };
    assert!(is_overlapping(&events[0], &moved));
}

#[test]
fn different_days_do_not_overlap() {
    let events = fixture_events();
    assert!(!is_overlapping(&events[0], &events[1]));
}

#[test]
fn touching_events_do_not_overlap() {
    let a = Event::new("a", "2025-07-01", "09:00", "10:00");
    let b = Event::new("b", "2025-07-01", "10:00", "11:00");
    assert!(!is_overlapping(&a, &b));
    assert!(!is_overlapping(&b, &a));
}

#[test]
fn contained_event_overlaps() {
    let outer = Event::new("a", "2025-07-01", "09:00", "12:00");
    let inner = Event::new("b", "2025-07-01", "10:00", "11:00");
    assert!(is_overlapping(&outer, &inner));
    assert!(is_overlapping(&inner, &outer));
}

#[test]
fn invalid_event_never_overlaps() {
    let good = Event::new("a", "2025-07-01", "00:00", "23:59");
    let bad_start = Event::new("b", "2025-07-01", "xx:00", "12:00");
    let bad_date = Event::new("c", "", "09:00", "12:00");

    assert!(!is_overlapping(&good, &bad_start));
    assert!(!is_overlapping(&bad_start, &good));
    assert!(!is_overlapping(&good, &bad_date));
    assert!(!is_overlapping(&bad_date, &bad_date));
}

// ─────────────────────────────────────────────────────────────────────────────
// find_overlapping_events
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn finds_all_events_overlapping_new_event() {
    let events = fixture_events();
    let new_event = Event {
        id: "999".to_string(),
        ..events[0].clone()
    };

    let result = find_overlapping_events(&new_event, &events);

    // events[2] starts exactly when events[0] ends, so it is not included.
    assert_eq!(result, vec![&events[0]]);
}

#[test]
fn no_overlaps_yields_empty() {
    let events = fixture_events();
    let new_event = Event {
        id: "999".to_string(),
        date: "2025-06-01".to_string(),
        ..events[0].clone()
    };

    assert!(find_overlapping_events(&new_event, &events).is_empty());
}

#[test]
fn empty_list_yields_empty() {
    let candidate = Event::new("1", "2025-07-01", "09:00", "10:00");
    assert!(find_overlapping_events(&candidate, &[]).is_empty());
}

#[test]
fn candidate_is_skipped_by_id() {
    let events = fixture_events();
    let result = find_overlapping_events(&events[0], &events);
    assert!(result.is_empty(), "candidate must not match itself");
}

#[test]
fn same_id_with_different_times_is_still_skipped() {
    let candidate = Event::new("1", "2025-07-01", "09:00", "10:00");
    let events = vec![Event::new("1", "2025-07-01", "09:30", "10:30")];
    assert!(find_overlapping_events(&candidate, &events).is_empty());
}

#[test]
fn result_preserves_input_order() {
    let candidate = Event::new("c", "2025-07-01", "08:00", "18:00");
    let events = vec![
        Event::new("late", "2025-07-01", "16:00", "17:00"),
        Event::new("other-day", "2025-07-02", "09:00", "10:00"),
        Event::new("early", "2025-07-01", "08:30", "09:00"),
        Event::new("noon", "2025-07-01", "12:00", "13:00"),
    ];

    let ids: Vec<&str> = find_overlapping_events(&candidate, &events)
        .iter()
        .map(|e| e.id.as_str())
        .collect();

    assert_eq!(ids, vec!["late", "early", "noon"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// find_conflicts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn conflicts_report_pairs_with_overlap_minutes() {
    let events = vec![
        Event::new("a", "2025-07-01", "09:00", "10:00"),
        Event::new("b", "2025-07-01", "09:30", "10:30"),
        Event::new("c", "2025-07-01", "10:00", "12:00"),
    ];

    let conflicts = find_conflicts(&events);

    assert_eq!(conflicts.len(), 2, "a/b and b/c overlap, a/c only touch");
    assert_eq!(conflicts[0].event_a.id, "a");
    assert_eq!(conflicts[0].event_b.id, "b");
    assert_eq!(conflicts[0].overlap_minutes, 30);
    assert_eq!(conflicts[1].event_a.id, "b");
    assert_eq!(conflicts[1].event_b.id, "c");
    assert_eq!(conflicts[1].overlap_minutes, 30);
}

#[test]
fn conflicts_skip_shared_ids_and_invalid_events() {
    let events = vec![
        Event::new("a", "2025-07-01", "09:00", "10:00"),
        Event::new("a", "2025-07-01", "09:00", "10:00"),
        Event::new("b", "2025-07-01", "bad", "10:00"),
    ];

    assert!(find_conflicts(&events).is_empty());
}

#[test]
fn fully_contained_conflict_counts_inner_duration() {
    let events = vec![
        Event::new("outer", "2025-07-01", "09:00", "12:00"),
        Event::new("inner", "2025-07-01", "10:00", "11:00"),
    ];

    let conflicts = find_conflicts(&events);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 60);
}

#[test]
fn fixture_has_no_conflicts() {
    assert!(find_conflicts(&fixture_events()).is_empty());
}
