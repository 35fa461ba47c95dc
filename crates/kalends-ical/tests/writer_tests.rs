//! Tests for the iCalendar writer.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use kalends_core::{Calendar, CalendarItem, RepeatInterval};
use kalends_ical::write_calendar;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
    Tz::UTC.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn single_item_calendar() -> Calendar {
    let item = CalendarItem::new(
        "write@example.org".to_string(),
        "Review".to_string(),
        Some("Quarterly numbers".to_string()),
        utc(2016, 1, 13, 10, 0),
        utc(2016, 1, 13, 11, 0),
    );
    Calendar::new("Written".to_string(), vec![item])
}

#[test]
fn output_carries_the_calendar_envelope() {
    let ics = write_calendar(
        &single_item_calendar(),
        utc(2016, 1, 1, 0, 0),
        utc(2016, 2, 1, 0, 0),
    );

    assert!(ics.starts_with("BEGIN:VCALENDAR"));
    assert!(ics.ends_with("END:VCALENDAR"));
    assert!(ics.contains("VERSION:2.0"));
    assert!(ics.contains("X-WR-CALNAME:Written"));
    assert!(ics.contains("CALSCALE:GREGORIAN"));
}

#[test]
fn events_render_with_utc_stamps() {
    let ics = write_calendar(
        &single_item_calendar(),
        utc(2016, 1, 1, 0, 0),
        utc(2016, 2, 1, 0, 0),
    );

    assert!(ics.contains("BEGIN:VEVENT"));
    assert!(ics.contains("SUMMARY:Review"));
    assert!(ics.contains("DESCRIPTION:Quarterly numbers"));
    assert!(ics.contains("DTSTART:20160113T100000Z"));
    assert!(ics.contains("DTEND:20160113T110000Z"));
    assert!(ics.contains("END:VEVENT"));
}

#[test]
fn zoned_events_convert_to_utc() {
    let amsterdam: Tz = "Europe/Amsterdam".parse().unwrap();
    let item = CalendarItem::new(
        "tz@example.org".to_string(),
        "Call".to_string(),
        None,
        amsterdam.with_ymd_and_hms(2016, 1, 13, 10, 0, 0).unwrap(),
        amsterdam.with_ymd_and_hms(2016, 1, 13, 11, 0, 0).unwrap(),
    );
    let calendar = Calendar::new("Zoned".to_string(), vec![item]);

    let ics = write_calendar(&calendar, utc(2016, 1, 1, 0, 0), utc(2016, 2, 1, 0, 0));

    // 10:00 CET renders as 09:00 UTC.
    assert!(ics.contains("DTSTART:20160113T090000Z"));
}

#[test]
fn all_day_events_use_the_date_variant() {
    let item = CalendarItem::new(
        "allday@example.org".to_string(),
        "Holiday".to_string(),
        None,
        utc(2016, 1, 13, 0, 0),
        utc(2016, 1, 14, 0, 0),
    );
    let calendar = Calendar::new("Days".to_string(), vec![item]);

    let ics = write_calendar(&calendar, utc(2016, 1, 1, 0, 0), utc(2016, 2, 1, 0, 0));

    assert!(ics.contains("DTSTART;VALUE=DATE:20160113"));
    assert!(ics.contains("DTEND;VALUE=DATE:20160114"));
}

#[test]
fn description_line_is_omitted_when_absent() {
    let item = CalendarItem::new(
        "bare@example.org".to_string(),
        "Bare".to_string(),
        None,
        utc(2016, 1, 13, 10, 0),
        utc(2016, 1, 13, 11, 0),
    );
    let calendar = Calendar::new("Bare".to_string(), vec![item]);

    let ics = write_calendar(&calendar, utc(2016, 1, 1, 0, 0), utc(2016, 2, 1, 0, 0));

    assert!(!ics.contains("DESCRIPTION"));
}

#[test]
fn recurring_items_write_materialized_occurrences() {
    let mut item = CalendarItem::new(
        "daily@example.org".to_string(),
        "Daily".to_string(),
        None,
        utc(2016, 1, 13, 10, 0),
        utc(2016, 1, 13, 11, 0),
    );
    item.set_repeat_interval(Some(RepeatInterval::Days(1)));
    item.set_repeat_count(3);
    let calendar = Calendar::new("Recurring".to_string(), vec![item]);

    let ics = write_calendar(&calendar, utc(2016, 1, 1, 0, 0), utc(2016, 2, 1, 0, 0));

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
    assert!(ics.contains("DTSTART:20160113T100000Z"));
    assert!(ics.contains("DTSTART:20160114T100000Z"));
    assert!(ics.contains("DTSTART:20160115T100000Z"));
    assert!(!ics.contains("RRULE"), "rules do not round-trip, occurrences do");
}

#[test]
fn events_outside_the_window_are_not_written() {
    let ics = write_calendar(
        &single_item_calendar(),
        utc(2016, 2, 1, 0, 0),
        utc(2016, 3, 1, 0, 0),
    );

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 0);
}
