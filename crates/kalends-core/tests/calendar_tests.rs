//! Tests for calendar-level aggregation: merging and ordering of events
//! from multiple items.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use kalends_core::{Calendar, CalendarItem, RepeatInterval};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
    Tz::UTC.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn item(id: &str, title: &str, start: DateTime<Tz>, end: DateTime<Tz>) -> CalendarItem {
    CalendarItem::new(id.to_string(), title.to_string(), None, start, end)
}

#[test]
fn empty_calendar_yields_no_events() {
    let calendar = Calendar::new("Empty".to_string(), Vec::new());

    let events = calendar.events(utc(2016, 1, 1, 0, 0), utc(2016, 2, 1, 0, 0));

    assert!(events.is_empty());
}

#[test]
fn title_and_items_are_accessible() {
    let calendar = Calendar::new(
        "Team".to_string(),
        vec![item(
            "a",
            "One",
            utc(2016, 1, 5, 9, 0),
            utc(2016, 1, 5, 10, 0),
        )],
    );

    assert_eq!(calendar.title(), "Team");
    assert_eq!(calendar.items().len(), 1);
    assert_eq!(calendar.items()[0].id(), "a");
}

#[test]
fn merged_events_are_sorted_by_start() {
    // A daily item interleaves with a weekly one; per-item output is in
    // cycle order, so the merge has to re-sort.
    let mut daily = item(
        "daily",
        "Daily",
        utc(2016, 1, 4, 9, 0),
        utc(2016, 1, 4, 9, 30),
    );
    daily.set_repeat_interval(Some(RepeatInterval::Days(1)));
    daily.set_repeat_count(5);

    let mut weekly = item(
        "weekly",
        "Weekly",
        utc(2016, 1, 4, 8, 0),
        utc(2016, 1, 4, 8, 30),
    );
    weekly.set_repeat_interval(Some(RepeatInterval::Days(7)));
    weekly.set_repeat_count(2);

    let calendar = Calendar::new("Mixed".to_string(), vec![daily, weekly]);

    let events = calendar.events(utc(2016, 1, 1, 0, 0), utc(2016, 2, 1, 0, 0));

    assert_eq!(events.len(), 7);
    for pair in events.windows(2) {
        assert!(
            pair[0].date_start() <= pair[1].date_start(),
            "events out of order: {} after {}",
            pair[0].date_start(),
            pair[1].date_start()
        );
    }
    // The weekly 08:00 occurrence precedes the daily 09:00 on both days.
    assert_eq!(events[0].title(), "Weekly");
    assert_eq!(events[1].title(), "Daily");
}

#[test]
fn ties_on_start_break_by_end() {
    let long = item(
        "long",
        "Long",
        utc(2016, 1, 5, 9, 0),
        utc(2016, 1, 5, 11, 0),
    );
    let short = item(
        "short",
        "Short",
        utc(2016, 1, 5, 9, 0),
        utc(2016, 1, 5, 10, 0),
    );
    let calendar = Calendar::new("Ties".to_string(), vec![long, short]);

    let events = calendar.events(utc(2016, 1, 1, 0, 0), utc(2016, 2, 1, 0, 0));

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title(), "Short");
    assert_eq!(events[1].title(), "Long");
}

#[test]
fn items_outside_the_window_contribute_nothing() {
    let inside = item(
        "in",
        "Inside",
        utc(2016, 1, 5, 9, 0),
        utc(2016, 1, 5, 10, 0),
    );
    let outside = item(
        "out",
        "Outside",
        utc(2016, 3, 5, 9, 0),
        utc(2016, 3, 5, 10, 0),
    );
    let calendar = Calendar::new("Partial".to_string(), vec![inside, outside]);

    let events = calendar.events(utc(2016, 1, 1, 0, 0), utc(2016, 2, 1, 0, 0));

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title(), "Inside");
}
