//! iCalendar writer — materialized events back to text.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use kalends_core::Calendar;

/// Render the calendar's events inside the window as a `VCALENDAR` document.
///
/// Timestamps convert to UTC; all-day events (local midnight start) use the
/// date-only `VALUE=DATE` form. The output carries materialized occurrences
/// only -- repetition metadata does not round-trip.
pub fn write_calendar(
    calendar: &Calendar,
    window_start: DateTime<Tz>,
    window_end: DateTime<Tz>,
) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("X-WR-CALNAME:{}", calendar.title()),
        "PRODID:-//kalends//kalends//EN".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
    ];

    for event in calendar.events(window_start, window_end) {
        let start = event.date_start().with_timezone(&Utc);
        let end = event.date_end().with_timezone(&Utc);

        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("SUMMARY:{}", event.title()));
        if let Some(description) = event.description() {
            lines.push(format!("DESCRIPTION:{}", description));
        }
        if event.is_all_day() {
            lines.push(format!("DTSTART;VALUE=DATE:{}", start.format("%Y%m%d")));
            lines.push(format!("DTEND;VALUE=DATE:{}", end.format("%Y%m%d")));
        } else {
            lines.push(format!("DTSTART:{}", start.format("%Y%m%dT%H%M%SZ")));
            lines.push(format!("DTEND:{}", end.format("%Y%m%dT%H%M%SZ")));
        }
        lines.push(format!("UID:{}", event.uid()));
        lines.push(format!("DTSTAMP:{}", start.format("%Y%m%dT%H%M%SZ")));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join("\n")
}
