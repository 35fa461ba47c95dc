//! iCalendar reader — text to [`Calendar`].
//!
//! Splits out `BEGIN:VEVENT ... END:VEVENT` blocks, converts each block's
//! fields into a [`CalendarItem`] with a typed conversion per field, runs
//! revision reconciliation over the parsed batch, and assembles the result.

use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};
use chrono_tz::Tz;
use kalends_core::{reconcile_revisions, Calendar, CalendarItem, RepeatInterval};
use tracing::{debug, warn};

use crate::error::{IcalError, Result};
use crate::extract::{extract_record, extract_records, ContentRecord};

/// Two-letter weekday codes, in ordinal order (Sunday = 0).
const WEEKDAY_CODES: [(&str, Weekday); 7] = [
    ("SU", Weekday::Sun),
    ("MO", Weekday::Mon),
    ("TU", Weekday::Tue),
    ("WE", Weekday::Wed),
    ("TH", Weekday::Thu),
    ("FR", Weekday::Fri),
    ("SA", Weekday::Sat),
];

/// Read a calendar from a file on disk.
pub fn read_file(path: impl AsRef<Path>) -> Result<Calendar> {
    read_calendar(&std::fs::read_to_string(path)?)
}

/// Parse iCalendar text into a [`Calendar`].
///
/// The calendar title comes from `X-WR-CALNAME` (absent → empty). Every
/// `VEVENT` block must carry `UID`, `SUMMARY`, `DTSTART` and `DTEND`;
/// anything else is optional. Revision items are reconciled into their base
/// items before the calendar is returned.
pub fn read_calendar(data: &str) -> Result<Calendar> {
    let title = extract_record(data, "X-WR-CALNAME")
        .map(|record| record.value)
        .unwrap_or_default();

    let mut items = Vec::new();
    for block in vevent_blocks(data) {
        items.push(parse_item(block)?);
    }
    reconcile_revisions(&mut items);

    Ok(Calendar::new(title, items))
}

/// Slice out every `BEGIN:VEVENT ... END:VEVENT` span, in document order.
fn vevent_blocks(data: &str) -> Vec<&str> {
    const BEGIN: &str = "BEGIN:VEVENT";
    const END: &str = "END:VEVENT";

    let mut blocks = Vec::new();
    let mut rest = data;
    while let Some(begin) = rest.find(BEGIN) {
        let block_start = &rest[begin..];
        let Some(end) = block_start.find(END) else {
            break;
        };
        let stop = end + END.len();
        blocks.push(&block_start[..stop]);
        rest = &block_start[stop..];
    }
    blocks
}

fn parse_item(block: &str) -> Result<CalendarItem> {
    let uid = require(block, "UID", "")?.value;
    let summary = require(block, "SUMMARY", &uid)?.value;
    let description = extract_record(block, "DESCRIPTION").map(|record| record.value);
    let date_start = parse_date(&require(block, "DTSTART", &uid)?)?;
    let date_end = parse_date(&require(block, "DTEND", &uid)?)?;
    if date_end < date_start {
        return Err(IcalError::NegativeSpan { uid });
    }

    let mut item = CalendarItem::new(uid, summary, description, date_start, date_end);

    if let Some(rule) = extract_record(block, "RRULE") {
        apply_rule(&mut item, &rule.value)?;
    }

    let mut exceptions = Vec::new();
    for record in extract_records(block, "EXDATE") {
        // One EXDATE record may carry several comma-separated stamps.
        for value in record.value.split(',').filter(|v| !v.is_empty()) {
            exceptions.push(parse_date_value(value, record.param("TZID"))?);
        }
    }
    item.set_repeat_exceptions(exceptions);

    if let Some(record) = extract_record(block, "RECURRENCE-ID") {
        item.set_original_date(Some(parse_date(&record)?));
    }

    item.set_raw_source_data(block.to_string());
    debug!(uid = %item.id(), "parsed calendar item");

    Ok(item)
}

fn require(block: &str, field: &'static str, uid: &str) -> Result<ContentRecord> {
    extract_record(block, field).ok_or_else(|| IcalError::MissingField {
        field,
        uid: uid.to_string(),
    })
}

/// Parse a date record: `TZID` selects the zone (default UTC), a trailing
/// `Z` forces UTC, and a bare `%Y%m%d` stamp resolves to local midnight.
fn parse_date(record: &ContentRecord) -> Result<DateTime<Tz>> {
    parse_date_value(&record.value, record.param("TZID"))
}

fn parse_date_value(value: &str, tzid: Option<&str>) -> Result<DateTime<Tz>> {
    let zone = match tzid {
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| IcalError::InvalidTimeZone(name.to_string()))?,
        None => Tz::UTC,
    };
    let (stamp, forced_utc) = match value.strip_suffix('Z') {
        Some(stamp) => (stamp, true),
        None => (value, false),
    };
    let naive = NaiveDateTime::parse_from_str(stamp, "%Y%m%dT%H%M%S")
        .or_else(|_| {
            NaiveDate::parse_from_str(stamp, "%Y%m%d").map(|date| date.and_time(NaiveTime::MIN))
        })
        .map_err(|_| IcalError::InvalidDate(value.to_string()))?;
    let zone = if forced_utc { Tz::UTC } else { zone };
    zone.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| IcalError::InvalidDate(value.to_string()))
}

/// Apply an `RRULE` value to the item.
///
/// `FREQ=MONTHLY` and unknown frequencies are recognized but not expanded:
/// the item degrades to a single occurrence.
fn apply_rule(item: &mut CalendarItem, rule: &str) -> Result<()> {
    let mut freq = None;
    let mut interval: u32 = 1;
    let mut by_day = Vec::new();
    let mut count: u32 = 0;
    let mut until = None;

    for part in rule.split(';') {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        match key {
            "FREQ" => freq = Some(value.to_string()),
            "INTERVAL" => interval = value.parse().unwrap_or(1),
            "BYDAY" => by_day = parse_by_day(value),
            "COUNT" => count = value.parse().unwrap_or(0),
            "UNTIL" => until = Some(parse_date_value(value, None)?),
            _ => {}
        }
    }

    let repeat_interval = match freq.as_deref() {
        Some("DAILY") => Some(RepeatInterval::Days(interval)),
        Some("WEEKLY") => Some(RepeatInterval::Days(interval.saturating_mul(7))),
        Some("YEARLY") => Some(RepeatInterval::Years(interval)),
        Some(other) => {
            warn!(uid = %item.id(), freq = other, "unsupported repeat frequency, item will not repeat");
            None
        }
        None => None,
    };

    item.set_repeat_interval(repeat_interval);
    item.set_repeat_days(by_day);
    item.set_repeat_count(count);
    item.set_repeat_end_date(until);

    Ok(())
}

/// Map comma-separated two-letter day codes onto weekdays. Unknown codes
/// are dropped, not fatal.
fn parse_by_day(value: &str) -> Vec<Weekday> {
    value
        .split(',')
        .filter_map(|code| {
            let code = code.trim();
            let day = WEEKDAY_CODES
                .iter()
                .find(|(known, _)| *known == code)
                .map(|(_, day)| *day);
            if day.is_none() {
                warn!(code, "unknown weekday code in BYDAY");
            }
            day
        })
        .collect()
}
