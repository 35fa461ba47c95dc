//! Calendar items and the occurrence generation loop.

use chrono::{DateTime, Datelike, Weekday};
use chrono_tz::Tz;

use crate::event::Event;
use crate::interval::{add_days, RepeatInterval};

/// Upper bound on interval cycles evaluated by a single [`CalendarItem::events`]
/// call.
///
/// An unbounded item (`repeat_count == 0`) combined with a distant window end
/// and a fine-grained interval would otherwise generate without limit. The
/// cap only bites where generation would effectively never terminate.
pub const MAX_CYCLES: u32 = 100_000;

/// One recurrence description: a base occurrence span plus the rule that
/// repeats it.
///
/// The five constructor fields are fixed for the item's lifetime. The repeat
/// and revision fields are populated once while the item is being parsed and
/// are not expected to change afterwards.
#[derive(Debug, Clone)]
pub struct CalendarItem {
    id: String,
    title: String,
    description: Option<String>,
    date_start: DateTime<Tz>,
    date_end: DateTime<Tz>,
    repeat_interval: Option<RepeatInterval>,
    repeat_days: Vec<Weekday>,
    repeat_exceptions: Vec<DateTime<Tz>>,
    repeat_count: u32,
    repeat_end_date: Option<DateTime<Tz>>,
    original_date: Option<DateTime<Tz>>,
    raw_source_data: String,
}

impl CalendarItem {
    pub fn new(
        id: String,
        title: String,
        description: Option<String>,
        date_start: DateTime<Tz>,
        date_end: DateTime<Tz>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            date_start,
            date_end,
            repeat_interval: None,
            repeat_days: Vec::new(),
            repeat_exceptions: Vec::new(),
            repeat_count: 0,
            repeat_end_date: None,
            original_date: None,
            raw_source_data: String::new(),
        }
    }

    /// External UID; the join key for revision reconciliation.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn date_start(&self) -> DateTime<Tz> {
        self.date_start
    }

    pub fn date_end(&self) -> DateTime<Tz> {
        self.date_end
    }

    pub fn set_repeat_interval(&mut self, repeat_interval: Option<RepeatInterval>) {
        self.repeat_interval = repeat_interval;
    }

    pub fn repeat_interval(&self) -> Option<RepeatInterval> {
        self.repeat_interval
    }

    pub fn set_repeat_days(&mut self, repeat_days: Vec<Weekday>) {
        self.repeat_days = repeat_days;
    }

    pub fn repeat_days(&self) -> &[Weekday] {
        &self.repeat_days
    }

    pub fn set_repeat_exceptions(&mut self, repeat_exceptions: Vec<DateTime<Tz>>) {
        self.repeat_exceptions = repeat_exceptions;
    }

    /// Record an exception timestamp. Already-present instants are skipped,
    /// which keeps revision reconciliation idempotent.
    pub fn add_repeat_exception(&mut self, repeat_exception: DateTime<Tz>) {
        if !self.is_repeat_exception(repeat_exception) {
            self.repeat_exceptions.push(repeat_exception);
        }
    }

    /// Exception matching is by exact instant, not calendar date.
    pub fn is_repeat_exception(&self, date: DateTime<Tz>) -> bool {
        self.repeat_exceptions.iter().any(|exception| *exception == date)
    }

    pub fn repeat_exceptions(&self) -> &[DateTime<Tz>] {
        &self.repeat_exceptions
    }

    /// Cap on interval cycles; 0 means unbounded.
    pub fn set_repeat_count(&mut self, repeat_count: u32) {
        self.repeat_count = repeat_count;
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    pub fn set_repeat_end_date(&mut self, repeat_end_date: Option<DateTime<Tz>>) {
        self.repeat_end_date = repeat_end_date;
    }

    pub fn repeat_end_date(&self) -> Option<DateTime<Tz>> {
        self.repeat_end_date
    }

    /// When set, this item is a revision: a modified single occurrence of
    /// another item that originally started at this timestamp.
    pub fn set_original_date(&mut self, original_date: Option<DateTime<Tz>>) {
        self.original_date = original_date;
    }

    pub fn original_date(&self) -> Option<DateTime<Tz>> {
        self.original_date
    }

    pub fn set_raw_source_data(&mut self, raw_source_data: String) {
        self.raw_source_data = raw_source_data;
    }

    pub fn raw_source_data(&self) -> &str {
        &self.raw_source_data
    }

    /// Build the weekly template: the base `(start, end)` pair, then one
    /// pair per matching weekday in the six days that follow, in day order.
    ///
    /// The template is the unit that each cycle shifts wholesale by the
    /// repeat interval. With no `repeat_days` it holds only the base pair.
    pub fn repeat_dates(&self) -> Vec<(DateTime<Tz>, DateTime<Tz>)> {
        let mut dates = vec![(self.date_start, self.date_end)];
        let mut start = self.date_start;
        let mut end = self.date_end;
        for _ in 0..6 {
            match (add_days(start, 1), add_days(end, 1)) {
                (Some(next_start), Some(next_end)) => {
                    start = next_start;
                    end = next_end;
                }
                _ => break,
            }
            if self.repeat_days.contains(&start.weekday()) {
                dates.push((start, end));
            }
        }
        dates
    }

    /// Materialize every occurrence inside `[window_start, window_end]`.
    ///
    /// The window end is clipped to `repeat_end_date` when that is earlier.
    /// Each cycle visits the template entries in order, emits those that
    /// intersect the window and are not exceptions, and advances each entry
    /// in place by the repeat interval. The first entry that has no interval
    /// to advance by, or whose start has run past the effective window end,
    /// ends the whole generation, even mid-template. Later weekday entries
    /// of the final cycle are then never visited; callers rely on this exact
    /// cutoff.
    ///
    /// Output is in template order within a cycle and cycle order overall,
    /// which is not globally time-sorted; sorting is the calendar's job.
    pub fn events(&self, window_start: DateTime<Tz>, window_end: DateTime<Tz>) -> Vec<Event> {
        let mut effective_end = window_end;
        if let Some(repeat_end) = self.repeat_end_date {
            if repeat_end < effective_end {
                effective_end = repeat_end;
            }
        }

        let mut template = self.repeat_dates();
        let mut events = Vec::new();
        let mut exhausted = false;
        let mut cycle: u32 = 0;

        while !exhausted && !(self.repeat_count > 0 && cycle >= self.repeat_count) {
            if cycle >= MAX_CYCLES {
                break;
            }
            for entry in template.iter_mut() {
                let (start, end) = *entry;
                if start <= effective_end && end >= window_start && !self.is_repeat_exception(start)
                {
                    events.push(Event::new(
                        self.title.clone(),
                        self.description.clone(),
                        start,
                        end,
                    ));
                }
                let Some(interval) = self.repeat_interval else {
                    exhausted = true;
                    break;
                };
                if start > effective_end {
                    exhausted = true;
                    break;
                }
                match (interval.advance(start), interval.advance(end)) {
                    (Some(next_start), Some(next_end)) => *entry = (next_start, next_end),
                    _ => {
                        exhausted = true;
                        break;
                    }
                }
            }
            cycle += 1;
        }

        events
    }
}
