//! Calendar container: owns items, merges and orders their events.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::event::Event;
use crate::item::CalendarItem;

/// A titled, ordered collection of calendar items.
///
/// Ownership is one-directional: the calendar holds its items and items
/// carry no back-reference. Revision reconciliation runs over the item
/// batch before the calendar is built, so nothing here needs to know which
/// item superseded which occurrence.
#[derive(Debug, Clone)]
pub struct Calendar {
    title: String,
    items: Vec<CalendarItem>,
}

impl Calendar {
    pub fn new(title: String, items: Vec<CalendarItem>) -> Self {
        Self { title, items }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[CalendarItem] {
        &self.items
    }

    /// Expand every item over the window and merge the results, ordered by
    /// `(start, end)` ascending at whole-second granularity. Ties on start
    /// break by end; ordering beyond that is unspecified.
    pub fn events(&self, window_start: DateTime<Tz>, window_end: DateTime<Tz>) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .items
            .iter()
            .flat_map(|item| item.events(window_start, window_end))
            .collect();
        events.sort_by_key(|event| (event.date_start().timestamp(), event.date_end().timestamp()));
        events
    }
}
