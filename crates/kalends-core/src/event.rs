//! Concrete event occurrences.

use std::hash::{DefaultHasher, Hash, Hasher};

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;
use serde::Serialize;

/// One materialized occurrence of a calendar item.
///
/// A pure value with no lifecycle of its own: both timestamps are fully
/// timezone-resolved and `date_end >= date_start` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    title: String,
    description: Option<String>,
    date_start: DateTime<Tz>,
    date_end: DateTime<Tz>,
}

impl Event {
    pub fn new(
        title: String,
        description: Option<String>,
        date_start: DateTime<Tz>,
        date_end: DateTime<Tz>,
    ) -> Self {
        Self {
            title,
            description,
            date_start,
            date_end,
        }
    }

    /// Identity derived from the event's own fields, independent of the
    /// source item's external UID.
    pub fn uid(&self) -> String {
        let mut hasher = DefaultHasher::new();
        self.title.hash(&mut hasher);
        self.date_start.timestamp().hash(&mut hasher);
        self.date_end.timestamp().hash(&mut hasher);
        format!("{:016x}", hasher.finish())
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

    /// An event is all-day when its start sits at local midnight.
    pub fn is_all_day(&self) -> bool {
        self.date_start.hour() == 0
    }
}
