//! Repeat intervals and wall-clock date arithmetic.
//!
//! Interval advancement preserves local civil time across DST transitions:
//! a 10:00 daily item is still a 10:00 item after the clocks change.
//! Ambiguous local times (the repeated fall-back hour) resolve to the
//! earlier offset; local times inside a spring-forward gap shift forward
//! until they exist.

use chrono::{DateTime, Duration, LocalResult, Months, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

/// The distance between two cycles of a repeating item.
///
/// Weekly rules are normalized to `Days(7 × n)` at parse time, so there is
/// no separate week variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatInterval {
    Days(u32),
    Months(u32),
    Years(u32),
}

impl RepeatInterval {
    /// Advance a zoned timestamp by one interval, keeping wall-clock time.
    ///
    /// Returns `None` when the arithmetic leaves chrono's representable
    /// range; callers treat that as the end of generation.
    pub fn advance(&self, date: DateTime<Tz>) -> Option<DateTime<Tz>> {
        let naive = date.naive_local();
        let shifted = match self {
            RepeatInterval::Days(days) => {
                naive.checked_add_signed(Duration::days(i64::from(*days)))?
            }
            RepeatInterval::Months(months) => naive.checked_add_months(Months::new(*months))?,
            RepeatInterval::Years(years) => {
                naive.checked_add_months(Months::new(years.checked_mul(12)?))?
            }
        };
        resolve_local(date.timezone(), shifted)
    }
}

/// Advance by whole wall-clock days; used for the weekly template offsets.
pub(crate) fn add_days(date: DateTime<Tz>, days: i64) -> Option<DateTime<Tz>> {
    let naive = date.naive_local().checked_add_signed(Duration::days(days))?;
    resolve_local(date.timezone(), naive)
}

/// Map a civil time back into its zone.
fn resolve_local(tz: Tz, mut naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    // DST gaps are at most a few hours wide; three steps is plenty.
    for _ in 0..3 {
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(date) => return Some(date),
            LocalResult::Ambiguous(earlier, _) => return Some(earlier),
            LocalResult::None => {
                naive = naive.checked_add_signed(Duration::hours(1))?;
            }
        }
    }
    None
}
