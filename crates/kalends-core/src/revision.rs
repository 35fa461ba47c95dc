//! Revision reconciliation — fold moved or modified occurrences back into
//! their base items.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::item::CalendarItem;

/// Add every revision's original date to its base item's exception list.
///
/// A revision is an item carrying an `original_date`: one modified
/// occurrence of the base item that shares its id. Recording the original
/// date as an exception keeps the base generator from re-emitting the
/// occurrence the revision supersedes; the revision itself stays in the
/// list and independently generates its replacement. Revisions whose id has
/// no base item are left unreconciled.
///
/// Running this twice over the same list yields the same exception sets as
/// running it once.
pub fn reconcile_revisions(items: &mut [CalendarItem]) {
    let revisions: Vec<(String, DateTime<Tz>)> = items
        .iter()
        .filter_map(|item| item.original_date().map(|date| (item.id().to_string(), date)))
        .collect();

    for (id, original_date) in revisions {
        for item in items.iter_mut() {
            if item.original_date().is_none() && item.id() == id {
                item.add_repeat_exception(original_date);
            }
        }
    }
}
