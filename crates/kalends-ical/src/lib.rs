//! # kalends-ical
//!
//! iCalendar text handling for kalends: content-line record extraction, a
//! reader that turns `BEGIN:VEVENT` blocks into a
//! [`Calendar`](kalends_core::Calendar), and a writer that renders a
//! calendar's materialized events back to text.
//!
//! The reader is deliberately tolerant: record extraction never fails, and
//! unsupported recurrence rules degrade the item to a single occurrence
//! instead of erroring. Errors surface only when a mandatory field is
//! missing or a field value cannot be interpreted.
//!
//! ## Modules
//!
//! - [`extract`] — content-line records: `NAME;param=value:value`
//! - [`reader`] — iCalendar text → `Calendar`
//! - [`writer`] — `Calendar` events → iCalendar text
//! - [`error`] — error types

pub mod error;
pub mod extract;
pub mod reader;
pub mod writer;

pub use error::IcalError;
pub use extract::{extract_record, extract_records, ContentRecord};
pub use reader::{read_calendar, read_file};
pub use writer::write_calendar;
