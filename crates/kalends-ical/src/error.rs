//! Error types for iCalendar reading.

use thiserror::Error;

/// Errors raised while converting iCalendar text into calendar items.
///
/// Record extraction itself never fails; these surface when a mandatory
/// field is absent or a field value cannot be interpreted. Generation of
/// events from a well-formed item cannot error at all.
#[derive(Error, Debug)]
pub enum IcalError {
    /// A mandatory field had no record in the item's block.
    #[error("missing {field} field on calendar item \"{uid}\"")]
    MissingField { field: &'static str, uid: String },

    /// A date value matched none of the accepted stamp formats.
    #[error("invalid date value \"{0}\"")]
    InvalidDate(String),

    /// A TZID parameter named an unknown IANA zone.
    #[error("invalid time zone \"{0}\"")]
    InvalidTimeZone(String),

    /// DTEND preceded DTSTART.
    #[error("calendar item \"{uid}\" ends before it starts")]
    NegativeSpan { uid: String },

    /// I/O failure reading a calendar file.
    #[error("failed to read calendar file: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout kalends-ical.
pub type Result<T> = std::result::Result<T, IcalError>;
