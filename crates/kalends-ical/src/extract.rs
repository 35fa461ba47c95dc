//! Content-line record extraction.
//!
//! An iCalendar content line has the shape `NAME;param=value;...:value`:
//! a field name, an optional semicolon-separated parameter section, and the
//! value after the first colon. This module pulls out every record for a
//! given field name without interpreting the value; what a value means is
//! decided per field by the caller.

use std::collections::HashMap;

/// One extracted content line: the text after the colon plus the parameters
/// found between the name and the colon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentRecord {
    pub value: String,
    pub params: HashMap<String, String>,
}

impl ContentRecord {
    /// Look up a parameter by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Collect every record for `name`, in document order.
///
/// A line matches when it begins with `name` (case-sensitive) followed
/// immediately by `;` or `:`. Parameter segments between the name and the
/// first colon split on `;` into `key=value` entries; a segment without `=`
/// is kept under its own name as a bare token rather than rejected.
/// Extraction never fails: an absent field yields an empty vec, which
/// callers must treat differently from a present-but-empty value.
pub fn extract_records(data: &str, name: &str) -> Vec<ContentRecord> {
    let mut records = Vec::new();
    for line in data.lines() {
        let line = line.trim_end_matches('\r');
        let Some(rest) = line.strip_prefix(name) else {
            continue;
        };
        if !rest.starts_with(';') && !rest.starts_with(':') {
            continue;
        }
        let Some((param_part, value)) = rest.split_once(':') else {
            continue;
        };
        let mut params = HashMap::new();
        for segment in param_part.split(';').filter(|s| !s.is_empty()) {
            match segment.split_once('=') {
                Some((key, value)) => params.insert(key.to_string(), value.to_string()),
                None => params.insert(segment.to_string(), segment.to_string()),
            };
        }
        records.push(ContentRecord {
            value: value.to_string(),
            params,
        });
    }
    records
}

/// First record for `name`, if any.
pub fn extract_record(data: &str, name: &str) -> Option<ContentRecord> {
    extract_records(data, name).into_iter().next()
}
