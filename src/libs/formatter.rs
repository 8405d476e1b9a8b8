//! Date formatting and parsing under the single configured layout.
//!
//! The same strftime layout is used both to read due dates from the command
//! line and to print dates back. Parsing never falls back to a second
//! layout: input either matches the configured one or it is rejected.
//!
//! Layouts without a time component resolve to the start of the given day,
//! so a task due "2024-08-13" becomes overdue once that day has begun.

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Write;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Checks that `format` is a usable layout for both parsing and display.
pub fn is_valid_date_format(format: &str) -> bool {
    if format.trim().is_empty() {
        return false;
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    // Timezone specifiers cannot be rendered from a naive date-time, and a
    // layout missing the year, month or day can never be read back.
    let Some(sample) = NaiveDate::from_ymd_opt(2006, 1, 2).and_then(|d| d.and_hms_opt(15, 4, 5)) else {
        return false;
    };
    let mut rendered = String::new();
    if write!(rendered, "{}", sample.format(format)).is_err() {
        return false;
    }
    parse_date(&rendered, format).is_some_and(|parsed| parsed.date() == sample.date())
}

/// Parses `input` with `format`, or returns `None` when it does not match.
pub fn parse_date(input: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, format).ok().or_else(|| {
        NaiveDate::parse_from_str(input, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

pub fn format_date(date: &NaiveDateTime, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        // Only reachable with a layout that skipped validation.
        out = date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}
