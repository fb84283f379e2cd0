//! Time range parsing, validation, and conversion.
//
// A range is two time values in one format joined by the literal separator
// " to ". The sentinel contract of the single-time layer carries over:
// malformed input yields `false` or `None`, never a panic.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::convert::{
    convert_12_to_24, convert_24_to_12, format_time_input, hour_minute_24, is_valid_12_hour,
    is_valid_24_hour, TimeFormat,
};

/// The canonical range separator with any amount of surrounding whitespace.
static RANGE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s+to\s+").unwrap());

/// Loose separators accepted on interactive input: hyphen, en dash, em dash,
/// or a variably spaced "to".
static LOOSE_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*[-–—]\s*|\s+to\s+").unwrap());

/// A parsed range. Both endpoints carry the same textual format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// Splits a range string on its " to " separator.
///
/// The separator is matched case-insensitively with any amount of
/// surrounding whitespace. Returns `None` unless the split yields exactly
/// two non-empty parts. The parts are not validated as times here.
///
/// # Arguments
///
/// * `range` - Range string such as "9:00 AM to 5:00 PM"
///
/// # Returns
///
/// * `Option<TimeRange>` - The trimmed endpoints, or `None`
pub fn parse_time_range(range: &str) -> Option<TimeRange> {
    let parts: Vec<&str> = RANGE_SEPARATOR.split(range.trim()).collect();
    if parts.len() != 2 {
        return None;
    }

    let start = parts[0].trim();
    let end = parts[1].trim();
    if start.is_empty() || end.is_empty() {
        return None;
    }

    Some(TimeRange { start: start.to_string(), end: end.to_string() })
}

/// Validates that both endpoints of a range are well-formed 12-hour times.
pub fn is_valid_time_range_12(range: &str) -> bool {
    match parse_time_range(range) {
        Some(parsed) => is_valid_12_hour(&parsed.start) && is_valid_12_hour(&parsed.end),
        None => false,
    }
}

/// Validates that both endpoints of a range are well-formed 24-hour times.
pub fn is_valid_time_range_24(range: &str) -> bool {
    match parse_time_range(range) {
        Some(parsed) => is_valid_24_hour(&parsed.start) && is_valid_24_hour(&parsed.end),
        None => false,
    }
}

/// Checks that a range's end comes strictly after its start.
///
/// Format-agnostic: when the start endpoint validates as 12-hour, both
/// endpoints are converted to 24-hour first; when it validates as 24-hour
/// the endpoints are compared directly; anything else is rejected. The
/// comparison is on minutes since midnight, so equal endpoints and ranges
/// that would cross midnight are both invalid.
pub fn is_valid_time_range_order(range: &str) -> bool {
    let parsed = match parse_time_range(range) {
        Some(parsed) => parsed,
        None => return false,
    };

    let (start24, end24) = if is_valid_12_hour(&parsed.start) {
        match (convert_12_to_24(&parsed.start), convert_12_to_24(&parsed.end)) {
            (Some(start), Some(end)) => (start, end),
            _ => return false,
        }
    } else if is_valid_24_hour(&parsed.start) {
        (parsed.start, parsed.end)
    } else {
        return false;
    };

    match (minutes_since_midnight(&start24), minutes_since_midnight(&end24)) {
        (Some(start), Some(end)) => end > start,
        _ => false,
    }
}

/// Converts a whole 12-hour range to 24-hour format.
///
/// Each endpoint is converted independently and the results are joined with
/// " to ". Chronological order is deliberately not checked here; callers
/// compose [`is_valid_time_range_order`] separately.
///
/// # Arguments
///
/// * `range` - Range string such as "9:00 AM to 5:00 PM"
///
/// # Returns
///
/// * `Option<String>` - The converted range, or `None` when the range does
///   not validate as 12-hour
pub fn convert_time_range_12_to_24(range: &str) -> Option<String> {
    if !is_valid_time_range_12(range) {
        return None;
    }

    let parsed = parse_time_range(range)?;
    let start = convert_12_to_24(&parsed.start)?;
    let end = convert_12_to_24(&parsed.end)?;
    Some(format!("{} to {}", start, end))
}

/// Converts a whole 24-hour range to 12-hour format.
pub fn convert_time_range_24_to_12(range: &str) -> Option<String> {
    if !is_valid_time_range_24(range) {
        return None;
    }

    let parsed = parse_time_range(range)?;
    let start = convert_24_to_12(&parsed.start)?;
    let end = convert_24_to_12(&parsed.end)?;
    Some(format!("{} to {}", start, end))
}

/// Normalizes raw interactive range input.
///
/// Hyphen, en-dash, and em-dash separators as well as a variably spaced
/// "to" collapse into the canonical " to ", and the collapsed result is
/// re-trimmed so a separator at either edge cannot leave stray spaces
/// behind. For the 12-hour format each endpoint additionally goes through
/// [`format_time_input`] once the input splits into exactly two non-empty
/// parts. Nothing is validated; applying the function twice yields the same
/// string as applying it once, for any input.
pub fn format_time_range_input(input: &str, format: TimeFormat) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let collapsed = LOOSE_SEPARATOR.replace_all(trimmed, " to ");
    let collapsed = collapsed.trim();

    if format == TimeFormat::Hour12 {
        let parts: Vec<&str> = RANGE_SEPARATOR.split(collapsed).collect();
        if parts.len() == 2 && parts.iter().all(|part| !part.trim().is_empty()) {
            return format!(
                "{} to {}",
                format_time_input(parts[0], format),
                format_time_input(parts[1], format)
            );
        }
    }

    collapsed.to_string()
}

/// Minutes since midnight for a well-formed 24-hour string.
fn minutes_since_midnight(time24: &str) -> Option<u32> {
    let (hour, minute) = hour_minute_24(time24)?;
    Some(hour * 60 + minute)
}
