//! Conversion between 12-hour and 24-hour time strings.
//
// Every function in this module is total: malformed input yields `false` or
// `None`, never a panic. The interactive layer relies on those sentinels,
// not on caught errors, to drive its error display.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A well-formed 12-hour time: hour 1-12 with optional leading zero,
/// two-digit minute, AM/PM designator with at most one space before it.
static TIME_12H: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(0?[1-9]|1[0-2]):([0-5][0-9])\s?(AM|PM)$").unwrap());

/// A well-formed 24-hour time: hour 0-23 with optional leading zero,
/// two-digit minute.
static TIME_24H: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]?[0-9]|2[0-3]):([0-5][0-9])$").unwrap());

/// A trailing AM/PM designator, optionally preceded by a single space.
static TRAILING_DESIGNATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s?(AM|PM)$").unwrap());

/// A digit glued directly to an AM/PM designator, e.g. "2:30PM".
static GLUED_DESIGNATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)([0-9])(AM|PM)").unwrap());

/// The two textual time formats understood by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// 12-hour clock with an AM/PM designator, e.g. "2:30 PM".
    #[serde(rename = "12")]
    Hour12,
    /// 24-hour (military) clock, e.g. "14:30".
    #[serde(rename = "24")]
    Hour24,
}

impl Default for TimeFormat {
    fn default() -> Self {
        TimeFormat::Hour12
    }
}

impl std::fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFormat::Hour12 => write!(f, "12"),
            TimeFormat::Hour24 => write!(f, "24"),
        }
    }
}

/// Validates that a time string is in 12-hour format (H:MM AM/PM).
///
/// Surrounding whitespace is ignored; the designator is matched
/// case-insensitively and may sit directly against the minutes.
pub fn is_valid_12_hour(time12: &str) -> bool {
    TIME_12H.is_match(time12.trim())
}

/// Validates that a time string is in 24-hour format (HH:MM).
pub fn is_valid_24_hour(time24: &str) -> bool {
    TIME_24H.is_match(time24.trim())
}

/// Converts a 12-hour time string to 24-hour format.
///
/// Applies the standard mapping: 12 AM becomes hour 0, other AM hours are
/// unchanged, 12 PM stays 12, remaining PM hours gain 12. The minute is
/// passed through unchanged.
///
/// # Arguments
///
/// * `time12` - Time string in 12-hour format (e.g., "2:30 PM")
///
/// # Returns
///
/// * `Option<String>` - The 24-hour equivalent with a zero-padded hour, or
///   `None` when the input is not a well-formed 12-hour time
pub fn convert_12_to_24(time12: &str) -> Option<String> {
    let caps = TIME_12H.captures(time12.trim())?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute = &caps[2];
    let designator = caps[3].to_uppercase();

    let hour24 = match (designator.as_str(), hour) {
        ("AM", 12) => 0,
        ("AM", h) => h,
        ("PM", 12) => 12,
        ("PM", h) => h + 12,
        _ => return None,
    };

    Some(format!("{:02}:{}", hour24, minute))
}

/// Converts a 24-hour time string to 12-hour format.
///
/// The hour in the result is intentionally not zero-padded ("2:30 PM",
/// never "02:30 PM"); anything that re-parses the displayed value expects
/// that form. The designator is always uppercase with one space before it.
///
/// # Arguments
///
/// * `time24` - Time string in 24-hour format (e.g., "14:30")
///
/// # Returns
///
/// * `Option<String>` - The 12-hour equivalent, or `None` when the input is
///   not a well-formed 24-hour time
pub fn convert_24_to_12(time24: &str) -> Option<String> {
    let caps = TIME_24H.captures(time24.trim())?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute = &caps[2];

    let (hour12, designator) = match hour {
        0 => (12, "AM"),
        12 => (12, "PM"),
        h if h > 12 => (h - 12, "PM"),
        h => (h, "AM"),
    };

    Some(format!("{}:{} {}", hour12, minute, designator))
}

/// Normalizes raw interactive input ahead of 12-hour validation.
///
/// Trims and uppercases. For the 12-hour format a missing trailing
/// designator gets a default " AM" appended, and every designator glued to
/// a digit gains a separating space. Nothing is validated here: callers
/// still run the result through [`is_valid_12_hour`]. Applying the function
/// twice yields the same string as applying it once, for any input.
///
/// # Arguments
///
/// * `input` - Raw time input as typed
/// * `format` - Format the input is meant for
///
/// # Returns
///
/// * `String` - The normalized input, empty when the input is blank
pub fn format_time_input(input: &str, format: TimeFormat) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut cleaned = trimmed.to_uppercase();

    if format == TimeFormat::Hour12 {
        if !TRAILING_DESIGNATOR.is_match(&cleaned) {
            cleaned.push_str(" AM");
        }
        cleaned = GLUED_DESIGNATOR.replace_all(&cleaned, "$1 $2").into_owned();
    }

    cleaned
}

/// Splits a well-formed 24-hour string into its numeric hour and minute.
pub(crate) fn hour_minute_24(time24: &str) -> Option<(u32, u32)> {
    let caps = TIME_24H.captures(time24.trim())?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}
