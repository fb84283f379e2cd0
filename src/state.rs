//! Interactive form state for the converter.
//
// The original interactive surface kept correlated mutable fields updated on
// every keystroke. Here that becomes explicit unidirectional state: each form
// is an immutable value, and a reducer folds field-change events into the
// next value, recomputing the derived counterpart field and error text. The
// conversion library is called as a pure dependency; reading the clock stays
// outside (the snapshot arrives inside the event).

use thiserror::Error;

use crate::clock::CurrentTime;
use crate::convert::{
    convert_12_to_24, convert_24_to_12, format_time_input, is_valid_12_hour, is_valid_24_hour,
    TimeFormat,
};
use crate::range::{
    convert_time_range_12_to_24, convert_time_range_24_to_12, format_time_range_input,
    is_valid_time_range_12, is_valid_time_range_24, is_valid_time_range_order, parse_time_range,
};

/// Why a field's current value cannot be converted. The display strings are
/// the literal messages shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldIssue {
    #[error("Use format: HH:MM AM/PM (e.g., 2:30 PM)")]
    Format12,
    #[error("Use format: HH:MM (e.g., 14:30)")]
    Format24,
    #[error("Use format: HH:MM AM/PM to HH:MM AM/PM (e.g., 9:00 AM to 5:00 PM)")]
    RangeFormat12,
    #[error("Use format: HH:MM to HH:MM (e.g., 09:00 to 17:00)")]
    RangeFormat24,
    #[error("End time must be after start time")]
    OutOfOrder,
    #[error("Invalid time format")]
    Unconvertible,
}

/// State of the single-time converter form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertForm {
    pub time12: String,
    pub time24: String,
    pub error12: Option<FieldIssue>,
    pub error24: Option<FieldIssue>,
    pub last_edited: Option<TimeFormat>,
}

/// A change applied to the single-time converter form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertEvent {
    /// The named field was edited to the given raw value.
    Edit(TimeFormat, String),
    /// Both fields take an already-read clock snapshot.
    SetCurrent(CurrentTime),
    /// Reset to the cleared form.
    Clear,
}

impl ConvertForm {
    /// Folds one event into the next form state.
    ///
    /// Editing a field stores the raw value, clears that field's error and
    /// rederives the counterpart: an emptied field empties the counterpart,
    /// a valid value converts into it, and an invalid value keeps the
    /// counterpart untouched, reporting an error only once enough has been
    /// typed to tell a mistake from a partial entry.
    pub fn apply(&self, event: ConvertEvent) -> ConvertForm {
        let mut next = self.clone();

        match event {
            ConvertEvent::Edit(TimeFormat::Hour12, value) => {
                next.time12 = value.clone();
                next.error12 = None;
                next.last_edited = Some(TimeFormat::Hour12);

                if value.trim().is_empty() {
                    next.time24.clear();
                    return next;
                }

                let formatted = format_time_input(&value, TimeFormat::Hour12);
                if is_valid_12_hour(&formatted) {
                    match convert_12_to_24(&formatted) {
                        Some(converted) => next.time24 = converted,
                        None => next.error12 = Some(FieldIssue::Unconvertible),
                    }
                } else if value.len() > 3 {
                    next.error12 = Some(FieldIssue::Format12);
                }
            }
            ConvertEvent::Edit(TimeFormat::Hour24, value) => {
                next.time24 = value.clone();
                next.error24 = None;
                next.last_edited = Some(TimeFormat::Hour24);

                if value.trim().is_empty() {
                    next.time12.clear();
                    return next;
                }

                if is_valid_24_hour(&value) {
                    match convert_24_to_12(&value) {
                        Some(converted) => next.time12 = converted,
                        None => next.error24 = Some(FieldIssue::Unconvertible),
                    }
                } else if value.len() > 2 {
                    next.error24 = Some(FieldIssue::Format24);
                }
            }
            ConvertEvent::SetCurrent(current) => {
                next.time12 = current.time12;
                next.time24 = current.time24;
                next.error12 = None;
                next.error24 = None;
                next.last_edited = None;
            }
            ConvertEvent::Clear => next = ConvertForm::default(),
        }

        next
    }

    /// Whether the 12-hour field should display as valid. An empty field
    /// counts as valid (nothing to complain about yet).
    pub fn is_12_valid(&self) -> bool {
        self.time12.is_empty()
            || (is_valid_12_hour(&format_time_input(&self.time12, TimeFormat::Hour12))
                && self.error12.is_none())
    }

    /// Whether the 24-hour field should display as valid.
    pub fn is_24_valid(&self) -> bool {
        self.time24.is_empty() || (is_valid_24_hour(&self.time24) && self.error24.is_none())
    }
}

/// State of the time-range converter form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeForm {
    pub range12: String,
    pub range24: String,
    pub error12: Option<FieldIssue>,
    pub error24: Option<FieldIssue>,
    pub last_edited: Option<TimeFormat>,
}

/// A change applied to the range converter form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeEvent {
    Edit(TimeFormat, String),
    Clear,
}

impl RangeForm {
    /// Folds one event into the next form state.
    ///
    /// Format validity and chronological order are composed here as
    /// independent checks: a format-valid range always rederives the
    /// counterpart, and an out-of-order one additionally reports
    /// [`FieldIssue::OutOfOrder`] without suppressing the conversion.
    /// Format errors appear only once the input splits into an
    /// "A to B" shape.
    pub fn apply(&self, event: RangeEvent) -> RangeForm {
        let mut next = self.clone();

        match event {
            RangeEvent::Edit(TimeFormat::Hour12, value) => {
                next.range12 = value.clone();
                next.error12 = None;
                next.last_edited = Some(TimeFormat::Hour12);

                if value.trim().is_empty() {
                    next.range24.clear();
                    return next;
                }

                let formatted = format_time_range_input(&value, TimeFormat::Hour12);
                if is_valid_time_range_12(&formatted) {
                    match convert_time_range_12_to_24(&formatted) {
                        Some(converted) => next.range24 = converted,
                        None => {
                            next.error12 = Some(FieldIssue::Unconvertible);
                            return next;
                        }
                    }
                    if !is_valid_time_range_order(&formatted) {
                        next.error12 = Some(FieldIssue::OutOfOrder);
                    }
                } else if parse_time_range(&formatted).is_some() {
                    next.error12 = Some(FieldIssue::RangeFormat12);
                }
            }
            RangeEvent::Edit(TimeFormat::Hour24, value) => {
                next.range24 = value.clone();
                next.error24 = None;
                next.last_edited = Some(TimeFormat::Hour24);

                if value.trim().is_empty() {
                    next.range12.clear();
                    return next;
                }

                let formatted = format_time_range_input(&value, TimeFormat::Hour24);
                if is_valid_time_range_24(&formatted) {
                    match convert_time_range_24_to_12(&formatted) {
                        Some(converted) => next.range12 = converted,
                        None => {
                            next.error24 = Some(FieldIssue::Unconvertible);
                            return next;
                        }
                    }
                    if !is_valid_time_range_order(&formatted) {
                        next.error24 = Some(FieldIssue::OutOfOrder);
                    }
                } else if parse_time_range(&formatted).is_some() {
                    next.error24 = Some(FieldIssue::RangeFormat24);
                }
            }
            RangeEvent::Clear => next = RangeForm::default(),
        }

        next
    }

    /// Whether the 12-hour range field should display as valid.
    pub fn is_12_valid(&self) -> bool {
        self.range12.is_empty()
            || (is_valid_time_range_12(&format_time_range_input(
                &self.range12,
                TimeFormat::Hour12,
            )) && self.error12.is_none())
    }

    /// Whether the 24-hour range field should display as valid.
    pub fn is_24_valid(&self) -> bool {
        self.range24.is_empty()
            || (is_valid_time_range_24(&format_time_range_input(
                &self.range24,
                TimeFormat::Hour24,
            )) && self.error24.is_none())
    }
}
