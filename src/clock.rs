//! Wall-clock access for the "current time" action.
//
// Reading the clock is the one impure operation in the crate, so it sits
// behind a minimal provider trait; everything downstream of the snapshot is
// deterministic and testable without freezing system time.

use chrono::{Local, NaiveTime, Timelike};

use crate::convert::convert_24_to_12;

/// Source of the current local time of day.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// The real system clock, read through `chrono::Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// The current time rendered in both supported formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTime {
    pub time12: String,
    pub time24: String,
}

/// Takes one snapshot of the given clock and renders it in both formats.
///
/// The 24-hour string is the canonical zero-padded form; the 12-hour string
/// is derived from it through [`convert_24_to_12`] so the two fields always
/// agree under the standard mapping.
pub fn current_time(clock: &dyn Clock) -> CurrentTime {
    let now = clock.now();
    let time24 = format!("{:02}:{:02}", now.hour(), now.minute());
    let time12 = convert_24_to_12(&time24)
        .expect("a zero-padded wall-clock hour and minute always form a valid 24-hour time");

    CurrentTime { time12, time24 }
}

/// Convenience wrapper reading the real system clock.
pub fn current_time_system() -> CurrentTime {
    current_time(&SystemClock)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(NaiveTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveTime {
            self.0
        }
    }

    fn at(hour: u32, minute: u32) -> FixedClock {
        FixedClock(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    }

    #[test]
    fn test_current_time_pairs() {
        let cases = vec![
            (0, 0, "12:00 AM", "00:00"),
            (0, 5, "12:05 AM", "00:05"),
            (9, 30, "9:30 AM", "09:30"),
            (12, 0, "12:00 PM", "12:00"),
            (14, 30, "2:30 PM", "14:30"),
            (23, 59, "11:59 PM", "23:59"),
        ];

        for (hour, minute, time12, time24) in cases {
            let current = current_time(&at(hour, minute));
            assert_eq!(current.time12, time12, "12-hour mismatch at {:02}:{:02}", hour, minute);
            assert_eq!(current.time24, time24, "24-hour mismatch at {:02}:{:02}", hour, minute);
        }
    }

    #[test]
    fn test_system_clock_yields_convertible_pair() {
        // Can't pin the wall clock in a test; check shape and agreement.
        let current = current_time_system();
        assert_eq!(current.time24.len(), 5);
        assert!(crate::convert::is_valid_24_hour(&current.time24));
        assert!(crate::convert::is_valid_12_hour(&current.time12));
        assert_eq!(
            crate::convert::convert_24_to_12(&current.time24),
            Some(current.time12.clone())
        );
    }
}
