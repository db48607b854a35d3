//! Conversions from a [`Duration`] to whole counts of a time unit, truncating toward zero.

use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Whole hours in `duration`.
#[must_use]
#[expect(
    clippy::integer_division,
    reason = "truncation toward zero is the documented behavior"
)]
pub fn to_hours(duration: Duration) -> u64 {
    duration.as_secs() / SECONDS_PER_HOUR
}

/// Whole minutes in `duration`.
#[must_use]
#[expect(
    clippy::integer_division,
    reason = "truncation toward zero is the documented behavior"
)]
pub fn to_minutes(duration: Duration) -> u64 {
    duration.as_secs() / SECONDS_PER_MINUTE
}

/// Whole seconds in `duration`.
#[must_use]
pub fn to_seconds(duration: Duration) -> u64 {
    duration.as_secs()
}

/// Whole milliseconds (1/1 000 of a second) in `duration`.
#[must_use]
pub fn to_milliseconds(duration: Duration) -> u128 {
    duration.as_millis()
}

/// Whole microseconds (1/1 000 000 of a second) in `duration`.
#[must_use]
pub fn to_microseconds(duration: Duration) -> u128 {
    duration.as_micros()
}

/// Nanoseconds (1/1 000 000 000 of a second) in `duration`.
#[must_use]
pub fn to_nanoseconds(duration: Duration) -> u128 {
    duration.as_nanos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_toward_zero() {
        let duration =
            Duration::from_secs(2 * 3600 + 59 * 60 + 59) + Duration::from_nanos(999_999_999);

        assert_eq!(to_hours(duration), 2);
        assert_eq!(to_minutes(duration), 179);
        assert_eq!(to_seconds(duration), 10_799);
        assert_eq!(to_milliseconds(duration), 10_799_999);
        assert_eq!(to_microseconds(duration), 10_799_999_999);
        assert_eq!(to_nanoseconds(duration), 10_799_999_999_999);
    }

    #[test]
    fn zero_is_zero_everywhere() {
        assert_eq!(to_hours(Duration::ZERO), 0);
        assert_eq!(to_minutes(Duration::ZERO), 0);
        assert_eq!(to_seconds(Duration::ZERO), 0);
        assert_eq!(to_milliseconds(Duration::ZERO), 0);
        assert_eq!(to_microseconds(Duration::ZERO), 0);
        assert_eq!(to_nanoseconds(Duration::ZERO), 0);
    }

    #[test]
    fn just_below_unit_boundary() {
        assert_eq!(to_hours(Duration::from_secs(3599)), 0);
        assert_eq!(to_minutes(Duration::from_secs(59)), 0);
        assert_eq!(to_seconds(Duration::from_millis(999)), 0);
        assert_eq!(to_milliseconds(Duration::from_micros(999)), 0);
        assert_eq!(to_microseconds(Duration::from_nanos(999)), 0);
    }
}
