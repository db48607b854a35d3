use std::fmt::Debug;
use std::time::Instant;

/// A source of monotonic timestamps.
///
/// [`Stopwatch`][crate::Stopwatch] and [`Epoch`][crate::Epoch] read the current time through
/// this trait, which allows the passage of time to be controlled when testing code that uses
/// them. Most code uses [`MonotonicClock`].
#[cfg_attr(test, mockall::automock)]
pub trait TimeSource: Debug {
    /// The current point in time. Must never go backwards.
    fn now(&self) -> Instant;
}

/// The operating system's monotonic clock, as exposed by [`Instant::now()`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MonotonicClock;

impl TimeSource for MonotonicClock {
    #[cfg_attr(test, mutants::skip)] // Cannot observe the real clock deterministically.
    fn now(&self) -> Instant {
        Instant::now()
    }
}
