use std::time::{Duration, Instant};

use crate::{MonotonicClock, TimeSource};

/// A reference point in time captured explicitly by the owner, such as the moment an application
/// finished starting up.
///
/// There is no implicit process-wide start time - capture an epoch where your program begins
/// and pass it to whatever needs to know how long the program has been running.
///
/// # Example
///
/// ```rust
/// use stopwatch::{Epoch, to_milliseconds};
///
/// let program_start = Epoch::capture();
///
/// // ... later ...
/// println!("program time: {}ms", to_milliseconds(program_start.elapsed()));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Epoch {
    start: Instant,
}

impl Epoch {
    /// Captures the current moment of the operating system's monotonic clock.
    #[must_use]
    pub fn capture() -> Self {
        Self::capture_with(&MonotonicClock)
    }

    /// Captures the current moment of `clock`.
    #[must_use]
    pub fn capture_with(clock: &impl TimeSource) -> Self {
        Self::from_instant(clock.now())
    }

    /// An epoch at a specific, already known moment.
    #[must_use]
    pub fn from_instant(start: Instant) -> Self {
        Self { start }
    }

    /// The captured moment.
    #[must_use]
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Time passed since the epoch according to the operating system's monotonic clock.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed_with(&MonotonicClock)
    }

    /// Time passed since the epoch according to `clock`.
    #[must_use]
    pub fn elapsed_with(&self, clock: &impl TimeSource) -> Duration {
        clock.now().saturating_duration_since(self.start)
    }
}
