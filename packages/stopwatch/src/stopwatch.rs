use std::time::{Duration, Instant};

use tracing::trace;

use crate::{MonotonicClock, TimeSource};

/// Measures elapsed time, with support for pausing.
///
/// A stopwatch is in one of three states:
///
/// * **Stopped** - the initial state. [`elapsed()`][1] is zero.
/// * **Running** - time is being counted.
/// * **Paused** - the count is frozen at the moment of pausing.
///
/// Time spent paused is not counted once the stopwatch is [resumed][2].
///
/// # Example
///
/// ```rust
/// use std::thread;
/// use std::time::Duration;
///
/// use stopwatch::Stopwatch;
///
/// let mut stopwatch = Stopwatch::started();
/// thread::sleep(Duration::from_millis(1));
///
/// stopwatch.pause();
/// let frozen = stopwatch.elapsed();
/// thread::sleep(Duration::from_millis(1));
/// assert_eq!(stopwatch.elapsed(), frozen);
///
/// stopwatch.resume();
/// stopwatch.stop();
/// assert_eq!(stopwatch.elapsed(), Duration::ZERO);
/// ```
///
/// [1]: Self::elapsed
/// [2]: Self::resume
#[derive(Clone, Debug)]
pub struct Stopwatch<C = MonotonicClock> {
    clock: C,
    state: State,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Stopped,

    Running {
        /// Counting started here, shifted forward by any time spent paused.
        since: Instant,
    },

    Paused {
        since: Instant,
        at: Instant,
    },
}

impl Stopwatch<MonotonicClock> {
    /// Creates a stopped stopwatch that reads the operating system's monotonic clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }

    /// Creates a stopwatch that is already running.
    #[must_use]
    pub fn started() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }
}

impl Default for Stopwatch<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Stopwatch<C>
where
    C: TimeSource,
{
    /// Creates a stopped stopwatch that reads the time from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: State::Stopped,
        }
    }

    /// Starts counting from zero, whatever the current state.
    pub fn start(&mut self) {
        self.state = State::Running {
            since: self.clock.now(),
        };

        trace!("stopwatch started");
    }

    /// The time counted so far.
    ///
    /// Zero if the stopwatch is stopped. While paused, this is the time counted up to the moment
    /// of pausing.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self.state {
            State::Stopped => Duration::ZERO,
            State::Running { since } => self.clock.now().saturating_duration_since(since),
            State::Paused { since, at } => at.saturating_duration_since(since),
        }
    }

    /// Freezes the count. Has no effect unless the stopwatch is running.
    pub fn pause(&mut self) {
        if let State::Running { since } = self.state {
            self.state = State::Paused {
                since,
                at: self.clock.now(),
            };

            trace!("stopwatch paused");
        }
    }

    /// Continues counting after a pause, not counting the time spent paused.
    /// Has no effect unless the stopwatch is paused.
    pub fn resume(&mut self) {
        if let State::Paused { since, at } = self.state {
            let paused_for = self.clock.now().saturating_duration_since(at);

            self.state = State::Running {
                since: since
                    .checked_add(paused_for)
                    .expect("start shifted by the pause is never later than now"),
            };

            trace!(?paused_for, "stopwatch resumed");
        }
    }

    /// Starts counting from zero again, returning the time counted before the restart.
    pub fn restart(&mut self) -> Duration {
        let now = self.clock.now();

        let elapsed = match self.state {
            State::Stopped => Duration::ZERO,
            State::Running { since } => now.saturating_duration_since(since),
            State::Paused { since, at } => at.saturating_duration_since(since),
        };

        self.state = State::Running { since: now };

        trace!(?elapsed, "stopwatch restarted");

        elapsed
    }

    /// Stops counting and resets the elapsed time to zero.
    pub fn stop(&mut self) {
        self.state = State::Stopped;

        trace!("stopwatch stopped");
    }

    /// Whether the stopwatch has been started and not stopped since. True while paused.
    #[must_use]
    pub fn is_started(&self) -> bool {
        !self.is_stopped()
    }

    /// Whether the count is frozen by [`pause()`][Self::pause].
    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self.state, State::Paused { .. })
    }

    /// Whether the stopwatch is stopped. This is the initial state.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        matches!(self.state, State::Stopped)
    }
}
