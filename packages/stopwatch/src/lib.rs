//! A pausable stopwatch for measuring elapsed wall-clock time, plus helpers for converting
//! durations to whole time units.
//!
//! * [`Stopwatch`] counts time while running and can be paused, resumed, restarted and stopped.
//! * [`Epoch`] is an explicitly captured reference point, for questions like "how long has the
//!   program been running?" without relying on hidden global state.
//! * [`to_hours()`], [`to_minutes()`], [`to_seconds()`], [`to_milliseconds()`],
//!   [`to_microseconds()`] and [`to_nanoseconds()`] convert durations to whole unit counts.
//!
//! Time is read through the [`TimeSource`] trait, which defaults to the operating system's
//! monotonic clock ([`MonotonicClock`]).
//!
//! # Example
//!
//! ```rust
//! use std::thread;
//! use std::time::Duration;
//!
//! use stopwatch::{Epoch, Stopwatch, to_microseconds};
//!
//! let program_start = Epoch::capture();
//!
//! let mut frame = Stopwatch::started();
//! thread::sleep(Duration::from_millis(2));
//! let frame_time = frame.restart();
//!
//! assert!(frame_time >= Duration::from_millis(2));
//! assert!(program_start.elapsed() >= frame_time);
//! println!("frame took {}us", to_microseconds(frame_time));
//! ```

mod epoch;
mod stopwatch;
mod time_source;
mod units;

pub use epoch::*;
pub use stopwatch::*;
pub use time_source::*;
pub use units::*;
