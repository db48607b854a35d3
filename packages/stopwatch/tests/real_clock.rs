//! Stopwatch behavior against the real operating system clock.
//!
//! These only assert lower bounds and orderings, as the scheduler may delay any thread.

use std::thread;
use std::time::Duration;

use stopwatch::{Stopwatch, to_milliseconds};

const SLEEP: Duration = Duration::from_millis(2);
const PAUSE: Duration = Duration::from_millis(100);

#[test]
fn started_counts_and_stopped_does_not() {
    let stopped = Stopwatch::new();
    let started = Stopwatch::started();

    assert!(stopped.is_stopped());
    assert!(started.is_started());

    thread::sleep(SLEEP);

    assert_eq!(stopped.elapsed(), Duration::ZERO);
    assert!(started.elapsed() >= SLEEP);
}

#[test]
fn later_pause_has_larger_count() {
    let mut first = Stopwatch::started();
    let mut second = Stopwatch::started();

    thread::sleep(SLEEP);
    first.pause();
    thread::sleep(SLEEP);
    second.pause();

    assert!(first.is_paused());
    assert!(second.is_paused());
    assert!(second.elapsed() > first.elapsed());
}

#[test]
fn restart_resets_count() {
    let mut stopwatch = Stopwatch::started();

    thread::sleep(SLEEP);
    let before = stopwatch.restart();
    let after = stopwatch.elapsed();

    assert!(before >= SLEEP);
    assert!(before > after);
}

#[test]
fn paused_time_is_not_counted() {
    let mut stopwatch = Stopwatch::started();

    thread::sleep(SLEEP);
    stopwatch.pause();
    let at_pause = stopwatch.elapsed();

    thread::sleep(PAUSE);
    assert_eq!(stopwatch.elapsed(), at_pause);

    stopwatch.resume();
    let after_resume = stopwatch.elapsed();

    assert!(after_resume >= at_pause);
    assert!(to_milliseconds(after_resume) < to_milliseconds(at_pause + PAUSE));
}

#[test]
fn stop_resets_count() {
    let mut stopwatch = Stopwatch::started();

    thread::sleep(SLEEP);
    stopwatch.stop();

    assert!(stopwatch.is_stopped());
    assert_eq!(stopwatch.elapsed(), Duration::ZERO);
}
