//! Measures time with a stopwatch that gets paused, resumed and stopped, then reports how long
//! the program has been running in various units.

use std::thread;
use std::time::Duration;

use stopwatch::{
    Epoch, Stopwatch, to_microseconds, to_milliseconds, to_nanoseconds, to_seconds,
};

fn main() {
    let program_start = Epoch::capture();

    let mut stopwatch = Stopwatch::started();
    thread::sleep(Duration::from_millis(100));

    stopwatch.pause();
    thread::sleep(Duration::from_millis(200));
    println!(
        "ms count while paused: {}",
        to_milliseconds(stopwatch.elapsed())
    );

    stopwatch.resume();
    thread::sleep(Duration::from_millis(200));
    println!(
        "ms count after resume: {}",
        to_milliseconds(stopwatch.elapsed())
    );

    stopwatch.stop();
    println!(
        "ms count after stop: {}",
        to_milliseconds(stopwatch.elapsed())
    );

    let program_time = program_start.elapsed();
    println!("program time: {}ns", to_nanoseconds(program_time));
    println!("program time: {}us", to_microseconds(program_time));
    println!("program time: {}ms", to_milliseconds(program_time));
    println!("program time: {}s", to_seconds(program_time));
}
