//! Paced line-by-line rendering.
//!
//! Timed pauses are a presentation concern only; the engine itself
//! never blocks. The delay strategy is injectable so demos can run
//! instantly in CI.

use std::thread;
use std::time::Duration;

/// Delay strategy for paced output
pub trait Pacing {
    fn pause(&self, duration: Duration);
}

/// Real sleeps, for the interactive demo.
pub struct SleepPacing;

impl Pacing for SleepPacing {
    fn pause(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// No delays at all.
pub struct NoPacing;

impl Pacing for NoPacing {
    fn pause(&self, _duration: Duration) {}
}

/// Print text line by line with a per-line pause scaled to line length.
pub fn print_slow(pacing: &dyn Pacing, text: &str, delay_secs: f64) {
    for line in text.lines() {
        println!("{line}");
        let pause = delay_secs * line.chars().count() as f64 / 20.0 + 0.3;
        pacing.pause(Duration::from_secs_f64(pause));
    }
    println!();
}
