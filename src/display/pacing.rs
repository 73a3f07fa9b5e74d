//! Dramatic pauses between printed lines.
//!
//! Pauses are purely cosmetic. The session goes through a `Pacer` so tests
//! can run whole games without sleeping.

use std::time::Duration;

/// Suspends the round for a moment.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Never pauses.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self, _duration: Duration) {}
}

/// Records requested pauses without sleeping.
#[derive(Clone, Debug, Default)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

impl RecordingPacer {
    /// Sum of all requested pauses.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

impl<T: Pacer + ?Sized> Pacer for Box<T> {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration)
    }
}

/// Scale the base delay (in seconds) by `factor`.
///
/// Rounded to the nearest nanosecond. Negative or non-finite results clamp
/// to zero.
#[must_use]
pub fn scaled(base_secs: f64, factor: f64) -> Duration {
    let nanos = (base_secs * factor * 1e9).round();
    if nanos.is_finite() && nanos > 0.0 {
        Duration::from_nanos(nanos as u64)
    } else {
        Duration::ZERO
    }
}
