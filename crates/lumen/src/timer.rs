//! Timing of the render and output steps.

use std::{
    cell::RefCell,
    fmt,
    time::{Duration, Instant},
};

/// A timer that measures and averages the time an operation takes.
///
/// Collected timings are averaged and reset when the timer is displayed using `{}`
/// ([`std::fmt::Display`]).
pub struct Timer {
    name: &'static str,
    durations: RefCell<Vec<Duration>>,
}

impl Timer {
    /// Creates a new timer.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            durations: Default::default(),
        }
    }

    /// Invokes a closure, measuring and recording the time it takes.
    pub fn time<T>(&mut self, timee: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = timee();
        self.durations.get_mut().push(start.elapsed());
        result
    }
}

/// Displays the average recorded time and resets it.
impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `Timer` isn't `Sync` and `time` takes `&mut self`, so this borrow can't conflict.
        let mut durations = self.durations.borrow_mut();
        let len = durations.len();
        let avg_ms = if len == 0 {
            0.0
        } else {
            durations.iter().sum::<Duration>().as_secs_f32() * 1000.0 / len as f32
        };
        durations.clear();

        write!(f, "{}: {len}x{avg_ms:.01}ms", self.name)
    }
}
