//! Wall-clock timing around kernel calls.
//!
//! Criterion benches are the real measurement tool; this is the lightweight
//! timer for demos and ad-hoc runs where a single microsecond figure is
//! enough.

use std::time::Instant;

/// Labeled wall-clock timer.
pub struct KernelTimer {
    label: String,
    start: Instant,
}

impl KernelTimer {
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn elapsed_micros(&self) -> u128 {
        self.start.elapsed().as_micros()
    }
}

/// Run `f` and return its result with the elapsed wall time in microseconds.
pub fn measure<R>(label: &str, f: impl FnOnce() -> R) -> (R, u128) {
    let timer = KernelTimer::start(label);
    let result = f();
    (result, timer.elapsed_micros())
}
