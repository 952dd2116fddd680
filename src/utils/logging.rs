use log::{Level, log_enabled, warn};
use std::time::{Duration, Instant};

/// Traces how long a one-off view section, such as scene setup, took.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("start {label}");
        }
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            log::trace!("end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

/// Warns when a view update took longer than `budget_ms`. Returns whether it did.
pub fn warn_if_frame_budget_exceeded(duration: Duration, budget_ms: f32) -> bool {
    let elapsed_ms = duration.as_secs_f32() * 1000.0;
    if elapsed_ms > budget_ms {
        warn!("View update exceeded budget: {elapsed_ms:.2} ms > {budget_ms:.2} ms");
        return true;
    }
    false
}
