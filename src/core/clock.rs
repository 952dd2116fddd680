//! Idle rotation clock: a looping 0→360 ramp turned into yaw deltas.

use std::time::Duration;

use log::debug;

use crate::config::CYCLE_RAMP_END_DEGREES;
use crate::core::types::ClockState;

/// Linear ramp from 0 to [`CYCLE_RAMP_END_DEGREES`] that restarts every `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationCycle {
    duration: Duration,
}

impl AnimationCycle {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Ramp value at `phase` into the cycle. Phases past the end wrap around.
    pub fn value_at(&self, phase: Duration) -> f32 {
        let total = self.duration.as_secs_f64();
        if total <= 0.0 {
            return 0.0;
        }
        let fraction = (phase.as_secs_f64() % total) / total;
        (fraction * CYCLE_RAMP_END_DEGREES as f64) as f32
    }
}

/// Turns successive ramp values into deltas.
///
/// When the ramp goes backwards (loop restart) the baseline drops to zero, so
/// the tick contributes the new value itself instead of a negative jump. The
/// remainder of the previous loop is lost.
#[derive(Debug, Default, Clone, Copy)]
pub struct RampDelta {
    previous: f32,
}

impl RampDelta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, value: f32) -> f32 {
        if value < self.previous {
            self.previous = 0.0;
        }
        let delta = value - self.previous;
        self.previous = value;
        delta
    }

    pub fn previous(&self) -> f32 {
        self.previous
    }
}

/// Pausable looping clock driving [`AnimationCycle`].
///
/// Pausing freezes the phase; resuming continues from it. Time passed to
/// [`AnimationClock::advance`] while not running is discarded.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    cycle: AnimationCycle,
    phase: Duration,
    state: ClockState,
    resume_count: u32,
}

impl AnimationClock {
    pub fn new(cycle: AnimationCycle) -> Self {
        Self {
            cycle,
            phase: Duration::ZERO,
            state: ClockState::Stopped,
            resume_count: 0,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Number of times the clock actually transitioned into `Running`.
    pub fn resume_count(&self) -> u32 {
        self.resume_count
    }

    pub fn phase(&self) -> Duration {
        self.phase
    }

    /// Starts or resumes the clock. Returns `false` if it was already running.
    pub fn resume(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        debug!(
            "idle clock resumed from {:?} at phase {:?}",
            self.state, self.phase
        );
        self.state = ClockState::Running;
        self.resume_count += 1;
        true
    }

    /// Pauses the clock. Returns `false` if it was not running.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        debug!("idle clock paused at phase {:?}", self.phase);
        self.state = ClockState::Paused;
        true
    }

    /// Moves the phase forward by `dt` and returns the new ramp value, or
    /// `None` while the clock is not running.
    pub fn advance(&mut self, dt: Duration) -> Option<f32> {
        if !self.is_running() {
            return None;
        }
        let period = self.cycle.duration();
        self.phase += dt;
        if !period.is_zero() {
            while self.phase >= period {
                self.phase -= period;
            }
        }
        Some(self.cycle.value_at(self.phase))
    }
}
