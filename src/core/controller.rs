//! Drag-to-rotate controller with idle auto-rotation.

use std::time::Duration;

use log::{debug, trace};

use crate::{
    config::SceneConfig,
    core::{
        clock::{AnimationClock, AnimationCycle, RampDelta},
        types::{ClockState, ControllerMode, Orientation},
    },
    host::RotationTarget,
};

/// Owns the single authoritative [`Orientation`] of a placed node.
///
/// While idle the orientation follows the animation clock; while dragging it
/// follows gesture deltas and clock ticks are dropped. Every change is written
/// to the target immediately.
pub struct DragRotationController<T: RotationTarget> {
    target: T,
    orientation: Orientation,
    mode: ControllerMode,
    rotation_rate: f32,
    clock: AnimationClock,
    ramp: RampDelta,
}

impl<T: RotationTarget> DragRotationController<T> {
    /// Creates a controller with a stopped clock and writes the initial orientation.
    pub fn new(target: T, rotation_rate: f32, cycle: AnimationCycle) -> Self {
        let mut controller = Self {
            target,
            orientation: Orientation::default(),
            mode: ControllerMode::IdleAnimating,
            rotation_rate,
            clock: AnimationClock::new(cycle),
            ramp: RampDelta::new(),
        };
        controller.apply();
        controller
    }

    pub fn from_config(target: T, config: &SceneConfig) -> Self {
        Self::new(
            target,
            config.rotation_rate_degrees,
            AnimationCycle::new(config.cycle_duration),
        )
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn mode(&self) -> ControllerMode {
        self.mode
    }

    pub fn clock_state(&self) -> ClockState {
        self.clock.state()
    }

    /// How many times the idle clock has been (re)started.
    pub fn resume_count(&self) -> u32 {
        self.clock.resume_count()
    }

    pub fn rotation_rate(&self) -> f32 {
        self.rotation_rate
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Drags may only start on the selected node.
    pub fn can_start_transformation(&self, selected: bool) -> bool {
        selected
    }

    pub fn on_gesture_started(&mut self) {
        if self.mode == ControllerMode::Dragging {
            trace!("gesture start ignored: already dragging");
            return;
        }
        self.mode = ControllerMode::Dragging;
        self.clock.pause();
    }

    /// Positive horizontal drag turns the node with negative yaw.
    pub fn on_gesture_continued(&mut self, delta_x: f32) {
        if self.mode != ControllerMode::Dragging {
            trace!("gesture delta {delta_x} ignored while idle");
            return;
        }
        self.rotate(-delta_x * self.rotation_rate);
    }

    pub fn on_gesture_finished(&mut self) {
        if self.mode != ControllerMode::Dragging {
            trace!("gesture finish ignored while idle");
            return;
        }
        self.mode = ControllerMode::IdleAnimating;
        self.clock.resume();
    }

    /// The node lost selection or was removed.
    pub fn on_deactivated(&mut self) {
        self.clock.pause();
    }

    /// Applies one idle clock sample. Dropped while dragging or while the
    /// clock is not running.
    pub fn on_clock_tick(&mut self, ramp_value: f32) {
        if self.mode != ControllerMode::IdleAnimating || !self.clock.is_running() {
            trace!("clock tick {ramp_value} dropped ({:?}, {:?})", self.mode, self.clock.state());
            return;
        }
        let delta = self.ramp.next(ramp_value);
        self.rotate(delta);
    }

    /// Advances the owned clock by one frame and applies the resulting tick.
    pub fn advance(&mut self, dt: Duration) {
        if self.mode != ControllerMode::IdleAnimating {
            return;
        }
        if let Some(ramp_value) = self.clock.advance(dt) {
            self.on_clock_tick(ramp_value);
        }
    }

    pub fn on_resume(&mut self) {
        if self.clock.resume() {
            debug!("rotation controller resumed at {:.2}°", self.orientation.degrees());
        }
    }

    pub fn on_pause(&mut self) {
        if self.clock.pause() {
            debug!("rotation controller paused at {:.2}°", self.orientation.degrees());
        }
    }

    fn rotate(&mut self, delta: f32) {
        self.orientation = self.orientation.rotated(delta);
        self.apply();
    }

    fn apply(&mut self) {
        self.target.apply_orientation(self.orientation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[derive(Default)]
    struct RecordingTarget {
        applied: Vec<f32>,
        selected: bool,
    }

    impl RotationTarget for RecordingTarget {
        fn apply_orientation(&mut self, orientation: Orientation) {
            self.applied.push(orientation.degrees());
        }

        fn is_selected(&self) -> bool {
            self.selected
        }
    }

    fn controller() -> DragRotationController<RecordingTarget> {
        DragRotationController::new(
            RecordingTarget::default(),
            0.6,
            AnimationCycle::new(Duration::from_millis(8000)),
        )
    }

    #[test]
    fn initial_orientation_is_applied_once() {
        let controller = controller();
        assert_eq!(controller.target().applied, vec![0.0]);
        assert_eq!(controller.clock_state(), ClockState::Stopped);
    }

    #[test]
    fn ticks_before_first_resume_are_dropped() {
        let mut controller = controller();
        controller.on_clock_tick(30.0);
        assert_abs_diff_eq!(controller.orientation().degrees(), 0.0);
    }

    #[test]
    fn gesture_continue_while_idle_is_ignored() {
        let mut controller = controller();
        controller.on_resume();
        controller.on_gesture_continued(10.0);
        controller.on_gesture_finished();
        assert_abs_diff_eq!(controller.orientation().degrees(), 0.0);
        assert_eq!(controller.resume_count(), 1);
    }

    #[test]
    fn deactivation_pauses_in_any_mode() {
        let mut controller = controller();
        controller.on_resume();
        controller.on_deactivated();
        assert_eq!(controller.clock_state(), ClockState::Paused);
        assert_eq!(controller.mode(), ControllerMode::IdleAnimating);
    }

    #[test]
    fn advance_feeds_the_ramp() {
        let mut controller = controller();
        controller.on_resume();
        controller.advance(Duration::from_millis(1000));
        controller.advance(Duration::from_millis(1000));
        assert_abs_diff_eq!(controller.orientation().degrees(), 90.0, epsilon = 1e-3);
    }

    #[test]
    fn advance_during_drag_does_not_move_the_phase() {
        let mut controller = controller();
        controller.on_resume();
        controller.advance(Duration::from_millis(1000));
        controller.on_gesture_started();
        controller.advance(Duration::from_millis(3000));
        controller.on_gesture_finished();
        controller.advance(Duration::from_millis(1000));
        assert_abs_diff_eq!(controller.orientation().degrees(), 90.0, epsilon = 1e-3);
    }
}
