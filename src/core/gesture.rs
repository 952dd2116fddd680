use log::trace;
use serde::{Deserialize, Serialize};

use crate::{core::controller::DragRotationController, host::RotationTarget};

/// Raw drag events reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    Started,
    /// Horizontal displacement since the previous event.
    Continued { delta_x: f32 },
    Finished,
    /// The node lost selection or left the scene.
    Deactivated,
}

/// Routes host drag events to a [`DragRotationController`].
///
/// A gesture that starts on an unselected node is swallowed whole: its
/// continue and finish events never reach the controller. Deactivation
/// pauses the controller but does not cancel an accepted drag.
#[derive(Debug, Default)]
pub struct DragGestureRecognizer {
    active: bool,
}

impl DragGestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag accepted by the controller is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` if the event reached the controller.
    pub fn dispatch<T: RotationTarget>(
        &mut self,
        controller: &mut DragRotationController<T>,
        event: GestureEvent,
    ) -> bool {
        match event {
            GestureEvent::Started => {
                let selected = controller.target().is_selected();
                if !controller.can_start_transformation(selected) {
                    trace!("drag rejected: node not selected");
                    return false;
                }
                self.active = true;
                controller.on_gesture_started();
            }
            GestureEvent::Continued { delta_x } => {
                if !self.active {
                    return false;
                }
                controller.on_gesture_continued(delta_x);
            }
            GestureEvent::Finished => {
                if !self.active {
                    return false;
                }
                self.active = false;
                controller.on_gesture_finished();
            }
            // An accepted drag stays active so its finish still reaches the controller.
            GestureEvent::Deactivated => controller.on_deactivated(),
        }
        true
    }
}
