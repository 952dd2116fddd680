use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Fixed roll applied on top of the yaw so the card faces the camera.
pub const ORIENTATION_ROLL_DEGREES: f32 = 90.0;

/// Cumulative yaw of the displayed object, in degrees.
///
/// The angle is never wrapped; it only accumulates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    degrees: f32,
}

impl Orientation {
    pub fn from_degrees(degrees: f32) -> Self {
        Self { degrees }
    }

    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    /// Returns the orientation rotated by `delta` degrees of yaw.
    pub fn rotated(self, delta: f32) -> Self {
        Self {
            degrees: self.degrees + delta,
        }
    }

    /// World rotation handed to the renderer: yaw about +Y composed with a
    /// 90° roll about the forward axis (-Z).
    pub fn to_quat(&self) -> Quat {
        let yaw = Quat::from_axis_angle(Vec3::Y, self.degrees.to_radians());
        let roll = Quat::from_axis_angle(Vec3::NEG_Z, ORIENTATION_ROLL_DEGREES.to_radians());
        yaw * roll
    }
}

/// Which input source currently drives the orientation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerMode {
    #[default]
    IdleAnimating,
    Dragging,
}

/// Run state of the idle animation clock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockState {
    /// Created but never started.
    #[default]
    Stopped,
    Running,
    Paused,
}

impl ClockState {
    pub fn is_running(self) -> bool {
        matches!(self, ClockState::Running)
    }
}

/// Progress of the readiness gate. `Ready` and `Cancelled` are terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessState {
    #[default]
    Polling,
    Ready,
    Cancelled,
}

impl ReadinessState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, ReadinessState::Polling)
    }
}

/// Camera framing applied once the scene is ready.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub vertical_fov_degrees: f32,
    pub position: Vec3,
}

/// Environment lighting applied once the scene is ready.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightingSettings {
    pub rotation: Quat,
    pub intensity: f32,
    pub use_hdr_light_estimate: bool,
}

/// How the loaded model is attached to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Uniform display scale of the interactive node.
    pub scale: f32,
    /// Lowest scale the host's pinch handling may reach.
    pub min_scale: f32,
    /// Offset of the model relative to the interactive node.
    pub local_offset: Vec3,
    /// Select the node right after placement.
    pub select: bool,
}

/// Opaque handle to a model produced by a [`crate::host::ModelLoader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub source: String,
    pub registry_id: String,
}

impl Model {
    /// Model registered under its own source id.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            registry_id: source.clone(),
            source,
        }
    }
}
