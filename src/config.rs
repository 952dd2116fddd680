//! Global configuration constants for the Turntable viewer.

use std::time::Duration;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::types::{CameraSettings, LightingSettings, Placement};

/// Degrees of yaw per unit of horizontal drag displacement.
pub const DEFAULT_ROTATION_RATE_DEGREES: f32 = 0.6;

/// Length of one 0→360 idle rotation cycle (in milliseconds).
pub const DEFAULT_CYCLE_DURATION_MS: u64 = 8000;

/// Upper bound of the idle rotation ramp (degrees).
pub const CYCLE_RAMP_END_DEGREES: f32 = 360.0;

/// Period between readiness probe samples (in milliseconds).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Initial vertical field of view of the scene camera.
pub const DEFAULT_CAMERA_FOV_DEGREES: f32 = 45.0;

/// Initial local position of the scene camera.
pub const DEFAULT_CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 15.0];

/// Yaw applied to the environment light probe.
pub const DEFAULT_LIGHT_ROTATION_DEGREES: f32 = 78.0;

/// Intensity of the environment light probe.
pub const DEFAULT_LIGHT_INTENSITY: f32 = 2.5;

/// Whether HDR light estimation is requested from the host.
pub const DEFAULT_USE_HDR_LIGHT_ESTIMATE: bool = true;

/// Uniform display scale applied to the placed model.
pub const DEFAULT_MODEL_SCALE: f32 = 0.06;

/// Lower scale bound of the interactive node (host default would be 0.75).
pub const DEFAULT_MIN_INTERACTIVE_SCALE: f32 = 0.01;

/// Offset of the model relative to its interactive parent node.
pub const DEFAULT_MODEL_LOCAL_OFFSET: [f32; 3] = [0.0, -50.0, 0.0];

/// Source id of the model shown by the viewer.
pub const DEFAULT_MODEL_SOURCE: &str = "card.sfb";

/// Frame budget used when warning about slow view updates.
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 16.0;

/// Runtime view configuration. Defaults mirror the constants above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub rotation_rate_degrees: f32,
    pub cycle_duration: Duration,
    pub poll_interval: Duration,
    pub camera: CameraSettings,
    pub lighting: LightingSettings,
    pub placement: Placement,
    pub model_source: String,
    pub frame_budget_ms: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            rotation_rate_degrees: DEFAULT_ROTATION_RATE_DEGREES,
            cycle_duration: Duration::from_millis(DEFAULT_CYCLE_DURATION_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            camera: CameraSettings {
                vertical_fov_degrees: DEFAULT_CAMERA_FOV_DEGREES,
                position: Vec3::from_array(DEFAULT_CAMERA_POSITION),
            },
            lighting: LightingSettings {
                rotation: Quat::from_axis_angle(
                    Vec3::Y,
                    DEFAULT_LIGHT_ROTATION_DEGREES.to_radians(),
                ),
                intensity: DEFAULT_LIGHT_INTENSITY,
                use_hdr_light_estimate: DEFAULT_USE_HDR_LIGHT_ESTIMATE,
            },
            placement: Placement {
                scale: DEFAULT_MODEL_SCALE,
                min_scale: DEFAULT_MIN_INTERACTIVE_SCALE,
                local_offset: Vec3::from_array(DEFAULT_MODEL_LOCAL_OFFSET),
                select: true,
            },
            model_source: DEFAULT_MODEL_SOURCE.to_owned(),
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
        }
    }
}
