//! Narrow seams to the external rendering host.
//!
//! The viewer never renders anything itself. It writes orientations through
//! [`RotationTarget`], configures the scene through [`SceneHost`], and asks a
//! [`ModelLoader`] for the model on a background thread.

pub mod headless;
pub mod loader;

pub use headless::{HeadlessHost, HeadlessLoader, HeadlessRecord, HeadlessRecorder};
pub use loader::PendingLoad;

use crate::{
    core::types::{CameraSettings, LightingSettings, Model, Orientation, Placement},
    error::Result,
};

/// Readiness check sampled off the control thread. An `Err` or a panic means
/// "not ready yet".
pub type ReadinessProbe = Box<dyn FnMut() -> Result<bool> + Send + 'static>;

/// The placed node the rotation controller drives.
pub trait RotationTarget {
    /// Called on every orientation change; no batching.
    fn apply_orientation(&mut self, orientation: Orientation);

    /// Whether the node is the host's currently selected node.
    fn is_selected(&self) -> bool;
}

impl<T: RotationTarget + ?Sized> RotationTarget for Box<T> {
    fn apply_orientation(&mut self, orientation: Orientation) {
        (**self).apply_orientation(orientation);
    }

    fn is_selected(&self) -> bool {
        (**self).is_selected()
    }
}

/// Scene-level operations of the rendering host.
pub trait SceneHost {
    fn name(&self) -> &str;

    /// Probe for the renderer resource that must exist before scene setup.
    fn readiness_probe(&mut self) -> ReadinessProbe;

    fn configure_camera(&mut self, camera: &CameraSettings);

    fn configure_lighting(&mut self, lighting: &LightingSettings);

    /// Adds the model under a new interactive node and returns that node.
    fn place(&mut self, model: Model, placement: &Placement) -> Result<Box<dyn RotationTarget>>;

    fn resume_rendering(&mut self) {}

    fn pause_rendering(&mut self) {}
}

/// Loads models by source id. Runs on a worker thread.
pub trait ModelLoader: Send + Sync {
    fn load(&self, source: &str) -> Result<Model>;
}
