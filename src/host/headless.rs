//! Host implementation without a renderer. Records every call it receives.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    core::types::{CameraSettings, LightingSettings, Model, Orientation, Placement},
    error::{Result, TurntableError},
    host::{ModelLoader, ReadinessProbe, RotationTarget, SceneHost},
};

/// Everything a [`HeadlessHost`] has been asked to do so far.
#[derive(Debug, Default, Clone)]
pub struct HeadlessRecord {
    pub camera: Option<CameraSettings>,
    pub lighting: Option<LightingSettings>,
    pub camera_configured: u32,
    pub lighting_configured: u32,
    pub placements: Vec<(Model, Placement)>,
    pub orientations: Vec<Orientation>,
    pub selected: bool,
    pub rendering: bool,
    pub probe_samples: usize,
}

/// Shared read access to a headless host's record.
#[derive(Debug, Clone, Default)]
pub struct HeadlessRecorder {
    record: Arc<Mutex<HeadlessRecord>>,
}

impl HeadlessRecorder {
    pub fn snapshot(&self) -> HeadlessRecord {
        self.record.lock().clone()
    }

    pub fn last_orientation(&self) -> Option<Orientation> {
        self.record.lock().orientations.last().copied()
    }

    /// Simulates the user selecting or deselecting the placed node.
    pub fn set_selected(&self, selected: bool) {
        self.record.lock().selected = selected;
    }
}

/// Default host that keeps all state in memory.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    recorder: HeadlessRecorder,
    light_probe_ready: Arc<AtomicBool>,
    refuse_placement: bool,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose readiness resource exists from the start.
    pub fn ready() -> Self {
        let host = Self::new();
        host.set_light_probe_ready(true);
        host
    }

    pub fn recorder(&self) -> HeadlessRecorder {
        self.recorder.clone()
    }

    pub fn set_light_probe_ready(&self, ready: bool) {
        self.light_probe_ready.store(ready, Ordering::SeqCst);
    }

    /// Makes every later [`SceneHost::place`] call fail.
    pub fn refuse_placement(mut self) -> Self {
        self.refuse_placement = true;
        self
    }
}

impl SceneHost for HeadlessHost {
    fn name(&self) -> &str {
        "headless"
    }

    fn readiness_probe(&mut self) -> ReadinessProbe {
        let ready = Arc::clone(&self.light_probe_ready);
        let record = Arc::clone(&self.recorder.record);
        Box::new(move || -> Result<bool> {
            record.lock().probe_samples += 1;
            Ok(ready.load(Ordering::SeqCst))
        })
    }

    fn configure_camera(&mut self, camera: &CameraSettings) {
        let mut record = self.recorder.record.lock();
        record.camera = Some(*camera);
        record.camera_configured += 1;
    }

    fn configure_lighting(&mut self, lighting: &LightingSettings) {
        let mut record = self.recorder.record.lock();
        record.lighting = Some(*lighting);
        record.lighting_configured += 1;
    }

    fn place(&mut self, model: Model, placement: &Placement) -> Result<Box<dyn RotationTarget>> {
        if self.refuse_placement {
            return Err(TurntableError::PlacementFailed(model.source));
        }
        let mut record = self.recorder.record.lock();
        if placement.select {
            record.selected = true;
        }
        record.placements.push((model, *placement));
        Ok(Box::new(HeadlessNode {
            record: Arc::clone(&self.recorder.record),
        }))
    }

    fn resume_rendering(&mut self) {
        self.recorder.record.lock().rendering = true;
    }

    fn pause_rendering(&mut self) {
        self.recorder.record.lock().rendering = false;
    }
}

struct HeadlessNode {
    record: Arc<Mutex<HeadlessRecord>>,
}

impl RotationTarget for HeadlessNode {
    fn apply_orientation(&mut self, orientation: Orientation) {
        self.record.lock().orientations.push(orientation);
    }

    fn is_selected(&self) -> bool {
        self.record.lock().selected
    }
}

/// Loader that resolves every source immediately, or fails every time.
#[derive(Debug, Default)]
pub struct HeadlessLoader {
    failure: Option<String>,
    loads: AtomicUsize,
}

impl HeadlessLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of load attempts seen so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ModelLoader for HeadlessLoader {
    fn load(&self, source: &str) -> Result<Model> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(reason) => Err(TurntableError::ModelLoadFailed(format!("{source}: {reason}"))),
            None => Ok(Model::new(source)),
        }
    }
}
