//! Turntable – drag-to-rotate viewer core.
//!
//! This crate drives a single displayed model that spins on its own while
//! idle and follows horizontal drags while touched. Scene setup waits for a
//! host readiness probe, polled on a background thread. Rendering, model
//! decoding and hit testing stay in the host, reached through the traits in
//! [`host`].

pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod readiness;
pub mod utils;
pub mod view;

pub use glam::{Quat, Vec3};

pub use config::SceneConfig;
pub use crate::core::{
    clock::{AnimationClock, AnimationCycle, RampDelta},
    controller::DragRotationController,
    gesture::{DragGestureRecognizer, GestureEvent},
    types::{
        CameraSettings, ClockState, ControllerMode, LightingSettings, Model, Orientation,
        Placement, ReadinessState,
    },
};
pub use error::{Result, TurntableError};
pub use host::{
    HeadlessHost, HeadlessLoader, HeadlessRecorder, ModelLoader, ReadinessProbe, RotationTarget,
    SceneHost,
};
pub use readiness::{ReadinessGate, ReadinessPoller, ReadyEvent};
pub use view::{CardController, CardView};
