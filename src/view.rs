use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, error, info};

use crate::{
    config::SceneConfig,
    core::{
        controller::DragRotationController,
        gesture::{DragGestureRecognizer, GestureEvent},
        types::{Model, ReadinessState},
    },
    host::{ModelLoader, PendingLoad, RotationTarget, SceneHost},
    readiness::{ReadinessPoller, ReadyEvent},
    utils::logging::{ScopedTimer, warn_if_frame_budget_exceeded},
};

/// Controller type the view creates for its placed node.
pub type CardController = DragRotationController<Box<dyn RotationTarget>>;

/// Owning view for a single spinning model.
///
/// Waits for the host to become ready, configures the scene once, loads and
/// places the model, then forwards frame time, gestures and lifecycle calls to
/// the rotation controller. All methods must be called from the same control
/// thread.
pub struct CardView<H: SceneHost> {
    host: H,
    loader: Arc<dyn ModelLoader>,
    config: SceneConfig,
    poller: Option<ReadinessPoller>,
    scene_configured: bool,
    pending_load: Option<PendingLoad>,
    controller: Option<CardController>,
    gestures: DragGestureRecognizer,
    attached: bool,
}

impl<H: SceneHost> CardView<H> {
    /// Creates the view and starts polling the host for readiness.
    pub fn new(mut host: H, loader: Arc<dyn ModelLoader>, config: SceneConfig) -> Self {
        let probe = host.readiness_probe();
        let poller = ReadinessPoller::start(probe, config.poll_interval);
        info!("card view created on '{}' host", host.name());

        Self {
            host,
            loader,
            config,
            poller: Some(poller),
            scene_configured: false,
            pending_load: None,
            controller: None,
            gestures: DragGestureRecognizer::new(),
            attached: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn controller(&self) -> Option<&CardController> {
        self.controller.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_scene_configured(&self) -> bool {
        self.scene_configured
    }

    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// `None` once the poller has been torn down.
    pub fn readiness_state(&self) -> Option<ReadinessState> {
        self.poller.as_ref().map(ReadinessPoller::state)
    }

    /// Per-frame update on the control thread.
    pub fn update(&mut self, dt: Duration) {
        let frame_start = Instant::now();

        if let Some(event) = self.poller.as_mut().and_then(ReadinessPoller::take_ready) {
            self.on_ready(event);
        }

        self.poll_load();

        if let Some(controller) = self.controller.as_mut() {
            controller.advance(dt);
        }

        warn_if_frame_budget_exceeded(frame_start.elapsed(), self.config.frame_budget_ms);
    }

    /// Routes a host drag event. Returns `true` if the controller handled it.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> bool {
        match self.controller.as_mut() {
            Some(controller) => self.gestures.dispatch(controller, event),
            None => false,
        }
    }

    pub fn on_attached(&mut self) {
        self.attached = true;
        self.host.resume_rendering();
        if let Some(controller) = self.controller.as_mut() {
            controller.on_resume();
        }
    }

    /// Pauses rendering and rotation and tears the readiness poller down.
    pub fn on_detached(&mut self) {
        self.attached = false;
        self.host.pause_rendering();
        if let Some(controller) = self.controller.as_mut() {
            controller.on_pause();
        }
        if let Some(poller) = self.poller.take() {
            poller.cancel();
        }
    }

    fn on_ready(&mut self, event: ReadyEvent) {
        if self.scene_configured {
            return;
        }
        debug!(
            "host ready after {} samples ({:?})",
            event.samples, event.elapsed
        );
        {
            let _timer = ScopedTimer::new("scene setup");
            self.host.configure_camera(&self.config.camera);
            self.host.configure_lighting(&self.config.lighting);
        }
        self.scene_configured = true;
        self.pending_load = Some(PendingLoad::spawn(
            Arc::clone(&self.loader),
            self.config.model_source.clone(),
        ));
    }

    fn poll_load(&mut self) {
        let Some(result) = self.pending_load.as_mut().and_then(PendingLoad::poll) else {
            return;
        };
        self.pending_load = None;
        match result {
            Ok(model) => self.place(model),
            Err(err) => error!("{err}"),
        }
    }

    fn place(&mut self, model: Model) {
        let source = model.source.clone();
        let node = match self.host.place(model, &self.config.placement) {
            Ok(node) => node,
            Err(err) => {
                error!("{err}");
                return;
            }
        };

        let mut controller = DragRotationController::from_config(node, &self.config);
        if self.attached {
            controller.on_resume();
        } else {
            controller.on_pause();
        }
        debug!("model '{source}' placed, attached = {}", self.attached);
        self.controller = Some(controller);
    }
}
