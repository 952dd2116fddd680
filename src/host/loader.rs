//! Background model loading, polled from the control thread.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use log::{debug, trace};

use crate::{
    core::types::Model,
    error::{Result, TurntableError},
    host::ModelLoader,
};

/// A model load running on a worker thread.
pub struct PendingLoad {
    source: String,
    receiver: Receiver<Result<Model>>,
    finished: bool,
}

impl PendingLoad {
    /// Starts loading `source` with `loader` on a new thread.
    pub fn spawn(loader: Arc<dyn ModelLoader>, source: impl Into<String>) -> Self {
        let source = source.into();
        let (sender, receiver) = channel();
        let worker_source = source.clone();
        debug!("loading model '{source}'");
        thread::spawn(move || {
            let result = loader.load(&worker_source);
            // The view may have been torn down meanwhile.
            let _ = sender.send(result);
        });
        Self {
            source,
            receiver,
            finished: false,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the load result once; `None` while still loading or after the
    /// result was taken.
    pub fn poll(&mut self) -> Option<Result<Model>> {
        if self.finished {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => {
                self.finished = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => {
                trace!("model '{}' still loading", self.source);
                None
            }
            Err(TryRecvError::Disconnected) => {
                self.finished = true;
                Some(Err(TurntableError::LoaderDisconnected(self.source.clone())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    struct PanickingLoader;

    impl ModelLoader for PanickingLoader {
        fn load(&self, _source: &str) -> Result<Model> {
            panic!("loader crashed");
        }
    }

    struct EchoLoader;

    impl ModelLoader for EchoLoader {
        fn load(&self, source: &str) -> Result<Model> {
            Ok(Model::new(source))
        }
    }

    fn wait(load: &mut PendingLoad) -> Result<Model> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(result) = load.poll() {
                return result;
            }
            assert!(Instant::now() < deadline, "load never finished");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn result_is_delivered_once() {
        let mut load = PendingLoad::spawn(Arc::new(EchoLoader), "card.sfb");
        let model = wait(&mut load).expect("load should succeed");
        assert_eq!(model.source, "card.sfb");
        assert!(load.is_finished());
        assert!(load.poll().is_none());
    }

    #[test]
    fn dead_worker_reports_disconnect() {
        let mut load = PendingLoad::spawn(Arc::new(PanickingLoader), "card.sfb");
        assert_eq!(
            wait(&mut load),
            Err(TurntableError::LoaderDisconnected("card.sfb".into()))
        );
    }
}
