//! Background readiness poller.
//!
//! The probe runs on a worker thread. The ready event is handed back over a
//! channel and picked up on the control thread with
//! [`ReadinessPoller::take_ready`].

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::debug;
use parking_lot::{Condvar, Mutex};

use crate::{
    core::types::ReadinessState,
    error::{Result, TurntableError},
    host::ReadinessProbe,
    readiness::ReadinessGate,
};

/// Emitted once, when the probe first reports ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyEvent {
    /// Samples taken, including the successful one.
    pub samples: usize,
    /// Time from start to the successful sample.
    pub elapsed: Duration,
}

struct Shared {
    gate: Mutex<ReadinessGate>,
    wake: Condvar,
}

/// Samples a [`ReadinessProbe`] every `interval` until it reports ready or
/// the poller is cancelled. Dropping the poller cancels it.
pub struct ReadinessPoller {
    shared: Arc<Shared>,
    receiver: Receiver<ReadyEvent>,
    delivered: bool,
    interval: Duration,
}

impl ReadinessPoller {
    /// Spawns the sampling thread. The first sample is taken one interval after start.
    pub fn start(probe: ReadinessProbe, interval: Duration) -> Self {
        let shared = Arc::new(Shared {
            gate: Mutex::new(ReadinessGate::new()),
            wake: Condvar::new(),
        });
        let (sender, receiver) = channel();
        let worker_shared = Arc::clone(&shared);
        debug!("readiness polling started every {interval:?}");
        thread::spawn(move || sample_until_terminal(worker_shared, probe, interval, sender));

        Self {
            shared,
            receiver,
            delivered: false,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> ReadinessState {
        self.shared.gate.lock().state()
    }

    pub fn samples(&self) -> usize {
        self.shared.gate.lock().samples()
    }

    /// Stops sampling. Safe to call repeatedly or after readiness.
    pub fn cancel(&self) {
        let mut gate = self.shared.gate.lock();
        if gate.cancel() {
            self.shared.wake.notify_all();
        }
    }

    /// Returns the ready event the first time it is available, `None` otherwise.
    pub fn take_ready(&mut self) -> Option<ReadyEvent> {
        if self.delivered {
            return None;
        }
        let event = self.receiver.try_recv().ok()?;
        self.delivered = true;
        Some(event)
    }

    /// Blocking variant of [`ReadinessPoller::take_ready`].
    pub fn wait_ready(&mut self, timeout: Duration) -> Option<ReadyEvent> {
        if self.delivered {
            return None;
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.delivered = true;
                Some(event)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl Drop for ReadinessPoller {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn sample_until_terminal(
    shared: Arc<Shared>,
    mut probe: ReadinessProbe,
    interval: Duration,
    sender: Sender<ReadyEvent>,
) {
    let started = Instant::now();
    let mut next_sample = started + interval;

    loop {
        {
            let mut gate = shared.gate.lock();
            while !gate.state().is_terminal() && Instant::now() < next_sample {
                shared.wake.wait_until(&mut gate, next_sample);
            }
            if gate.state().is_terminal() {
                return;
            }
        }

        // The probe may block, so it runs without the lock held.
        let sample = sample_probe(&mut probe);

        let mut gate = shared.gate.lock();
        if gate.observe(sample) {
            let _ = sender.send(ReadyEvent {
                samples: gate.samples(),
                elapsed: started.elapsed(),
            });
            return;
        }
        if gate.state().is_terminal() {
            return;
        }
        next_sample += interval;
    }
}

/// A panicking probe counts as "not ready yet", like an `Err`.
fn sample_probe(probe: &mut ReadinessProbe) -> Result<bool> {
    panic::catch_unwind(AssertUnwindSafe(|| probe()))
        .unwrap_or_else(|_| Err(TurntableError::ProbeFailed("probe panicked".into())))
}
