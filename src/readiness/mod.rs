//! Readiness gating for scene setup.
//!
//! [`ReadinessGate`] is the bare state machine. [`ReadinessPoller`] drives it
//! from a background thread at a fixed interval.

pub mod poller;

pub use poller::{ReadinessPoller, ReadyEvent};

use log::{debug, trace};

use crate::{core::types::ReadinessState, error::Result};

/// Polling → Ready or Polling → Cancelled, nothing else.
#[derive(Debug, Default, Clone)]
pub struct ReadinessGate {
    state: ReadinessState,
    samples: usize,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ReadinessState {
        self.state
    }

    /// Probe samples taken while polling.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Feeds one probe sample. Returns `true` only for the sample that made
    /// the gate ready. Errors count as "not ready yet".
    pub fn observe(&mut self, sample: Result<bool>) -> bool {
        if self.state.is_terminal() {
            trace!("readiness sample after {:?} ignored", self.state);
            return false;
        }
        self.samples += 1;
        match sample {
            Ok(true) => {
                debug!("readiness reached after {} samples", self.samples);
                self.state = ReadinessState::Ready;
                true
            }
            Ok(false) => false,
            Err(err) => {
                trace!("readiness sample {} failed: {err}", self.samples);
                false
            }
        }
    }

    /// Returns `true` if this call cancelled a polling gate.
    pub fn cancel(&mut self) -> bool {
        if self.state != ReadinessState::Polling {
            return false;
        }
        debug!("readiness polling cancelled after {} samples", self.samples);
        self.state = ReadinessState::Cancelled;
        true
    }
}
