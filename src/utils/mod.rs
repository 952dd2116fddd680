//! Utility helpers for timing and logging.

pub mod logging;

pub use logging::{ScopedTimer, warn_if_frame_budget_exceeded};
