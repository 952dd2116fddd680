//! Error types for the Turntable viewer.
//!
//! This module provides a unified error type [`TurntableError`] and a convenient [`Result`] alias.

use std::fmt;

/// Main error type for the viewer.
///
/// None of these are fatal: the view logs them and keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurntableError {
    /// The readiness probe could not be evaluated yet.
    ProbeFailed(String),
    /// The model could not be loaded or built.
    ModelLoadFailed(String),
    /// The host refused to place the model in the scene.
    PlacementFailed(String),
    /// The background loader went away without reporting a result.
    LoaderDisconnected(String),
}

impl fmt::Display for TurntableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ProbeFailed(msg) => write!(f, "Readiness probe failed: {msg}"),
            Self::ModelLoadFailed(msg) => write!(f, "Model load failed: {msg}"),
            Self::PlacementFailed(msg) => write!(f, "Model placement failed: {msg}"),
            Self::LoaderDisconnected(msg) => write!(f, "Model loader disconnected: {msg}"),
        }
    }
}

impl std::error::Error for TurntableError {}

/// Convenient Result type alias for viewer operations.
pub type Result<T> = std::result::Result<T, TurntableError>;
