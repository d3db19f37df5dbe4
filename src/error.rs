//! Error types for slideshow scheduling and GPU probing.

use thiserror::Error;

/// Validation failures raised when constructing a slideshow definition.
///
/// These surface immediately to the caller; the scheduler never substitutes
/// a default image for malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("slideshow has no entries")]
    NoEntries,

    #[error("entry {index} references an empty filename")]
    EmptyFilename { index: usize },

    #[error("entry {index} has a negative duration")]
    NegativeDuration { index: usize },

    #[error("start time fields do not form a valid calendar date")]
    InvalidStartTime,
}

/// Failures raised while resolving a display state for an instant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Every entry has a zero duration, so the cycle never advances.
    #[error("slideshow cycle has zero total duration")]
    DegenerateCycle,
}

/// Failures raised while enumerating GPUs from the PCI bus.
#[derive(Error, Debug)]
pub enum GpuError {
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },
}
