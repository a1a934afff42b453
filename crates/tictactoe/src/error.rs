//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// A board index outside 0-8.
#[derive(Debug, Clone, Display, Error)]
#[display("Position error: {} at {}:{}", message, file, line)]
pub struct PositionError {
    /// Error message.
    pub message: String,
    /// Offending index.
    pub index: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PositionError {
    /// Creates a new position error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(index: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: format!("index {index} is out of bounds (must be 0-8)"),
            index,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
