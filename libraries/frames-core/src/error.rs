/// Core error types for frame-accurate reads
use thiserror::Error;

use crate::types::FrameIndex;

/// Result type alias using `FramesError`
pub type Result<T> = std::result::Result<T, FramesError>;

/// Errors raised while constructing ranges, views and signal descriptions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FramesError {
    /// Range end lies before its start
    #[error("Invalid index range: end {end} is before start {start}")]
    InvalidRange {
        /// Requested start
        start: FrameIndex,
        /// Requested end
        end: FrameIndex,
    },

    /// Requested sub-slice does not fit into the backing storage
    #[error("Slice out of bounds: offset {offset} + length {len} exceeds capacity {capacity}")]
    SliceOutOfBounds {
        /// Requested offset in samples
        offset: usize,
        /// Requested length in samples
        len: usize,
        /// Samples available in the viewed storage
        capacity: usize,
    },

    /// Invalid channel count
    #[error("Invalid channel count: {0} (must be 1-32)")]
    InvalidChannelCount(u16),

    /// Invalid sample rate
    #[error("Invalid sample rate: {0} Hz (must be between 8000 and 384000)")]
    InvalidSampleRate(u32),

    /// Unrecognized read mode string
    #[error("Invalid read mode: {0}")]
    InvalidReadMode(String),
}

impl FramesError {
    /// Create an out-of-bounds error for a slice request
    pub fn out_of_bounds(offset: usize, len: usize, capacity: usize) -> Self {
        Self::SliceOutOfBounds {
            offset,
            len,
            capacity,
        }
    }
}
