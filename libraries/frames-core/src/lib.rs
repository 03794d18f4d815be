//! Frames Core
//!
//! Value types shared by every frame-accurate reader.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Index ranges**: `IndexRange`, a half-open `[start, end)` interval of frame indices
//! - **Sample views**: `SampleBuffer` storage with borrowed `WritableSlice` / `ReadableSlice` views
//! - **Sample frames**: `WritableSampleFrames` (read destination) and `ReadableSampleFrames` (read result)
//! - **Signal layout**: `SignalInfo` and the `FramesToSamples` conversion trait
//! - **Error Handling**: `FramesError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use frames_core::{FramesToSamples, IndexRange, SampleBuffer, SignalInfo, WritableSampleFrames};
//!
//! let signal = SignalInfo::cd_quality();
//! let range = IndexRange::forward(1000, 100);
//!
//! // Storage for 100 stereo frames
//! let mut buffer = SampleBuffer::new(signal.frames_to_samples(range.length()));
//! let target = WritableSampleFrames::new(range, buffer.writable());
//!
//! assert_eq!(target.frame_index_range().length(), 100);
//! assert!(range.contains_index(1099));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Error types
pub mod error;
/// Cross-crate traits
pub mod traits;
/// Frame ranges, sample views and signal description
pub mod types;

// Re-export commonly used types
pub use error::{FramesError, Result};
pub use traits::FramesToSamples;

pub use types::{
    // Frame indexing
    FrameCount, FrameIndex, IndexRange,
    // Sample storage
    ReadableSlice, Sample, SampleBuffer, WritableSlice,
    // Views
    ReadableSampleFrames, WritableSampleFrames,
    // Signal
    ReadMode, SampleRate, SignalInfo, MAX_CHANNEL_COUNT,
};
