//! Frames Source
//!
//! Frame-accurate reads on top of decoding backends whose seeking is only
//! approximate.
//!
//! This crate provides:
//! - The `LegacyAudioSource` backend trait (seek + read primitives)
//! - `LegacyAudioSourceAdapter`, which repairs seek discrepancies so every
//!   read starts exactly at the requested frame
//! - `AudioSource`, which clamps reads to the frames a source can deliver
//! - `MemorySource`, an in-memory backend with block-quantized seeking
//! - `SourceConfig`, the signal layout a source is opened with
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────────────┐     ┌───────────────────┐
//! │ AudioSource  │ ──► │ LegacyAudioSource-  │ ──► │ LegacyAudioSource │
//! │ (clamping)   │     │ Adapter (seek fixup)│     │ (backend)         │
//! └──────────────┘     └─────────────────────┘     └───────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use frames_core::{IndexRange, ReadMode, SignalInfo, WritableSampleFrames};
//! use frames_source::{LegacyAudioSourceAdapter, MemorySource};
//!
//! let signal = SignalInfo::cd_quality();
//! let backend = MemorySource::new(signal, vec![0.0; 2 * 2048]).with_seek_granularity(1024);
//! let mut adapter = LegacyAudioSourceAdapter::new(backend, signal);
//!
//! // Seeking lands on frame 1024; the adapter skips ahead to 1500
//! let target = WritableSampleFrames::range_only(IndexRange::forward(1500, 100));
//! let result = adapter.read_sample_frames_clamped(ReadMode::Skip, target);
//!
//! assert_eq!(result.frame_index_range(), IndexRange::forward(1500, 100));
//! assert_eq!(adapter.source().position(), 1600);
//! ```

#![forbid(unsafe_code)]

mod adapter;
mod audio_source;
pub mod config;
mod error;
mod legacy;
mod memory;

pub use adapter::LegacyAudioSourceAdapter;
pub use audio_source::AudioSource;
pub use config::SourceConfig;
pub use error::{Result, SourceError};
pub use legacy::LegacyAudioSource;
pub use memory::{MemorySource, SeekBias};
