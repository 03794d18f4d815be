//! In-memory backend over pre-decoded samples
//!
//! Seeks are quantized to a configurable block size, the way block-based
//! decoders (MP3 frames, AAC access units) only land on block boundaries.

use frames_core::{FrameCount, FrameIndex, FramesToSamples, Sample, SignalInfo};

use crate::legacy::LegacyAudioSource;

/// Where a quantized seek lands relative to the requested frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeekBias {
    /// Block boundary at or before the target
    #[default]
    Backward,
    /// Block boundary at or after the target
    Forward,
}

/// Interleaved samples held in memory, read through a cursor
#[derive(Debug, Clone)]
pub struct MemorySource {
    signal_info: SignalInfo,
    samples: Vec<Sample>,
    frame_count: FrameCount,
    seek_granularity: FrameCount,
    seek_bias: SeekBias,
    position: FrameIndex,
}

impl MemorySource {
    /// Wrap interleaved samples
    ///
    /// Trailing samples that do not fill a whole frame are ignored.
    pub fn new(signal_info: SignalInfo, samples: Vec<Sample>) -> Self {
        let frame_count = signal_info.samples_to_frames(samples.len());
        Self {
            signal_info,
            samples,
            frame_count,
            seek_granularity: 1,
            seek_bias: SeekBias::Backward,
            position: 0,
        }
    }

    /// Quantize seeks to multiples of `frames` (0 is treated as 1)
    #[must_use]
    pub fn with_seek_granularity(mut self, frames: FrameCount) -> Self {
        self.seek_granularity = frames.max(1);
        self
    }

    /// Choose which block boundary a seek lands on
    #[must_use]
    pub fn with_seek_bias(mut self, bias: SeekBias) -> Self {
        self.seek_bias = bias;
        self
    }

    /// Signal layout of the samples
    pub fn signal_info(&self) -> SignalInfo {
        self.signal_info
    }

    /// Number of whole frames held
    pub fn frame_count(&self) -> FrameCount {
        self.frame_count
    }

    /// Current cursor position
    pub fn position(&self) -> FrameIndex {
        self.position
    }

    fn quantize(&self, frame_index: FrameIndex) -> FrameIndex {
        let end = FrameIndex::try_from(self.frame_count).unwrap_or(FrameIndex::MAX);
        let target = frame_index.clamp(0, end);
        let block = FrameIndex::try_from(self.seek_granularity).unwrap_or(FrameIndex::MAX);
        let floor = target - target % block;
        let landed = match self.seek_bias {
            SeekBias::Backward => floor,
            SeekBias::Forward if floor == target => floor,
            SeekBias::Forward => floor.saturating_add(block),
        };
        landed.min(end)
    }
}

impl LegacyAudioSource for MemorySource {
    fn seek_sample_frame(&mut self, frame_index: FrameIndex) -> FrameIndex {
        self.position = self.quantize(frame_index);
        self.position
    }

    fn read_sample_frames(
        &mut self,
        frame_count: FrameCount,
        destination: Option<&mut [Sample]>,
    ) -> FrameCount {
        let position = self.position as FrameCount;
        let mut count = frame_count.min(self.frame_count.saturating_sub(position));

        if let Some(destination) = destination {
            count = count.min(self.signal_info.samples_to_frames(destination.len()));
            let start = self.signal_info.frames_to_samples(position);
            let len = self.signal_info.frames_to_samples(count);
            destination[..len].copy_from_slice(&self.samples[start..start + len]);
        }

        self.position += count as FrameIndex;
        count
    }
}
