/// Audio signal description
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::index_range::FrameCount;
use crate::error::{FramesError, Result};
use crate::traits::FramesToSamples;

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleRate(
    /// Frequency in Hz
    pub u32,
);

impl SampleRate {
    /// CD audio, 44.1 kHz
    pub const CD_QUALITY: Self = Self(44_100);
    /// DVD and broadcast audio, 48 kHz
    pub const DVD_QUALITY: Self = Self(48_000);
    /// High resolution, 96 kHz
    pub const HIGH_RES_96: Self = Self(96_000);

    /// Lowest supported rate
    pub const MIN: Self = Self(8_000);
    /// Highest supported rate
    pub const MAX: Self = Self(384_000);

    /// Create a new sample rate
    #[must_use]
    pub fn new(hz: u32) -> Self {
        Self(hz)
    }

    /// Get the sample rate as Hz
    pub fn as_hz(&self) -> u32 {
        self.0
    }

    /// Check if the rate is within the supported range
    pub fn is_valid(&self) -> bool {
        (Self::MIN.0..=Self::MAX.0).contains(&self.0)
    }
}

/// Maximum number of interleaved channels
pub const MAX_CHANNEL_COUNT: u16 = 32;

/// Channel layout and rate of a decoded signal
///
/// The channel count is what turns frame counts into sample counts: one
/// frame holds one sample per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalInfo {
    /// Number of interleaved channels (1 = mono, 2 = stereo, etc.)
    pub channel_count: u16,

    /// Sample rate
    pub sample_rate: SampleRate,
}

impl SignalInfo {
    /// Create a validated signal description
    ///
    /// # Errors
    /// Returns an error if the channel count or sample rate is out of range
    pub fn new(channel_count: u16, sample_rate: SampleRate) -> Result<Self> {
        let info = Self {
            channel_count,
            sample_rate,
        };
        info.validate()?;
        Ok(info)
    }

    /// Stereo at 44.1 kHz
    pub fn cd_quality() -> Self {
        Self {
            channel_count: 2,
            sample_rate: SampleRate::CD_QUALITY,
        }
    }

    /// Check channel count and sample rate
    ///
    /// # Errors
    /// Returns `InvalidChannelCount` or `InvalidSampleRate`
    pub fn validate(&self) -> Result<()> {
        if self.channel_count == 0 || self.channel_count > MAX_CHANNEL_COUNT {
            return Err(FramesError::InvalidChannelCount(self.channel_count));
        }
        if !self.sample_rate.is_valid() {
            return Err(FramesError::InvalidSampleRate(self.sample_rate.as_hz()));
        }
        Ok(())
    }

    /// Number of whole frames held by `sample_count` samples
    pub fn samples_to_frames(&self, sample_count: usize) -> FrameCount {
        sample_count / usize::from(self.channel_count.max(1))
    }

    /// Playback duration of `frame_count` frames
    pub fn frames_to_duration(&self, frame_count: FrameCount) -> Duration {
        Duration::from_secs_f64(frame_count as f64 / f64::from(self.sample_rate.as_hz()))
    }
}

impl Default for SignalInfo {
    fn default() -> Self {
        Self::cd_quality()
    }
}

impl FramesToSamples for SignalInfo {
    fn frames_to_samples(&self, frame_count: FrameCount) -> usize {
        frame_count * usize::from(self.channel_count)
    }
}
