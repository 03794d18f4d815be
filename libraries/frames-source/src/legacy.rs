//! Backend capability trait
//!
//! Legacy decoding backends only offer approximate positioning: a seek may
//! land on a block boundary before or after the requested frame. The
//! adapter in [`crate::adapter`] turns these two primitives into
//! frame-accurate reads.

use frames_core::{FrameCount, FrameIndex, Sample};

/// Decoding backend with imprecise seeking
///
/// Backends keep an internal read cursor and are not reentrant; callers
/// need exclusive access for the duration of a seek + read sequence,
/// which `&mut self` enforces.
pub trait LegacyAudioSource: Send {
    /// Position the read cursor near `frame_index`
    ///
    /// Returns the frame index actually reached, which may lie before or
    /// after the requested one depending on the backend's seek granularity.
    fn seek_sample_frame(&mut self, frame_index: FrameIndex) -> FrameIndex;

    /// Decode up to `frame_count` frames at the cursor
    ///
    /// Samples are written interleaved into `destination` when given;
    /// `None` discards the decoded frames. Returns the number of frames
    /// actually produced and advances the cursor by that amount.
    fn read_sample_frames(
        &mut self,
        frame_count: FrameCount,
        destination: Option<&mut [Sample]>,
    ) -> FrameCount;
}

impl<T: LegacyAudioSource + ?Sized> LegacyAudioSource for Box<T> {
    fn seek_sample_frame(&mut self, frame_index: FrameIndex) -> FrameIndex {
        (**self).seek_sample_frame(frame_index)
    }

    fn read_sample_frames(
        &mut self,
        frame_count: FrameCount,
        destination: Option<&mut [Sample]>,
    ) -> FrameCount {
        (**self).read_sample_frames(frame_count, destination)
    }
}

impl<T: LegacyAudioSource + ?Sized> LegacyAudioSource for &mut T {
    fn seek_sample_frame(&mut self, frame_index: FrameIndex) -> FrameIndex {
        (**self).seek_sample_frame(frame_index)
    }

    fn read_sample_frames(
        &mut self,
        frame_count: FrameCount,
        destination: Option<&mut [Sample]>,
    ) -> FrameCount {
        (**self).read_sample_frames(frame_count, destination)
    }
}
