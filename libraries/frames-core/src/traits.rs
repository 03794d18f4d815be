/// Core traits for frame-accurate reads
use crate::types::FrameCount;

/// Channel-aware conversion from frames to samples
///
/// Implemented by whatever owns the signal layout. Readers use it whenever
/// a frame index range must become an offset or length in sample storage.
pub trait FramesToSamples {
    /// Number of samples occupied by `frame_count` frames
    fn frames_to_samples(&self, frame_count: FrameCount) -> usize;
}

impl<T: FramesToSamples + ?Sized> FramesToSamples for &T {
    fn frames_to_samples(&self, frame_count: FrameCount) -> usize {
        (**self).frames_to_samples(frame_count)
    }
}
