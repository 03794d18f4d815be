//! Audio source owning a legacy backend
//!
//! The source knows its signal layout and which frames the backend can
//! deliver. Reads are clamped to that range before they reach the
//! adapter, so the adapter only ever sees requests the backend can serve.

use frames_core::{
    FrameCount, FramesToSamples, IndexRange, ReadMode, ReadableSampleFrames, SignalInfo,
    WritableSampleFrames,
};
use tracing::debug;

use crate::adapter::LegacyAudioSourceAdapter;
use crate::config::SourceConfig;
use crate::error::{Result, SourceError};
use crate::legacy::LegacyAudioSource;

/// Frame-accurate reader over a [`LegacyAudioSource`]
///
/// # Example
///
/// ```rust
/// use frames_core::{FramesToSamples, IndexRange, ReadMode, SampleBuffer, SignalInfo, WritableSampleFrames};
/// use frames_source::{AudioSource, MemorySource};
///
/// # fn example() -> frames_source::Result<()> {
/// let signal = SignalInfo::cd_quality();
/// let backend = MemorySource::new(signal, vec![0.25; 2 * 4096]).with_seek_granularity(1152);
/// let frames = IndexRange::forward(0, backend.frame_count());
/// let mut source = AudioSource::new(signal, frames, backend)?;
///
/// let range = IndexRange::forward(1000, 100);
/// let mut buffer = SampleBuffer::new(source.frames_to_samples(range.length()));
/// let target = WritableSampleFrames::new(range, buffer.writable());
///
/// let result = source.read_sample_frames(ReadMode::Normal, target)?;
/// assert_eq!(result.frame_index_range(), range);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct AudioSource<S> {
    frame_index_range: IndexRange,
    adapter: LegacyAudioSourceAdapter<S>,
}

impl<S: LegacyAudioSource> AudioSource<S> {
    /// Create a source over `backend`, readable within `frame_index_range`
    ///
    /// # Errors
    /// Returns an error if the signal info is invalid
    pub fn new(signal_info: SignalInfo, frame_index_range: IndexRange, backend: S) -> Result<Self> {
        signal_info.validate()?;
        Ok(Self {
            frame_index_range,
            adapter: LegacyAudioSourceAdapter::new(backend, signal_info),
        })
    }

    /// Create a source with the signal layout from `config`
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid
    pub fn from_config(
        config: &SourceConfig,
        frame_index_range: IndexRange,
        backend: S,
    ) -> Result<Self> {
        config.validate()?;
        Self::new(config.signal_info(), frame_index_range, backend)
    }

    /// Signal layout
    pub fn signal_info(&self) -> SignalInfo {
        self.adapter.signal_info()
    }

    /// Frames the backend can deliver
    pub fn frame_index_range(&self) -> IndexRange {
        self.frame_index_range
    }

    /// The backend
    pub fn backend(&self) -> &S {
        self.adapter.source()
    }

    /// The backend, mutable
    pub fn backend_mut(&mut self) -> &mut S {
        self.adapter.source_mut()
    }

    /// Unwrap the backend
    pub fn into_backend(self) -> S {
        self.adapter.into_source()
    }

    /// Read the frames of `writable` that lie within this source
    ///
    /// Frames outside [`frame_index_range`](Self::frame_index_range) are
    /// never requested from the backend. The result may start later and end
    /// earlier than the request; the caller's storage is aliased at the
    /// matching offset.
    ///
    /// # Errors
    /// Returns `SliceLengthMismatch` if the destination does not hold exactly
    /// the samples of the requested frames
    pub fn read_sample_frames<'a>(
        &mut self,
        read_mode: ReadMode,
        writable: WritableSampleFrames<'a>,
    ) -> Result<ReadableSampleFrames<'a>> {
        let requested = writable.frame_index_range();
        if let Some(slice) = writable.writable_slice() {
            let expected = self.frames_to_samples(requested.length());
            if slice.len() != expected {
                return Err(SourceError::SliceLengthMismatch {
                    expected,
                    actual: slice.len(),
                });
            }
        }

        let clamped = self.frame_index_range.intersect(&requested);
        if clamped.is_empty() {
            debug!(
                requested = %requested,
                available = %self.frame_index_range,
                "Requested frames lie outside of the source"
            );
            return Ok(ReadableSampleFrames::range_only(clamped));
        }

        let writable = if clamped == requested {
            writable
        } else {
            debug!(requested = %requested, clamped = %clamped, "Clamping read to source");
            self.clamp_writable(writable, clamped)?
        };

        let result = self.adapter.read_sample_frames_clamped(read_mode, writable);
        let delivered = result.frame_index_range();
        if delivered.length() < clamped.length() {
            debug!(
                requested = %clamped,
                delivered = %delivered,
                "Backend delivered fewer frames than requested"
            );
        }
        Ok(result)
    }

    /// Skip the frames of `frame_index_range` that lie within this source
    ///
    /// Returns the frames the backend actually moved past.
    pub fn skip_sample_frames(&mut self, frame_index_range: IndexRange) -> Result<IndexRange> {
        let result = self.read_sample_frames(
            ReadMode::Skip,
            WritableSampleFrames::range_only(frame_index_range),
        )?;
        Ok(result.frame_index_range())
    }

    fn clamp_writable<'a>(
        &self,
        writable: WritableSampleFrames<'a>,
        clamped: IndexRange,
    ) -> Result<WritableSampleFrames<'a>> {
        let (requested, slice) = writable.into_parts();
        match slice {
            Some(slice) => {
                let leading = IndexRange::between(requested.start(), clamped.start()).length();
                let slice = slice.narrow(
                    self.frames_to_samples(leading),
                    self.frames_to_samples(clamped.length()),
                )?;
                Ok(WritableSampleFrames::new(clamped, slice))
            }
            None => Ok(WritableSampleFrames::range_only(clamped)),
        }
    }
}

impl<S: LegacyAudioSource> FramesToSamples for AudioSource<S> {
    fn frames_to_samples(&self, frame_count: FrameCount) -> usize {
        self.adapter.frames_to_samples(frame_count)
    }
}
