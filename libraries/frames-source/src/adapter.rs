//! Frame-accurate reads on top of a [`LegacyAudioSource`]
//!
//! A legacy backend may land before or after the requested frame when
//! seeking. The adapter repairs the discrepancy for every read:
//!
//! ```text
//!            requested start
//!                  │
//!   seek lands ◄───┼───► seek lands
//!   earlier        │     later
//!      │           │       │
//!      ▼           ▼       ▼
//!  skip the gap ──►[ target range )
//!                          └── shrink the destination to [actual, end)
//! ```
//!
//! The result always reports exactly which frames ended up in the
//! destination.

use frames_core::{
    FrameIndex, FramesToSamples, IndexRange, ReadMode, ReadableSampleFrames, SignalInfo,
    WritableSampleFrames,
};
use tracing::{info, warn};

use crate::legacy::LegacyAudioSource;

/// Adapts a [`LegacyAudioSource`] to frame-accurate reads
///
/// Holds the backend together with the owner's signal layout, which
/// provides the frames-to-samples conversion for destination offsets.
pub struct LegacyAudioSourceAdapter<S> {
    source: S,
    signal_info: SignalInfo,
}

impl<S: LegacyAudioSource> LegacyAudioSourceAdapter<S> {
    /// Wrap a backend
    pub fn new(source: S, signal_info: SignalInfo) -> Self {
        Self {
            source,
            signal_info,
        }
    }

    /// Signal layout used for frames-to-samples conversion
    pub fn signal_info(&self) -> SignalInfo {
        self.signal_info
    }

    /// The wrapped backend
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The wrapped backend, mutable
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwrap the backend
    pub fn into_source(self) -> S {
        self.source
    }

    /// Read the frames of `writable`, starting exactly at its first frame
    ///
    /// The returned range starts where the (possibly shrunk) destination
    /// starts and spans exactly the frames the backend produced. Under
    /// [`ReadMode::Skip`] no samples are returned.
    ///
    /// An empty result without storage means nothing could be read; the
    /// caller must not advance its position assumptions in that case.
    pub fn read_sample_frames_clamped<'a>(
        &mut self,
        read_mode: ReadMode,
        writable: WritableSampleFrames<'a>,
    ) -> ReadableSampleFrames<'a> {
        let first_frame_index = writable.frame_index_range().start();

        let seek_frame_index = self.source.seek_sample_frame(first_frame_index);
        if seek_frame_index < first_frame_index {
            let preceding_frames = IndexRange::between(seek_frame_index, first_frame_index);
            info!(frames = %preceding_frames, "Skipping preceding frames");
            let skipped_count = self
                .source
                .read_sample_frames(preceding_frames.length(), None);
            if skipped_count != preceding_frames.length() {
                warn!(
                    frames = %preceding_frames,
                    skipped = skipped_count,
                    "Failed to skip preceding frames"
                );
                return ReadableSampleFrames::empty();
            }
        }
        // From here on the cursor is at or past the first requested frame
        let writable = if seek_frame_index > first_frame_index {
            self.drop_unreadable_frames(read_mode, writable, first_frame_index, seek_frame_index)
        } else {
            writable
        };

        let (frame_index_range, slice) = writable.into_parts();
        let requested_count = frame_index_range.length();
        let mut slice = if read_mode.stores_samples() {
            slice
        } else {
            None
        };

        let mut frames_read = self.source.read_sample_frames(
            requested_count,
            slice.as_mut().map(|slice| slice.as_mut_slice()),
        );
        if frames_read > requested_count {
            warn!(
                requested = requested_count,
                reported = frames_read,
                "Backend reported more frames than requested"
            );
            frames_read = requested_count;
        }

        let result_range = IndexRange::forward(frame_index_range.start(), frames_read);
        match slice {
            Some(slice) => ReadableSampleFrames::new(
                result_range,
                slice.into_readable(self.signal_info.frames_to_samples(frames_read)),
            ),
            None => ReadableSampleFrames::range_only(result_range),
        }
    }

    /// Shrink the destination after the backend landed past its start
    fn drop_unreadable_frames<'a>(
        &self,
        read_mode: ReadMode,
        writable: WritableSampleFrames<'a>,
        first_frame_index: FrameIndex,
        seek_frame_index: FrameIndex,
    ) -> WritableSampleFrames<'a> {
        let unreadable_frames = IndexRange::between(first_frame_index, seek_frame_index);
        let unreadable_count = unreadable_frames.length();
        warn!(
            frames = %unreadable_frames,
            count = unreadable_count,
            duration = ?self.signal_info.frames_to_duration(unreadable_count),
            "Dropping unreadable frames"
        );

        let frame_index_range = writable.frame_index_range();
        if !frame_index_range.contains_index(seek_frame_index) {
            return WritableSampleFrames::empty();
        }

        let remaining_frames = frame_index_range.shrink_front(unreadable_count);
        let (_, slice) = writable.into_parts();
        match slice {
            Some(slice) if read_mode.stores_samples() => {
                let offset = self.frames_to_samples(unreadable_count);
                let len = self.frames_to_samples(remaining_frames.length());
                match slice.narrow(offset, len) {
                    Ok(slice) => WritableSampleFrames::new(remaining_frames, slice),
                    Err(err) => {
                        warn!(error = %err, "Destination does not cover the remaining frames");
                        WritableSampleFrames::empty()
                    }
                }
            }
            _ => WritableSampleFrames::range_only(remaining_frames),
        }
    }
}

impl<S: LegacyAudioSource> FramesToSamples for LegacyAudioSourceAdapter<S> {
    fn frames_to_samples(&self, frame_count: usize) -> usize {
        self.signal_info.frames_to_samples(frame_count)
    }
}
