/// Views pairing a frame index range with optional sample storage
use super::index_range::IndexRange;
use super::sample_buffer::{ReadableSlice, WritableSlice};

/// Destination of a read: the frames wanted, plus where to put them
///
/// Without a slice the view describes frames to be produced but not
/// materialized (skipping). When present, the slice holds exactly
/// `frames_to_samples(range.length())` samples.
#[derive(Debug, Default)]
pub struct WritableSampleFrames<'a> {
    frame_index_range: IndexRange,
    slice: Option<WritableSlice<'a>>,
}

impl<'a> WritableSampleFrames<'a> {
    /// Frames backed by writable storage
    pub fn new(frame_index_range: IndexRange, slice: WritableSlice<'a>) -> Self {
        Self {
            frame_index_range,
            slice: Some(slice),
        }
    }

    /// Frames without storage
    pub fn range_only(frame_index_range: IndexRange) -> Self {
        Self {
            frame_index_range,
            slice: None,
        }
    }

    /// Empty range, no storage
    pub fn empty() -> Self {
        Self::default()
    }

    /// The frames this view is meant to hold
    pub fn frame_index_range(&self) -> IndexRange {
        self.frame_index_range
    }

    /// The destination storage, if any
    pub fn writable_slice(&self) -> Option<&WritableSlice<'a>> {
        self.slice.as_ref()
    }

    /// Check if the view carries storage
    pub fn has_slice(&self) -> bool {
        self.slice.is_some()
    }

    /// Split into range and storage
    pub fn into_parts(self) -> (IndexRange, Option<WritableSlice<'a>>) {
        (self.frame_index_range, self.slice)
    }
}

/// Result of a read: the frames actually produced, plus their samples
///
/// No slice means either a skip result or, with an empty range, that
/// nothing could be read.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadableSampleFrames<'a> {
    frame_index_range: IndexRange,
    slice: Option<ReadableSlice<'a>>,
}

impl<'a> ReadableSampleFrames<'a> {
    /// Frames backed by readable storage
    pub fn new(frame_index_range: IndexRange, slice: ReadableSlice<'a>) -> Self {
        Self {
            frame_index_range,
            slice: Some(slice),
        }
    }

    /// Frames without storage
    pub fn range_only(frame_index_range: IndexRange) -> Self {
        Self {
            frame_index_range,
            slice: None,
        }
    }

    /// Empty range, no storage
    pub fn empty() -> Self {
        Self::default()
    }

    /// The frames produced
    pub fn frame_index_range(&self) -> IndexRange {
        self.frame_index_range
    }

    /// The produced samples, if materialized
    pub fn readable_slice(&self) -> Option<ReadableSlice<'a>> {
        self.slice
    }

    /// Check if no frames were produced
    pub fn is_empty(&self) -> bool {
        self.frame_index_range.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SampleBuffer;

    #[test]
    fn empty_views_have_no_storage() {
        let writable = WritableSampleFrames::empty();
        assert!(writable.frame_index_range().is_empty());
        assert!(!writable.has_slice());

        let readable = ReadableSampleFrames::empty();
        assert!(readable.is_empty());
        assert!(readable.readable_slice().is_none());
    }

    #[test]
    fn into_parts_returns_storage() {
        let mut buffer = SampleBuffer::new(4);
        let range = IndexRange::forward(10, 2);
        let frames = WritableSampleFrames::new(range, buffer.writable());
        assert_eq!(frames.writable_slice().map(WritableSlice::len), Some(4));

        let (parts_range, slice) = frames.into_parts();
        assert_eq!(parts_range, range);
        assert_eq!(slice.map(|s| s.len()), Some(4));
    }

    #[test]
    fn range_only_readable() {
        let frames = ReadableSampleFrames::range_only(IndexRange::forward(0, 3));
        assert!(!frames.is_empty());
        assert!(frames.readable_slice().is_none());
    }
}
