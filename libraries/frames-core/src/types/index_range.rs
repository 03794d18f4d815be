/// Half-open ranges over frame indices
use std::fmt;

use crate::error::{FramesError, Result};

/// Ordinal position of a sample frame within a decoded timeline
pub type FrameIndex = i64;

/// Number of sample frames
pub type FrameCount = usize;

/// Immutable half-open interval `[start, end)` of frame indices
///
/// The end never lies before the start; a range whose start equals its
/// end is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IndexRange {
    start: FrameIndex,
    end: FrameIndex,
}

impl IndexRange {
    /// Create a range from its bounds
    ///
    /// # Errors
    /// Returns `FramesError::InvalidRange` if `end < start`
    pub fn new(start: FrameIndex, end: FrameIndex) -> Result<Self> {
        if end < start {
            return Err(FramesError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The empty range `[0, 0)`
    #[must_use]
    pub const fn empty() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Range of `count` frames starting at `start`
    ///
    /// The end saturates at `FrameIndex::MAX`, so a range that would run
    /// past the last representable index covers fewer than `count` frames.
    #[must_use]
    pub fn forward(start: FrameIndex, count: FrameCount) -> Self {
        let count = FrameIndex::try_from(count).unwrap_or(FrameIndex::MAX);
        let end = start.saturating_add(count);
        debug_assert!(end >= start);
        Self { start, end }
    }

    /// Range spanning the two indices, in whichever order they are given
    #[must_use]
    pub fn between(a: FrameIndex, b: FrameIndex) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// First index of the range
    pub fn start(&self) -> FrameIndex {
        self.start
    }

    /// First index after the range
    pub fn end(&self) -> FrameIndex {
        self.end
    }

    /// Number of frames covered
    ///
    /// Saturates at `FrameCount::MAX` on targets where the span does not fit.
    pub fn length(&self) -> FrameCount {
        FrameCount::try_from(self.end.abs_diff(self.start)).unwrap_or(FrameCount::MAX)
    }

    /// Check if the range covers no frames
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if `index` lies within `[start, end)`
    pub fn contains_index(&self, index: FrameIndex) -> bool {
        self.start <= index && index < self.end
    }

    /// Frames covered by both ranges
    ///
    /// Disjoint ranges produce an empty range anchored at the later start.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end).max(start);
        Self { start, end }
    }

    /// Check if every frame of this range is also covered by `other`
    ///
    /// An empty range is a subrange of any range that contains or bounds
    /// its anchor.
    pub fn is_subrange_of(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Drop up to `count` frames from the front
    #[must_use]
    pub fn shrink_front(&self, count: FrameCount) -> Self {
        let count = FrameIndex::try_from(count).unwrap_or(FrameIndex::MAX);
        let start = self.start.saturating_add(count).min(self.end);
        Self {
            start,
            end: self.end,
        }
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {})", self.start, self.end)
    }
}
