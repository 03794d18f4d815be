/// Sample storage and the borrowed views handed to readers
use crate::error::{FramesError, Result};

/// A single decoded sample value
pub type Sample = f32;

/// Owned, contiguous sample storage
///
/// Samples are interleaved: `[L, R, L, R, ...]` for stereo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<Sample>,
}

impl SampleBuffer {
    /// Create a zero-filled buffer holding `len` samples
    pub fn new(len: usize) -> Self {
        Self {
            samples: vec![0.0; len],
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Reset every sample to silence
    pub fn clear(&mut self) {
        self.samples.fill(0.0);
    }

    /// Writable view of the whole buffer
    pub fn writable(&mut self) -> WritableSlice<'_> {
        WritableSlice::new(&mut self.samples)
    }

    /// Writable view of `len` samples starting at `offset`
    ///
    /// # Errors
    /// Returns `FramesError::SliceOutOfBounds` if the region exceeds the buffer
    pub fn writable_slice(&mut self, offset: usize, len: usize) -> Result<WritableSlice<'_>> {
        self.writable().narrow(offset, len)
    }

    /// Read-only view of `len` samples starting at `offset`
    ///
    /// # Errors
    /// Returns `FramesError::SliceOutOfBounds` if the region exceeds the buffer
    pub fn readable_slice(&self, offset: usize, len: usize) -> Result<ReadableSlice<'_>> {
        ReadableSlice::new(&self.samples).narrow(offset, len)
    }
}

impl From<Vec<Sample>> for SampleBuffer {
    fn from(samples: Vec<Sample>) -> Self {
        Self { samples }
    }
}

fn check_bounds(offset: usize, len: usize, capacity: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(FramesError::out_of_bounds(offset, len, capacity)),
    }
}

/// Non-owning, writable view over a region of sample storage
#[derive(Debug)]
pub struct WritableSlice<'a> {
    samples: &'a mut [Sample],
}

impl<'a> WritableSlice<'a> {
    /// Wrap borrowed storage
    pub fn new(samples: &'a mut [Sample]) -> Self {
        Self { samples }
    }

    /// Number of samples in view
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the view is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The viewed samples
    pub fn as_slice(&self) -> &[Sample] {
        self.samples
    }

    /// The viewed samples, writable
    pub fn as_mut_slice(&mut self) -> &mut [Sample] {
        self.samples
    }

    /// Reposition the view onto `len` samples starting `offset` samples in
    ///
    /// The returned view borrows the same storage; nothing is copied.
    ///
    /// # Errors
    /// Returns `FramesError::SliceOutOfBounds` if the region exceeds this view
    pub fn narrow(self, offset: usize, len: usize) -> Result<Self> {
        check_bounds(offset, len, self.samples.len())?;
        let samples = self.samples;
        Ok(Self {
            samples: &mut samples[offset..offset + len],
        })
    }

    /// Give up write access, keeping the first `len` samples in view
    ///
    /// `len` is clamped to the length of this view.
    pub fn into_readable(self, len: usize) -> ReadableSlice<'a> {
        let len = len.min(self.samples.len());
        let samples: &'a [Sample] = self.samples;
        ReadableSlice::new(&samples[..len])
    }
}

/// Non-owning, read-only view over a region of sample storage
#[derive(Debug, Clone, Copy)]
pub struct ReadableSlice<'a> {
    samples: &'a [Sample],
}

impl<'a> ReadableSlice<'a> {
    /// Wrap borrowed storage
    pub fn new(samples: &'a [Sample]) -> Self {
        Self { samples }
    }

    /// Number of samples in view
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the view is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The viewed samples
    pub fn as_slice(&self) -> &'a [Sample] {
        self.samples
    }

    /// Reposition the view onto `len` samples starting `offset` samples in
    ///
    /// # Errors
    /// Returns `FramesError::SliceOutOfBounds` if the region exceeds this view
    pub fn narrow(self, offset: usize, len: usize) -> Result<Self> {
        check_bounds(offset, len, self.samples.len())?;
        Ok(Self {
            samples: &self.samples[offset..offset + len],
        })
    }
}
