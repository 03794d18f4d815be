mod audio;
mod index_range;
mod read_mode;
mod sample_buffer;
mod sample_frames;

pub use audio::{SampleRate, SignalInfo, MAX_CHANNEL_COUNT};
pub use index_range::{FrameCount, FrameIndex, IndexRange};
pub use read_mode::ReadMode;
pub use sample_buffer::{ReadableSlice, Sample, SampleBuffer, WritableSlice};
pub use sample_frames::{ReadableSampleFrames, WritableSampleFrames};
