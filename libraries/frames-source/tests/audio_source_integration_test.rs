//! Integration tests for `AudioSource`
//!
//! Streams whole sources in chunks through block-quantized backends and
//! checks the reassembled samples against the source data.


use frames_core::{
    FrameIndex, FramesToSamples, IndexRange, ReadMode, SampleBuffer, SignalInfo,
    WritableSampleFrames,
};
use frames_source::{AudioSource, MemorySource, SeekBias, SourceConfig, SourceError};
use test_helpers::{init_logging, is_ramp_from, ramp_samples, stereo};

/// MP3 frame size in sample frames
const MP3_FRAME: usize = 1152;

fn ramp_source(signal: SignalInfo, frames: usize, granularity: usize) -> AudioSource<MemorySource> {
    init_logging();
    let backend =
        MemorySource::new(signal, ramp_samples(signal, frames)).with_seek_granularity(granularity);
    AudioSource::new(signal, IndexRange::forward(0, frames), backend).unwrap()
}

/// Read `range` chunk by chunk and concatenate the delivered samples
fn read_in_chunks<S: frames_source::LegacyAudioSource>(
    source: &mut AudioSource<S>,
    range: IndexRange,
    chunk: usize,
) -> Vec<f32> {
    let mut output = Vec::new();
    let mut position = range.start();
    while position < range.end() {
        let remaining = (range.end() - position) as usize;
        let requested = IndexRange::forward(position, chunk.min(remaining));
        let mut buffer = SampleBuffer::new(source.frames_to_samples(requested.length()));
        let target = WritableSampleFrames::new(requested, buffer.writable());

        let result = source.read_sample_frames(ReadMode::Normal, target).unwrap();
        assert_eq!(result.frame_index_range(), requested);
        let slice = result.readable_slice().expect("samples stored");
        output.extend_from_slice(slice.as_slice());
        position = result.frame_index_range().end();
    }
    output
}

// ============================================================================
// SEQUENTIAL READS
// ============================================================================

#[test]
fn chunked_reads_reproduce_source() {
    let signal = stereo();
    let mut source = ramp_source(signal, 10_000, MP3_FRAME);
    let whole = source.frame_index_range();

    let samples = read_in_chunks(&mut source, whole, 333);

    assert_eq!(samples.len(), source.frames_to_samples(10_000));
    assert!(is_ramp_from(&samples, 0, signal));
}

#[test]
fn chunked_reads_from_mid_stream() {
    let signal = stereo();
    let mut source = ramp_source(signal, 10_000, 1024);

    let samples = read_in_chunks(&mut source, IndexRange::between(4321, 7777), 500);

    assert_eq!(samples.len(), source.frames_to_samples(7777 - 4321));
    assert!(is_ramp_from(&samples, 4321, signal));
}

#[test]
fn random_access_reads_are_exact() {
    let signal = stereo();
    let mut source = ramp_source(signal, 20_000, MP3_FRAME);

    // Jump backwards and forwards across block boundaries
    for start in [15_000, 100, 9_999, 1151, 1152, 19_900, 0] {
        let requested = IndexRange::forward(start, 100);
        let mut buffer = SampleBuffer::new(source.frames_to_samples(100));
        let target = WritableSampleFrames::new(requested, buffer.writable());

        let result = source.read_sample_frames(ReadMode::Normal, target).unwrap();

        assert_eq!(result.frame_index_range(), requested, "start {start}");
        let slice = result.readable_slice().unwrap();
        assert!(
            is_ramp_from(slice.as_slice(), start, signal),
            "start {start}"
        );
    }
}

#[test]
fn skip_then_read_continues_at_skipped_end() {
    let signal = stereo();
    let mut source = ramp_source(signal, 5_000, 1024);

    let skipped = source
        .skip_sample_frames(IndexRange::between(0, 2500))
        .unwrap();
    assert_eq!(skipped, IndexRange::between(0, 2500));
    assert_eq!(source.backend().position(), 2500);

    let samples = read_in_chunks(&mut source, IndexRange::between(2500, 3000), 128);
    assert!(is_ramp_from(&samples, 2500, signal));
}

// ============================================================================
// CLAMPING TO THE SOURCE RANGE
// ============================================================================

#[test]
fn read_across_end_of_source_is_clamped() {
    let signal = stereo();
    let mut source = ramp_source(signal, 1_000, 256);
    let mut buffer = SampleBuffer::new(source.frames_to_samples(200));
    let target = WritableSampleFrames::new(IndexRange::forward(900, 200), buffer.writable());

    let result = source.read_sample_frames(ReadMode::Normal, target).unwrap();

    assert_eq!(result.frame_index_range(), IndexRange::between(900, 1000));
    assert!(is_ramp_from(&buffer.as_slice()[..200], 900, signal));
    assert!(buffer.as_slice()[200..].iter().all(|&s| s == 0.0));
}

#[test]
fn source_range_narrower_than_backend_data() {
    init_logging();
    let signal = stereo();
    let backend = MemorySource::new(signal, ramp_samples(signal, 4096)).with_seek_granularity(512);
    let frames = IndexRange::between(1000, 2000);
    let mut source = AudioSource::new(signal, frames, backend).unwrap();
    let mut buffer = SampleBuffer::new(source.frames_to_samples(400));
    let target = WritableSampleFrames::new(IndexRange::forward(800, 400), buffer.writable());

    let result = source.read_sample_frames(ReadMode::Normal, target).unwrap();

    assert_eq!(result.frame_index_range(), IndexRange::between(1000, 1200));
    let slice = result.readable_slice().unwrap();
    assert!(is_ramp_from(slice.as_slice(), 1000, signal));
    // Leading frames before the source range are left untouched
    assert!(buffer.as_slice()[..400].iter().all(|&s| s == 0.0));
}

#[test]
fn forward_biased_backend_loses_leading_frames() {
    init_logging();
    let signal = stereo();
    let backend = MemorySource::new(signal, ramp_samples(signal, 4096))
        .with_seek_granularity(1024)
        .with_seek_bias(SeekBias::Forward);
    let mut source = AudioSource::new(signal, IndexRange::forward(0, 4096), backend).unwrap();
    let mut buffer = SampleBuffer::new(source.frames_to_samples(200));
    let target = WritableSampleFrames::new(IndexRange::forward(1000, 200), buffer.writable());

    let result = source.read_sample_frames(ReadMode::Normal, target).unwrap();

    assert_eq!(result.frame_index_range(), IndexRange::between(1024, 1200));
    let slice = result.readable_slice().unwrap();
    assert!(is_ramp_from(slice.as_slice(), 1024, signal));
}

#[test]
fn mismatched_destination_is_rejected_before_seeking() {
    let signal = stereo();
    let mut source = ramp_source(signal, 1_000, 1);
    let mut buffer = SampleBuffer::new(99);
    let target = WritableSampleFrames::new(IndexRange::forward(500, 50), buffer.writable());

    let err = source
        .read_sample_frames(ReadMode::Normal, target)
        .unwrap_err();

    assert!(matches!(
        err,
        SourceError::SliceLengthMismatch {
            expected: 100,
            actual: 99
        }
    ));
    assert_eq!(source.backend().position(), 0);
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn from_config_uses_configured_layout() {
    init_logging();
    let config = SourceConfig {
        channel_count: 1,
        sample_rate: 48_000,
    };
    let signal = config.signal_info();
    let backend = MemorySource::new(signal, ramp_samples(signal, 256));
    let mut source =
        AudioSource::from_config(&config, IndexRange::forward(0, 256), backend).unwrap();

    assert_eq!(source.signal_info().channel_count, 1);
    assert_eq!(source.frames_to_samples(10), 10);

    let samples = read_in_chunks(&mut source, IndexRange::between(10, 20), 4);
    let expected: Vec<f32> = (10..20).map(|i: FrameIndex| i as f32).collect();
    assert_eq!(samples, expected);
}

#[test]
fn from_config_rejects_invalid_layout() {
    let config = SourceConfig {
        channel_count: 2,
        sample_rate: 1_000,
    };
    let backend = MemorySource::new(stereo(), Vec::new());

    let err = AudioSource::from_config(&config, IndexRange::empty(), backend)
        .err()
        .unwrap();

    assert!(matches!(err, SourceError::Config(_)));
}
