use crate::domain::model::OutputFormat;
use crate::domain::ports::{AudioOutput, AudioSink};
use crate::utils::error::{Result, TimerError};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};
use std::time::{Duration, Instant};

/// Chunks allowed to sit in the device queue before `write` waits for playback.
const MAX_QUEUED_CHUNKS: usize = 4;
const QUEUE_POLL: Duration = Duration::from_millis(10);
/// How long the queue may stand still before the device is considered stuck. Raised to a few
/// chunk lengths for very low sample rates.
const MIN_STALL_TIMEOUT: Duration = Duration::from_secs(5);

/// The system's default output device.
#[derive(Debug, Clone, Copy, Default)]
pub struct RodioOutput;

pub struct RodioSink {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
    format: OutputFormat,
    longest_chunk: Duration,
}

impl AudioOutput for RodioOutput {
    type Sink = RodioSink;

    fn open(&self, format: OutputFormat) -> Result<RodioSink> {
        if format.bits_per_sample != 16 {
            return Err(TimerError::PlaybackDeviceError {
                message: format!("unsupported sample width: {} bits", format.bits_per_sample),
            });
        }

        let (stream, handle) =
            OutputStream::try_default().map_err(|e| TimerError::PlaybackDeviceError {
                message: e.to_string(),
            })?;
        let sink = Sink::try_new(&handle).map_err(|e| TimerError::PlaybackDeviceError {
            message: e.to_string(),
        })?;

        tracing::debug!(
            "Audio output opened: {} Hz, {} channels, {}-bit",
            format.sample_rate,
            format.channels,
            format.bits_per_sample
        );

        Ok(RodioSink {
            _stream: stream,
            _handle: handle,
            sink,
            format,
            longest_chunk: Duration::ZERO,
        })
    }
}

impl RodioSink {
    fn stall_timeout(&self) -> Duration {
        MIN_STALL_TIMEOUT.max(self.longest_chunk * 4)
    }

    /// Blocks until at most `limit` chunks are queued.
    fn wait_for_queue(&self, limit: usize) -> Result<()> {
        let mut watch = StallWatch::new(self.stall_timeout(), Instant::now());
        loop {
            let queued = self.sink.len();
            if queued <= limit {
                return Ok(());
            }
            if watch.observe(queued, Instant::now()) {
                return Err(TimerError::PlaybackIoError {
                    message: format!(
                        "audio device stopped consuming samples ({} chunk(s) stuck for {:?})",
                        queued,
                        watch.timeout
                    ),
                });
            }
            std::thread::sleep(QUEUE_POLL);
        }
    }
}

impl AudioSink for RodioSink {
    fn write(&mut self, samples: &[i16]) -> Result<()> {
        if samples.len() % self.format.channels as usize != 0 {
            return Err(TimerError::PlaybackIoError {
                message: format!(
                    "{} samples do not split into {}-channel frames",
                    samples.len(),
                    self.format.channels
                ),
            });
        }

        self.wait_for_queue(MAX_QUEUED_CHUNKS - 1)?;

        let frames = samples.len() as u64 / self.format.channels.max(1) as u64;
        let chunk = Duration::from_secs_f64(frames as f64 / self.format.sample_rate.max(1) as f64);
        self.longest_chunk = self.longest_chunk.max(chunk);

        self.sink.append(SamplesBuffer::new(
            self.format.channels,
            self.format.sample_rate,
            samples.to_vec(),
        ));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.wait_for_queue(0)
    }
}

/// Tracks whether a queue length has stood still for longer than `timeout`.
#[derive(Debug)]
struct StallWatch {
    timeout: Duration,
    last_len: Option<usize>,
    since: Instant,
}

impl StallWatch {
    fn new(timeout: Duration, now: Instant) -> Self {
        Self {
            timeout,
            last_len: None,
            since: now,
        }
    }

    /// Records the current queue length; true once it has not moved for `timeout`.
    fn observe(&mut self, len: usize, now: Instant) -> bool {
        if self.last_len != Some(len) {
            self.last_len = Some(len);
            self.since = now;
            return false;
        }
        now.duration_since(self.since) >= self.timeout
    }
}
