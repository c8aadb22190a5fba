use crate::adapters::decoder::SoundDecoder;
use crate::domain::model::OutputFormat;
use crate::domain::ports::{AudioOutput, AudioSink};
use crate::utils::error::{Result, TimerError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 8192 bytes of 16-bit samples per copy.
pub const COPY_CHUNK_SAMPLES: usize = 4096;

pub struct NotificationPlayer<O: AudioOutput> {
    output: O,
}

impl<O: AudioOutput> NotificationPlayer<O> {
    pub fn new(output: O) -> Self {
        Self { output }
    }

    /// Decodes `path` and streams it to a stereo 16-bit sink at the file's own sample rate,
    /// returning once the sink has drained. Returns the number of samples played.
    pub fn play(&self, path: &Path) -> Result<u64> {
        let file = File::open(path).map_err(|source| TimerError::SoundOpenError {
            path: path.to_path_buf(),
            source,
        })?;

        let mut decoder = SoundDecoder::new(BufReader::new(file), OutputFormat::STEREO_CHANNELS)?;
        let mut sink = self
            .output
            .open(OutputFormat::stereo_16bit(decoder.sample_rate()))?;

        let mut chunk = vec![0i16; COPY_CHUNK_SAMPLES];
        let mut copied = 0u64;
        loop {
            let n = decoder.read(&mut chunk);
            if n == 0 {
                break;
            }
            sink.write(&chunk[..n])?;
            copied += n as u64;
        }
        sink.finish()?;

        tracing::debug!("Played {} samples from {}", copied, path.display());
        Ok(copied)
    }
}
