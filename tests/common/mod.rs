#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use time_to_sound::domain::model::OutputFormat;
use time_to_sound::domain::ports::{AudioOutput, AudioSink};

/// Audio output that keeps everything in memory.
#[derive(Clone, Default)]
pub struct CapturedOutput {
    pub formats: Arc<Mutex<Vec<OutputFormat>>>,
    pub samples: Arc<Mutex<Vec<i16>>>,
}

pub struct CapturedSink {
    samples: Arc<Mutex<Vec<i16>>>,
}

impl AudioOutput for CapturedOutput {
    type Sink = CapturedSink;

    fn open(&self, format: OutputFormat) -> time_to_sound::Result<CapturedSink> {
        self.formats.lock().unwrap().push(format);
        Ok(CapturedSink {
            samples: self.samples.clone(),
        })
    }
}

impl AudioSink for CapturedSink {
    fn write(&mut self, samples: &[i16]) -> time_to_sound::Result<()> {
        self.samples.lock().unwrap().extend_from_slice(samples);
        Ok(())
    }

    fn finish(&mut self) -> time_to_sound::Result<()> {
        Ok(())
    }
}

/// 16-bit PCM WAV holding `seconds` of a square wave.
pub fn square_wave_wav(sample_rate: u32, channels: u16, seconds: u32) -> Vec<u8> {
    let frames = sample_rate * seconds;
    let mut pcm = Vec::with_capacity((frames * channels as u32 * 2) as usize);
    for i in 0..frames {
        let sample: i16 = if (i / 20) % 2 == 0 { 1600 } else { -1600 };
        for _ in 0..channels {
            pcm.extend_from_slice(&sample.to_le_bytes());
        }
    }

    let block_align = channels * 2;
    let data_size = pcm.len() as u32;
    let mut wav = Vec::with_capacity(44 + pcm.len());
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_size).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    wav.extend_from_slice(&pcm);
    wav
}
