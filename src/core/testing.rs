//! In-memory stand-ins for the terminal and the audio device.

use crate::domain::model::OutputFormat;
use crate::domain::ports::{AudioOutput, AudioSink, ProgressFactory, ProgressIndicator};
use crate::utils::error::{Result, TimerError};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct RecordingProgress {
    position: Arc<AtomicU64>,
    max_position: Arc<AtomicU64>,
    increments: Arc<AtomicU64>,
    top_ups: Arc<Mutex<Vec<u64>>>,
    finished: Arc<AtomicBool>,
    created_with: Arc<Mutex<Vec<u64>>>,
}

impl RecordingProgress {
    pub fn position(&self) -> u64 {
        self.position.load(Ordering::SeqCst)
    }

    pub fn max_position(&self) -> u64 {
        self.max_position.load(Ordering::SeqCst)
    }

    pub fn increments(&self) -> u64 {
        self.increments.load(Ordering::SeqCst)
    }

    pub fn top_ups(&self) -> Vec<u64> {
        self.top_ups.lock().unwrap().clone()
    }

    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    pub fn created_with(&self) -> Vec<u64> {
        self.created_with.lock().unwrap().clone()
    }

    fn bump(&self, steps: u64) {
        let now = self.position.fetch_add(steps, Ordering::SeqCst) + steps;
        self.max_position.fetch_max(now, Ordering::SeqCst);
    }
}

impl ProgressIndicator for RecordingProgress {
    fn increment(&self) {
        self.increments.fetch_add(1, Ordering::SeqCst);
        self.bump(1);
    }

    fn advance(&self, steps: u64) {
        self.top_ups.lock().unwrap().push(steps);
        self.bump(steps);
    }

    fn position(&self) -> u64 {
        RecordingProgress::position(self)
    }

    fn finish(&self) {
        self.finished.store(true, Ordering::SeqCst);
    }
}

impl ProgressFactory for RecordingProgress {
    type Indicator = RecordingProgress;

    fn create(&self, total_steps: u64) -> RecordingProgress {
        self.created_with.lock().unwrap().push(total_steps);
        self.clone()
    }
}

/// Collects everything "played" in memory. Can be told to fail on open or after N writes.
#[derive(Clone, Default)]
pub struct MemoryOutput {
    pub formats: Arc<Mutex<Vec<OutputFormat>>>,
    pub samples: Arc<Mutex<Vec<i16>>>,
    pub writes: Arc<AtomicU64>,
    pub finished: Arc<AtomicBool>,
    pub fail_open: bool,
    pub fail_after_writes: Option<u64>,
}

pub struct MemorySink {
    output: MemoryOutput,
}

impl AudioOutput for MemoryOutput {
    type Sink = MemorySink;

    fn open(&self, format: OutputFormat) -> Result<MemorySink> {
        if self.fail_open {
            return Err(TimerError::PlaybackDeviceError {
                message: "no device".to_string(),
            });
        }
        self.formats.lock().unwrap().push(format);
        Ok(MemorySink {
            output: self.clone(),
        })
    }
}

impl AudioSink for MemorySink {
    fn write(&mut self, samples: &[i16]) -> Result<()> {
        let done = self.output.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(limit) = self.output.fail_after_writes {
            if done >= limit {
                return Err(TimerError::PlaybackIoError {
                    message: "device unplugged".to_string(),
                });
            }
        }
        self.output.samples.lock().unwrap().extend_from_slice(samples);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.output.finished.store(true, Ordering::SeqCst);
        Ok(())
    }
}
