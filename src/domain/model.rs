use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct InvocationOptions {
    pub duration_minutes: f64,
    pub sound_file: Option<PathBuf>,
    pub verbose: bool,
}

impl InvocationOptions {
    pub fn total_seconds(&self) -> u64 {
        seconds_for_minutes(self.duration_minutes)
    }
}

/// Whole seconds for a non-negative minute count, rounded to the nearest second.
pub fn seconds_for_minutes(minutes: f64) -> u64 {
    (minutes * 60.0).round() as u64
}

/// The sound the timer will play.
///
/// `display` is what the user is shown and `path` is what gets opened. They differ when the
/// bundled default is used: the user sees the logical asset name, the player reads the copy
/// materialized in the scratch directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundSelection {
    pub display: String,
    pub path: PathBuf,
    pub is_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownState {
    total_seconds: u64,
    elapsed_seconds: u64,
}

impl CountdownState {
    pub fn new(total_seconds: u64) -> Self {
        Self {
            total_seconds,
            elapsed_seconds: 0,
        }
    }

    pub fn resume(total_seconds: u64, elapsed_seconds: u64) -> Self {
        Self {
            total_seconds,
            elapsed_seconds: elapsed_seconds.min(total_seconds),
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn remaining(&self) -> u64 {
        self.total_seconds - self.elapsed_seconds
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed_seconds == self.total_seconds
    }

    /// Counts one elapsed second. Returns false once the countdown is already full.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    /// Fills whatever the ticks missed and returns how many steps that took.
    pub fn top_up(&mut self) -> u64 {
        let deficit = self.remaining();
        self.elapsed_seconds = self.total_seconds;
        deficit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl OutputFormat {
    pub const STEREO_CHANNELS: u16 = 2;

    pub fn stereo_16bit(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: Self::STEREO_CHANNELS,
            bits_per_sample: 16,
        }
    }
}
