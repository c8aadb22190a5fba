use crate::domain::model::OutputFormat;
use crate::utils::error::Result;

/// Build-time bundled resources, keyed by logical path (e.g. `data/wooden_knock.wav`).
pub trait AssetSource: Send + Sync {
    fn asset(&self, logical_path: &str) -> Option<&'static [u8]>;
}

/// A counter the user watches while the countdown runs.
///
/// Clones share the same counter; only one clone mutates it at a time.
pub trait ProgressIndicator: Clone + Send + Sync + 'static {
    fn increment(&self);
    fn advance(&self, steps: u64);
    fn position(&self) -> u64;
    fn finish(&self);
}

pub trait ProgressFactory: Send + Sync {
    type Indicator: ProgressIndicator;

    fn create(&self, total_steps: u64) -> Self::Indicator;
}

pub trait AudioSink {
    /// Queues interleaved samples; may block while the device catches up.
    fn write(&mut self, samples: &[i16]) -> Result<()>;

    /// Blocks until everything written so far has been rendered.
    fn finish(&mut self) -> Result<()>;
}

pub trait AudioOutput: Clone + Send + 'static {
    type Sink: AudioSink;

    fn open(&self, format: OutputFormat) -> Result<Self::Sink>;
}
