use crate::domain::ports::{ProgressFactory, ProgressIndicator};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const REDRAW_HZ: u8 = 4;

/// Where the countdown bar is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarStream {
    /// Alongside the `START:`/`END:` status lines.
    #[default]
    Stdout,
    Hidden,
}

impl BarStream {
    fn draw_target(self) -> ProgressDrawTarget {
        match self {
            BarStream::Stdout => ProgressDrawTarget::stdout_with_hz(REDRAW_HZ),
            BarStream::Hidden => ProgressDrawTarget::hidden(),
        }
    }
}

/// Creates the countdown bar.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalProgress {
    stream: BarStream,
}

impl TerminalProgress {
    pub fn stdout() -> Self {
        Self {
            stream: BarStream::Stdout,
        }
    }

    pub fn hidden() -> Self {
        Self {
            stream: BarStream::Hidden,
        }
    }

    pub fn stream(&self) -> BarStream {
        self.stream
    }
}

impl ProgressFactory for TerminalProgress {
    type Indicator = ProgressBar;

    fn create(&self, total_steps: u64) -> ProgressBar {
        let bar = ProgressBar::with_draw_target(Some(total_steps), self.stream.draw_target());
        let style = ProgressStyle::with_template(
            "{bar:40.cyan/blue} {pos}/{len} {percent:>3}% | {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉░");
        bar.set_style(style);
        bar
    }
}

impl ProgressIndicator for ProgressBar {
    fn increment(&self) {
        self.inc(1);
    }

    fn advance(&self, steps: u64) {
        self.inc(steps);
    }

    fn position(&self) -> u64 {
        ProgressBar::position(self)
    }

    fn finish(&self) {
        ProgressBar::finish(self);
    }
}
