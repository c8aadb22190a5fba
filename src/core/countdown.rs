use crate::domain::model::CountdownState;
use crate::domain::ports::{ProgressFactory, ProgressIndicator};
use crate::utils::clock;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Waits out a countdown while a background task advances the progress indicator.
///
/// The sleep on the calling task decides when the countdown is over; ticks only drive the
/// display. Once the sleep ends the tick task is stopped and joined, and whatever steps it
/// missed are filled in, so the indicator always finishes at exactly `total_seconds`.
pub struct CountdownDriver<F: ProgressFactory> {
    progress: F,
    tick_period: Duration,
}

impl<F: ProgressFactory> CountdownDriver<F> {
    pub fn new(progress: F, tick_period: Duration) -> Self {
        Self {
            progress,
            tick_period,
        }
    }

    pub async fn run(&self, total_seconds: u64) -> CountdownState {
        let indicator = self.progress.create(total_seconds);
        let (stop_tx, stop_rx) = oneshot::channel();

        // the tick task owns the counter until it is joined below
        let ticker = tokio::spawn(tick_until_stopped(
            indicator.clone(),
            CountdownState::new(total_seconds),
            self.tick_period,
            stop_rx,
        ));

        time::sleep(Duration::from_secs(total_seconds)).await;

        let _ = stop_tx.send(());
        let mut state = match ticker.await {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Tick task ended abnormally: {}", e);
                CountdownState::resume(total_seconds, indicator.position())
            }
        };

        let deficit = state.top_up();
        if deficit > 0 {
            tracing::debug!("Filling {} missed tick(s)", deficit);
        }
        indicator.advance(deficit);
        indicator.finish();
        println!("END: {}", clock::now_timestamp());

        state
    }
}

async fn tick_until_stopped<P: ProgressIndicator>(
    indicator: P,
    mut state: CountdownState,
    period: Duration,
    mut stop: oneshot::Receiver<()>,
) -> CountdownState {
    let mut ticks = time::interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticks.tick() => {
                if state.tick() {
                    indicator.increment();
                }
            }
            _ = &mut stop => break,
        }
    }

    state
}
