use crate::config::resolve_sound;
use crate::config::settings::TimerSettings;
use crate::core::countdown::CountdownDriver;
use crate::core::player::NotificationPlayer;
use crate::core::provision::DefaultSoundProvisioner;
use crate::core::scratch::ScratchDirectory;
use crate::domain::model::InvocationOptions;
use crate::domain::ports::{AssetSource, AudioOutput, ProgressFactory};
use crate::utils::clock;
use crate::utils::error::{Result, TimerError};
use crate::utils::validation::validate_non_negative;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerOutcome {
    pub total_seconds: u64,
    pub sound_display: String,
    pub samples_played: u64,
}

/// Runs one timer: prepare the sound, count down, play.
pub struct SoundTimer<A: AssetSource, F: ProgressFactory, O: AudioOutput> {
    settings: TimerSettings,
    assets: A,
    countdown: CountdownDriver<F>,
    output: O,
}

impl<A: AssetSource, F: ProgressFactory, O: AudioOutput> SoundTimer<A, F, O> {
    pub fn new(settings: TimerSettings, assets: A, progress: F, output: O) -> Self {
        let countdown = CountdownDriver::new(progress, settings.tick_period);
        Self {
            settings,
            assets,
            countdown,
            output,
        }
    }

    pub async fn run(&self, options: &InvocationOptions) -> Result<TimerOutcome> {
        validate_non_negative("minute", options.duration_minutes)?;

        // removed when this returns, on every path
        let scratch = ScratchDirectory::create(self.settings.scratch_path())?;
        let sound = resolve_sound(options, &self.settings, scratch.path());

        println!("Minute: {}", options.duration_minutes);
        println!("SoundFile: {}", sound.display);

        if sound.is_default {
            DefaultSoundProvisioner::new(&self.assets, &self.settings)
                .ensure_default(scratch.path())?;
        }

        if !sound.path.is_file() {
            return Err(TimerError::SoundNotFoundError { path: sound.path });
        }

        let total_seconds = options.total_seconds();
        tracing::info!(
            "Waiting {} second(s) before playing {}",
            total_seconds,
            sound.display
        );
        println!("START: {}", clock::now_timestamp());

        self.countdown.run(total_seconds).await;

        // the audio backend blocks until the sound has finished
        let player = NotificationPlayer::new(self.output.clone());
        let path = sound.path.clone();
        let samples_played = tokio::task::spawn_blocking(move || player.play(&path))
            .await
            .map_err(|e| TimerError::PlaybackIoError {
                message: format!("playback task failed: {}", e),
            })??;

        Ok(TimerOutcome {
            total_seconds,
            sound_display: sound.display,
            samples_played,
        })
    }
}
