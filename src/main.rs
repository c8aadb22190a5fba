use time_to_sound::utils::logger;
use time_to_sound::{
    resolve, EmbeddedAssets, RodioOutput, SoundTimer, TerminalProgress, TimerError, TimerSettings,
};

#[tokio::main]
async fn main() {
    let options = match resolve(std::env::args_os()) {
        Ok(options) => options,
        // clap prints usage itself and exits 0 for --help/--version, 2 otherwise
        Err(TimerError::CliError(e)) => e.exit(),
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(options.verbose);
    tracing::debug!("Invocation options: {:?}", options);

    let timer = SoundTimer::new(
        TimerSettings::default(),
        EmbeddedAssets,
        TerminalProgress::stdout(),
        RodioOutput,
    );

    match timer.run(&options).await {
        Ok(outcome) => {
            tracing::info!(
                "Played {} after {} second(s)",
                outcome.sound_display,
                outcome.total_seconds
            );
        }
        Err(e) => {
            tracing::error!("❌ Timer failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
