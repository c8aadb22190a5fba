mod common;

use anyhow::Result;
use common::{square_wave_wav, CapturedOutput};
use time_to_sound::{resolve, EmbeddedAssets, SoundTimer, TerminalProgress, TimerError, TimerSettings};
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

fn timer(root: &TempDir, output: &CapturedOutput) -> SoundTimer<EmbeddedAssets, TerminalProgress, CapturedOutput> {
    SoundTimer::new(
        TimerSettings::default().with_scratch_root(root.path()),
        EmbeddedAssets,
        TerminalProgress::hidden(),
        output.clone(),
    )
}

#[tokio::test(start_paused = true)]
async fn test_end_to_end_default_sound_at_zero_minutes() -> Result<()> {
    let root = TempDir::new()?;
    let output = CapturedOutput::default();
    let options = resolve(["time-to-sound", "--minute", "0"])?;

    let outcome = timer(&root, &output).run(&options).await?;

    assert_eq!(outcome.total_seconds, 0);
    assert_eq!(outcome.sound_display, "data/wooden_knock.wav");

    let formats = output.formats.lock().unwrap();
    assert_eq!(formats.len(), 1);
    assert_eq!(formats[0].channels, 2);
    assert_eq!(formats[0].bits_per_sample, 16);
    assert_eq!(formats[0].sample_rate, 22050);
    assert_eq!(output.samples.lock().unwrap().len() as u64, outcome.samples_played);

    // scratch directory is gone once the timer returns
    assert!(!root.path().join("time_to_sound_temporary").exists());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_end_to_end_one_minute_custom_file() -> Result<()> {
    let root = TempDir::new()?;
    let sound = root.path().join("two_seconds.wav");
    std::fs::write(&sound, square_wave_wav(16000, 1, 2))?;
    let output = CapturedOutput::default();

    let options = resolve([
        "time-to-sound",
        "-m",
        "1",
        "-f",
        sound.to_str().unwrap(),
    ])?;
    let start = tokio::time::Instant::now();

    let outcome = timer(&root, &output).run(&options).await?;

    assert!(start.elapsed() >= std::time::Duration::from_secs(60));
    assert_eq!(outcome.total_seconds, 60);
    // mono source up-mixed to stereo: 2 s * 16000 Hz * 2 channels
    assert_eq!(outcome.samples_played, 64000);
    assert_eq!(output.formats.lock().unwrap()[0].sample_rate, 16000);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_end_to_end_non_audio_file() -> Result<()> {
    let root = TempDir::new()?;
    let notes = root.path().join("README.txt");
    std::fs::write(&notes, "# Not a song\n\nJust some words.\n".repeat(100))?;
    let output = CapturedOutput::default();

    let options = resolve(["time-to-sound", "--minute", "0.1", "--file", notes.to_str().unwrap()])?;
    let start = tokio::time::Instant::now();

    let result = timer(&root, &output).run(&options).await;

    // the countdown ran to completion before decoding failed
    assert!(start.elapsed() >= std::time::Duration::from_secs(6));
    let err = assert_err!(result);
    assert!(matches!(err, TimerError::DecodeError(_)));
    assert_ne!(err.exit_code(), 0);
    assert!(output.formats.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_missing_custom_file_never_starts_countdown() -> Result<()> {
    let root = TempDir::new()?;
    let output = CapturedOutput::default();
    let missing = root.path().join("missing.mp3");
    let options = resolve(["time-to-sound", "-m", "10", "-f", missing.to_str().unwrap()])?;
    let start = tokio::time::Instant::now();

    let err = timer(&root, &output).run(&options).await.unwrap_err();

    assert!(matches!(err, TimerError::SoundNotFoundError { .. }));
    assert!(start.elapsed() < std::time::Duration::from_secs(1));
    assert!(output.formats.lock().unwrap().is_empty());
    Ok(())
}

#[test]
fn test_resolve_rejects_negative_minutes() {
    let err = assert_err!(resolve(["time-to-sound", "--minute", "-0.5"]));
    assert_eq!(err.exit_code(), 2);

    let options = assert_ok!(resolve(["time-to-sound", "--minute", "0.25"]));
    assert_eq!(options.total_seconds(), 15);
}
