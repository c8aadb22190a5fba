use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimerError {
    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[cfg(feature = "cli")]
    #[error("Argument parsing failed: {0}")]
    CliError(#[from] clap::Error),

    #[error("Scratch directory error at {path:?}: {source}")]
    ScratchDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to provision default sound '{asset}': {message}")]
    ProvisionError { asset: String, message: String },

    #[error("Sound file was not found: {path:?}")]
    SoundNotFoundError { path: PathBuf },

    #[error("Failed to open sound file {path:?}: {source}")]
    SoundOpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Decode error: {0}")]
    DecodeError(#[from] rodio::decoder::DecoderError),

    #[error("Audio output device unavailable: {message}")]
    PlaybackDeviceError { message: String },

    #[error("Audio playback failed: {message}")]
    PlaybackIoError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Setup,
    Playback,
}

impl TimerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TimerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            #[cfg(feature = "cli")]
            TimerError::CliError(_) => ErrorCategory::Configuration,
            TimerError::ScratchDirError { .. }
            | TimerError::ProvisionError { .. }
            | TimerError::SoundNotFoundError { .. } => ErrorCategory::Setup,
            TimerError::SoundOpenError { .. }
            | TimerError::DecodeError(_)
            | TimerError::PlaybackDeviceError { .. }
            | TimerError::PlaybackIoError { .. } => ErrorCategory::Playback,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Setup => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Playback => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TimerError::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid {}: {} ({})", field, value, reason)
            }
            #[cfg(feature = "cli")]
            TimerError::CliError(e) => e.kind().to_string(),
            TimerError::SoundNotFoundError { path } => {
                format!("Sound file not found: {}", path.display())
            }
            TimerError::SoundOpenError { path, .. } => {
                format!("Could not open sound file: {}", path.display())
            }
            TimerError::DecodeError(_) => "The sound file is not a playable audio file".to_string(),
            TimerError::PlaybackDeviceError { .. } => {
                "No usable audio output device was found".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TimerError::InvalidConfigValueError { .. } => {
                "--minute must be a number of minutes, zero or greater"
            }
            #[cfg(feature = "cli")]
            TimerError::CliError(_) => "Run with --help to see the accepted options",
            TimerError::ScratchDirError { .. } => {
                "Check that the system temporary directory is writable"
            }
            TimerError::ProvisionError { .. } => {
                "Pass a sound file explicitly with --file to skip the bundled default"
            }
            TimerError::SoundNotFoundError { .. } | TimerError::SoundOpenError { .. } => {
                "Check the --file path and its permissions"
            }
            TimerError::DecodeError(_) => "Use an MP3 or WAV file",
            TimerError::PlaybackDeviceError { .. } | TimerError::PlaybackIoError { .. } => {
                "Check that an audio output device is connected and not in exclusive use"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TimerError>;
