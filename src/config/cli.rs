use crate::domain::model::InvocationOptions;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative, validate_path, Validate};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "time-to-sound")]
#[command(about = "Waits for the given time, then plays a sound")]
pub struct CliConfig {
    /// Time to wait, in minutes
    #[arg(short, long, default_value = "30", allow_negative_numbers = true)]
    pub minute: f64,

    /// Sound file to play when the time is up (the bundled knock is used if omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_negative("minute", self.minute)?;
        if let Some(file) = &self.file {
            validate_path("file", file)?;
        }
        Ok(())
    }
}

impl From<CliConfig> for InvocationOptions {
    fn from(config: CliConfig) -> Self {
        Self {
            duration_minutes: config.minute,
            sound_file: config.file,
            verbose: config.verbose,
        }
    }
}

/// Parses and validates process arguments (the first item is the program name).
pub fn resolve<I, T>(raw_args: I) -> Result<InvocationOptions>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = CliConfig::try_parse_from(raw_args)?;
    config.validate()?;
    Ok(config.into())
}
