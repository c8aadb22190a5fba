#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;

use crate::domain::model::{InvocationOptions, SoundSelection};
use settings::TimerSettings;
use std::path::Path;

#[cfg(feature = "cli")]
pub use cli::{resolve, CliConfig};

/// Picks the sound to play: the user's file as given, or the bundled default materialized in
/// `scratch_dir` (shown under its logical asset name).
pub fn resolve_sound(
    options: &InvocationOptions,
    settings: &TimerSettings,
    scratch_dir: &Path,
) -> SoundSelection {
    match &options.sound_file {
        Some(path) => SoundSelection {
            display: path.display().to_string(),
            path: path.clone(),
            is_default: false,
        },
        None => SoundSelection {
            display: settings.default_asset_path(),
            path: settings.default_sound_path(scratch_dir),
            is_default: true,
        },
    }
}
