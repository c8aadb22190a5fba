use std::path::{Path, PathBuf};
use std::time::Duration;

/// Fixed names and periods, injected once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSettings {
    pub scratch_root: PathBuf,
    pub scratch_dir_name: String,
    pub asset_dir: String,
    pub default_file_name: String,
    pub tick_period: Duration,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            scratch_root: std::env::temp_dir(),
            scratch_dir_name: "time_to_sound_temporary".to_string(),
            asset_dir: "data".to_string(),
            default_file_name: "wooden_knock.wav".to_string(),
            tick_period: Duration::from_secs(1),
        }
    }
}

impl TimerSettings {
    pub fn with_scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = root.into();
        self
    }

    pub fn scratch_path(&self) -> PathBuf {
        self.scratch_root.join(&self.scratch_dir_name)
    }

    /// Logical name of the bundled sound, as stored in the asset map and shown to the user.
    pub fn default_asset_path(&self) -> String {
        format!("{}/{}", self.asset_dir, self.default_file_name)
    }

    pub fn default_sound_path(&self, scratch_dir: &Path) -> PathBuf {
        scratch_dir.join(&self.default_file_name)
    }
}
