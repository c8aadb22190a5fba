use crate::config::settings::TimerSettings;
use crate::domain::ports::AssetSource;
use crate::utils::error::{Result, TimerError};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Materializes the bundled default sound as a real file the decoder can open.
pub struct DefaultSoundProvisioner<'a, A: AssetSource> {
    assets: &'a A,
    settings: &'a TimerSettings,
}

impl<'a, A: AssetSource> DefaultSoundProvisioner<'a, A> {
    pub fn new(assets: &'a A, settings: &'a TimerSettings) -> Self {
        Self { assets, settings }
    }

    /// Writes the default sound into `scratch_dir` unless a file is already there.
    /// An existing file is kept as is.
    pub fn ensure_default(&self, scratch_dir: &Path) -> Result<PathBuf> {
        let target = self.settings.default_sound_path(scratch_dir);
        if target.exists() {
            tracing::debug!("Default sound already present at {}", target.display());
            return Ok(target);
        }

        let asset = self.settings.default_asset_path();
        let data = self
            .assets
            .asset(&asset)
            .ok_or_else(|| TimerError::ProvisionError {
                asset: asset.clone(),
                message: "asset is not bundled".to_string(),
            })?;

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = match options.open(&target) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(target),
            Err(e) => {
                return Err(TimerError::ProvisionError {
                    asset,
                    message: format!("cannot create {}: {}", target.display(), e),
                })
            }
        };

        if let Err(e) = file.write_all(data).and_then(|_| file.sync_all()) {
            // a truncated copy would be picked up as "already provisioned" next time
            drop(file);
            let _ = std::fs::remove_file(&target);
            return Err(TimerError::ProvisionError {
                asset,
                message: format!("cannot write {}: {}", target.display(), e),
            });
        }

        tracing::debug!("Wrote {} bytes of {} to {}", data.len(), asset, target.display());
        Ok(target)
    }
}
