use crate::utils::error::{Result, TimerError};
use std::fs;
use std::path::{Path, PathBuf};

/// Process-scoped working directory, removed (best effort) when dropped.
#[derive(Debug)]
pub struct ScratchDirectory {
    path: PathBuf,
}

impl ScratchDirectory {
    /// Opens `path`, creating it owner-only if it does not exist yet.
    pub fn create(path: PathBuf) -> Result<Self> {
        if path.is_dir() {
            tracing::debug!("Reusing scratch directory {}", path.display());
            return Ok(Self { path });
        }

        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }

        match builder.create(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && path.is_dir() => {}
            Err(source) => return Err(TimerError::ScratchDirError { path, source }),
        }

        tracing::debug!("Created scratch directory {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDirectory {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.path) {
            tracing::debug!("Ignoring scratch cleanup failure for {}: {}", self.path.display(), e);
        }
    }
}
