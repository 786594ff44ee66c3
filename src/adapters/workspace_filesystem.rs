//! `OutputStore` backed by the real filesystem.

use std::fs::File;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::OutputStore;

/// Output store rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemOutputStore {
    root: PathBuf,
}

impl FilesystemOutputStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the process working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl OutputStore for FilesystemOutputStore {
    type Writer = File;

    fn create(&self, path: &str) -> Result<File, AppError> {
        let full_path = self.resolve_path(path);
        File::create(&full_path).map_err(|err| AppError::output_create(path, err))
    }
}
