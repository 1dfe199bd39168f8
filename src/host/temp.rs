use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempPath};

use super::TempFileStore;

/// A temporary JSON file, deleted on drop unless it was created to be kept
#[derive(Debug)]
pub struct TempJsonFile {
    path: PathBuf,
    _guard: Option<TempPath>,
}

impl TempJsonFile {
    /// Deleted when this value is dropped
    pub fn scoped(guard: TempPath) -> Self {
        Self {
            path: guard.to_path_buf(),
            _guard: Some(guard),
        }
    }

    /// Left on disk after the invocation
    pub fn persistent(path: PathBuf) -> Self {
        Self { path, _guard: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Creates unique files in the system (or a chosen) temp directory
#[derive(Debug, Clone, Default)]
pub struct SystemTempStore {
    dir: Option<PathBuf>,
    keep: bool,
}

impl SystemTempStore {
    pub fn new(keep: bool) -> Self {
        Self { dir: None, keep }
    }

    /// Create files under `dir` instead of the system temp directory
    pub fn in_dir(dir: PathBuf, keep: bool) -> Self {
        Self {
            dir: Some(dir),
            keep,
        }
    }
}

impl TempFileStore for SystemTempStore {
    fn create_temp_file(&self) -> io::Result<TempJsonFile> {
        let mut builder = Builder::new();
        builder.prefix("paste-json-").suffix(".json");

        let file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        let guard = file.into_temp_path();

        if self.keep {
            let path = guard.keep().map_err(|e| e.error)?;
            Ok(TempJsonFile::persistent(path))
        } else {
            Ok(TempJsonFile::scoped(guard))
        }
    }

    fn write_all_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}
