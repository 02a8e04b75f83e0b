//! `PatchFilesystem` implementation backed by `std::fs`.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::PatchFilesystem;

/// Filesystem adapter operating on the real disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl PatchFilesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|err| AppError::io(path, err))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|err| AppError::io(path, err))
    }

    fn list_subdirectories(&self, path: &Path) -> Result<Vec<OsString>, AppError> {
        let entries = fs::read_dir(path).map_err(|err| AppError::io(path, err))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| AppError::io(path, err))?;
            let file_type = entry.file_type().map_err(|err| AppError::io(entry.path(), err))?;
            if file_type.is_dir() {
                names.push(entry.file_name());
            }
        }
        names.sort();
        Ok(names)
    }
}
