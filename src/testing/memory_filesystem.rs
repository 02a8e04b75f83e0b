//! In-memory test double for `PatchFilesystem`.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::PatchFilesystem;

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    reads: Vec<PathBuf>,
    writes: Vec<PathBuf>,
    failing_writes: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
}

/// In-memory filesystem. Directories are implied by the files seeded beneath them.
#[derive(Clone, Debug, Default)]
pub struct MemoryFilesystem {
    state: Arc<Mutex<State>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, registering all of its ancestors as directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        let mut state = self.state.lock().unwrap();
        if let Some(parent) = path.parent() {
            state.dirs.extend(parent.ancestors().map(Path::to_path_buf));
        }
        state.files.insert(path.to_path_buf(), content.to_string());
    }

    /// Seed an empty directory.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.state.lock().unwrap();
        state.dirs.extend(path.as_ref().ancestors().map(Path::to_path_buf));
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state.lock().unwrap().files.get(path.as_ref()).cloned()
    }

    /// Paths written so far, in order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().writes.clone()
    }

    /// Paths read so far, in order.
    pub fn reads(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().reads.clone()
    }

    /// Make every write to `path` fail with `PermissionDenied`.
    pub fn fail_writes_to(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().failing_writes.insert(path.as_ref().to_path_buf());
    }

    /// Make reads of an existing `path` fail with `PermissionDenied`.
    pub fn deny_reads_of(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().unreadable.insert(path.as_ref().to_path_buf());
    }
}

fn denied(path: &Path) -> AppError {
    AppError::io(path, io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
}

impl PatchFilesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        let mut state = self.state.lock().unwrap();
        state.reads.push(path.to_path_buf());
        if state.unreadable.contains(path) {
            return Err(denied(path));
        }
        state.files.get(path).cloned().ok_or_else(|| {
            AppError::io(path, io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state.failing_writes.contains(path) {
            return Err(denied(path));
        }
        state.writes.push(path.to_path_buf());
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_subdirectories(&self, path: &Path) -> Result<Vec<OsString>, AppError> {
        let state = self.state.lock().unwrap();
        if !state.dirs.contains(path) {
            return Err(AppError::io(
                path,
                io::Error::new(io::ErrorKind::NotFound, "Mock directory not found"),
            ));
        }
        if state.unreadable.contains(path) {
            return Err(denied(path));
        }
        let names = state
            .dirs
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .filter_map(|dir| dir.file_name())
            .map(|name| name.to_os_string())
            .collect();
        Ok(names)
    }
}
