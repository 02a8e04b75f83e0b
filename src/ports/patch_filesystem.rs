//! Filesystem operations needed to discover and patch installations.
//!
//! Absence is not an error at this boundary: `exists` answers it, and callers
//! branch on the answer before reading.

use std::ffi::OsString;
use std::path::Path;

use crate::domain::AppError;

/// Port for the filesystem touched by a patch run.
///
/// All paths are absolute (or relative to the process working directory).
pub trait PatchFilesystem {
    /// Check whether a file or directory exists. Never fails.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// Replace a file's content wholesale.
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Names of the immediate child directories of `path`, sorted.
    ///
    /// Names are kept as the OS reports them so they join back onto `path` exactly.
    fn list_subdirectories(&self, path: &Path) -> Result<Vec<OsString>, AppError>;
}
