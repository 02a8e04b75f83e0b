//! Lazily loaded user stylesheet.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use crate::ports::PatchFilesystem;

/// File name of the user stylesheet, resolved against the working directory.
pub const CUSTOM_STYLESHEET_FILE: &str = "custom.css";

/// User stylesheet, read at most once per run.
///
/// The cell distinguishes "not read yet" (empty) from "read and missing"
/// (`Some(None)`) and "read" (`Some(Some(content))`).
#[derive(Debug)]
pub struct CustomStylesheet {
    path: PathBuf,
    cache: OnceCell<Option<String>>,
}

impl CustomStylesheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), cache: OnceCell::new() }
    }

    /// `custom.css` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(CUSTOM_STYLESHEET_FILE))
    }

    /// Content of the stylesheet, or `None` when it is missing or unreadable.
    pub fn content(&self, filesystem: &impl PatchFilesystem) -> Option<&str> {
        self.cache.get_or_init(|| filesystem.read_to_string(&self.path).ok()).as_deref()
    }
}
