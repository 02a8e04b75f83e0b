use std::path::Path;

/// Workbench bundle files eligible for patching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFile {
    /// `workbench.desktop.main.css`
    Stylesheet,
    /// `workbench.desktop.main.js`
    Script,
}

impl TargetFile {
    pub const ALL: [TargetFile; 2] = [TargetFile::Stylesheet, TargetFile::Script];

    pub fn file_name(self) -> &'static str {
        match self {
            TargetFile::Stylesheet => "workbench.desktop.main.css",
            TargetFile::Script => "workbench.desktop.main.js",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|target| target.file_name() == name)
    }

    /// Resolve the target kind from the final component of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name().and_then(|name| name.to_str()).and_then(Self::from_file_name)
    }
}

/// Suffix appended to a target path to form its backup path.
pub const BACKUP_SUFFIX: &str = ".bkp";

/// `<path>.bkp`
pub fn backup_path(path: &Path) -> std::path::PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(BACKUP_SUFFIX);
    raw.into()
}
