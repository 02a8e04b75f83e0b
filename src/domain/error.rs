use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Library-wide error type for vscode-custom-ui operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure on a specific path.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A required environment variable is unset or empty.
    #[error("Environment variable {0} is not set")]
    MissingEnvironment(String),

    /// The embedded installation catalog is inconsistent.
    #[error("Invalid installation catalog: {0}")]
    Catalog(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        AppError::Io { path: path.as_ref().to_path_buf(), source }
    }

    pub fn catalog<S: Into<String>>(message: S) -> Self {
        AppError::Catalog(message.into())
    }

    /// Provide an `io::ErrorKind` view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io { source, .. } => source.kind(),
            AppError::MissingEnvironment(_) => io::ErrorKind::NotFound,
            AppError::Catalog(_) | AppError::TomlParse(_) => io::ErrorKind::InvalidData,
        }
    }
}
