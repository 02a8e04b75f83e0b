//! Static table of candidate installation roots.
//!
//! The table is embedded TOML so the list of products stays data rather than code.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::AppError;
use super::target_file::TargetFile;

/// Environment variable naming the roaming application data directory.
pub const APP_DATA_VAR: &str = "APPDATA";

/// Root path segment expanded to `<parent of APPDATA>/Local/Programs`.
pub const LOCAL_PROGRAMS_PLACEHOLDER: &str = "{local_programs}";

const EMBEDDED_CATALOG: &str = include_str!("../assets/installations.toml");

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    excluded_subfolders: Vec<String>,
    workbench_path: Vec<String>,
    target_files: Vec<String>,
    roots: Vec<RootTemplate>,
}

/// One candidate installation root, as path segments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootTemplate {
    pub product: String,
    pub path: Vec<String>,
}

impl RootTemplate {
    fn resolve(&self, local_programs: &Path) -> Result<PathBuf, AppError> {
        let mut resolved = PathBuf::new();
        for segment in &self.path {
            if segment == LOCAL_PROGRAMS_PLACEHOLDER {
                resolved.push(local_programs);
            } else if segment.starts_with('{') && segment.ends_with('}') {
                return Err(AppError::catalog(format!(
                    "Unknown placeholder '{}' in root for {}",
                    segment, self.product
                )));
            } else {
                resolved.push(segment);
            }
        }
        Ok(resolved)
    }
}

/// Validated installation catalog.
#[derive(Debug, Clone)]
pub struct InstallationCatalog {
    excluded_subfolders: Vec<String>,
    workbench_path: PathBuf,
    targets: Vec<TargetFile>,
    roots: Vec<RootTemplate>,
}

impl InstallationCatalog {
    /// Load the catalog compiled into the binary.
    pub fn embedded() -> Result<Self, AppError> {
        Self::parse_toml(EMBEDDED_CATALOG)
    }

    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let raw: RawCatalog = toml::from_str(content)?;

        if raw.roots.is_empty() {
            return Err(AppError::catalog("At least one installation root is required"));
        }
        if let Some(root) = raw.roots.iter().find(|root| root.path.is_empty()) {
            return Err(AppError::catalog(format!("Root for {} has no path", root.product)));
        }
        if raw.workbench_path.is_empty() {
            return Err(AppError::catalog("workbench_path must not be empty"));
        }

        let targets = raw
            .target_files
            .iter()
            .map(|name| {
                TargetFile::from_file_name(name)
                    .ok_or_else(|| AppError::catalog(format!("Unsupported target file '{}'", name)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            excluded_subfolders: raw
                .excluded_subfolders
                .iter()
                .map(|name| name.to_lowercase())
                .collect(),
            workbench_path: raw.workbench_path.iter().collect(),
            targets,
            roots: raw.roots,
        })
    }

    pub fn targets(&self) -> &[TargetFile] {
        &self.targets
    }

    /// `resources/app/out/vs/workbench`
    pub fn workbench_path(&self) -> &Path {
        &self.workbench_path
    }

    /// Whether a subfolder name is on the denylist (case-insensitive).
    pub fn is_excluded(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.excluded_subfolders.iter().any(|excluded| *excluded == name)
    }

    /// Expand every root template, in catalog order.
    ///
    /// `lookup_env` resolves environment variables; an unset or empty
    /// `APPDATA` is an error.
    pub fn resolve_roots(
        &self,
        lookup_env: impl Fn(&str) -> Option<String>,
    ) -> Result<Vec<PathBuf>, AppError> {
        let app_data = lookup_env(APP_DATA_VAR)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::MissingEnvironment(APP_DATA_VAR.to_string()))?;
        let local_programs = local_programs_dir(Path::new(&app_data));

        self.roots.iter().map(|root| root.resolve(&local_programs)).collect()
    }
}

/// `<parent of app_data>/Local/Programs`
pub fn local_programs_dir(app_data: &Path) -> PathBuf {
    app_data.parent().unwrap_or(app_data).join("Local").join("Programs")
}
