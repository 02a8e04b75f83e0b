//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::LocalFilesystem;
use crate::app::AppContext;
use crate::app::commands::patch;
use crate::app::custom_stylesheet::CustomStylesheet;
use crate::domain::InstallationCatalog;

pub use crate::app::commands::patch::{PatchOutcome, RunSummary};
pub use crate::domain::AppError;

/// Create an `AppContext` reading `custom.css` from `working_dir`.
fn create_context(
    working_dir: &Path,
    catalog: InstallationCatalog,
) -> AppContext<LocalFilesystem> {
    AppContext::new(LocalFilesystem::new(), catalog, CustomStylesheet::in_dir(working_dir))
}

/// Patch every known installation using the process environment and working directory.
///
/// `on_updated` receives each modified file as soon as it has been written.
pub fn patch_installations(on_updated: impl FnMut(&Path)) -> Result<RunSummary, AppError> {
    let working_dir = std::env::current_dir().map_err(|err| AppError::io(".", err))?;
    patch_installations_with(|key| std::env::var(key).ok(), &working_dir, on_updated)
}

/// Patch every known installation with an explicit environment and working directory.
pub fn patch_installations_with(
    lookup_env: impl Fn(&str) -> Option<String>,
    working_dir: &Path,
    on_updated: impl FnMut(&Path),
) -> Result<RunSummary, AppError> {
    let catalog = InstallationCatalog::embedded()?;
    let roots = catalog.resolve_roots(lookup_env)?;
    let ctx = create_context(working_dir, catalog);
    patch::execute(&ctx, &roots, on_updated)
}
