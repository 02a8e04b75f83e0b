//! vscode-custom-ui: patch local VS Code workbench bundles with a caret blink
//! tweak and a user stylesheet, keeping a one-generation backup of each file.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{PatchOutcome, RunSummary, patch_installations, patch_installations_with};
pub use domain::AppError;
