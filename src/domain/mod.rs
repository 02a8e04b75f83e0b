pub mod error;
pub mod installation_catalog;
pub mod target_file;
pub mod transforms;

pub use error::AppError;
pub use installation_catalog::{APP_DATA_VAR, InstallationCatalog, RootTemplate};
pub use target_file::{BACKUP_SUFFIX, TargetFile, backup_path};
