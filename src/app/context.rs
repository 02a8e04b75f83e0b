use crate::app::custom_stylesheet::CustomStylesheet;
use crate::domain::InstallationCatalog;
use crate::ports::PatchFilesystem;

/// Application context holding dependencies for a patch run.
pub struct AppContext<F: PatchFilesystem> {
    filesystem: F,
    catalog: InstallationCatalog,
    custom_stylesheet: CustomStylesheet,
}

impl<F: PatchFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(
        filesystem: F,
        catalog: InstallationCatalog,
        custom_stylesheet: CustomStylesheet,
    ) -> Self {
        Self { filesystem, catalog, custom_stylesheet }
    }

    /// Get a reference to the filesystem port.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the installation catalog.
    pub fn catalog(&self) -> &InstallationCatalog {
        &self.catalog
    }

    /// Content of the user stylesheet, loaded on first use.
    pub fn custom_css(&self) -> Option<&str> {
        self.custom_stylesheet.content(&self.filesystem)
    }
}
