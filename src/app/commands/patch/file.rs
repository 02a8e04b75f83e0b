//! Patch a single workbench bundle in place.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, TargetFile, backup_path, transforms};
use crate::ports::PatchFilesystem;

/// Result of patching one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// File missing, not a target, or already up to date. Nothing was written.
    Unchanged,
    /// The previous content went to `<path>.bkp` and the file was rewritten.
    Changed,
}

/// Apply the transforms for `path` and write the result when it differs.
///
/// The backup is written before the target, so the target is never rewritten
/// without a copy of its previous content on disk.
pub fn patch_file<F: PatchFilesystem>(
    ctx: &AppContext<F>,
    path: &Path,
) -> Result<PatchOutcome, AppError> {
    let filesystem = ctx.filesystem();
    if !filesystem.exists(path) {
        return Ok(PatchOutcome::Unchanged);
    }
    let Some(target) = TargetFile::from_path(path) else {
        return Ok(PatchOutcome::Unchanged);
    };

    let original = filesystem.read_to_string(path)?;
    let custom_css = match target {
        TargetFile::Stylesheet => ctx.custom_css(),
        TargetFile::Script => None,
    };
    let updated = transforms::apply(target, &original, custom_css);

    if updated == original {
        return Ok(PatchOutcome::Unchanged);
    }

    filesystem.write(&backup_path(path), &original)?;
    filesystem.write(path, &updated)?;
    Ok(PatchOutcome::Changed)
}
