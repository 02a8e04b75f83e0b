//! Patch command: walk installation roots and patch every workbench found.

mod file;

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::PatchFilesystem;

pub use file::{PatchOutcome, patch_file};

/// Files modified during a run, in the order they were patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub updated: Vec<PathBuf>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.updated.len()
    }
}

/// Patch every installation under `roots`, in order.
///
/// `on_updated` is called with the path of each modified file as soon as it is written.
pub fn execute<F: PatchFilesystem>(
    ctx: &AppContext<F>,
    roots: &[PathBuf],
    mut on_updated: impl FnMut(&Path),
) -> Result<RunSummary, AppError> {
    let mut summary = RunSummary::default();
    for root in roots {
        process_installation(ctx, root, &mut |path: &Path| {
            on_updated(path);
            summary.updated.push(path.to_path_buf());
        })?;
    }
    Ok(summary)
}

/// Patch the workbench of each versioned subfolder of `root`, then of `root` itself.
///
/// Returns the number of files modified. A missing root contributes nothing.
pub fn process_installation<F: PatchFilesystem>(
    ctx: &AppContext<F>,
    root: &Path,
    on_updated: &mut dyn FnMut(&Path),
) -> Result<usize, AppError> {
    let filesystem = ctx.filesystem();
    if !filesystem.exists(root) {
        return Ok(0);
    }

    let catalog = ctx.catalog();
    let mut candidates: Vec<PathBuf> = filesystem
        .list_subdirectories(root)?
        .into_iter()
        .filter(|name| !catalog.is_excluded(&name.to_string_lossy()))
        .map(|name| root.join(name))
        .collect();
    candidates.push(root.to_path_buf());

    let mut changes = 0;
    for candidate in candidates {
        let workbench = candidate.join(catalog.workbench_path());
        if !filesystem.exists(&workbench) {
            continue;
        }

        for target in catalog.targets() {
            let path = workbench.join(target.file_name());
            if patch_file(ctx, &path)? == PatchOutcome::Changed {
                changes += 1;
                on_updated(&path);
            }
        }
    }

    Ok(changes)
}
