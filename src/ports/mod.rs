mod patch_filesystem;

pub use patch_filesystem::PatchFilesystem;
