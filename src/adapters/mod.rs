pub mod filesystem;

pub use filesystem::LocalFilesystem;
