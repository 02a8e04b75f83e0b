pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod custom_stylesheet;

pub use context::AppContext;
