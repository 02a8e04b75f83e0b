//! CLI Adapter.

mod patch;

use crate::domain::AppError;
use clap::Parser;

#[derive(Parser)]
#[command(name = "vscode-custom-ui")]
#[command(version)]
#[command(
    about = "Patch local VS Code workbench bundles with a faster caret blink and custom.css",
    long_about = None
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    Cli::parse();

    let result: Result<(), AppError> = patch::run_patch();

    // A missing environment is the only failure that sets a non-zero exit status.
    match result {
        Ok(()) => {}
        Err(e @ AppError::MissingEnvironment(_)) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
