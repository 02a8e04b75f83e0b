//! Patch command output.

use crate::domain::AppError;

const LOG_PREFIX: &str = "[vscode-custom-ui]";

pub fn run_patch() -> Result<(), AppError> {
    println!(
        "\n--------------------------------\n⚒️  Welcome to vscode-custom-ui!\n--------------------------------\n"
    );

    let summary = crate::app::api::patch_installations(|path| {
        println!("{} Updated: {}", LOG_PREFIX, path.display());
    })?;

    if summary.total() > 0 {
        println!("{} Done: {} file(s) modified.", LOG_PREFIX, summary.total());
    } else {
        println!("{} No changes needed.", LOG_PREFIX);
    }
    Ok(())
}
