fn main() {
    vscode_custom_ui::app::cli::run();
}
