//! Pure text transforms applied to workbench bundles.
//!
//! Re-running a transform on its own output never stacks patches and never
//! changes the content again.

use super::target_file::TargetFile;

/// Caret blink constant shipped in the script bundle.
pub const BLINK_INTERVAL_ORIGINAL: &str = "BLINK_INTERVAL=500";
/// Replacement blink constant.
pub const BLINK_INTERVAL_PATCHED: &str = "BLINK_INTERVAL=140";

/// First line of an injected stylesheet block.
pub const CUSTOM_CSS_START: &str = "/* vscode-custom-ui:custom.css:start */";
/// Last line of an injected stylesheet block.
pub const CUSTOM_CSS_END: &str = "/* vscode-custom-ui:custom.css:end */";

/// Replace the first blink interval token. Content without the token is returned as is.
pub fn patch_blink_interval(content: &str) -> String {
    content.replacen(BLINK_INTERVAL_ORIGINAL, BLINK_INTERVAL_PATCHED, 1)
}

/// Strip a previously injected block along with the whitespace preceding it.
///
/// A start marker without a matching end marker after it leaves the content untouched.
pub fn remove_custom_css_block(content: &str) -> String {
    let Some(start) = content.find(CUSTOM_CSS_START) else {
        return content.to_string();
    };
    let Some(end_offset) = content[start..].find(CUSTOM_CSS_END) else {
        return content.to_string();
    };
    let after_end = start + end_offset + CUSTOM_CSS_END.len();

    let mut cleaned = content[..start].trim_end().to_string();
    cleaned.push_str(&content[after_end..]);
    cleaned
}

/// Replace any injected block with `custom_css`.
///
/// Custom content that is empty after trimming trailing whitespace removes the
/// block and injects nothing. Otherwise trailing whitespace of the bundle is
/// collapsed into a single blank line ahead of the block.
pub fn inject_custom_css(content: &str, custom_css: &str) -> String {
    let cleaned = remove_custom_css_block(content);
    let custom_css = custom_css.trim_end();
    if custom_css.is_empty() {
        return cleaned;
    }

    let mut next = cleaned.trim_end().to_string();
    if !next.is_empty() {
        next.push('\n');
    }
    next.push('\n');
    for line in [CUSTOM_CSS_START, custom_css, CUSTOM_CSS_END] {
        next.push_str(line);
        next.push('\n');
    }
    next
}

/// Compute the patched content for `target`.
///
/// `custom_css` is `None` when no custom stylesheet is available, in which case
/// the stylesheet bundle is left alone.
pub fn apply(target: TargetFile, content: &str, custom_css: Option<&str>) -> String {
    match (target, custom_css) {
        (TargetFile::Script, _) => patch_blink_interval(content),
        (TargetFile::Stylesheet, Some(custom_css)) => inject_custom_css(content, custom_css),
        (TargetFile::Stylesheet, None) => content.to_string(),
    }
}
