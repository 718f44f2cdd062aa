//! Utility-class styling for the page.
//!
//! Markup only carries class name strings. This module is the other half of
//! that contract: it resolves those names against the [`Theme`](crate::theme::Theme)
//! and compiles the ones actually used into a single inline stylesheet.
//!
//! - [`utilities`] - parse and resolve one class
//! - [`stylesheet`] - compile a class list into CSS
//! - [`computed`] - evaluate a class list at a viewport (layout checks)

pub mod computed;
pub mod stylesheet;
pub mod utilities;

pub use computed::{ComputedStyle, Viewport, computed_style};
pub use stylesheet::{Stylesheet, compile_stylesheet};
pub use utilities::{Breakpoint, Utility, resolve_utility};

/// Reset applied before any utility.
pub const BASE_CSS: &str = r#"*, *::before, *::after {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

html {
    -webkit-text-size-adjust: 100%;
    scroll-behavior: smooth;
}

body {
    min-height: 100vh;
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
}

img, svg {
    display: block;
    max-width: 100%;
}

"#;

/// Content Security Policy for the static page: no scripts, web fonts and the
/// external image allowed.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; font-src 'self' https://fonts.gstatic.com; script-src 'none'; connect-src 'none';";

/// Class names in rendered markup, deduplicated, in first-seen order.
pub fn collect_classes(html: &str) -> Vec<String> {
    const ATTR: &str = "class=\"";
    let mut classes: Vec<String> = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(ATTR) {
        let after = &rest[start + ATTR.len()..];
        let Some(end) = after.find('"') else {
            break;
        };
        for class in after[..end].split_whitespace() {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
        rest = &after[end + 1..];
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collects_in_first_seen_order() {
        let html = r#"<div class="grid md:grid-cols-3"><p class="text-xl grid">x</p><span class="">y</span></div>"#;
        assert_eq!(collect_classes(html), vec!["grid", "md:grid-cols-3", "text-xl"]);
    }

    #[test]
    fn unterminated_attribute_stops_scan() {
        assert_eq!(collect_classes(r#"<p class="flex">a</p><p class="broken"#), vec!["flex"]);
    }
}
