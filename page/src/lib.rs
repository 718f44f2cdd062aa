//! # voidrose-about
//!
//! Leptos SSR renderer for the Void Rose "About" page.
//!
//! The page is a fixed tree of components with compiled-in copy. Styling goes
//! through a small utility-class system: components emit class names, the
//! [`theme::Theme`] supplies named colors, font stacks and animations, and
//! [`styles`] compiles the classes that actually appear in the markup into
//! one inline stylesheet. Entrance and hover animations are two-state tables
//! in [`motion`], compiled to CSS as well, so the output needs no JavaScript.
//!
//! ## Quick Start
//!
//! ```rust
//! use voidrose_about::{render_about_page, theme::Theme};
//!
//! let theme = Theme::default();
//! let page = render_about_page(&theme);
//!
//! assert!(page.html.starts_with("<!DOCTYPE html>"));
//! assert!(page.unresolved.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`content`] - feature entries, stat counters, copy
//! - [`components`] - Leptos components
//! - [`theme`] - theme tokens and config overrides
//! - [`motion`] - animation transition tables
//! - [`styles`] - utility-class resolution and stylesheet compilation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod motion;
pub mod styles;
pub mod theme;

pub use content::ROUTE;

use components::{AboutDocument, AboutPage};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use styles::{collect_classes, compile_stylesheet};
use theme::Theme;

/// A rendered `/about` document.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Complete HTML document, including `<!DOCTYPE html>`.
    pub html: String,
    /// Every class used by the page markup, first-seen order.
    pub classes: Vec<String>,
    /// Classes the styling system could not resolve (rendered unstyled).
    pub unresolved: Vec<String>,
}

/// Render the About page with `theme`.
///
/// The body is rendered first so its classes can be collected; the
/// stylesheet compiled from them is inlined into the document head.
pub fn render_about_page(theme: &Theme) -> RenderedPage {
    let body = view! { <AboutPage /> }.to_html();
    let classes = collect_classes(&body);
    let stylesheet = compile_stylesheet(&classes, theme);

    let doc = view! {
        <AboutDocument
            stylesheet=stylesheet.css
            fonts_href=theme.font_stylesheet_href()
            body=body
        />
    };
    // Leptos doesn't include DOCTYPE, so we add it
    let html = format!("<!DOCTYPE html>\n{}", doc.to_html());

    tracing::debug!(
        route = ROUTE,
        bytes = html.len(),
        classes = classes.len(),
        "rendered about page"
    );

    RenderedPage {
        html,
        classes,
        unresolved: stylesheet.unresolved,
    }
}

/// Result of cross-checking page classes against a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenReport {
    /// Number of distinct classes the page uses.
    pub checked: usize,
    /// Classes with no resolution.
    pub orphans: Vec<String>,
}

impl TokenReport {
    /// True when every class resolved.
    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty()
    }
}

/// Render the page and report every class that `theme` leaves unresolved.
pub fn check_tokens(theme: &Theme) -> TokenReport {
    let page = render_about_page(theme);
    TokenReport {
        checked: page.classes.len(),
        orphans: page.unresolved,
    }
}
