//! Static evaluation of a class list at a given viewport.
//!
//! Applies declarations in the same order [`super::compile_stylesheet`]
//! emits them, so the result matches what a browser would compute for an
//! element carrying only these classes.

use super::utilities::{Breakpoint, Utility, Variant, resolve_utility};
use crate::motion;
use crate::theme::Theme;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in CSS px.
    pub width: u32,
    /// Pointer is over the element.
    pub hovered: bool,
    /// Pointer is over the element's `group` ancestor.
    pub group_hovered: bool,
}

impl Viewport {
    /// Narrow phone width, below every breakpoint.
    pub fn mobile() -> Self {
        Self::at(375)
    }

    /// Laptop width, above every breakpoint.
    pub fn desktop() -> Self {
        Self::at(1280)
    }

    /// No pointer over anything.
    pub fn at(width: u32) -> Self {
        Self {
            width,
            hovered: false,
            group_hovered: false,
        }
    }

    /// Pointer over the element. An element under the pointer is also
    /// inside any hovered `group`.
    pub fn with_hover(self) -> Self {
        Self {
            hovered: true,
            group_hovered: true,
            ..self
        }
    }

    /// Pointer over the `group` ancestor only.
    pub fn with_group_hover(self) -> Self {
        Self {
            group_hovered: true,
            ..self
        }
    }

    fn matches(&self, variant: &Variant) -> bool {
        (!variant.hover || self.hovered) && (!variant.group_hover || self.group_hovered)
    }
}

/// Final property values after the cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedStyle(BTreeMap<String, String>);

impl ComputedStyle {
    /// Computed value of `property`, if any class set it.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Column count from `grid-template-columns: repeat(N, ...)`.
    pub fn grid_columns(&self) -> Option<u8> {
        let value = self.get("grid-template-columns")?;
        let inner = value.strip_prefix("repeat(")?;
        inner.split(',').next()?.trim().parse().ok()
    }

    fn apply(&mut self, utility: &Utility) {
        for (prop, value) in &utility.declarations {
            self.0.insert(prop.clone(), value.clone());
        }
    }
}

/// Evaluate `classes` (space-separated, as in a `class` attribute).
pub fn computed_style(classes: &str, viewport: Viewport, theme: &Theme) -> ComputedStyle {
    let mut seen: Vec<&str> = Vec::new();
    for class in classes.split_whitespace() {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }

    let utilities: Vec<Utility> = seen
        .iter()
        .filter_map(|c| resolve_utility(c, theme))
        .collect();

    let mut style = ComputedStyle::default();
    let active = Breakpoint::ALL
        .into_iter()
        .filter(|bp| viewport.width >= bp.min_width())
        .map(Some);
    for bp in std::iter::once(None).chain(active) {
        for interactive in [false, true] {
            for u in layer(&utilities, bp, interactive).filter(|u| viewport.matches(&u.variant)) {
                style.apply(u);
            }
        }
    }

    for class in &seen {
        if let Some(decls) = motion::resolved_for(class, viewport.hovered) {
            for (prop, value) in decls {
                style.0.insert(prop, value);
            }
        }
    }

    style
}

fn layer(
    utilities: &[Utility],
    bp: Option<Breakpoint>,
    interactive: bool,
) -> impl Iterator<Item = &Utility> {
    utilities
        .iter()
        .filter(move |u| u.variant.breakpoint == bp && u.variant.is_interactive() == interactive)
}
