//! Compile the classes found in rendered markup into one stylesheet.

use super::BASE_CSS;
use super::utilities::{Breakpoint, Utility, resolve_utility};
use crate::motion;
use crate::theme::Theme;
use std::collections::BTreeSet;

/// Output of [`compile_stylesheet`].
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    /// Complete stylesheet text.
    pub css: String,
    /// Classes that produced no CSS, in first-seen order.
    pub unresolved: Vec<String>,
}

/// Build the stylesheet for `classes`.
///
/// Rule order: base reset, theme custom properties, keyframes for used theme
/// animations, plain utilities, `hover:`/`group-hover:` utilities, one media
/// block per breakpoint (ascending), then motion rules. Within each group
/// classes keep their first-seen order. Marker classes such as `group` emit
/// nothing. Unresolved classes are reported and skipped.
pub fn compile_stylesheet(classes: &[String], theme: &Theme) -> Stylesheet {
    let mut seen = BTreeSet::new();
    let mut utilities: Vec<Utility> = Vec::new();
    let mut motion_css = String::new();
    let mut animations: Vec<&str> = Vec::new();
    let mut unresolved = Vec::new();

    for class in classes {
        if !seen.insert(class.as_str()) {
            continue;
        }
        if let Some(css) = motion::css_for(class) {
            motion_css.push_str(&css);
            continue;
        }
        match resolve_utility(class, theme) {
            Some(utility) => {
                let animation = class
                    .rsplit(':')
                    .next()
                    .and_then(|b| b.strip_prefix("animate-"));
                if let Some(name) = animation.filter(|n| !animations.contains(n)) {
                    animations.push(name);
                }
                if !utility.declarations.is_empty() {
                    utilities.push(utility);
                }
            }
            None => {
                tracing::warn!(class = %class, "unresolved utility class, no style applied");
                unresolved.push(class.clone());
            }
        }
    }

    let mut css = String::from(BASE_CSS);
    css.push_str(&theme.custom_properties());

    for name in animations {
        if let Some(animation) = theme.animation(name) {
            css.push_str(&animation.keyframes_css(name));
        }
    }

    let plain = |u: &&Utility| u.variant.breakpoint.is_none();
    for utility in utilities.iter().filter(plain).filter(|u| !u.variant.is_interactive()) {
        css.push_str(&utility.css());
        css.push('\n');
    }
    for utility in utilities.iter().filter(plain).filter(|u| u.variant.is_interactive()) {
        css.push_str(&utility.css());
        css.push('\n');
    }

    for bp in Breakpoint::ALL {
        let mut in_bp: Vec<&Utility> = utilities
            .iter()
            .filter(|u| u.variant.breakpoint == Some(bp))
            .collect();
        if in_bp.is_empty() {
            continue;
        }
        in_bp.sort_by_key(|u| u.variant.is_interactive());
        css.push_str(&format!("@media (min-width: {}px) {{\n", bp.min_width()));
        for utility in in_bp {
            css.push_str("    ");
            css.push_str(&utility.css());
            css.push('\n');
        }
        css.push_str("}\n");
    }

    css.push_str(&motion_css);

    tracing::debug!(
        classes = seen.len(),
        unresolved = unresolved.len(),
        bytes = css.len(),
        "compiled stylesheet"
    );

    Stylesheet { css, unresolved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classes(list: &str) -> Vec<String> {
        list.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn media_rules_follow_plain_rules() {
        let sheet = compile_stylesheet(
            &classes("md:grid-cols-3 grid grid-cols-1"),
            &Theme::default(),
        );
        let base = sheet.css.find(".grid-cols-1 {").unwrap();
        let media = sheet.css.find("@media (min-width: 768px) {").unwrap();
        let md = sheet.css.find(".md\\:grid-cols-3 {").unwrap();
        assert!(base < media && media < md);
        assert!(sheet.unresolved.is_empty());
    }

    #[test]
    fn hover_rules_follow_plain_rules() {
        let sheet = compile_stylesheet(&classes("hover:grayscale-0 grayscale"), &Theme::default());
        let plain = sheet.css.find(".grayscale {").unwrap();
        let hover = sheet.css.find(".hover\\:grayscale-0:hover {").unwrap();
        assert!(plain < hover);
    }

    #[test]
    fn group_hover_rules_follow_plain_rules_and_group_emits_nothing() {
        let sheet = compile_stylesheet(
            &classes("group group-hover:text-rosePink text-white"),
            &Theme::default(),
        );
        assert!(sheet.unresolved.is_empty());
        assert!(!sheet.css.contains(".group {"));
        let plain = sheet.css.find(".text-white {").unwrap();
        let grouped = sheet
            .css
            .find(".group:hover .group-hover\\:text-rosePink { color: var(--color-rosePink); }")
            .unwrap();
        assert!(plain < grouped);
    }

    #[test]
    fn unresolved_classes_are_reported_once() {
        let sheet = compile_stylesheet(
            &classes("flex text-neonGreen flex text-neonGreen sparkle"),
            &Theme::default(),
        );
        assert_eq!(sheet.unresolved, vec!["text-neonGreen", "sparkle"]);
        assert!(!sheet.css.contains("neonGreen"));
    }

    #[test]
    fn used_theme_animation_emits_keyframes() {
        let theme = Theme::default();
        let without = compile_stylesheet(&classes("flex"), &theme);
        assert!(!without.css.contains("@keyframes pulse-evil"));

        let with = compile_stylesheet(&classes("animate-pulse-evil"), &theme);
        assert!(with.css.contains("@keyframes pulse-evil"));
        assert!(with.css.contains(".animate-pulse-evil { animation: pulse-evil 3s infinite; }"));
    }

    #[test]
    fn motion_classes_compile_from_tables() {
        let sheet = compile_stylesheet(&classes("motion-enter motion-lift"), &Theme::default());
        assert!(sheet.unresolved.is_empty());
        assert!(sheet.css.contains("@keyframes motion-enter"));
        assert!(sheet.css.contains(".motion-lift:hover { transform: translateY(-10px); }"));
    }

    #[test]
    fn theme_properties_are_always_present() {
        let sheet = compile_stylesheet(&[], &Theme::default());
        assert!(sheet.css.contains("--color-voidBlack: #050505;"));
        assert!(sheet.css.contains("--font-body: \"Rajdhani\", sans-serif;"));
    }
}
