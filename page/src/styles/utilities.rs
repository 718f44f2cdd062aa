//! Utility-class resolution.
//!
//! A class is `[variant:]*[-]body`. Variants are `sm`, `md`, `lg` (min-width
//! media queries), `hover`, and `group-hover` (pointer over the nearest
//! ancestor marked `group`). The body is either a fixed keyword (`flex`,
//! `uppercase`) or `<family>-<value>` where the value comes from a scale, the
//! theme, or an arbitrary `[...]` literal. Anything else resolves to `None`
//! and simply gets no style.

use crate::theme::{Theme, font_stack_css};

/// A CSS property/value pair.
pub type Declaration = (String, String);

/// Responsive breakpoints (min-width).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// 640px
    Sm,
    /// 768px
    Md,
    /// 1024px
    Lg,
}

impl Breakpoint {
    /// Ascending, the order media blocks are emitted in.
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg];

    /// Inclusive lower bound of the viewport width.
    pub fn min_width(self) -> u32 {
        match self {
            Self::Sm => 640,
            Self::Md => 768,
            Self::Lg => 1024,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.prefix() == prefix)
    }
}

/// Conditions under which a utility applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Variant {
    /// Media query, `None` for all widths.
    pub breakpoint: Option<Breakpoint>,
    /// `hover:`
    pub hover: bool,
    /// `group-hover:`
    pub group_hover: bool,
}

impl Variant {
    /// Applies only under some pointer state.
    pub fn is_interactive(&self) -> bool {
        self.hover || self.group_hover
    }
}

/// A resolved utility class.
#[derive(Debug, Clone, PartialEq)]
pub struct Utility {
    /// Class name as written, variants included.
    pub class: String,
    /// Parsed variant prefixes.
    pub variant: Variant,
    /// Empty for marker classes such as `group`.
    pub declarations: Vec<Declaration>,
}

impl Utility {
    /// CSS selector for this class, escaped, with `:hover` when needed.
    pub fn selector(&self) -> String {
        let mut selector = String::new();
        if self.variant.group_hover {
            selector.push_str(".group:hover ");
        }
        selector.push('.');
        selector.push_str(&escape_class(&self.class));
        if self.variant.hover {
            selector.push_str(":hover");
        }
        selector
    }

    /// One rule: selector and declarations on a single line.
    pub fn css(&self) -> String {
        let body = self
            .declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {{ {body} }}", self.selector())
    }
}

/// Escape a class name for use in a CSS selector.
pub fn escape_class(class: &str) -> String {
    let mut out = String::with_capacity(class.len() + 4);
    for (i, c) in class.chars().enumerate() {
        let plain = c.is_ascii_alphanumeric() || c == '-' || c == '_';
        if !plain || (i == 0 && c.is_ascii_digit()) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Resolve one class name against the theme.
pub fn resolve_utility(class: &str, theme: &Theme) -> Option<Utility> {
    let mut parts: Vec<&str> = class.split(':').collect();
    let body = parts.pop()?;
    let mut variant = Variant::default();
    for part in parts {
        if part == "hover" && !variant.hover {
            variant.hover = true;
        } else if part == "group-hover" && !variant.group_hover {
            variant.group_hover = true;
        } else if let Some(bp) = Breakpoint::from_prefix(part) {
            if variant.breakpoint.is_some() {
                return None;
            }
            variant.breakpoint = Some(bp);
        } else {
            return None;
        }
    }

    let (negative, body) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    if body.is_empty() {
        return None;
    }

    let declarations = if negative {
        resolve_negative(body)?
    } else {
        resolve_body(body, theme)?
    };

    Some(Utility {
        class: class.to_string(),
        variant,
        declarations,
    })
}

fn decl(prop: &str, value: impl Into<String>) -> Vec<Declaration> {
    vec![(prop.to_string(), value.into())]
}

fn keyword(body: &str) -> Option<Vec<Declaration>> {
    let single = |p: &str, v: &str| Some(decl(p, v));
    match body {
        "group" => Some(Vec::new()),
        "block" => single("display", "block"),
        "inline-block" => single("display", "inline-block"),
        "flex" => single("display", "flex"),
        "grid" => single("display", "grid"),
        "hidden" => single("display", "none"),
        "flex-col" => single("flex-direction", "column"),
        "flex-row" => single("flex-direction", "row"),
        "items-center" => single("align-items", "center"),
        "items-start" => single("align-items", "flex-start"),
        "justify-center" => single("justify-content", "center"),
        "justify-between" => single("justify-content", "space-between"),
        "relative" => single("position", "relative"),
        "absolute" => single("position", "absolute"),
        "overflow-hidden" => single("overflow", "hidden"),
        "pointer-events-none" => single("pointer-events", "none"),
        "object-cover" => single("object-fit", "cover"),
        "text-left" => single("text-align", "left"),
        "text-center" => single("text-align", "center"),
        "uppercase" => single("text-transform", "uppercase"),
        "border" => Some(vec![
            ("border-width".into(), "1px".into()),
            ("border-style".into(), "solid".into()),
        ]),
        "rounded" => single("border-radius", "0.25rem"),
        "blur" => single("filter", "blur(8px)"),
        "grayscale" => single("filter", "grayscale(100%)"),
        "grayscale-0" => single("filter", "grayscale(0)"),
        "transition" => Some(transition("color, background-color, border-color, opacity, transform, filter")),
        "transition-all" => Some(transition("all")),
        "transition-colors" => Some(transition("color, background-color, border-color")),
        _ => None,
    }
}

fn transition(property: &str) -> Vec<Declaration> {
    vec![
        ("transition-property".into(), property.into()),
        (
            "transition-timing-function".into(),
            "cubic-bezier(0.4, 0, 0.2, 1)".into(),
        ),
        ("transition-duration".into(), "150ms".into()),
    ]
}

/// Families in match order. Longer prefixes come before shorter ones that
/// share a first letter.
const FAMILIES: &[&str] = &[
    "grid-cols-",
    "max-w-",
    "min-h-",
    "translate-x-",
    "translate-y-",
    "tracking-",
    "leading-",
    "rounded-",
    "duration-",
    "animate-",
    "font-",
    "text-",
    "bg-",
    "border-",
    "blur-",
    "inset-",
    "gap-",
    "top-",
    "left-",
    "z-",
    "mx-",
    "my-",
    "px-",
    "py-",
    "pt-",
    "pb-",
    "mt-",
    "mb-",
    "p-",
    "m-",
    "w-",
    "h-",
];

fn resolve_body(body: &str, theme: &Theme) -> Option<Vec<Declaration>> {
    if let Some(decls) = keyword(body) {
        return Some(decls);
    }
    FAMILIES.iter().find_map(|&family| {
        let value = body.strip_prefix(family)?;
        if value.is_empty() {
            return None;
        }
        family_value(family, value, theme)
    })
}

fn resolve_negative(body: &str) -> Option<Vec<Declaration>> {
    let negate = |v: String| {
        if v == "0px" || v == "0" {
            v
        } else {
            format!("-{v}")
        }
    };
    if let Some(v) = body.strip_prefix("translate-x-") {
        return Some(decl("transform", format!("translateX({})", negate(length(v)?))));
    }
    if let Some(v) = body.strip_prefix("translate-y-") {
        return Some(decl("transform", format!("translateY({})", negate(length(v)?))));
    }
    for (family, prop) in [("mt-", "margin-top"), ("mb-", "margin-bottom"), ("top-", "top"), ("left-", "left")] {
        if let Some(v) = body.strip_prefix(family) {
            return Some(decl(prop, negate(length(v)?)));
        }
    }
    None
}

fn family_value(family: &str, value: &str, theme: &Theme) -> Option<Vec<Declaration>> {
    match family {
        "grid-cols-" => {
            let n: u8 = value.parse().ok().filter(|n| (1..=12).contains(n))?;
            Some(decl(
                "grid-template-columns",
                format!("repeat({n}, minmax(0, 1fr))"),
            ))
        }
        "max-w-" => Some(decl("max-width", max_width(value)?)),
        "min-h-" => Some(decl("min-height", height(value)?)),
        "translate-x-" => Some(decl("transform", format!("translateX({})", length(value)?))),
        "translate-y-" => Some(decl("transform", format!("translateY({})", length(value)?))),
        "tracking-" => Some(decl("letter-spacing", tracking(value)?)),
        "leading-" => Some(decl("line-height", leading(value)?)),
        "rounded-" => Some(decl("border-radius", radius(value)?)),
        "duration-" => {
            let ms: u32 = value.parse().ok()?;
            Some(decl("transition-duration", format!("{ms}ms")))
        }
        "animate-" => {
            let animation = theme.animation(value)?;
            Some(decl("animation", animation.shorthand(value)))
        }
        "font-" => {
            if let Some(weight) = font_weight(value) {
                return Some(decl("font-weight", weight));
            }
            let stack = theme.font(value)?;
            Some(decl(
                "font-family",
                format!("var(--font-{value}, {})", font_stack_css(stack)),
            ))
        }
        "text-" => {
            if let Some((size, line_height)) = font_size(value) {
                return Some(vec![
                    ("font-size".into(), size.into()),
                    ("line-height".into(), line_height.into()),
                ]);
            }
            Some(decl("color", color(value, theme)?))
        }
        "bg-" => Some(decl("background-color", color(value, theme)?)),
        "border-" => {
            if let Ok(width) = value.parse::<u8>() {
                return Some(vec![
                    ("border-width".into(), format!("{width}px")),
                    ("border-style".into(), "solid".into()),
                ]);
            }
            Some(decl("border-color", color(value, theme)?))
        }
        "blur-" => Some(decl("filter", format!("blur({})", blur(value)?))),
        "inset-" => Some(decl("inset", length(value)?)),
        "gap-" => Some(decl("gap", length(value)?)),
        "top-" => Some(decl("top", length(value)?)),
        "left-" => Some(decl("left", length(value)?)),
        "z-" => {
            let z: u16 = value.parse().ok()?;
            Some(decl("z-index", z.to_string()))
        }
        "mx-" => {
            let v = length(value)?;
            Some(vec![
                ("margin-left".into(), v.clone()),
                ("margin-right".into(), v),
            ])
        }
        "my-" => {
            let v = length(value)?;
            Some(vec![
                ("margin-top".into(), v.clone()),
                ("margin-bottom".into(), v),
            ])
        }
        "px-" => {
            let v = length(value)?;
            Some(vec![
                ("padding-left".into(), v.clone()),
                ("padding-right".into(), v),
            ])
        }
        "py-" => {
            let v = length(value)?;
            Some(vec![
                ("padding-top".into(), v.clone()),
                ("padding-bottom".into(), v),
            ])
        }
        "pt-" => Some(decl("padding-top", length(value)?)),
        "pb-" => Some(decl("padding-bottom", length(value)?)),
        "mt-" => Some(decl("margin-top", length(value)?)),
        "mb-" => Some(decl("margin-bottom", length(value)?)),
        "p-" => Some(decl("padding", length(value)?)),
        "m-" => Some(decl("margin", length(value)?)),
        "w-" => Some(decl("width", width(value)?)),
        "h-" => Some(decl("height", height(value)?)),
        _ => None,
    }
}

fn arbitrary(value: &str) -> Option<&str> {
    value
        .strip_prefix('[')?
        .strip_suffix(']')
        .filter(|v| !v.is_empty() && !v.contains(|c: char| c.is_whitespace() || matches!(c, ';' | '{' | '}' | '<' | '>')))
}

fn rem(n: f32) -> String {
    format!("{}rem", n)
}

/// Spacing scale: `n` steps of 0.25rem, `px`, fractions, `full`, `auto`,
/// or an arbitrary `[...]` length.
fn length(value: &str) -> Option<String> {
    if let Some(raw) = arbitrary(value) {
        return Some(raw.to_string());
    }
    match value {
        "0" => return Some("0px".into()),
        "px" => return Some("1px".into()),
        "full" => return Some("100%".into()),
        "auto" => return Some("auto".into()),
        _ => {}
    }
    if let Some((num, den)) = value.split_once('/') {
        let num = f32::from(digits(num)?);
        let den = f32::from(digits(den).filter(|d| *d > 0)?);
        return Some(format!("{}%", (num / den * 100.0 * 1000.0).round() / 1000.0));
    }
    let steps: f32 = value.parse().ok().filter(|s: &f32| s.is_finite() && *s >= 0.0)?;
    if (steps * 2.0).fract() != 0.0 {
        return None;
    }
    Some(rem(steps * 0.25))
}

/// Plain decimal integer, no sign.
fn digits(value: &str) -> Option<u16> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn width(value: &str) -> Option<String> {
    match value {
        "screen" => Some("100vw".into()),
        _ => length(value),
    }
}

fn height(value: &str) -> Option<String> {
    match value {
        "screen" => Some("100vh".into()),
        _ => length(value),
    }
}

fn max_width(value: &str) -> Option<String> {
    if let Some(raw) = arbitrary(value) {
        return Some(raw.to_string());
    }
    let size = match value {
        "sm" => 24.0,
        "md" => 28.0,
        "lg" => 32.0,
        "xl" => 36.0,
        "2xl" => 42.0,
        "3xl" => 48.0,
        "4xl" => 56.0,
        "5xl" => 64.0,
        "6xl" => 72.0,
        "7xl" => 80.0,
        "full" => return Some("100%".into()),
        "none" => return Some("none".into()),
        _ => return None,
    };
    Some(rem(size))
}

fn font_size(value: &str) -> Option<(&'static str, &'static str)> {
    Some(match value {
        "xs" => ("0.75rem", "1rem"),
        "sm" => ("0.875rem", "1.25rem"),
        "base" => ("1rem", "1.5rem"),
        "lg" => ("1.125rem", "1.75rem"),
        "xl" => ("1.25rem", "1.75rem"),
        "2xl" => ("1.5rem", "2rem"),
        "3xl" => ("1.875rem", "2.25rem"),
        "4xl" => ("2.25rem", "2.5rem"),
        "5xl" => ("3rem", "1"),
        "6xl" => ("3.75rem", "1"),
        "7xl" => ("4.5rem", "1"),
        _ => return None,
    })
}

fn font_weight(value: &str) -> Option<&'static str> {
    Some(match value {
        "light" => "300",
        "normal" => "400",
        "medium" => "500",
        "semibold" => "600",
        "bold" => "700",
        "black" => "900",
        _ => return None,
    })
}

fn tracking(value: &str) -> Option<&'static str> {
    Some(match value {
        "tighter" => "-0.05em",
        "tight" => "-0.025em",
        "normal" => "0em",
        "wide" => "0.025em",
        "wider" => "0.05em",
        "widest" => "0.1em",
        _ => return None,
    })
}

fn leading(value: &str) -> Option<&'static str> {
    Some(match value {
        "none" => "1",
        "tight" => "1.25",
        "snug" => "1.375",
        "normal" => "1.5",
        "relaxed" => "1.625",
        "loose" => "2",
        _ => return None,
    })
}

fn radius(value: &str) -> Option<String> {
    if let Some(raw) = arbitrary(value) {
        return Some(raw.to_string());
    }
    Some(
        match value {
            "none" => "0px",
            "sm" => "0.125rem",
            "md" => "0.375rem",
            "lg" => "0.5rem",
            "xl" => "0.75rem",
            "2xl" => "1rem",
            "3xl" => "1.5rem",
            "full" => "9999px",
            _ => return None,
        }
        .to_string(),
    )
}

fn blur(value: &str) -> Option<String> {
    if let Some(raw) = arbitrary(value) {
        return Some(raw.to_string());
    }
    Some(
        match value {
            "none" => "0",
            "sm" => "4px",
            "md" => "12px",
            "lg" => "16px",
            "xl" => "24px",
            "2xl" => "40px",
            "3xl" => "64px",
            _ => return None,
        }
        .to_string(),
    )
}

/// Built-in neutrals available next to the theme colors.
fn palette(name: &str) -> Option<&'static str> {
    Some(match name {
        "white" => "#ffffff",
        "black" => "#000000",
        "transparent" => "transparent",
        "gray-300" => "#d1d5db",
        "gray-400" => "#9ca3af",
        "gray-500" => "#6b7280",
        "gray-600" => "#4b5563",
        "gray-800" => "#1f2937",
        _ => return None,
    })
}

/// Theme color (as a custom property reference) or palette color, with an
/// optional `/NN` opacity suffix.
fn color(value: &str, theme: &Theme) -> Option<String> {
    let (name, alpha) = match value.split_once('/') {
        Some((name, alpha)) => {
            let alpha: u8 = alpha.parse().ok().filter(|a| *a <= 100)?;
            (name, Some(alpha))
        }
        None => (value, None),
    };
    let base = if theme.color(name).is_some() {
        format!("var(--color-{name})")
    } else {
        palette(name)?.to_string()
    };
    Some(match alpha {
        Some(a) => format!("color-mix(in srgb, {base} {a}%, transparent)"),
        None => base,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(class: &str) -> Option<Utility> {
        resolve_utility(class, &Theme::default())
    }

    fn decls(class: &str) -> Vec<Declaration> {
        resolve(class)
            .unwrap_or_else(|| panic!("{class} should resolve"))
            .declarations
    }

    fn one(prop: &str, value: &str) -> Vec<Declaration> {
        vec![(prop.to_string(), value.to_string())]
    }

    #[test]
    fn spacing_scale_is_quarter_rem() {
        assert_eq!(decls("p-8"), one("padding", "2rem"));
        assert_eq!(decls("w-14"), one("width", "3.5rem"));
        assert_eq!(decls("gap-0.5"), one("gap", "0.125rem"));
        assert_eq!(decls("w-px"), one("width", "1px"));
        assert_eq!(decls("left-1/2"), one("left", "50%"));
        assert_eq!(decls("w-[600px]"), one("width", "600px"));
    }

    #[test]
    fn fractions_must_be_plain_integers() {
        assert_eq!(decls("w-1/3"), one("width", "33.333%"));
        for class in ["w-inf/2", "left-NaN/2", "w-1/inf", "w-1/0", "w-+1/2", "w-0.5/2", "w-/2"] {
            assert_eq!(resolve(class), None, "{class} resolved");
        }
    }

    #[test]
    fn theme_colors_resolve_to_custom_properties() {
        assert_eq!(decls("bg-voidBlack"), one("background-color", "var(--color-voidBlack)"));
        assert_eq!(
            decls("bg-rosePink/10"),
            one(
                "background-color",
                "color-mix(in srgb, var(--color-rosePink) 10%, transparent)"
            )
        );
        assert_eq!(decls("text-gray-400"), one("color", "#9ca3af"));
    }

    #[test]
    fn unknown_theme_color_does_not_resolve() {
        assert!(resolve("text-neonGreen").is_none());
        assert!(resolve("bg-rosePink/250").is_none());
    }

    #[test]
    fn text_prefers_size_over_color() {
        assert_eq!(
            decls("text-xl"),
            vec![
                ("font-size".to_string(), "1.25rem".to_string()),
                ("line-height".to_string(), "1.75rem".to_string()),
            ]
        );
        assert_eq!(decls("text-center"), one("text-align", "center"));
    }

    #[test]
    fn fonts_resolve_from_theme() {
        assert_eq!(decls("font-bold"), one("font-weight", "700"));
        assert_eq!(
            decls("font-gaming"),
            one("font-family", "var(--font-gaming, \"Orbitron\", sans-serif)")
        );
        assert!(resolve("font-comic").is_none());
    }

    #[test]
    fn animation_resolves_from_theme() {
        assert_eq!(decls("animate-pulse-evil"), one("animation", "pulse-evil 3s infinite"));
        assert!(resolve("animate-spin").is_none());
    }

    #[test]
    fn variants_are_parsed() {
        let md = resolve("md:grid-cols-3").unwrap();
        assert_eq!(md.variant.breakpoint, Some(Breakpoint::Md));
        assert!(!md.variant.hover);
        assert_eq!(
            md.declarations,
            one("grid-template-columns", "repeat(3, minmax(0, 1fr))")
        );

        let hover = resolve("hover:grayscale-0").unwrap();
        assert!(hover.variant.hover);
        assert_eq!(hover.selector(), ".hover\\:grayscale-0:hover");

        assert!(resolve("focus:flex").is_none());
        assert!(resolve("md:lg:flex").is_none());
    }

    #[test]
    fn group_hover_targets_descendants_of_group() {
        let icon = resolve("group-hover:bg-rosePink/20").unwrap();
        assert!(icon.variant.group_hover);
        assert!(!icon.variant.hover);
        assert!(icon.variant.is_interactive());
        assert_eq!(
            icon.css(),
            ".group:hover .group-hover\\:bg-rosePink\\/20 { background-color: color-mix(in srgb, var(--color-rosePink) 20%, transparent); }"
        );

        let md = resolve("md:group-hover:flex").unwrap();
        assert_eq!(md.variant.breakpoint, Some(Breakpoint::Md));
        assert!(md.variant.group_hover);

        assert!(resolve("group-hover:group-hover:flex").is_none());
    }

    #[test]
    fn group_is_a_marker_without_declarations() {
        let group = resolve("group").unwrap();
        assert!(group.declarations.is_empty());
        assert_eq!(group.variant, Variant::default());
    }

    #[test]
    fn negative_translate() {
        assert_eq!(decls("-translate-x-1/2"), one("transform", "translateX(-50%)"));
        assert!(resolve("-flex").is_none());
    }

    #[test]
    fn selectors_are_escaped() {
        assert_eq!(escape_class("md:grid-cols-3"), "md\\:grid-cols-3");
        assert_eq!(escape_class("w-[600px]"), "w-\\[600px\\]");
        assert_eq!(escape_class("bg-rosePink/10"), "bg-rosePink\\/10");
        assert_eq!(escape_class("gap-0.5"), "gap-0\\.5");
    }

    #[test]
    fn arbitrary_values_reject_css_injection() {
        assert!(resolve("w-[1px;color:red]").is_none());
        assert!(resolve("w-[]").is_none());
    }

    #[test]
    fn utility_css_renders_rule() {
        let u = resolve("border").unwrap();
        assert_eq!(u.css(), ".border { border-width: 1px; border-style: solid; }");
    }
}
