//! Theme tokens consumed by the utility-class resolver.
//!
//! A [`Theme`] is built once at startup (built-in table, optionally merged with
//! [`ThemeOverrides`] from config) and handed to the renderer by reference.
//! Token names are map keys, so they are unique per category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Token categories, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// `colors` table.
    Color,
    /// `fonts` table.
    Font,
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Color => f.write_str("color"),
            Self::Font => f.write_str("font"),
        }
    }
}

/// Rejected theme overrides.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    /// Color value is not `#rgb` or `#rrggbb`.
    #[error("color token `{name}` has invalid value `{value}` (expected #rgb or #rrggbb)")]
    InvalidColor {
        /// Token name.
        name: String,
        /// Rejected value.
        value: String,
    },

    /// Font stack has no families.
    #[error("font token `{name}` has an empty family list")]
    EmptyFontStack {
        /// Token name.
        name: String,
    },

    /// A family in a font stack is blank or uses characters outside
    /// `[A-Za-z0-9 _-]`.
    #[error(
        "font token `{name}` has invalid family `{family}` (expected letters, digits, spaces, `_` or `-`)"
    )]
    InvalidFontFamily {
        /// Token name.
        name: String,
        /// Rejected family.
        family: String,
    },

    /// Override names a token the built-in theme does not define.
    #[error("unknown {category} token `{name}`")]
    UnknownToken {
        /// Table the token was looked up in.
        category: TokenCategory,
        /// Token name.
        name: String,
    },
}

/// A named keyframe animation (`animate-<name>`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    /// Length of one cycle.
    pub duration_ms: u32,
    /// `None` means infinite.
    pub iterations: Option<u32>,
    /// CSS timing function.
    pub timing: String,
    /// Keyframe blocks in emission order.
    pub keyframes: Vec<Keyframe>,
}

/// One keyframe block: the percentage stops it applies to and its declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframe {
    /// Percentages, `0..=100`.
    pub stops: Vec<u8>,
    /// `(property, value)` pairs.
    pub declarations: Vec<(String, String)>,
}

impl Animation {
    /// Value for the `animation` shorthand, e.g. `pulse-evil 3s infinite`.
    pub fn shorthand(&self, name: &str) -> String {
        let duration = if self.duration_ms % 1000 == 0 {
            format!("{}s", self.duration_ms / 1000)
        } else {
            format!("{}ms", self.duration_ms)
        };
        let mut value = format!("{name} {duration}");
        if self.timing != "ease" {
            value.push(' ');
            value.push_str(&self.timing);
        }
        match self.iterations {
            None => value.push_str(" infinite"),
            Some(1) => {}
            Some(n) => value.push_str(&format!(" {n}")),
        }
        value
    }

    /// The `@keyframes` block for this animation.
    pub fn keyframes_css(&self, name: &str) -> String {
        let mut css = format!("@keyframes {name} {{\n");
        for frame in &self.keyframes {
            let stops = frame
                .stops
                .iter()
                .map(|s| format!("{s}%"))
                .collect::<Vec<_>>()
                .join(", ");
            css.push_str(&format!("    {stops} {{"));
            for (prop, value) in &frame.declarations {
                css.push_str(&format!(" {prop}: {value};"));
            }
            css.push_str(" }\n");
        }
        css.push_str("}\n");
        css
    }
}

/// The name -> value tables for colors, font stacks and animations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    /// Color name to lowercase hex value.
    pub colors: BTreeMap<String, String>,
    /// Font name to family stack, most preferred first.
    pub fonts: BTreeMap<String, Vec<String>>,
    /// Animation name to definition.
    pub animations: BTreeMap<String, Animation>,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = [
            ("voidBlack", "#050505"),
            ("voidDark", "#0f0f13"),
            ("rosePink", "#ff007f"),
            ("roseGlow", "#ff4da6"),
            ("auraPurple", "#8a2be2"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let fonts = [("gaming", "Orbitron"), ("body", "Rajdhani")]
            .into_iter()
            .map(|(k, family)| (k.to_string(), vec![family.to_string(), "sans-serif".to_string()]))
            .collect();

        let mut animations = BTreeMap::new();
        animations.insert(
            "pulse-evil".to_string(),
            Animation {
                duration_ms: 3000,
                iterations: None,
                timing: "ease".to_string(),
                keyframes: vec![
                    Keyframe {
                        stops: vec![0, 100],
                        declarations: vec![(
                            "box-shadow".into(),
                            "0 0 10px var(--color-rosePink)".into(),
                        )],
                    },
                    Keyframe {
                        stops: vec![50],
                        declarations: vec![(
                            "box-shadow".into(),
                            "0 0 25px var(--color-rosePink), 0 0 10px var(--color-auraPurple)"
                                .into(),
                        )],
                    },
                ],
            },
        );

        Self {
            colors,
            fonts,
            animations,
        }
    }
}

/// Partial theme read from config. Only tokens the built-in theme already
/// defines may be overridden.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    /// `[theme.colors]`
    pub colors: BTreeMap<String, String>,
    /// `[theme.fonts]`
    pub fonts: BTreeMap<String, Vec<String>>,
}

impl ThemeOverrides {
    /// True when config overrides nothing.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.fonts.is_empty()
    }
}

impl Theme {
    /// Hex value of a color token.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Family stack of a font token.
    pub fn font(&self, name: &str) -> Option<&[String]> {
        self.fonts.get(name).map(Vec::as_slice)
    }

    /// Definition of an animation token.
    pub fn animation(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    /// Merge config overrides into this theme. Validation runs before
    /// anything is written, so a rejected override leaves `self` untouched.
    pub fn apply_overrides(&mut self, overrides: &ThemeOverrides) -> Result<(), ThemeError> {
        for (name, value) in &overrides.colors {
            if !self.colors.contains_key(name) {
                return Err(ThemeError::UnknownToken {
                    category: TokenCategory::Color,
                    name: name.clone(),
                });
            }
            if !is_hex_color(value) {
                return Err(ThemeError::InvalidColor {
                    name: name.clone(),
                    value: value.clone(),
                });
            }
        }
        for (name, stack) in &overrides.fonts {
            if !self.fonts.contains_key(name) {
                return Err(ThemeError::UnknownToken {
                    category: TokenCategory::Font,
                    name: name.clone(),
                });
            }
            if stack.is_empty() {
                return Err(ThemeError::EmptyFontStack { name: name.clone() });
            }
            if let Some(family) = stack.iter().find(|f| !is_valid_family(f)) {
                return Err(ThemeError::InvalidFontFamily {
                    name: name.clone(),
                    family: family.clone(),
                });
            }
        }

        for (name, value) in &overrides.colors {
            self.colors.insert(name.clone(), value.to_ascii_lowercase());
        }
        for (name, stack) in &overrides.fonts {
            self.fonts.insert(name.clone(), stack.clone());
        }
        tracing::debug!(
            colors = overrides.colors.len(),
            fonts = overrides.fonts.len(),
            "applied theme overrides"
        );
        Ok(())
    }

    /// `:root` custom properties for every color and font token.
    pub fn custom_properties(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.colors {
            css.push_str(&format!("    --color-{name}: {value};\n"));
        }
        for (name, stack) in &self.fonts {
            css.push_str(&format!("    --font-{name}: {};\n", font_stack_css(stack)));
        }
        css.push_str("}\n");
        css
    }

    /// Web-font stylesheet URL for the non-generic families of every font
    /// token, or `None` when all stacks are generic.
    pub fn font_stylesheet_href(&self) -> Option<String> {
        let mut families: Vec<&str> = self
            .fonts
            .values()
            .filter_map(|stack| stack.first())
            .map(String::as_str)
            .filter(|f| !is_generic_family(f))
            .collect();
        families.sort_unstable();
        families.dedup();
        if families.is_empty() {
            return None;
        }
        let query = families
            .iter()
            .map(|f| format!("family={}:wght@400;700", f.replace(' ', "+")))
            .collect::<Vec<_>>()
            .join("&");
        Some(format!("https://fonts.googleapis.com/css2?{query}&display=swap"))
    }
}

/// Render a font stack for CSS, quoting named families.
pub fn font_stack_css(stack: &[String]) -> String {
    stack
        .iter()
        .map(|f| {
            if is_generic_family(f) {
                f.clone()
            } else {
                format!("\"{f}\"")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_generic_family(family: &str) -> bool {
    matches!(
        family,
        "serif" | "sans-serif" | "monospace" | "cursive" | "fantasy" | "system-ui"
    )
}

/// Families end up inside a quoted CSS string in an inline `<style>`.
fn is_valid_family(family: &str) -> bool {
    !family.trim().is_empty()
        && family
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_theme_has_every_token() {
        let theme = Theme::default();
        for name in ["voidBlack", "voidDark", "rosePink", "roseGlow", "auraPurple"] {
            assert!(theme.color(name).is_some(), "missing color {name}");
        }
        assert_eq!(
            theme.font("gaming").unwrap(),
            &["Orbitron".to_string(), "sans-serif".to_string()]
        );
        assert_eq!(
            theme.font("body").unwrap(),
            &["Rajdhani".to_string(), "sans-serif".to_string()]
        );
        assert!(theme.animation("pulse-evil").is_some());
    }

    #[test]
    fn pulse_evil_is_a_three_second_infinite_cycle() {
        let theme = Theme::default();
        let pulse = theme.animation("pulse-evil").unwrap();
        assert_eq!(pulse.shorthand("pulse-evil"), "pulse-evil 3s infinite");

        let css = pulse.keyframes_css("pulse-evil");
        assert!(css.starts_with("@keyframes pulse-evil {"));
        assert!(css.contains("0%, 100% { box-shadow: 0 0 10px var(--color-rosePink); }"));
        assert!(css.contains(
            "50% { box-shadow: 0 0 25px var(--color-rosePink), 0 0 10px var(--color-auraPurple); }"
        ));
    }

    #[test]
    fn overrides_merge_over_defaults() {
        let mut theme = Theme::default();
        let overrides = ThemeOverrides {
            colors: [("rosePink".to_string(), "#FF1F8F".to_string())].into(),
            fonts: [(
                "body".to_string(),
                vec!["Exo 2".to_string(), "sans-serif".to_string()],
            )]
            .into(),
        };
        theme.apply_overrides(&overrides).unwrap();

        assert_eq!(theme.color("rosePink"), Some("#ff1f8f"));
        assert_eq!(theme.color("voidBlack"), Some("#050505"));
        assert_eq!(theme.font("body").unwrap()[0], "Exo 2");
    }

    #[test]
    fn invalid_color_is_rejected_without_partial_writes() {
        let mut theme = Theme::default();
        let overrides = ThemeOverrides {
            colors: [
                ("auraPurple".to_string(), "#123456".to_string()),
                ("rosePink".to_string(), "hotpink".to_string()),
            ]
            .into(),
            ..Default::default()
        };
        let err = theme.apply_overrides(&overrides).unwrap_err();
        assert_eq!(
            err,
            ThemeError::InvalidColor {
                name: "rosePink".into(),
                value: "hotpink".into()
            }
        );
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let mut theme = Theme::default();
        let overrides = ThemeOverrides {
            colors: [("neonGreen".to_string(), "#0f0".to_string())].into(),
            ..Default::default()
        };
        let err = theme.apply_overrides(&overrides).unwrap_err();
        assert_eq!(err.to_string(), "unknown color token `neonGreen`");
    }

    fn font_override(name: &str, stack: &[&str]) -> ThemeOverrides {
        ThemeOverrides {
            fonts: [(
                name.to_string(),
                stack.iter().map(|f| f.to_string()).collect(),
            )]
            .into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_font_stack_is_rejected() {
        let mut theme = Theme::default();
        assert_eq!(
            theme.apply_overrides(&font_override("gaming", &[])),
            Err(ThemeError::EmptyFontStack {
                name: "gaming".into()
            })
        );
    }

    #[test]
    fn blank_family_in_stack_is_rejected() {
        let mut theme = Theme::default();
        assert_eq!(
            theme.apply_overrides(&font_override("gaming", &["", "sans-serif"])),
            Err(ThemeError::InvalidFontFamily {
                name: "gaming".into(),
                family: String::new()
            })
        );
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn family_cannot_escape_the_stylesheet() {
        let mut theme = Theme::default();
        let hostile = "X\"; } body { display: none } </style><h1>pwn</h1><style>";
        let err = theme
            .apply_overrides(&font_override("body", &[hostile, "sans-serif"]))
            .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidFontFamily { ref family, .. } if family == hostile));

        let css = theme.custom_properties();
        assert!(!css.contains("</style>"));
        assert!(css.contains("--font-body: \"Rajdhani\", sans-serif;"));
    }

    #[test]
    fn punctuation_in_family_is_rejected() {
        let mut theme = Theme::default();
        for family in ["Orbitron;", "Exo{2}", "A<b", "Quote\"d"] {
            assert!(
                matches!(
                    theme.apply_overrides(&font_override("gaming", &[family])),
                    Err(ThemeError::InvalidFontFamily { .. })
                ),
                "accepted {family}"
            );
        }
        theme
            .apply_overrides(&font_override("gaming", &["Press Start 2P", "monospace"]))
            .unwrap();
        assert_eq!(theme.font("gaming").unwrap()[0], "Press Start 2P");
    }

    #[test]
    fn custom_properties_quote_named_families() {
        let css = Theme::default().custom_properties();
        assert!(css.contains("--color-rosePink: #ff007f;"));
        assert!(css.contains("--font-gaming: \"Orbitron\", sans-serif;"));
    }

    #[test]
    fn font_href_lists_named_families() {
        let href = Theme::default().font_stylesheet_href().unwrap();
        assert_eq!(
            href,
            "https://fonts.googleapis.com/css2?family=Orbitron:wght@400;700&family=Rajdhani:wght@400;700&display=swap"
        );
    }
}
