//! Theme resolution: theme name to token colors
//!
//! Three built-in themes always resolve; every other name goes through the
//! injected [`ThemeProvider`]. A missing custom theme is a caller-visible
//! error, never a silent substitution.

pub mod provider;

pub use provider::{load_theme_file, InMemoryThemeProvider, ThemeProvider};

use serde::{Deserialize, Serialize};

use crate::error::CompileError;
use crate::models::Rgb;

/// The ten display colors of a theme
///
/// This is also the external theme-resource format: a flat record with
/// exactly these fields, colors as `#rrggbb` strings.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeColors {
    pub background: Rgb,
    pub foreground: Rgb,
    pub keyword: Rgb,
    pub string: Rgb,
    pub comment: Rgb,
    pub number: Rgb,
    pub operator: Rgb,
    pub identifier: Rgb,
    pub function_name: Rgb,
    pub class_name: Rgb,
}

impl ThemeColors {
    /// Parse a theme record from its JSON resource form, validating every
    /// color field's shape
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

/// Dark ink on paper white, the default for e-ink rendering
pub const CLASSIC: ThemeColors = ThemeColors {
    background: Rgb::new(0xf5, 0xf1, 0xe8),
    foreground: Rgb::new(0x1a, 0x1a, 0x1a),
    keyword: Rgb::new(0x1f, 0x3a, 0x93),
    string: Rgb::new(0x2d, 0x6a, 0x4f),
    comment: Rgb::new(0x8a, 0x81, 0x7c),
    number: Rgb::new(0x9c, 0x38, 0x48),
    operator: Rgb::new(0x1a, 0x1a, 0x1a),
    identifier: Rgb::new(0x1a, 0x1a, 0x1a),
    function_name: Rgb::new(0x5e, 0x30, 0x23),
    class_name: Rgb::new(0x4a, 0x25, 0x45),
};

/// Light ink on near-black
pub const NIGHT: ThemeColors = ThemeColors {
    background: Rgb::new(0x1c, 0x1c, 0x1e),
    foreground: Rgb::new(0xe8, 0xe4, 0xd8),
    keyword: Rgb::new(0x7d, 0xa6, 0xff),
    string: Rgb::new(0x8f, 0xd4, 0x9e),
    comment: Rgb::new(0x6e, 0x6a, 0x63),
    number: Rgb::new(0xe4, 0x8a, 0x9a),
    operator: Rgb::new(0xe8, 0xe4, 0xd8),
    identifier: Rgb::new(0xe8, 0xe4, 0xd8),
    function_name: Rgb::new(0xd8, 0xb2, 0x6a),
    class_name: Rgb::new(0xc7, 0x92, 0xea),
};

/// Sepia ink on aged paper
pub const MANUSCRIPT: ThemeColors = ThemeColors {
    background: Rgb::new(0xef, 0xe3, 0xc6),
    foreground: Rgb::new(0x4a, 0x3b, 0x2a),
    keyword: Rgb::new(0x7b, 0x3f, 0x00),
    string: Rgb::new(0x5a, 0x6f, 0x3b),
    comment: Rgb::new(0xa0, 0x8d, 0x73),
    number: Rgb::new(0x8b, 0x45, 0x13),
    operator: Rgb::new(0x4a, 0x3b, 0x2a),
    identifier: Rgb::new(0x4a, 0x3b, 0x2a),
    function_name: Rgb::new(0x8a, 0x5a, 0x2b),
    class_name: Rgb::new(0x70, 0x42, 0x14),
};

/// Resolve a built-in theme name
pub fn builtin(name: &str) -> Option<ThemeColors> {
    match name {
        "classic" => Some(CLASSIC),
        "night" => Some(NIGHT),
        "manuscript" => Some(MANUSCRIPT),
        _ => None,
    }
}

/// Names of the built-in themes
pub const BUILTIN_NAMES: &[&str] = &["classic", "night", "manuscript"];

/// Resolves theme names against the built-ins and an injected provider
pub struct ThemeResolver {
    provider: Box<dyn ThemeProvider>,
}

impl ThemeResolver {
    pub fn new(provider: Box<dyn ThemeProvider>) -> Self {
        Self { provider }
    }

    /// Resolver with no custom themes: only the built-ins resolve
    pub fn builtin_only() -> Self {
        Self::new(Box::new(InMemoryThemeProvider::new()))
    }

    /// Built-ins first, then the provider. A miss on both is an error.
    pub fn resolve(&self, name: &str) -> Result<ThemeColors, CompileError> {
        if let Some(colors) = builtin(name) {
            return Ok(colors);
        }
        self.provider
            .get(name)
            .ok_or_else(|| CompileError::ThemeNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_always_resolve() {
        let resolver = ThemeResolver::builtin_only();
        for name in BUILTIN_NAMES {
            assert!(resolver.resolve(name).is_ok(), "builtin '{}' must resolve", name);
        }
    }

    #[test]
    fn test_unknown_theme_is_an_error_not_a_substitution() {
        let resolver = ThemeResolver::builtin_only();
        let err = resolver.resolve("not-a-real-theme").unwrap_err();
        assert_eq!(
            err,
            CompileError::ThemeNotFound {
                name: "not-a-real-theme".to_string()
            }
        );
    }

    #[test]
    fn test_provider_themes_resolve_by_name() {
        let mut provider = InMemoryThemeProvider::new();
        provider.insert("custom", CLASSIC);
        let resolver = ThemeResolver::new(Box::new(provider));
        assert_eq!(resolver.resolve("custom").unwrap(), CLASSIC);
    }

    #[test]
    fn test_record_roundtrips_through_json() {
        let json = serde_json::to_string(&NIGHT).unwrap();
        let back = ThemeColors::from_json_str(&json).unwrap();
        assert_eq!(back, NIGHT);
    }

    #[test]
    fn test_record_rejects_bad_color_shape() {
        let json = r##"{
            "background": "#f5f1e8", "foreground": "#1a1a1a",
            "keyword": "blue", "string": "#2d6a4f", "comment": "#8a817c",
            "number": "#9c3848", "operator": "#1a1a1a", "identifier": "#1a1a1a",
            "function_name": "#5e3023", "class_name": "#4a2545"
        }"##;
        assert!(ThemeColors::from_json_str(json).is_err());
    }

    #[test]
    fn test_record_rejects_missing_field() {
        let json = r##"{"background": "#f5f1e8"}"##;
        assert!(ThemeColors::from_json_str(json).is_err());
    }
}
