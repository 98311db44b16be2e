//! Color palette for chart output
//!
//! Chart elements reference symbolic tokens (`foreground`, `primary`,
//! `destructive`, ...) that a stylesheet resolves to concrete colors. The
//! same chart can then be themed without recomputing its layout.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping symbolic colors to concrete values
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> color, in token order
    pub colors: BTreeMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette: dark text on white, violet ascendant, red retrograde
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "default"

[colors]
# Chart surface
background = "#ffffff"
border = "#d4d4d8"

# Labels
foreground = "#18181b"
muted-foreground = "#71717a"
primary = "#6d28d9"
destructive = "#dc2626"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic color token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic color token with fallback to default palette
    ///
    /// Fallback order:
    /// 1. Check this stylesheet for exact token
    /// 2. Check default palette for exact token
    /// 3. Use category default (foreground → #18181b, etc.)
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        if token.starts_with("background") {
            return "#ffffff".to_string();
        }
        if token.starts_with("muted") || token.starts_with("border") {
            return "#71717a".to_string();
        }
        if token.starts_with("primary") {
            return "#6d28d9".to_string();
        }
        if token.starts_with("destructive") {
            return "#dc2626".to_string();
        }

        "#18181b".to_string()
    }

    /// Font family override, if the stylesheet sets one
    pub fn font_family(&self) -> Option<&str> {
        self.resolve("font-family")
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Stylesheet {
        Stylesheet {
            name: None,
            description: None,
            colors: BTreeMap::new(),
        }
    }

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        for token in [
            "background",
            "border",
            "foreground",
            "muted-foreground",
            "primary",
            "destructive",
        ] {
            assert!(stylesheet.colors.contains_key(token), "missing {token}");
        }
        assert_eq!(stylesheet.name.as_deref(), Some("default"));
    }

    #[test]
    fn test_resolve_existing_token() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("primary"), Some("#6d28d9"));
        assert_eq!(stylesheet.resolve("nonexistent"), None);
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        assert_eq!(empty().resolve_or_default("destructive"), "#dc2626");
        assert_eq!(empty().resolve_or_default("primary-dark"), "#6d28d9");
        assert_eq!(empty().resolve_or_default("whatever"), "#18181b");
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Night"
description = "Light text on dark"

[colors]
foreground = "#fafafa"
font-family = "Inter, sans-serif"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Night".to_string()));
        assert_eq!(stylesheet.description, Some("Light text on dark".to_string()));
        assert_eq!(stylesheet.resolve("foreground"), Some("#fafafa"));
        assert_eq!(stylesheet.font_family(), Some("Inter, sans-serif"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Stylesheet::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(StylesheetError::ParseError(_))));
    }
}
