//! Stylesheet system for the diagram color palette
//!
//! Elements only carry class names (`blue`, `bold`, ...). The stylesheet maps
//! the classes a render actually used to CSS rules, so a document only
//! contains the rules it needs and a different palette can be swapped in
//! without touching the diagram scripts.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unknown color '{0}'")]
    UnknownColor(String),
}

/// The colors available to diagram elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Pink,
    Purple,
    Red,
    Orange,
    Yellow,
    Brown,
    Green,
    Blue,
    Gray,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Pink,
        Color::Purple,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Brown,
        Color::Green,
        Color::Blue,
        Color::Gray,
    ];

    /// CSS class that applies this color
    pub fn class_name(self) -> &'static str {
        match self {
            Color::Pink => "pink",
            Color::Purple => "purple",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Brown => "brown",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Gray => "gray",
        }
    }

    /// Value of this color in the built-in light palette
    pub fn default_value(self) -> &'static str {
        match self {
            Color::Pink => "#d63384",
            Color::Purple => "#6f42c1",
            Color::Red => "#dc3545",
            Color::Orange => "#fd7e14",
            Color::Yellow => "#ffc107",
            Color::Brown => "#a0522d",
            Color::Green => "#198754",
            Color::Blue => "#0d6efd",
            Color::Gray => "#6c757d",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for Color {
    type Err = StylesheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.class_name() == s)
            .ok_or_else(|| StylesheetError::UnknownColor(s.to_string()))
    }
}

/// A stylesheet mapping color classes to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: class name -> CSS color
    pub colors: HashMap<String, String>,
    /// Color of elements without a color class
    pub foreground: String,
    /// Font family for all text
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f64,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
    font: Option<TomlFont>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TomlFont {
    family: Option<String>,
    size: Option<f64>,
}

const DEFAULT_FOREGROUND: &str = "#212529";
const DEFAULT_FONT_FAMILY: &str = "sans-serif";
const DEFAULT_FONT_SIZE: f64 = 16.0;
const MONOSPACE_FONT_FAMILY: &str = "monospace";


impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    ///
    /// Colors that are missing fall back to the default palette.
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;
        let mut colors = parsed.colors;
        let foreground = colors
            .remove("foreground")
            .unwrap_or_else(|| DEFAULT_FOREGROUND.to_string());
        let font = parsed.font.as_ref();

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors,
            foreground,
            font_family: font
                .and_then(|f| f.family.clone())
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            font_size: font.and_then(|f| f.size).unwrap_or(DEFAULT_FONT_SIZE),
        })
    }

    /// Resolve a color class to a concrete value
    ///
    /// Returns None if the class is not defined in this stylesheet.
    pub fn resolve(&self, class: &str) -> Option<&str> {
        self.colors.get(class).map(|s| s.as_str())
    }

    /// Resolve a color with fallback to the default palette
    pub fn resolve_or_default(&self, color: Color) -> &str {
        self.resolve(color.class_name())
            .unwrap_or_else(|| color.default_value())
    }

    /// Build the CSS for a document that used the given classes
    ///
    /// Base rules are always emitted. Each known class adds one rule, and
    /// classes the stylesheet knows nothing about are left to the page CSS.
    pub fn css(&self, classes: &BTreeSet<String>) -> String {
        let mut rules = vec![
            format!(
                "svg {{ color: {}; font-family: {}; font-size: {}px; }}",
                self.foreground, self.font_family, self.font_size
            ),
            "rect, line, path { stroke: currentColor; stroke-width: 2; fill: none; }".to_string(),
            "text { fill: currentColor; stroke: none; }".to_string(),
            "marker path { fill: currentColor; stroke: none; }".to_string(),
        ];

        for class in classes {
            match self.class_rule(class) {
                Some(declarations) => rules.push(format!(".{} {{ {} }}", class, declarations)),
                None => log::debug!("no stylesheet rule for class '{}'", class),
            }
        }

        rules.join("\n")
    }

    fn class_rule(&self, class: &str) -> Option<String> {
        let declarations = match class {
            "bold" => "font-weight: bold;".to_string(),
            "italic" => "font-style: italic;".to_string(),
            "small" => "font-size: 0.8em;".to_string(),
            "large" => "font-size: 1.6em;".to_string(),
            "script" => "font-size: 0.75em;".to_string(),
            "code" => format!("font-family: {};", MONOSPACE_FONT_FAMILY),
            _ => {
                let color: Color = class.parse().ok()?;
                format!("color: {};", self.resolve_or_default(color))
            }
        };
        Some(declarations)
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Stylesheet {
            name: Some("light".to_string()),
            description: None,
            colors: Color::ALL
                .into_iter()
                .map(|color| (color.class_name().to_string(), color.default_value().to_string()))
                .collect(),
            foreground: DEFAULT_FOREGROUND.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.name, Some("light".to_string()));
        for color in Color::ALL {
            assert!(stylesheet.resolve(color.class_name()).is_some());
        }
        assert_eq!(stylesheet.foreground, "#212529");
        assert_eq!(stylesheet.font_size, 16.0);
    }

    #[test]
    fn test_color_parse_round_trip() {
        for color in Color::ALL {
            assert_eq!(color.class_name().parse::<Color>().unwrap(), color);
        }
        assert!(matches!(
            "teal".parse::<Color>(),
            Err(StylesheetError::UnknownColor(_))
        ));
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        let stylesheet = Stylesheet::from_str("[colors]\nblue = \"#000080\"\n").unwrap();
        assert_eq!(stylesheet.resolve_or_default(Color::Blue), "#000080");
        assert_eq!(stylesheet.resolve_or_default(Color::Green), "#198754");
    }

    #[test]
    fn test_missing_colors_fall_back_to_built_in_palette() {
        let stylesheet = Stylesheet::from_str("[colors]\n").unwrap();
        for color in Color::ALL {
            assert_eq!(stylesheet.resolve(color.class_name()), None);
            assert_eq!(
                stylesheet.resolve_or_default(color),
                Stylesheet::default().resolve(color.class_name()).unwrap()
            );
        }
        let css = stylesheet.css(&["gray".to_string()].into_iter().collect());
        assert!(css.contains(".gray { color: #6c757d; }"));
    }

    #[test]
    fn test_css_only_contains_collected_classes() {
        let stylesheet = Stylesheet::default();
        let classes: BTreeSet<String> = ["blue", "bold", "custom"]
            .into_iter()
            .map(String::from)
            .collect();
        let css = stylesheet.css(&classes);
        assert!(css.contains(".blue { color: #0d6efd; }"));
        assert!(css.contains(".bold { font-weight: bold; }"));
        assert!(!css.contains(".green"));
        assert!(!css.contains(".custom"));
    }

    #[test]
    fn test_parse_toml_with_metadata_and_font() {
        let toml_str = r##"
[metadata]
name = "Dark"
description = "A dark theme"

[colors]
foreground = "#f8f9fa"
pink = "#ff66aa"

[font]
family = "Georgia"
size = 14
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Dark".to_string()));
        assert_eq!(stylesheet.description, Some("A dark theme".to_string()));
        assert_eq!(stylesheet.foreground, "#f8f9fa");
        assert_eq!(stylesheet.resolve("pink"), Some("#ff66aa"));
        assert_eq!(stylesheet.resolve("foreground"), None);
        assert_eq!(stylesheet.font_family, "Georgia");
        assert_eq!(stylesheet.font_size, 14.0);
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Stylesheet::from_str(invalid);
        assert!(result.is_err());
    }
}
