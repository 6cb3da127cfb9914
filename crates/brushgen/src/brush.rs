//! Brush catalogue entity model.
//!
//! A brush catalogue is a flat sequence of named brush definitions, each
//! carrying one resolved color value per supported theme. Names are dotted
//! paths under a well-known prefix:
//!
//! ```text
//! MaterialDesign.Brush.Foo.Bar.Baz
//! |----- prefix ------|-cont.-|leaf
//! ```
//!
//! [`parse_document`] deserializes the catalogue from its JSON source and
//! validates every record eagerly, so a [`BrushDefinition`] that exists is
//! always well-formed and its derived accessors never fail.
//!
//! # Example
//!
//! ```rust
//! use brushgen::{parse_document, Theme};
//!
//! let brushes = parse_document(r##"[
//!     {
//!         "name": "MaterialDesign.Brush.Button.Background",
//!         "themeValues": { "light": "#FF6200EE", "dark": "#FFBB86FC" }
//!     }
//! ]"##).unwrap();
//!
//! assert_eq!(brushes[0].property_name(), "Background");
//! assert_eq!(brushes[0].theme_values().get(Theme::Dark), "#FFBB86FC");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{BrushError, Result};

/// The well-known prefix every brush name must carry.
pub const BRUSH_PREFIX: &str = "MaterialDesign.Brush.";

/// One of the two supported display themes.
///
/// This is a closed enumeration: every brush has exactly one value per
/// variant, so lookups through [`ThemeValues::get`] are total. String entry
/// points ([`Theme::from_str`], [`ThemeValues::by_name`]) accept the theme
/// name case-insensitively and fail with [`BrushError::UnknownTheme`] for
/// anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light display mode.
    Light,
    /// Dark display mode.
    Dark,
}

impl Theme {
    /// Both themes, in emission order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The key this theme uses in the input document (`"light"`/`"dark"`).
    pub fn key(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The capitalized form used in output file names (`"Light"`/`"Dark"`).
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = BrushError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("light") {
            Ok(Theme::Light)
        } else if s.eq_ignore_ascii_case("dark") {
            Ok(Theme::Dark)
        } else {
            Err(BrushError::UnknownTheme(s.to_string()))
        }
    }
}

/// The per-theme color values of a single brush.
///
/// Both values are required; construction through [`parse_document`] fails
/// with [`BrushError::MissingThemeValue`] when either is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeValues {
    light: String,
    dark: String,
}

impl ThemeValues {
    /// Creates a value pair from explicit light and dark color strings.
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    /// Returns the color value for the given theme. Total: every theme has
    /// a value by construction.
    pub fn get(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    /// Looks up a color value by theme name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Fails with [`BrushError::UnknownTheme`] for any name outside
    /// `{light, dark}`.
    pub fn by_name(&self, theme: &str) -> Result<&str> {
        Ok(self.get(theme.parse()?))
    }
}

/// A single named, themeable brush definition.
///
/// Immutable after construction. The name is validated eagerly, so the
/// derived accessors ([`property_name`](Self::property_name),
/// [`container_parts`](Self::container_parts), ...) are infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrushDefinition {
    name: String,
    theme_values: ThemeValues,
    alternate_keys: Vec<String>,
}

impl BrushDefinition {
    /// Creates a validated brush definition.
    ///
    /// # Errors
    ///
    /// Fails with [`BrushError::InvalidNameFormat`] unless `name` starts
    /// with [`BRUSH_PREFIX`] followed by at least one segment.
    pub fn new(
        name: impl Into<String>,
        theme_values: ThemeValues,
        alternate_keys: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        match name.strip_prefix(BRUSH_PREFIX) {
            Some(rest) if !rest.is_empty() => {}
            _ => return Err(BrushError::InvalidNameFormat(name)),
        }
        Ok(Self {
            name,
            theme_values,
            alternate_keys,
        })
    }

    /// The full dotted name, e.g. `MaterialDesign.Brush.Button.Background`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The per-theme color values.
    pub fn theme_values(&self) -> &ThemeValues {
        &self.theme_values
    }

    /// Alias keys carried through from the input document. Not used by the
    /// tree builder or the emitter.
    pub fn alternate_keys(&self) -> &[String] {
        &self.alternate_keys
    }

    /// The last dot-segment of the name.
    pub fn property_name(&self) -> &str {
        self.name
            .rsplit('.')
            .next()
            .unwrap_or(&self.name)
    }

    /// The name with [`BRUSH_PREFIX`] stripped.
    pub fn name_without_prefix(&self) -> &str {
        &self.name[BRUSH_PREFIX.len()..]
    }

    /// The dot-segments strictly between the prefix and the leaf segment.
    ///
    /// These are the path along which the definition is grouped when
    /// building the brush tree; a definition with no container parts sits
    /// directly at the root.
    pub fn container_parts(&self) -> Vec<&str> {
        let segments: Vec<&str> = self.name.split('.').collect();
        segments[2..segments.len() - 1].to_vec()
    }

    /// The container parts rejoined with `.`.
    pub fn container_type_name(&self) -> String {
        self.container_parts().join(".")
    }
}

/// Wire shape of one catalogue record. Unknown keys are ignored; the theme
/// values arrive as a free-form map and are validated into [`ThemeValues`].
#[derive(Debug, Deserialize)]
struct RawBrush {
    name: String,
    #[serde(rename = "themeValues", default)]
    theme_values: BTreeMap<String, String>,
    #[serde(rename = "alternateKeys", default)]
    alternate_keys: Vec<String>,
}

impl RawBrush {
    fn validate(mut self) -> Result<BrushDefinition> {
        let mut take = |theme: Theme| {
            self.theme_values
                .remove(theme.key())
                .ok_or_else(|| BrushError::MissingThemeValue {
                    name: self.name.clone(),
                    theme: theme.key(),
                })
        };
        let light = take(Theme::Light)?;
        let dark = take(Theme::Dark)?;
        BrushDefinition::new(self.name, ThemeValues::new(light, dark), self.alternate_keys)
    }
}

/// Parses a brush catalogue document.
///
/// The document root must be a JSON array of records with a required `name`
/// string, a required `themeValues` object holding both `light` and `dark`
/// entries, and an optional `alternateKeys` array. Extra keys are ignored.
///
/// Validation is eager: every record is checked here, so malformed records
/// are rejected immediately rather than surfacing later from a derived
/// accessor.
///
/// # Errors
///
/// - [`BrushError::InvalidDocument`] when the root is not a sequence or a
///   record does not match the wire shape.
/// - [`BrushError::MissingThemeValue`] when a record lacks a theme entry.
/// - [`BrushError::InvalidNameFormat`] when a name lacks the prefix.
pub fn parse_document(document: &str) -> Result<Vec<BrushDefinition>> {
    let raw: Vec<RawBrush> = serde_json::from_str(document)
        .map_err(|e| BrushError::InvalidDocument(e.to_string()))?;
    raw.into_iter().map(RawBrush::validate).collect()
}
