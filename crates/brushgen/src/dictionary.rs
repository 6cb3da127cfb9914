//! Theme resource dictionary emission.
//!
//! [`emit_dictionary`] turns the brush catalogue into one XAML resource
//! dictionary per theme. Each definition contributes a `<Color>` entry and a
//! frozen `<SolidColorBrush>` entry referencing it, so a single top-down pass
//! over the document always resolves every `StaticResource` reference
//! (forward-reference-free output).
//!
//! Emission is pure: the document is built entirely in memory and handed
//! back as a string; writing it anywhere is the caller's concern.

use std::fmt::Write;

use crate::brush::{BrushDefinition, Theme};

/// Fixed dictionary preamble: the WPF presentation, `x:` and `po:`
/// namespace declarations.
const PREAMBLE: &str = r#"<ResourceDictionary xmlns="http://schemas.microsoft.com/winfx/2006/xaml/presentation"
                    xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml"
                    xmlns:po="http://schemas.microsoft.com/winfx/2006/xaml/presentation/options">"#;

const CLOSING: &str = "</ResourceDictionary>";

/// Emits the resource dictionary document for one theme.
///
/// Definitions are sorted by full name (byte-wise, ascending) before
/// emission, so the output depends only on the set of definitions, never on
/// input order. For each definition, two entries are emitted in sequence:
/// the color entry keyed `<name>.Color`, then the brush entry keyed `<name>`
/// referencing that color with a `po:Freeze="True"` marker.
///
/// # Example
///
/// ```rust
/// use brushgen::{emit_dictionary, parse_document, Theme};
///
/// let brushes = parse_document(r##"[
///     {
///         "name": "MaterialDesign.Brush.Foreground",
///         "themeValues": { "light": "#DD000000", "dark": "#DDFFFFFF" }
///     }
/// ]"##).unwrap();
///
/// let document = emit_dictionary(Theme::Dark, &brushes);
/// assert!(document.contains(r#"<Color x:Key="MaterialDesign.Brush.Foreground.Color">#DDFFFFFF</Color>"#));
/// ```
pub fn emit_dictionary(theme: Theme, definitions: &[BrushDefinition]) -> String {
    let mut sorted: Vec<&BrushDefinition> = definitions.iter().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));

    let mut document = String::new();
    document.push_str(PREAMBLE);
    document.push('\n');

    for definition in sorted {
        let name = definition.name();
        let value = definition.theme_values().get(theme);
        // Writing into a String cannot fail.
        let _ = writeln!(document, r#"  <Color x:Key="{name}.Color">{value}</Color>"#);
        let _ = writeln!(
            document,
            r#"  <SolidColorBrush x:Key="{name}" Color="{{StaticResource {name}.Color}}" po:Freeze="True" />"#
        );
    }

    document.push_str(CLOSING);
    document.push('\n');
    document
}

/// The conventional file name for a theme's dictionary,
/// e.g. `MaterialDesignTheme.Light.xaml`.
pub fn dictionary_file_name(theme: Theme) -> String {
    format!("MaterialDesignTheme.{theme}.xaml")
}
