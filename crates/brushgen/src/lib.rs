//! # Brushgen - Brush Catalogue Organizer and Theme Dictionary Emitter
//!
//! `brushgen` ingests a flat catalogue of named color-brush definitions
//! (one light and one dark color value each) and deterministically emits one
//! XAML resource dictionary per theme: a color entry plus a derived frozen
//! brush entry per definition, sorted by full name.
//!
//! ## Core Concepts
//!
//! - [`BrushDefinition`]: an immutable named brush with per-theme values
//! - [`Theme`]: the closed light/dark enumeration
//! - [`TreeItem`] / [`build_tree`]: hierarchical grouping by dotted name
//! - [`emit_dictionary`]: the deterministic per-theme document emitter
//!
//! ## Quick Start
//!
//! ```rust
//! use brushgen::{build_tree, emit_dictionary, parse_document, Theme};
//!
//! let mut brushes = parse_document(r##"[
//!     {
//!         "name": "MaterialDesign.Brush.Button.Background",
//!         "themeValues": { "light": "#FF6200EE", "dark": "#FFBB86FC" }
//!     },
//!     {
//!         "name": "MaterialDesign.Brush.Foreground",
//!         "themeValues": { "light": "#DD000000", "dark": "#DDFFFFFF" }
//!     }
//! ]"##).unwrap();
//!
//! brushes.sort_by(|a, b| a.name().cmp(b.name()));
//!
//! // Inspect the catalogue by container.
//! let tree = build_tree(&brushes);
//! assert_eq!(tree.iter().count(), brushes.len());
//!
//! // Emit one document per theme.
//! for theme in Theme::ALL {
//!     let document = emit_dictionary(theme, &brushes);
//!     assert!(document.starts_with("<ResourceDictionary"));
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **Deterministic**: a fixed set of definitions always yields
//!   byte-identical documents, independent of input order.
//! - **Forward-reference-free**: every brush entry's color key is emitted
//!   strictly before the brush entry referencing it.
//! - **Eager validation**: [`parse_document`] rejects malformed records at
//!   parse time; a definition that exists is always well-formed.
//!
//! This crate performs no I/O; reading the catalogue and writing documents
//! to disk belong to the caller (see the `brushgen-cli` crate).

mod brush;
mod dictionary;
mod error;
mod tree;

// Re-export public API
pub use brush::{parse_document, BrushDefinition, Theme, ThemeValues, BRUSH_PREFIX};
pub use dictionary::{dictionary_file_name, emit_dictionary};
pub use error::{BrushError, Result};
pub use tree::{build_tree, Iter, TreeItem};
