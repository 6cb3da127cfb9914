//! Error types for the brushgen crate.

use thiserror::Error;

use crate::brush::BRUSH_PREFIX;

/// Errors that can occur while parsing a brush catalogue or emitting
/// theme dictionaries.
///
/// Every variant is fatal for the generation pass: nothing is retried,
/// and the first failure aborts the run.
#[derive(Debug, Error)]
pub enum BrushError {
    /// The input document is not a sequence of brush records.
    #[error("invalid brush document: {0}")]
    InvalidDocument(String),

    /// A brush definition lacks one of the two required theme values.
    #[error("brush '{name}' has no value for the '{theme}' theme")]
    MissingThemeValue {
        /// Full name of the offending brush.
        name: String,
        /// The theme whose value is absent.
        theme: &'static str,
    },

    /// A brush name does not carry the well-known prefix.
    #[error("brush name '{0}' does not start with '{BRUSH_PREFIX}'")]
    InvalidNameFormat(String),

    /// A theme lookup was requested for a name outside {light, dark}.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

/// Result type for brushgen operations.
pub type Result<T> = std::result::Result<T, BrushError>;
