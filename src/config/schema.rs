//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the route
//! generator. All types derive Serde traits for deserialization from config
//! files, and every field has a default so an empty file is a valid config.

use serde::{Deserialize, Serialize};

/// Root configuration for the route generator.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RewriteConfig {
    /// Public route derivation.
    pub routes: RoutesConfig,

    /// Rendering of the rewritten module.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Public route derivation settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RoutesConfig {
    /// Path marker that distinguishes public routes (e.g., "/pub").
    pub public_prefix: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            public_prefix: "/pub".to_string(),
        }
    }
}

/// Quote character used for string literals.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn as_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// Output settings for the rewritten module.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Statement written in front of the route literal.
    pub export_prefix: String,

    /// One level of indentation.
    pub indent: String,

    /// Quote style for strings and non-identifier keys.
    pub quote: QuoteStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            export_prefix: "module.exports = ".to_string(),
            indent: "\t".to_string(),
            quote: QuoteStyle::Single,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
