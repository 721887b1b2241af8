//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the public prefix is a usable path segment
//! - Check output settings produce a loadable module
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RewriteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::RewriteConfig;
use crate::source::parser::exported_literal;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("routes.public_prefix must not be empty")]
    EmptyPrefix,

    #[error("routes.public_prefix '{0}' must start with '/'")]
    PrefixWithoutLeadingSlash(String),

    #[error("routes.public_prefix '{0}' must not end with '/'")]
    PrefixWithTrailingSlash(String),

    #[error("routes.public_prefix '{0}' must not contain whitespace")]
    PrefixWithWhitespace(String),

    #[error("output.indent must be non-empty whitespace")]
    InvalidIndent,

    #[error("output.export_prefix must not contain a newline")]
    MultilineExportPrefix,

    #[error("output.export_prefix '{0}' is not an export form the route parser can read back")]
    UnreadableExportPrefix(String),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Validate a public-prefix marker.
pub fn validate_prefix(prefix: &str) -> Result<(), ValidationError> {
    if prefix.is_empty() {
        return Err(ValidationError::EmptyPrefix);
    }
    if !prefix.starts_with('/') {
        return Err(ValidationError::PrefixWithoutLeadingSlash(prefix.to_string()));
    }
    if prefix.ends_with('/') {
        return Err(ValidationError::PrefixWithTrailingSlash(prefix.to_string()));
    }
    if prefix.chars().any(char::is_whitespace) {
        return Err(ValidationError::PrefixWithWhitespace(prefix.to_string()));
    }
    Ok(())
}

/// Check that a module written with `export_prefix` parses again.
pub fn validate_export_prefix(export_prefix: &str) -> Result<(), ValidationError> {
    if export_prefix.contains('\n') {
        return Err(ValidationError::MultilineExportPrefix);
    }
    match exported_literal(&format!("{export_prefix}[]")) {
        Ok("[]") => Ok(()),
        _ => Err(ValidationError::UnreadableExportPrefix(
            export_prefix.to_string(),
        )),
    }
}

/// Check a configuration, collecting every problem.
pub fn validate_config(config: &RewriteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_prefix(&config.routes.public_prefix) {
        errors.push(e);
    }

    let indent = &config.output.indent;
    if indent.is_empty() || !indent.chars().all(char::is_whitespace) || indent.contains('\n') {
        errors.push(ValidationError::InvalidIndent);
    }

    if let Err(e) = validate_export_prefix(&config.output.export_prefix) {
        errors.push(e);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
