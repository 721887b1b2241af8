//! Route file parsing.
//!
//! # Responsibilities
//! - Locate the exported literal in a route module
//! - Parse the literal as data, never as code
//!
//! # Design Decisions
//! - Accepts `module.exports = ...`, `export default ...`,
//!   `export const <name> = ...` or a bare literal
//! - The literal is JSON5: unquoted keys, single quotes, comments and
//!   trailing commas are what hand-written route files use
//! - Anything that is not plain data (calls, identifiers) is a parse error

use serde_json::Value;
use thiserror::Error;

/// CommonJS export targets, each followed by `=`.
const ASSIGNMENT_EXPORTS: &[&str] = &["module.exports", "exports.default"];

/// Keywords of an exported binding (`export const routes = ...`).
const DECLARATION_KEYWORDS: &[&str] = &["const", "let", "var"];

const STRICT_DIRECTIVES: &[&str] = &["'use strict'", "\"use strict\""];

/// Errors raised while reading the route literal out of a module.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The module has no content besides comments and whitespace.
    #[error("route module is empty")]
    Empty,

    /// An export statement is not followed by `=`.
    #[error("expected '=' after `{0}`")]
    MissingAssignment(&'static str),

    /// An exported declaration has no binding name.
    #[error("expected a name after `{0}`")]
    MissingBinding(&'static str),

    /// The exported value is not a valid data literal.
    #[error("invalid route literal: {0}")]
    Literal(#[from] json5::Error),
}

/// Skip leading whitespace and comments.
fn skip_trivia(mut input: &str) -> &str {
    loop {
        let trimmed = input.trim_start();
        if let Some(rest) = trimmed.strip_prefix("//") {
            input = rest.split_once('\n').map(|(_, tail)| tail).unwrap_or("");
        } else if let Some(rest) = trimmed.strip_prefix("/*") {
            input = rest.split_once("*/").map(|(_, tail)| tail).unwrap_or("");
        } else {
            return trimmed;
        }
    }
}

fn is_binding_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Expect `=` after the export statement named `after`.
fn expect_assignment<'a>(rest: &'a str, after: &'static str) -> Result<&'a str, SourceError> {
    rest.trim_start()
        .strip_prefix('=')
        .map(str::trim_start)
        .ok_or(SourceError::MissingAssignment(after))
}

/// Strip the export statement in front of the literal, if there is one.
fn strip_export(body: &str) -> Result<&str, SourceError> {
    for &target in ASSIGNMENT_EXPORTS {
        if let Some(rest) = body.strip_prefix(target) {
            return expect_assignment(rest, target);
        }
    }

    let Some(rest) = body.strip_prefix("export").filter(|r| r.starts_with(char::is_whitespace))
    else {
        return Ok(body);
    };
    let rest = rest.trim_start();
    if let Some(value) = rest.strip_prefix("default") {
        return Ok(value.trim_start());
    }

    for &keyword in DECLARATION_KEYWORDS {
        let Some(decl) = rest
            .strip_prefix(keyword)
            .filter(|d| d.starts_with(char::is_whitespace))
        else {
            continue;
        };
        let decl = decl.trim_start();
        let name_len = decl.find(|c: char| !is_binding_char(c)).unwrap_or(decl.len());
        if name_len == 0 || decl.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(SourceError::MissingBinding(keyword));
        }
        return expect_assignment(&decl[name_len..], keyword);
    }

    Ok(body)
}

/// Cut the statement-ending `;` and any comments after it.
///
/// Quotes are tracked so a `;` inside a string is never taken as the end.
fn strip_terminator(literal: &str) -> &str {
    let mut pos = 0;
    let mut quote: Option<char> = None;

    while let Some(c) = literal[pos..].chars().next() {
        let rest = &literal[pos..];
        match quote {
            Some(_) if c == '\\' => {
                pos += 1;
                pos += literal[pos..].chars().next().map_or(0, char::len_utf8);
                continue;
            }
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if rest.starts_with("//") || rest.starts_with("/*") => {
                pos = literal.len() - skip_trivia(rest).len();
                continue;
            }
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == ';' && skip_trivia(&rest[1..]).is_empty() => {
                return &literal[..pos];
            }
            None => {}
        }
        pos += c.len_utf8();
    }

    literal
}

/// Extract the text of the exported literal from a module body.
pub fn exported_literal(source: &str) -> Result<&str, SourceError> {
    let mut body = skip_trivia(source.trim_start_matches('\u{feff}'));

    for &directive in STRICT_DIRECTIVES {
        if let Some(rest) = body.strip_prefix(directive) {
            body = skip_trivia(rest.trim_start().trim_start_matches(';'));
        }
    }

    let literal = strip_terminator(strip_export(body)?).trim_end();
    if skip_trivia(literal).is_empty() {
        return Err(SourceError::Empty);
    }
    Ok(literal)
}

/// Parse the exported route data of a module.
pub fn parse_module(source: &str) -> Result<Value, SourceError> {
    let literal = exported_literal(source)?;
    let value: Value = json5::from_str(literal)?;
    tracing::debug!(bytes = literal.len(), "Route literal parsed");
    Ok(value)
}
