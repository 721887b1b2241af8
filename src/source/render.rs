//! Route file rendering.
//!
//! # Responsibilities
//! - Render a route tree as an indented object literal
//! - Write identifier field names bare, quote everything else
//! - Wrap the literal in the export statement
//!
//! # Design Decisions
//! - Layout matches `JSON.stringify(value, null, indent)` so regenerated
//!   files diff cleanly against hand-formatted ones
//! - The quote character is chosen while writing each string and escaped
//!   there; the rendered text is never post-processed

use serde_json::{Number, Value};

use crate::config::schema::{OutputConfig, QuoteStyle};

/// Rendering settings for one route module.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub indent: String,
    pub quote: QuoteStyle,
    pub export_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

impl From<&OutputConfig> for RenderOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            indent: config.indent.clone(),
            quote: config.quote,
            export_prefix: config.export_prefix.clone(),
        }
    }
}

/// True when `name` can be written as a bare object key.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

fn write_string(out: &mut String, text: &str, quote: char) {
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Integral floats print without a fraction, as JavaScript does.
fn format_number(number: &Number) -> String {
    let text = number.to_string();
    if number.is_f64() {
        if let Some(integral) = text.strip_suffix(".0") {
            return integral.to_string();
        }
    }
    text
}

struct Renderer<'a> {
    options: &'a RenderOptions,
    out: String,
}

impl Renderer<'_> {
    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str(&self.options.indent);
        }
    }

    fn value(&mut self, value: &Value, depth: usize) {
        let quote = self.options.quote.as_char();
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.out.push_str(&format_number(n)),
            Value::String(s) => write_string(&mut self.out, s, quote),
            Value::Array(items) if items.is_empty() => self.out.push_str("[]"),
            Value::Array(items) => {
                self.out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.newline(depth + 1);
                    self.value(item, depth + 1);
                }
                self.newline(depth);
                self.out.push(']');
            }
            Value::Object(fields) if fields.is_empty() => self.out.push_str("{}"),
            Value::Object(fields) => {
                self.out.push('{');
                for (i, (name, field)) in fields.iter().enumerate() {
                    if i > 0 {
                        self.out.push(',');
                    }
                    self.newline(depth + 1);
                    if is_identifier(name) {
                        self.out.push_str(name);
                    } else {
                        write_string(&mut self.out, name, quote);
                    }
                    self.out.push_str(": ");
                    self.value(field, depth + 1);
                }
                self.newline(depth);
                self.out.push('}');
            }
        }
    }
}

/// Render `value` as an object literal, without the export statement.
pub fn render_literal(value: &Value, options: &RenderOptions) -> String {
    let mut renderer = Renderer {
        options,
        out: String::new(),
    };
    renderer.value(value, 0);
    renderer.out
}

/// Render the full route module text.
pub fn render_module(value: &Value, options: &RenderOptions) -> String {
    let mut module = options.export_prefix.clone();
    module.push_str(&render_literal(value, options));
    module
}
