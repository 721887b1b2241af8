//! Route descriptor model.
//!
//! # Responsibilities
//! - Wrap one route object while keeping every field it carries
//! - Typed access to the fields the pipeline reads and writes
//! - Reject route sequences that are not sequences of objects
//!
//! # Design Decisions
//! - Backed by an ordered JSON map: unknown fields pass through untouched
//!   and keep their position in the output
//! - Children stay as raw values until a transform recurses into them

use std::borrow::Cow;

use serde_json::{Map, Value};
use thiserror::Error;

/// Field holding the route path.
pub const PATH_FIELD: &str = "path";
/// Field holding the child routes.
pub const COMPONENTS_FIELD: &str = "components";
/// Field holding the deduplication key.
pub const KEY_FIELD: &str = "key";
/// Field holding the access-control flag.
pub const AUTHORIZED_FIELD: &str = "authorized";

/// Errors raised when a value does not have the shape of a route list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The value handed to a transform is not a sequence.
    #[error("expected a sequence of routes, found {found}")]
    NotASequence { found: &'static str },

    /// An entry of a route sequence is not an object.
    #[error("route entry at index {index} is not an object")]
    NotAnObject { index: usize },
}

/// Result type for route transforms.
pub type RouteResult<T> = Result<T, RouteError>;

/// One entry of a router definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteNode {
    fields: Map<String, Value>,
}

impl RouteNode {
    /// Build a node from the entry at `index` of a route sequence.
    pub fn from_value(value: Value, index: usize) -> RouteResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(RouteError::NotAnObject { index }),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// The raw `path` value, if any.
    pub fn path_value(&self) -> Option<&Value> {
        self.fields.get(PATH_FIELD)
    }

    /// The path, when it is a string.
    pub fn path(&self) -> Option<&str> {
        self.path_value().and_then(Value::as_str)
    }

    /// The path as text: strings as-is, numbers and booleans in their
    /// literal form. Other values have no text form.
    pub fn path_text(&self) -> Option<Cow<'_, str>> {
        match self.path_value()? {
            Value::String(path) => Some(Cow::Borrowed(path)),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            _ => None,
        }
    }

    pub fn set_path(&mut self, path: String) {
        self.fields.insert(PATH_FIELD.to_string(), Value::String(path));
    }

    pub fn key(&self) -> Option<&Value> {
        self.fields.get(KEY_FIELD)
    }

    pub fn authorized(&self) -> Option<&Value> {
        self.fields.get(AUTHORIZED_FIELD)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }

    pub fn remove_field(&mut self, name: &str) -> Option<Value> {
        // shift_remove keeps the order of the remaining fields
        self.fields.shift_remove(name)
    }

    /// Child routes, only when `components` is a sequence.
    pub fn components(&self) -> Option<&Value> {
        self.fields.get(COMPONENTS_FIELD).filter(|c| c.is_array())
    }
}

/// Name of the JSON kind of `value`, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "an object",
    }
}

/// Borrow `value` as a route sequence.
pub fn as_sequence(value: &Value) -> RouteResult<&Vec<Value>> {
    value.as_array().ok_or(RouteError::NotASequence {
        found: value_kind(value),
    })
}

/// Convert a route sequence into nodes, top level only.
pub fn to_nodes(value: &Value) -> RouteResult<Vec<RouteNode>> {
    as_sequence(value)?
        .iter()
        .enumerate()
        .map(|(index, item)| RouteNode::from_value(item.clone(), index))
        .collect()
}

/// Rebuild a route sequence from nodes.
pub fn from_nodes(nodes: Vec<RouteNode>) -> Value {
    Value::Array(nodes.into_iter().map(RouteNode::into_value).collect())
}
