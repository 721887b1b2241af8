//! Route list transforms.
//!
//! # Responsibilities
//! - Strip deduplication keys and the public-prefix marker (normalize)
//! - Prefix paths and inject `authorized`/`key` defaults (publicize)
//! - Drop top-level entries with a repeated path (deduplicate)
//!
//! # Design Decisions
//! - Every transform is a pure function `&Value -> Result<Value>`; inputs are
//!   never mutated
//! - Every transform checks its own input is a sequence
//! - Recursion follows `components` only when it is a sequence

use serde_json::Value;

use crate::routing::node::{
    as_sequence, from_nodes, to_nodes, RouteNode, RouteResult, AUTHORIZED_FIELD,
    COMPONENTS_FIELD, KEY_FIELD,
};

/// Apply `f` to every node of `routes`, at every depth.
///
/// `f` runs on a node before its children are visited.
fn map_routes<F>(routes: &Value, f: &F) -> RouteResult<Value>
where
    F: Fn(&mut RouteNode),
{
    let items = as_sequence(routes)?;
    let mut mapped = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let mut node = RouteNode::from_value(item.clone(), index)?;
        f(&mut node);
        if let Some(children) = node.components().cloned() {
            node.set_field(COMPONENTS_FIELD, map_routes(&children, f)?);
        }
        mapped.push(node);
    }

    Ok(from_nodes(mapped))
}

/// Remove `key` from every node.
pub fn strip_keys(routes: &Value) -> RouteResult<Value> {
    map_routes(routes, &|node: &mut RouteNode| {
        node.remove_field(KEY_FIELD);
    })
}

/// Remove a leading `prefix` from every string path.
pub fn strip_public_prefix(routes: &Value, prefix: &str) -> RouteResult<Value> {
    map_routes(routes, &|node: &mut RouteNode| {
        let stripped = node
            .path()
            .and_then(|path| path.strip_prefix(prefix))
            .map(str::to_string);
        if let Some(path) = stripped {
            node.set_path(path);
        }
    })
}

/// Prepend `prefix` to every path with a text form, unconditionally.
///
/// Number and boolean paths become strings (`5` turns into `/pub5`).
pub fn add_public_prefix(routes: &Value, prefix: &str) -> RouteResult<Value> {
    map_routes(routes, &|node: &mut RouteNode| {
        if let Some(path) = node.path_text() {
            let prefixed = format!("{prefix}{path}");
            node.set_path(prefixed);
        }
    })
}

/// Give every node `authorized: true` and `key = path` unless already set.
pub fn inject_key_and_auth(routes: &Value) -> RouteResult<Value> {
    map_routes(routes, &|node: &mut RouteNode| {
        if !node.has_field(AUTHORIZED_FIELD) {
            node.set_field(AUTHORIZED_FIELD, Value::Bool(true));
        }
        if !node.has_field(KEY_FIELD) {
            if let Some(path) = node.path_value().cloned() {
                node.set_field(KEY_FIELD, path);
            }
        }
    })
}

/// Keep the first top-level entry for every distinct path.
///
/// Paths are compared by their text form, so `5` and `'5'` collide.
/// Children are not deduplicated. Entries without a path share one slot.
pub fn dedupe_by_path(routes: &Value) -> RouteResult<Value> {
    let nodes = to_nodes(routes)?;
    let mut seen: Vec<Option<Value>> = Vec::with_capacity(nodes.len());
    let mut kept = Vec::with_capacity(nodes.len());

    for node in nodes {
        let path = match node.path_text() {
            Some(text) => Some(Value::String(text.into_owned())),
            None => node.path_value().cloned(),
        };
        if !seen.contains(&path) {
            seen.push(path);
            kept.push(node);
        }
    }

    Ok(from_nodes(kept))
}

/// Canonical form: keys and public prefix stripped.
pub fn normalize(routes: &Value, prefix: &str) -> RouteResult<Value> {
    let without_keys = strip_keys(routes)?;
    strip_public_prefix(&without_keys, prefix)
}

/// Public variant of a canonical list.
pub fn publicize(routes: &Value, prefix: &str) -> RouteResult<Value> {
    let prefixed = add_public_prefix(routes, prefix)?;
    inject_key_and_auth(&prefixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::node::RouteError;
    use serde_json::json;

    fn has_key_anywhere(routes: &Value) -> bool {
        routes.as_array().unwrap().iter().any(|node| {
            node.get("key").is_some()
                || node
                    .get("components")
                    .filter(|c| c.is_array())
                    .map(has_key_anywhere)
                    .unwrap_or(false)
        })
    }

    #[test]
    fn test_strip_keys_is_total() {
        let routes = json!([
            {"path": "/a", "key": "a", "components": [
                {"path": "/b", "key": "b", "components": [{"path": "/c", "key": "c"}]}
            ]},
            {"path": "/d"}
        ]);
        let stripped = strip_keys(&routes).unwrap();
        assert!(!has_key_anywhere(&stripped));
        // input untouched
        assert!(has_key_anywhere(&routes));
    }

    #[test]
    fn test_strip_public_prefix() {
        let routes = json!([
            {"path": "/pub/users", "components": [{"path": "/pub/list"}, {"path": "/edit"}]},
            {"path": "/home"}
        ]);
        let stripped = strip_public_prefix(&routes, "/pub").unwrap();
        assert_eq!(
            stripped,
            json!([
                {"path": "/users", "components": [{"path": "/list"}, {"path": "/edit"}]},
                {"path": "/home"}
            ])
        );
    }

    #[test]
    fn test_strip_public_prefix_is_plain_string_prefix() {
        let stripped = strip_public_prefix(&json!([{"path": "/public"}]), "/pub").unwrap();
        assert_eq!(stripped, json!([{"path": "lic"}]));
    }

    #[test]
    fn test_prefix_round_trip() {
        let routes = json!([{"path": "/users", "components": [{"path": "/list"}]}]);
        let prefixed = add_public_prefix(&routes, "/pub").unwrap();
        assert_eq!(strip_public_prefix(&prefixed, "/pub").unwrap(), routes);
    }

    #[test]
    fn test_add_prefix_once_per_node() {
        let routes = json!([{"path": "/a", "components": [
            {"path": "/b", "components": [{"path": "/c"}]}
        ]}]);
        let prefixed = add_public_prefix(&routes, "/pub").unwrap();
        assert_eq!(
            prefixed,
            json!([{"path": "/pub/a", "components": [
                {"path": "/pub/b", "components": [{"path": "/pub/c"}]}
            ]}])
        );
    }

    #[test]
    fn test_add_prefix_to_scalar_paths() {
        let routes = json!([
            {"path": 5},
            {"path": true},
            {"path": null},
            {"path": {"name": "x"}},
            {"title": "no path"}
        ]);
        assert_eq!(
            add_public_prefix(&routes, "/pub").unwrap(),
            json!([
                {"path": "/pub5"},
                {"path": "/pubtrue"},
                {"path": null},
                {"path": {"name": "x"}},
                {"title": "no path"}
            ])
        );
    }

    #[test]
    fn test_inject_is_idempotent() {
        let routes = json!([
            {"path": "/a", "components": [{"path": "/b", "authorized": false}]},
            {"path": "/c", "key": "custom"}
        ]);
        let once = inject_key_and_auth(&routes).unwrap();
        let twice = inject_key_and_auth(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(
            once,
            json!([
                {"path": "/a", "components": [
                    {"path": "/b", "authorized": false, "key": "/b"}
                ], "authorized": true, "key": "/a"},
                {"path": "/c", "key": "custom", "authorized": true}
            ])
        );
    }

    #[test]
    fn test_inject_without_path_sets_no_key() {
        let injected = inject_key_and_auth(&json!([{"name": "x"}])).unwrap();
        assert_eq!(injected, json!([{"name": "x", "authorized": true}]));
    }

    #[test]
    fn test_dedupe_keeps_first() {
        let routes = json!([
            {"path": "/a", "v": 1},
            {"path": "/b", "v": 2},
            {"path": "/a", "v": 3}
        ]);
        assert_eq!(
            dedupe_by_path(&routes).unwrap(),
            json!([{"path": "/a", "v": 1}, {"path": "/b", "v": 2}])
        );
    }

    #[test]
    fn test_dedupe_compares_path_text() {
        let routes = json!([{"path": 5, "v": 1}, {"path": "5", "v": 2}, {"path": "/a"}]);
        assert_eq!(
            dedupe_by_path(&routes).unwrap(),
            json!([{"path": 5, "v": 1}, {"path": "/a"}])
        );
    }

    #[test]
    fn test_dedupe_does_not_touch_children() {
        let routes = json!([{"path": "/a", "components": [{"path": "/x"}, {"path": "/x"}]}]);
        assert_eq!(dedupe_by_path(&routes).unwrap(), routes);
    }

    #[test]
    fn test_non_object_components_pass_through() {
        let routes = json!([{"path": "/a", "key": "a", "components": {"path": "/b", "key": "b"}}]);
        assert_eq!(
            strip_keys(&routes).unwrap(),
            json!([{"path": "/a", "components": {"path": "/b", "key": "b"}}])
        );
    }

    #[test]
    fn test_every_stage_rejects_non_sequence() {
        let bad = json!({"path": "/a"});
        let expected = RouteError::NotASequence { found: "an object" };
        assert_eq!(strip_keys(&bad).unwrap_err(), expected);
        assert_eq!(strip_public_prefix(&bad, "/pub").unwrap_err(), expected);
        assert_eq!(add_public_prefix(&bad, "/pub").unwrap_err(), expected);
        assert_eq!(inject_key_and_auth(&bad).unwrap_err(), expected);
        assert_eq!(dedupe_by_path(&bad).unwrap_err(), expected);
    }

    #[test]
    fn test_non_object_child_entry_is_rejected() {
        let routes = json!([{"path": "/a", "components": [{"path": "/b"}, 7]}]);
        assert_eq!(
            publicize(&routes, "/pub").unwrap_err(),
            RouteError::NotAnObject { index: 1 }
        );
    }
}
