//! Canonical + public route list assembly.

use serde_json::Value;

use crate::routing::node::{as_sequence, RouteResult};
use crate::routing::transform::{dedupe_by_path, normalize, publicize};

/// Result of running the route pipeline on one route list.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSet {
    /// Routes with keys and the public prefix stripped, deduplicated.
    pub canonical: Value,
    /// Public variant derived from `canonical`.
    pub public: Value,
}

impl RouteSet {
    /// Normalize, deduplicate and publicize `routes`.
    ///
    /// Deduplication only sees the canonical list; public entries are
    /// derived from it afterwards.
    pub fn build(routes: &Value, prefix: &str) -> RouteResult<Self> {
        let normalized = normalize(routes, prefix)?;
        let canonical = dedupe_by_path(&normalized)?;
        let public = publicize(&canonical, prefix)?;

        tracing::debug!(
            input = as_sequence(routes)?.len(),
            canonical = as_sequence(&canonical)?.len(),
            prefix,
            "Route set built"
        );

        Ok(Self { canonical, public })
    }

    /// Canonical routes followed by their public variants.
    pub fn merge(self) -> RouteResult<Value> {
        let mut merged = as_sequence(&self.canonical)?.clone();
        merged.extend(as_sequence(&self.public)?.iter().cloned());
        Ok(Value::Array(merged))
    }
}

/// Run the whole route pipeline: the merged canonical + public list.
pub fn build_public_routes(routes: &Value, prefix: &str) -> RouteResult<Value> {
    RouteSet::build(routes, prefix)?.merge()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::node::RouteError;
    use serde_json::json;

    #[test]
    fn test_users_scenario() {
        let routes = json!([{"path": "/users", "components": [{"path": "/list"}]}]);
        let set = RouteSet::build(&routes, "/pub").unwrap();

        assert_eq!(set.canonical, routes);
        assert_eq!(
            set.public,
            json!([{
                "path": "/pub/users",
                "components": [{"path": "/pub/list", "authorized": true, "key": "/pub/list"}],
                "authorized": true,
                "key": "/pub/users"
            }])
        );

        let merged = set.clone().merge().unwrap();
        let merged = merged.as_array().unwrap();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], set.canonical[0]);
        assert_eq!(merged[1], set.public[0]);
    }

    #[test]
    fn test_merge_length_is_twice_canonical() {
        let routes = json!([
            {"path": "/a"}, {"path": "/b", "key": "b"}, {"path": "/a"},
            {"path": "/pub/c", "authorized": false}, {"path": "/c"}
        ]);
        let set = RouteSet::build(&routes, "/pub").unwrap();
        let n = set.canonical.as_array().unwrap().len();
        assert_eq!(n, 3);
        assert_eq!(set.merge().unwrap().as_array().unwrap().len(), 2 * n);
    }

    #[test]
    fn test_previous_output_collapses_back() {
        let routes = json!([{"path": "/users", "title": "Users"}]);
        let first = build_public_routes(&routes, "/pub").unwrap();
        let second = build_public_routes(&first, "/pub").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_number_path_is_published_and_stable() {
        let routes = json!([{"path": 5}]);
        let first = build_public_routes(&routes, "/pub").unwrap();
        assert_eq!(
            first,
            json!([
                {"path": 5},
                {"path": "/pub5", "authorized": true, "key": "/pub5"}
            ])
        );
        assert_eq!(build_public_routes(&first, "/pub").unwrap(), first);
    }

    #[test]
    fn test_rejects_plain_object() {
        let err = build_public_routes(&json!({"path": "/a"}), "/pub").unwrap_err();
        assert_eq!(err, RouteError::NotASequence { found: "an object" });
    }
}
