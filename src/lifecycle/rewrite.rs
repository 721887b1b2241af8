//! One rewrite of a route file.
//!
//! # Responsibilities
//! - Read the route module from disk
//! - Run parse → route pipeline → render
//! - Write the result back to the same path
//!
//! # Design Decisions
//! - Nothing is written until the new text is fully rendered
//! - Output equal to the current content is not written, so rewriting a
//!   generated file is a no-op on disk
//! - Errors keep their category; the binary collapses them into one message

use std::path::Path;

use crate::config::RewriteConfig;
use crate::error::{RewriteError, RewriteResult};
use crate::routing::build_public_routes;
use crate::source::{parse_module, render_module, RenderOptions};

/// What to do with the rendered module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Overwrite the route file.
    #[default]
    Overwrite,
    /// Leave the file alone and hand back the rendered text.
    DryRun,
}

/// Result of a successful rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The file was overwritten with new content.
    Written,
    /// The rendered text equals the file content; nothing was written.
    Unchanged,
    /// Dry run: the text that would have been written.
    Preview(String),
}

/// Regenerate the text of a route module.
pub fn rewrite_source(source: &str, config: &RewriteConfig) -> RewriteResult<String> {
    let routes = parse_module(source)?;
    let merged = build_public_routes(&routes, &config.routes.public_prefix)?;
    Ok(render_module(&merged, &RenderOptions::from(&config.output)))
}

/// Regenerate the route module at `path`.
pub async fn rewrite_file(
    path: &Path,
    config: &RewriteConfig,
    mode: WriteMode,
) -> RewriteResult<RewriteOutcome> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RewriteError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let rendered = rewrite_source(&source, config)?;

    if mode == WriteMode::DryRun {
        return Ok(RewriteOutcome::Preview(rendered));
    }

    if rendered == source {
        tracing::debug!(path = %path.display(), "Route file already up to date");
        return Ok(RewriteOutcome::Unchanged);
    }

    tokio::fs::write(path, rendered.as_bytes())
        .await
        .map_err(|source| RewriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        bytes = rendered.len(),
        "Route file rewritten"
    );
    Ok(RewriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_rewrite_source_users_scenario() {
        let source = "module.exports = [{path: '/users', components: [{path: '/list'}]}]";
        let rendered = rewrite_source(source, &RewriteConfig::default()).unwrap();

        let expected = "module.exports = [
\t{
\t\tpath: '/users',
\t\tcomponents: [
\t\t\t{
\t\t\t\tpath: '/list'
\t\t\t}
\t\t]
\t},
\t{
\t\tpath: '/pub/users',
\t\tcomponents: [
\t\t\t{
\t\t\t\tpath: '/pub/list',
\t\t\t\tauthorized: true,
\t\t\t\tkey: '/pub/list'
\t\t\t}
\t\t],
\t\tauthorized: true,
\t\tkey: '/pub/users'
\t}
]";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_rewrite_source_uses_configured_prefix() {
        let mut config = RewriteConfig::default();
        config.routes.public_prefix = "/open".into();
        let rendered = rewrite_source("[{path: '/open/a'}, {path: '/a'}]", &config).unwrap();
        assert!(rendered.contains("path: '/a'"));
        assert!(rendered.contains("path: '/open/a'"));
        assert_eq!(rendered.matches("path:").count(), 2);
    }

    #[test]
    fn test_rewrite_source_rejects_object_export() {
        let err = rewrite_source("module.exports = {path: '/a'}", &RewriteConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RouteShape);
    }

    #[test]
    fn test_rewrite_source_reports_parse_errors() {
        let err = rewrite_source("module.exports = [", &RewriteConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
