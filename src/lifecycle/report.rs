//! User-facing outcome messages.
//!
//! One line per rewrite: a success line, or a single generic failure line.
//! The underlying error only goes to the log.

use std::path::Path;

use crate::error::RewriteResult;
use crate::lifecycle::rewrite::RewriteOutcome;

pub const FAILURE_MESSAGE: &str = "Failed to generate routes";

/// Success line for `path`.
pub fn success_message(path: &Path) -> String {
    format!("Routes generated: {}", path.display())
}

/// Print the outcome of one rewrite. Returns true on success.
pub fn report(path: &Path, result: &RewriteResult<RewriteOutcome>) -> bool {
    match result {
        Ok(RewriteOutcome::Preview(text)) => {
            println!("{text}");
            true
        }
        Ok(RewriteOutcome::Written) | Ok(RewriteOutcome::Unchanged) => {
            println!("{}", success_message(path));
            true
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                kind = ?e.kind(),
                error = %e,
                "Route generation failed"
            );
            eprintln!("{FAILURE_MESSAGE}");
            false
        }
    }
}
