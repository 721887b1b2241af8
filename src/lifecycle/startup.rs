//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration, then apply CLI overrides
//! - Run one rewrite, or hand over to the watcher
//!
//! # Design Decisions
//! - Fail fast: a bad configuration stops before the route file is read
//! - Overrides go through the same validation as the config file

use std::path::PathBuf;

use crate::config::loader::{load_or_default, ConfigError};
use crate::config::validation::validate_prefix;
use crate::config::RewriteConfig;
use crate::error::RewriteResult;
use crate::lifecycle::rewrite::{rewrite_file, RewriteOutcome, WriteMode};
use crate::lifecycle::signals;
use crate::lifecycle::watch::RouteWatcher;

/// Everything one invocation needs.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Route module to regenerate.
    pub file: PathBuf,
    /// Optional TOML configuration file.
    pub config: Option<PathBuf>,
    /// Public-prefix override.
    pub prefix: Option<String>,
    pub mode: WriteMode,
    pub watch: bool,
}

/// Resolve the effective configuration for `options`.
pub fn resolve_config(options: &RunOptions) -> Result<RewriteConfig, ConfigError> {
    let mut config = load_or_default(options.config.as_deref())?;
    if let Some(prefix) = &options.prefix {
        validate_prefix(prefix).map_err(|e| ConfigError::Validation(vec![e]))?;
        config.routes.public_prefix = prefix.clone();
    }
    Ok(config)
}

/// Rewrite the route file once.
pub async fn run_once(
    options: &RunOptions,
    config: &RewriteConfig,
) -> RewriteResult<RewriteOutcome> {
    tracing::info!(
        path = %options.file.display(),
        prefix = %config.routes.public_prefix,
        mode = ?options.mode,
        "Generating public routes"
    );
    rewrite_file(&options.file, config, options.mode).await
}

/// Watch mode: rewrite once, then on every change until interrupted.
pub async fn run_watch(options: &RunOptions, config: &RewriteConfig) -> RewriteResult<()> {
    let first = run_once(options, config).await;
    crate::lifecycle::report::report(&options.file, &first);
    RouteWatcher::new(&options.file, options.mode)
        .run(config, signals::interrupted())
        .await
}
