//! Public route generator library.
//!
//! Rewrites a router-definition module so that every route also exists as a
//! public variant: path prefixed with a marker (`/pub` by default),
//! `authorized` and `key` filled in.
//!
//! # Architecture Overview
//!
//! ```text
//!   router.js ──▶ source::parser ──▶ routing::transform ──▶ routing::pipeline
//!                 (JSON5 literal)    normalize / dedupe /   canonical ++ public
//!                                    publicize                      │
//!                                                                   ▼
//!   router.js ◀── lifecycle::rewrite ◀────────────────────── source::render
//!                 (write if changed)                        (indented literal)
//!
//!   Cross-cutting: config (TOML + validation), observability (tracing),
//!                  lifecycle (startup, watch, signals, report)
//! ```
//!
//! ```
//! use gen_pub_router::config::RewriteConfig;
//! use gen_pub_router::lifecycle::rewrite_source;
//!
//! let text = rewrite_source(
//!     "module.exports = [{path: '/users'}]",
//!     &RewriteConfig::default(),
//! )
//! .unwrap();
//! assert!(text.starts_with("module.exports = ["));
//! assert!(text.contains("path: '/pub/users'"));
//! ```

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod source;

pub use config::RewriteConfig;
pub use error::{ErrorKind, RewriteError};
pub use lifecycle::{rewrite_file, rewrite_source, RewriteOutcome, WriteMode};
