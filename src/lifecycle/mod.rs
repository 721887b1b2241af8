//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Apply CLI overrides
//!
//! Rewrite (rewrite.rs):
//!     Read file → Parse → Route pipeline → Render → Write (if changed)
//!
//! Watch (watch.rs, signals.rs):
//!     File change → Rewrite → Report; SIGINT → Stop
//!
//! Report (report.rs):
//!     Outcome → one success line | one generic failure line
//! ```
//!
//! # Design Decisions
//! - Ordered: config first, then the route file
//! - A single failure boundary per rewrite; details go to the log

pub mod report;
pub mod rewrite;
pub mod signals;
pub mod startup;
pub mod watch;

pub use rewrite::{rewrite_file, rewrite_source, RewriteOutcome, WriteMode};
pub use startup::RunOptions;
