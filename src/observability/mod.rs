//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config, routing, source, lifecycle
//!     → tracing events (debug per pipeline stage, info per rewrite)
//!     → logging.rs subscriber (EnvFilter + fmt, stderr)
//! ```

pub mod logging;
