//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Parsed route list (Value)
//!     → transform.rs normalize (strip key, strip public prefix)
//!     → transform.rs dedupe_by_path (top level, first wins)
//!     → transform.rs publicize (add prefix, inject authorized/key)
//!     → pipeline.rs merge (canonical ++ public)
//! ```
//!
//! # Design Decisions
//! - Transforms are pure: a new tree is built, the input is never mutated
//! - Every transform rejects input that is not a sequence
//! - Unknown route fields are carried through in their original order
//! - Deduplication runs before publicizing, on the canonical list only

pub mod node;
pub mod pipeline;
pub mod transform;

pub use node::{RouteError, RouteNode};
pub use pipeline::{build_public_routes, RouteSet};
