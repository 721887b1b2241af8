//! Route module source handling.
//!
//! # Data Flow
//! ```text
//! module text
//!     → parser.rs (export statement → JSON5 literal → Value)
//!     → ... routing pipeline ...
//!     → render.rs (Value → indented literal → export statement)
//!     → module text
//! ```

pub mod parser;
pub mod render;

pub use parser::{parse_module, SourceError};
pub use render::{render_module, RenderOptions};
