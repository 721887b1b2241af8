//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RewriteConfig (validated, immutable)
//!     → CLI overrides (--prefix) re-validated
//!     → passed by reference to every rewrite
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::OutputConfig;
pub use schema::QuoteStyle;
pub use schema::RewriteConfig;
pub use schema::RoutesConfig;
