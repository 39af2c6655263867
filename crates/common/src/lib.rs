//! Unibuild Common Utilities
//!
//! Shared infrastructure for all unibuild crates:
//! - Error types and result aliases
//! - Tracing/logging initialization
//! - Configuration loading
//! - Home-directory path expansion

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use config::*;
pub use error::*;
pub use paths::*;
