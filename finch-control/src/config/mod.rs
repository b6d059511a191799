//! Configuration loading
//!
//! Reads `finch.toml` from disk, falling back to the defaults compiled
//! into the binary.

pub mod loader;

pub use loader::{ConfigError, ControlConfig};
