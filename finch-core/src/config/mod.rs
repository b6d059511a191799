//! Configuration types
//!
//! Parameter defaults used while authoring command lists.

pub mod profile;

pub use profile::*;
