//! Saved program storage

pub mod name;
pub mod store;

pub use name::{NameError, ProgramName};
pub use store::{ProgramStore, StorageError};
