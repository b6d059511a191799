//! Command vocabulary
//!
//! The closed set of operations a program may contain, and the tagged
//! entries stored in a command list.

pub mod entry;
pub mod operation;

pub use entry::{resolve, Command, NO_PARAMETER};
pub use operation::{AuthoringInput, Operation, UnknownOperation, DONE_KEYWORD};
