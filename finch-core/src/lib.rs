//! Command program core for the Finch robot
//!
//! This crate contains all program logic that does not depend on a
//! specific robot link:
//!
//! - Operation vocabulary and command entries
//! - Parameter profile and append-time resolution
//! - Command lists and the authoring session
//! - Execution engine (dispatch, DISCO, neutral-state cleanup)
//! - Talent show routines

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod command;
pub mod config;
pub mod engine;
pub mod program;
pub mod routines;

pub use command::{Command, Operation};
pub use config::ParameterProfile;
pub use engine::{execute, ExecutionError, ExecutionEvent, ExecutionSummary, Observer};
pub use program::{CommandList, Session};
