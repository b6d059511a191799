//! Command list execution engine
//!
//! Translates a command list into hardware port calls, one entry at a time,
//! and always leaves the robot neutral afterwards.

pub mod choreography;
pub mod events;
pub mod executor;

#[cfg(test)]
pub(crate) mod testing;

pub use choreography::{disco, random_led, random_tone, settle};
pub use events::{ExecutionEvent, NoopObserver, Observer};
pub use executor::{execute, ExecutionError, ExecutionSummary};
