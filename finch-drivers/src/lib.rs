//! Robot port implementations
//!
//! This crate provides concrete implementations of the port trait defined
//! in finch-hal:
//!
//! - Simulated Finch (state tracking, call history, optional real-time waits)

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

pub mod sim;

pub use sim::{PortCall, SimConfig, SimulatedFinch, HISTORY_LEN};
