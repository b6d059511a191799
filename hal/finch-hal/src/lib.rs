//! Finch Hardware Abstraction Layer
//!
//! This crate defines the capability boundary between command programs and
//! the robot. The application logic only ever talks to a [`HardwarePort`];
//! a USB-tethered robot, a simulator or a test double sit behind it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (finch-control)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  finch-core (engine, routines)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  finch-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ finch-drivers │       │  test doubles │
//! │  (simulator)  │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`port::HardwarePort`] - Motors, LED, buzzer, timing and sensors

#![no_std]
#![deny(unsafe_code)]

pub mod port;
pub mod sensor;

// Re-export key items at crate root for convenience
pub use port::{HardwarePort, PortError};
pub use sensor::{celsius_to_fahrenheit, LightLevels};
