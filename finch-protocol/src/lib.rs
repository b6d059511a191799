//! Command program text format
//!
//! This crate defines how a command list is persisted. Every entry is one
//! line of ASCII text:
//!
//! ```text
//! ┌────────────────┬───┬─────────────────┬────┐
//! │ OPERATION_NAME │ , │ PARAMETER_VALUE │ \n │
//! └────────────────┴───┴─────────────────┴────┘
//! ```
//!
//! The name is the canonical vocabulary spelling, the value a base-10
//! signed integer with `-1` meaning "none". There is no header and no
//! trailing metadata.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod codec;
pub mod line;

pub use codec::{deserialize, serialize, Decoded, SkippedLine};
pub use line::{decode_line, encode_line, Line, LineError, FIELD_SEPARATOR, MAX_LINE_LEN};
