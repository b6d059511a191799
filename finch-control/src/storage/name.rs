//! Program names
//!
//! A program is stored as `<name>.txt`, so names are limited to ASCII
//! letters and digits. That keeps them valid on every filesystem and rules
//! out path separators and dot segments.

use std::fmt;
use std::str::FromStr;

use heapless::String;
use thiserror::Error;

/// Longest accepted program name
pub const MAX_NAME_LEN: usize = 32;

/// Rejected program name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name is empty")]
    Empty,
    #[error("name is {0} characters long, the limit is {max}", max = MAX_NAME_LEN)]
    TooLong(usize),
    #[error("'{0}' is not a letter or digit")]
    InvalidCharacter(char),
}

/// Validated program name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgramName(String<MAX_NAME_LEN>);

impl ProgramName {
    /// Validate and wrap a name
    pub fn new(name: &str) -> Result<Self, NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if let Some(c) = name.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(NameError::InvalidCharacter(c));
        }
        let len = name.len();
        let inner = String::try_from(name).map_err(|_| NameError::TooLong(len))?;
        Ok(Self(inner))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// File name this program is stored under
    pub fn file_name(&self) -> std::string::String {
        format!("{}.txt", self.0)
    }
}

impl FromStr for ProgramName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ProgramName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
