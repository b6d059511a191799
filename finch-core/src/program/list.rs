//! Command list
//!
//! An ordered, append-only sequence of entries. Insertion order is
//! execution order; duplicates are allowed; the only removal is a whole
//! reset.

use alloc::vec::Vec;
use core::slice;

use crate::command::{Command, Operation};
use crate::config::ParameterProfile;

/// Ordered list of command entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandList {
    entries: Vec<Command>,
}

impl CommandList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry
    ///
    /// No range check: values were validated when the profile was set.
    pub fn push(&mut self, command: Command) {
        self.entries.push(command);
    }

    /// Append `op` with its parameter resolved from `profile`
    pub fn append(&mut self, op: Operation, profile: &ParameterProfile) -> Command {
        let command = Command::resolved(op, profile);
        self.push(command);
        command
    }

    /// Discard every entry
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> slice::Iter<'_, Command> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.entries
    }
}

impl FromIterator<Command> for CommandList {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Command> for CommandList {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CommandList {
    type Item = &'a Command;
    type IntoIter = slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for CommandList {
    type Item = Command;
    type IntoIter = alloc::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
