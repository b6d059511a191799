//! Whole-program serialization
//!
//! Reading is lenient on purpose. A line that does not decode (no comma,
//! unknown name, non-integer value) is skipped and recorded, never fatal.
//! The decoded list keeps the valid entries in their original order, and
//! the caller decides what to make of the skip count. Blank lines are
//! ignored outright and are not counted as skipped.

use alloc::string::String;
use alloc::vec::Vec;

use finch_core::program::CommandList;
use tracing::{debug, warn};

use crate::line::{decode_line, encode_line, LineError};

/// A line that was dropped while decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source text
    pub line_number: usize,
    pub reason: LineError,
}

/// Result of decoding a program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Entries that decoded, in source order
    pub list: CommandList,
    /// Lines that did not
    pub skipped: Vec<SkippedLine>,
}

impl Decoded {
    /// Number of skipped lines
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Check if every non-blank line decoded
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Encode a list, one newline-terminated line per entry
pub fn serialize(list: &CommandList) -> String {
    let mut out = String::new();
    for command in list {
        out.push_str(&encode_line(command));
        out.push('\n');
    }
    out
}

/// Decode program text, skipping lines that do not decode
pub fn deserialize(text: &str) -> Decoded {
    let mut decoded = Decoded::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line(line) {
            Ok(command) => decoded.list.push(command),
            Err(reason) => {
                debug!("Skipping line {}: {}", index + 1, reason);
                decoded.skipped.push(SkippedLine {
                    line_number: index + 1,
                    reason,
                });
            }
        }
    }

    if !decoded.is_clean() {
        warn!(
            "Decoded {} entries, skipped {} malformed lines",
            decoded.list.len(),
            decoded.skipped_count()
        );
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use finch_core::command::Command;
    use finch_core::config::ParameterProfile;
    use finch_core::program::Session;

    #[test]
    fn test_serialize_authored_program() {
        let profile = ParameterProfile::new(200, 100, 2.0, 400).unwrap();
        let mut session = Session::new(profile);
        session.enter("MOVE_FORWARD").unwrap();
        session.enter("WAIT").unwrap();
        session.enter("LED_OFF").unwrap();

        assert_eq!(
            serialize(session.list()),
            "MOVE_FORWARD,200\nWAIT,2000\nLED_OFF,-1\n"
        );
    }

    #[test]
    fn test_serialize_empty_list() {
        assert_eq!(serialize(&CommandList::new()), "");
    }

    #[test]
    fn test_deserialize_skips_unknown_operation() {
        let decoded = deserialize("MOVE_FORWARD,200\nBOGUS,5\nLED_OFF,-1\n");
        assert_eq!(
            decoded.list.as_slice(),
            &[Command::MoveForward(200), Command::LedOff]
        );
        assert_eq!(
            decoded.skipped,
            [SkippedLine {
                line_number: 2,
                reason: LineError::UnknownOperation
            }]
        );
    }

    #[test]
    fn test_blank_lines_not_counted() {
        let decoded = deserialize("\nWAIT,1000\n   \n\nSOUND_OFF,-1");
        assert_eq!(decoded.list.len(), 2);
        assert!(decoded.is_clean());
    }

    #[test]
    fn test_crlf_file() {
        let decoded = deserialize("LED_ON,255\r\nWAIT,1500\r\n");
        assert_eq!(
            decoded.list.as_slice(),
            &[Command::LedOn(255), Command::Wait(1500)]
        );
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let decoded = deserialize("WAIT,1000\n\nnonsense\nWAIT,x\n");
        assert_eq!(decoded.skipped_count(), 2);
        assert_eq!(decoded.skipped[0].line_number, 3);
        assert_eq!(decoded.skipped[0].reason, LineError::MissingSeparator);
        assert_eq!(decoded.skipped[1].line_number, 4);
        assert_eq!(decoded.skipped[1].reason, LineError::InvalidParameter);
    }
}
