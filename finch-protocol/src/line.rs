//! Single-line encoding and decoding
//!
//! Line format:
//! - OPERATION_NAME: canonical vocabulary spelling, case-sensitive
//! - `,`: field separator (the first comma splits the line)
//! - PARAMETER_VALUE: base-10 `i32`, `-1` for parameter-free operations

use core::fmt::{self, Write};

use finch_core::command::{Command, Operation};
use heapless::String;

/// Field separator
pub const FIELD_SEPARATOR: char = ',';

/// Longest encoded line: "RAND_LIGHT_SOUND" + ',' + "-2147483648"
pub const MAX_LINE_LEN: usize = 32;

/// One encoded line, without the trailing newline
pub type Line = String<MAX_LINE_LEN>;

/// Reasons a line does not decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    /// No `,` in the line
    MissingSeparator,
    /// Left field is not a canonical operation name
    UnknownOperation,
    /// Right field is not a signed integer
    InvalidParameter,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::MissingSeparator => f.write_str("missing ',' separator"),
            LineError::UnknownOperation => f.write_str("unknown operation name"),
            LineError::InvalidParameter => f.write_str("parameter is not an integer"),
        }
    }
}

/// Encode one entry as `NAME,VALUE`
pub fn encode_line(command: &Command) -> Line {
    let mut line = Line::new();
    // Cannot overflow: MAX_LINE_LEN covers the longest name and i32::MIN
    let _ = write!(
        line,
        "{}{}{}",
        command.operation().name(),
        FIELD_SEPARATOR,
        command.wire_parameter()
    );
    line
}

/// Decode one line into an entry
///
/// Surrounding whitespace on either field is ignored, which also accepts
/// CRLF line endings. The value of a parameter-free operation must still be
/// an integer but is otherwise discarded.
pub fn decode_line(line: &str) -> Result<Command, LineError> {
    let (name, value) = line
        .split_once(FIELD_SEPARATOR)
        .ok_or(LineError::MissingSeparator)?;

    let op = Operation::from_name(name.trim()).ok_or(LineError::UnknownOperation)?;
    let parameter = value
        .trim()
        .parse::<i32>()
        .map_err(|_| LineError::InvalidParameter)?;

    Ok(Command::from_parts(op, parameter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_with_parameter() {
        assert_eq!(encode_line(&Command::MoveForward(200)).as_str(), "MOVE_FORWARD,200");
        assert_eq!(encode_line(&Command::Wait(2000)).as_str(), "WAIT,2000");
    }

    #[test]
    fn test_encode_without_parameter() {
        assert_eq!(encode_line(&Command::LedOff).as_str(), "LED_OFF,-1");
        assert_eq!(encode_line(&Command::Disco).as_str(), "DISCO,-1");
    }

    #[test]
    fn test_longest_line_fits() {
        let line = encode_line(&Command::TurnRight(i32::MIN));
        assert_eq!(line.as_str(), "TURN_RIGHT,-2147483648");
        for op in Operation::ALL {
            let line = encode_line(&Command::from_parts(op, i32::MIN));
            assert!(line.as_str().starts_with(op.name()));
        }
    }

    #[test]
    fn test_decode_valid() {
        assert_eq!(decode_line("MOVE_FORWARD,200"), Ok(Command::MoveForward(200)));
        assert_eq!(decode_line("LED_OFF,-1"), Ok(Command::LedOff));
        assert_eq!(decode_line("SOUND_ON,400\r"), Ok(Command::SoundOn(400)));
    }

    #[test]
    fn test_decode_splits_on_first_comma() {
        assert_eq!(decode_line("WAIT,1,2"), Err(LineError::InvalidParameter));
    }

    #[test]
    fn test_decode_rejections() {
        assert_eq!(decode_line("MOVE_FORWARD 200"), Err(LineError::MissingSeparator));
        assert_eq!(decode_line("BOGUS,5"), Err(LineError::UnknownOperation));
        assert_eq!(decode_line("move_forward,5"), Err(LineError::UnknownOperation));
        assert_eq!(decode_line("WAIT,two"), Err(LineError::InvalidParameter));
        assert_eq!(decode_line("WAIT,"), Err(LineError::InvalidParameter));
        assert_eq!(decode_line("LED_OFF,none"), Err(LineError::InvalidParameter));
    }

    #[test]
    fn test_decode_drops_value_for_parameter_free_ops() {
        assert_eq!(decode_line("LED_OFF,42"), Ok(Command::LedOff));
    }
}
