//! The closed operation vocabulary

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Authoring keyword that ends input; never stored in a list
pub const DONE_KEYWORD: &str = "DONE";

/// A storable operation kind
///
/// There is no "none" member: a failed parse is an error, not a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    MoveForward,
    MoveBackward,
    StopMotors,
    Wait,
    TurnRight,
    TurnLeft,
    LedOn,
    LedOff,
    GetTemperature,
    SoundOn,
    SoundOff,
    RandLed,
    RandSound,
    RandLightSound,
    Disco,
}

impl Operation {
    /// Every operation, in vocabulary order
    pub const ALL: [Operation; 15] = [
        Operation::MoveForward,
        Operation::MoveBackward,
        Operation::StopMotors,
        Operation::Wait,
        Operation::TurnRight,
        Operation::TurnLeft,
        Operation::LedOn,
        Operation::LedOff,
        Operation::GetTemperature,
        Operation::SoundOn,
        Operation::SoundOff,
        Operation::RandLed,
        Operation::RandSound,
        Operation::RandLightSound,
        Operation::Disco,
    ];

    /// Canonical spelling, as written to program files
    pub const fn name(self) -> &'static str {
        match self {
            Operation::MoveForward => "MOVE_FORWARD",
            Operation::MoveBackward => "MOVE_BACKWARD",
            Operation::StopMotors => "STOP_MOTORS",
            Operation::Wait => "WAIT",
            Operation::TurnRight => "TURN_RIGHT",
            Operation::TurnLeft => "TURN_LEFT",
            Operation::LedOn => "LED_ON",
            Operation::LedOff => "LED_OFF",
            Operation::GetTemperature => "GET_TEMPERATURE",
            Operation::SoundOn => "SOUND_ON",
            Operation::SoundOff => "SOUND_OFF",
            Operation::RandLed => "RAND_LED",
            Operation::RandSound => "RAND_SOUND",
            Operation::RandLightSound => "RAND_LIGHT_SOUND",
            Operation::Disco => "DISCO",
        }
    }

    /// Whether a resolved parameter is carried with this operation
    pub const fn takes_parameter(self) -> bool {
        matches!(
            self,
            Operation::MoveForward
                | Operation::MoveBackward
                | Operation::TurnRight
                | Operation::TurnLeft
                | Operation::Wait
                | Operation::LedOn
                | Operation::SoundOn
        )
    }

    /// Match a canonical name exactly (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }

    /// Match a name ignoring ASCII case and surrounding whitespace
    pub fn parse_ignore_case(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(input))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Name did not match any operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOperation;

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown operation")
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(UnknownOperation)
    }
}

/// One parsed line of authoring input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthoringInput {
    /// An operation to append
    Operation(Operation),
    /// End of input
    Done,
}

impl AuthoringInput {
    /// Parse operator input, case-insensitively
    pub fn parse(input: &str) -> Result<Self, UnknownOperation> {
        if input.trim().eq_ignore_ascii_case(DONE_KEYWORD) {
            return Ok(AuthoringInput::Done);
        }
        Operation::parse_ignore_case(input)
            .map(AuthoringInput::Operation)
            .ok_or(UnknownOperation)
    }
}
