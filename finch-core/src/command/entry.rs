//! Command entries and parameter resolution

use core::fmt;

use super::operation::Operation;
use crate::config::ParameterProfile;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wire value for "no parameter"
pub const NO_PARAMETER: i32 = -1;

/// One entry of a command list
///
/// Parameter-carrying operations hold their resolved value; the rest carry
/// nothing, so there is no sentinel to misread as a real value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    /// Both motors forward at the given duty
    MoveForward(i32),
    /// Both motors backward at the given duty
    MoveBackward(i32),
    StopMotors,
    /// Block for the given milliseconds
    Wait(i32),
    /// Spin right: left at full duty, right reversed at half
    TurnRight(i32),
    /// Spin left: right at full duty, left reversed at half
    TurnLeft(i32),
    /// White LED at the given intensity
    LedOn(i32),
    LedOff,
    GetTemperature,
    /// Tone at the given frequency (Hz)
    SoundOn(i32),
    SoundOff,
    RandLed,
    RandSound,
    RandLightSound,
    Disco,
}

impl Command {
    /// Build an entry from an operation and a raw parameter
    ///
    /// The parameter is dropped for operations that do not take one.
    pub fn from_parts(op: Operation, parameter: i32) -> Self {
        match op {
            Operation::MoveForward => Command::MoveForward(parameter),
            Operation::MoveBackward => Command::MoveBackward(parameter),
            Operation::StopMotors => Command::StopMotors,
            Operation::Wait => Command::Wait(parameter),
            Operation::TurnRight => Command::TurnRight(parameter),
            Operation::TurnLeft => Command::TurnLeft(parameter),
            Operation::LedOn => Command::LedOn(parameter),
            Operation::LedOff => Command::LedOff,
            Operation::GetTemperature => Command::GetTemperature,
            Operation::SoundOn => Command::SoundOn(parameter),
            Operation::SoundOff => Command::SoundOff,
            Operation::RandLed => Command::RandLed,
            Operation::RandSound => Command::RandSound,
            Operation::RandLightSound => Command::RandLightSound,
            Operation::Disco => Command::Disco,
        }
    }

    /// Build an entry with its parameter resolved from a profile snapshot
    pub fn resolved(op: Operation, profile: &ParameterProfile) -> Self {
        Self::from_parts(op, resolve(op, profile))
    }

    /// Operation kind of this entry
    pub fn operation(&self) -> Operation {
        match self {
            Command::MoveForward(_) => Operation::MoveForward,
            Command::MoveBackward(_) => Operation::MoveBackward,
            Command::StopMotors => Operation::StopMotors,
            Command::Wait(_) => Operation::Wait,
            Command::TurnRight(_) => Operation::TurnRight,
            Command::TurnLeft(_) => Operation::TurnLeft,
            Command::LedOn(_) => Operation::LedOn,
            Command::LedOff => Operation::LedOff,
            Command::GetTemperature => Operation::GetTemperature,
            Command::SoundOn(_) => Operation::SoundOn,
            Command::SoundOff => Operation::SoundOff,
            Command::RandLed => Operation::RandLed,
            Command::RandSound => Operation::RandSound,
            Command::RandLightSound => Operation::RandLightSound,
            Command::Disco => Operation::Disco,
        }
    }

    /// Resolved parameter, if this operation carries one
    pub fn parameter(&self) -> Option<i32> {
        match *self {
            Command::MoveForward(v)
            | Command::MoveBackward(v)
            | Command::Wait(v)
            | Command::TurnRight(v)
            | Command::TurnLeft(v)
            | Command::LedOn(v)
            | Command::SoundOn(v) => Some(v),
            _ => None,
        }
    }

    /// Parameter as written to program files ([`NO_PARAMETER`] for none)
    pub fn wire_parameter(&self) -> i32 {
        self.parameter().unwrap_or(NO_PARAMETER)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parameter() {
            Some(v) => write!(f, "{}({})", self.operation(), v),
            None => write!(f, "{}", self.operation()),
        }
    }
}

/// Resolve the parameter for `op` from a profile snapshot
///
/// | Operation                               | Parameter                  |
/// |-----------------------------------------|----------------------------|
/// | MOVE_FORWARD, MOVE_BACKWARD, TURN_*     | `motor_speed`              |
/// | WAIT                                    | `wait_seconds` as ms       |
/// | LED_ON                                  | `led_brightness`           |
/// | SOUND_ON                                | `sound_frequency_hz`       |
/// | everything else                         | [`NO_PARAMETER`]           |
pub fn resolve(op: Operation, profile: &ParameterProfile) -> i32 {
    match op {
        Operation::MoveForward
        | Operation::MoveBackward
        | Operation::TurnRight
        | Operation::TurnLeft => profile.motor_speed as i32,
        Operation::Wait => profile.wait_ms(),
        Operation::LedOn => profile.led_brightness as i32,
        Operation::SoundOn => profile.sound_frequency_hz as i32,
        _ => NO_PARAMETER,
    }
}
