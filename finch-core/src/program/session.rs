//! Authoring session
//!
//! Owns the current profile snapshot and the list being authored. This is
//! where operator input is validated; a rejected input never touches the
//! list.

use core::fmt;

use tracing::debug;

use super::list::CommandList;
use crate::command::{AuthoringInput, Command, UnknownOperation};
use crate::config::{ParameterProfile, ProfileError};

/// Recoverable authoring error
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthoringError {
    /// Input did not name an operation
    UnknownOperation,
    /// Profile value out of range
    Profile(ProfileError),
}

impl fmt::Display for AuthoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthoringError::UnknownOperation => f.write_str("unknown operation"),
            AuthoringError::Profile(e) => write!(f, "{}", e),
        }
    }
}

impl From<UnknownOperation> for AuthoringError {
    fn from(_: UnknownOperation) -> Self {
        AuthoringError::UnknownOperation
    }
}

impl From<ProfileError> for AuthoringError {
    fn from(e: ProfileError) -> Self {
        AuthoringError::Profile(e)
    }
}

/// Result of one accepted line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entered {
    /// An entry was appended
    Appended(Command),
    /// Operator finished
    Done,
}

/// Authoring session state
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: ParameterProfile,
    list: CommandList,
}

impl Session {
    /// Start a session with an empty list
    pub fn new(profile: ParameterProfile) -> Self {
        Self {
            profile,
            list: CommandList::new(),
        }
    }

    /// Current profile snapshot
    pub fn profile(&self) -> &ParameterProfile {
        &self.profile
    }

    /// List authored so far
    pub fn list(&self) -> &CommandList {
        &self.list
    }

    /// Take the authored list, leaving an empty one
    pub fn take_list(&mut self) -> CommandList {
        core::mem::take(&mut self.list)
    }

    /// Parse one operation name and append it
    pub fn enter(&mut self, input: &str) -> Result<Entered, AuthoringError> {
        match AuthoringInput::parse(input)? {
            AuthoringInput::Done => Ok(Entered::Done),
            AuthoringInput::Operation(op) => {
                let command = self.list.append(op, &self.profile);
                debug!("Appended {} at position {}", op.name(), self.list.len() - 1);
                Ok(Entered::Appended(command))
            }
        }
    }

    pub fn set_motor_speed(&mut self, value: i32) -> Result<(), AuthoringError> {
        self.profile = self.profile.with_motor_speed(value)?;
        Ok(())
    }

    pub fn set_led_brightness(&mut self, value: i32) -> Result<(), AuthoringError> {
        self.profile = self.profile.with_led_brightness(value)?;
        Ok(())
    }

    pub fn set_wait_seconds(&mut self, value: f64) -> Result<(), AuthoringError> {
        self.profile = self.profile.with_wait_seconds(value)?;
        Ok(())
    }

    pub fn set_sound_frequency(&mut self, value: i32) -> Result<(), AuthoringError> {
        self.profile = self.profile.with_sound_frequency(value)?;
        Ok(())
    }

    /// Drop the authored list
    pub fn reset(&mut self) {
        self.list.reset();
    }

    /// Replace the list wholesale (after a successful load)
    pub fn replace_list(&mut self, list: CommandList) {
        self.list = list;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(ParameterProfile::new(200, 100, 2.0, 400).unwrap())
    }

    #[test]
    fn test_scenario_forward_wait_led_off() {
        let mut s = session();
        s.enter("MOVE_FORWARD").unwrap();
        s.enter("wait").unwrap();
        s.enter("Led_Off").unwrap();
        assert_eq!(s.enter("done"), Ok(Entered::Done));

        assert_eq!(
            s.list().as_slice(),
            &[Command::MoveForward(200), Command::Wait(2000), Command::LedOff]
        );
    }

    #[test]
    fn test_unknown_input_leaves_list_untouched() {
        let mut s = session();
        s.enter("DISCO").unwrap();
        assert_eq!(s.enter("moonwalk"), Err(AuthoringError::UnknownOperation));
        assert_eq!(s.list().len(), 1);
    }

    #[test]
    fn test_bad_profile_value_keeps_previous() {
        let mut s = session();
        assert_eq!(
            s.set_motor_speed(300),
            Err(AuthoringError::Profile(ProfileError::MotorSpeed(300)))
        );
        assert_eq!(s.profile().motor_speed, 200);
        assert!(s.list().is_empty());
    }

    #[test]
    fn test_profile_change_only_affects_later_entries() {
        let mut s = session();
        s.enter("LED_ON").unwrap();
        s.set_led_brightness(10).unwrap();
        s.enter("LED_ON").unwrap();
        assert_eq!(
            s.list().as_slice(),
            &[Command::LedOn(100), Command::LedOn(10)]
        );
    }

    #[test]
    fn test_reset_and_replace() {
        let mut s = session();
        s.enter("SOUND_ON").unwrap();
        s.reset();
        assert!(s.list().is_empty());

        let loaded: CommandList = [Command::Disco].into_iter().collect();
        s.replace_list(loaded.clone());
        assert_eq!(s.list(), &loaded);
        assert_eq!(s.take_list(), loaded);
        assert!(s.list().is_empty());
    }
}
