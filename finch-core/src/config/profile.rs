//! Parameter profile
//!
//! The four defaults used to resolve a parameter when an operation is
//! appended to a list. A profile is a `Copy` snapshot: appending reads it,
//! later edits produce a new snapshot and never reach entries already in
//! a list.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motor speed limits (duty cycle)
pub const MOTOR_SPEED_MIN: i32 = 1;
pub const MOTOR_SPEED_MAX: i32 = 255;

/// LED brightness limits
pub const LED_BRIGHTNESS_MIN: i32 = 1;
pub const LED_BRIGHTNESS_MAX: i32 = 255;

/// Wait duration limits (seconds)
pub const WAIT_SECONDS_MIN: f64 = 1.0;
pub const WAIT_SECONDS_MAX: f64 = 10.0;

/// Tone frequency limits (Hz)
pub const SOUND_FREQUENCY_MIN: i32 = 50;
pub const SOUND_FREQUENCY_MAX: i32 = 2000;

/// Rejected profile value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfileError {
    /// Motor speed outside 1-255
    MotorSpeed(i32),
    /// LED brightness outside 1-255
    LedBrightness(i32),
    /// Wait outside 1.0-10.0 seconds
    WaitSeconds(f64),
    /// Frequency outside 50-2000 Hz
    SoundFrequency(i32),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::MotorSpeed(v) => write!(
                f,
                "motor speed {} is outside {}-{}",
                v, MOTOR_SPEED_MIN, MOTOR_SPEED_MAX
            ),
            ProfileError::LedBrightness(v) => write!(
                f,
                "LED brightness {} is outside {}-{}",
                v, LED_BRIGHTNESS_MIN, LED_BRIGHTNESS_MAX
            ),
            ProfileError::WaitSeconds(v) => write!(
                f,
                "wait of {} s is outside {:.1}-{:.1} s",
                v, WAIT_SECONDS_MIN, WAIT_SECONDS_MAX
            ),
            ProfileError::SoundFrequency(v) => write!(
                f,
                "frequency {} Hz is outside {}-{} Hz",
                v, SOUND_FREQUENCY_MIN, SOUND_FREQUENCY_MAX
            ),
        }
    }
}

/// Parameter defaults used at append time
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParameterProfile {
    /// Motor duty cycle for moves and turns (1-255)
    pub motor_speed: u8,
    /// LED intensity for LED_ON (1-255)
    pub led_brightness: u8,
    /// WAIT duration in seconds (1.0-10.0)
    pub wait_seconds: f64,
    /// SOUND_ON frequency in Hz (50-2000)
    pub sound_frequency_hz: u32,
}

impl Default for ParameterProfile {
    fn default() -> Self {
        Self {
            motor_speed: 100,
            led_brightness: 255,
            wait_seconds: 1.0,
            sound_frequency_hz: 440,
        }
    }
}

impl ParameterProfile {
    /// Create a profile, validating every value
    pub fn new(
        motor_speed: i32,
        led_brightness: i32,
        wait_seconds: f64,
        sound_frequency_hz: i32,
    ) -> Result<Self, ProfileError> {
        Self::default()
            .with_motor_speed(motor_speed)?
            .with_led_brightness(led_brightness)?
            .with_wait_seconds(wait_seconds)?
            .with_sound_frequency(sound_frequency_hz)
    }

    /// Copy with a new motor speed
    pub fn with_motor_speed(self, value: i32) -> Result<Self, ProfileError> {
        if !(MOTOR_SPEED_MIN..=MOTOR_SPEED_MAX).contains(&value) {
            return Err(ProfileError::MotorSpeed(value));
        }
        Ok(Self {
            motor_speed: value as u8,
            ..self
        })
    }

    /// Copy with a new LED brightness
    pub fn with_led_brightness(self, value: i32) -> Result<Self, ProfileError> {
        if !(LED_BRIGHTNESS_MIN..=LED_BRIGHTNESS_MAX).contains(&value) {
            return Err(ProfileError::LedBrightness(value));
        }
        Ok(Self {
            led_brightness: value as u8,
            ..self
        })
    }

    /// Copy with a new wait duration
    pub fn with_wait_seconds(self, value: f64) -> Result<Self, ProfileError> {
        // NaN fails the range check
        if !(WAIT_SECONDS_MIN..=WAIT_SECONDS_MAX).contains(&value) {
            return Err(ProfileError::WaitSeconds(value));
        }
        Ok(Self {
            wait_seconds: value,
            ..self
        })
    }

    /// Copy with a new tone frequency
    pub fn with_sound_frequency(self, value: i32) -> Result<Self, ProfileError> {
        if !(SOUND_FREQUENCY_MIN..=SOUND_FREQUENCY_MAX).contains(&value) {
            return Err(ProfileError::SoundFrequency(value));
        }
        Ok(Self {
            sound_frequency_hz: value as u32,
            ..self
        })
    }

    /// Check a profile built field-by-field (e.g. deserialized)
    pub fn validate(&self) -> Result<(), ProfileError> {
        Self::new(
            self.motor_speed as i32,
            self.led_brightness as i32,
            self.wait_seconds,
            self.sound_frequency_hz.min(i32::MAX as u32) as i32,
        )
        .map(|_| ())
    }

    /// Wait duration in whole milliseconds, rounded half away from zero
    pub fn wait_ms(&self) -> i32 {
        let scaled = self.wait_seconds * 1000.0;
        let whole = scaled as i32;
        if scaled - whole as f64 >= 0.5 {
            whole + 1
        } else {
            whole
        }
    }
}
