//! Robot port abstraction
//!
//! A single trait covering every primitive the robot exposes. Implementations
//! own the physical link; callers own the port exclusively for a session.

use core::fmt;

use crate::sensor::LightLevels;

/// Full-scale motor duty cycle
pub const MOTOR_FULL: i16 = 255;

/// Errors from port operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortError {
    /// No robot is connected
    Disconnected,
    /// The link dropped or rejected a request
    Transport,
    /// A sensor did not return a usable reading
    SensorUnavailable,
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortError::Disconnected => f.write_str("robot is not connected"),
            PortError::Transport => f.write_str("robot link failure"),
            PortError::SensorUnavailable => f.write_str("sensor reading unavailable"),
        }
    }
}

/// Robot hardware port
///
/// Every actuator call may fail; a failure is never retried by the port
/// itself. `connect` reports success as a plain flag, retry policy belongs
/// to the caller.
pub trait HardwarePort {
    /// Open the link to the robot
    fn connect(&mut self) -> bool;

    /// Close the link to the robot
    fn disconnect(&mut self);

    /// Set differential motor duty cycles
    ///
    /// Positive values drive forward, negative backward. Magnitude is
    /// limited to [`MOTOR_FULL`] by the robot.
    fn set_motors(&mut self, left: i16, right: i16) -> Result<(), PortError>;

    /// Set the RGB LED intensity
    fn set_led(&mut self, red: u8, green: u8, blue: u8) -> Result<(), PortError>;

    /// Start a continuous tone
    fn tone_on(&mut self, frequency_hz: u32) -> Result<(), PortError>;

    /// Silence the buzzer
    fn tone_off(&mut self) -> Result<(), PortError>;

    /// Block the calling thread for `ms` milliseconds
    fn block(&mut self, ms: u32) -> Result<(), PortError>;

    /// Read the on-board temperature sensor in degrees Celsius
    fn read_temperature_celsius(&mut self) -> Result<f64, PortError>;

    /// Read the left light sensor (0-255)
    fn read_left_light(&mut self) -> Result<i32, PortError>;

    /// Read the right light sensor (0-255)
    fn read_right_light(&mut self) -> Result<i32, PortError>;

    /// Stop both motors
    fn stop_motors(&mut self) -> Result<(), PortError> {
        self.set_motors(0, 0)
    }

    /// Turn the LED off
    fn led_off(&mut self) -> Result<(), PortError> {
        self.set_led(0, 0, 0)
    }

    /// Read both light sensors
    fn read_lights(&mut self) -> Result<LightLevels, PortError> {
        let left = self.read_left_light()?;
        let right = self.read_right_light()?;
        Ok(LightLevels { left, right })
    }
}

impl<P: HardwarePort + ?Sized> HardwarePort for &mut P {
    fn connect(&mut self) -> bool {
        (**self).connect()
    }

    fn disconnect(&mut self) {
        (**self).disconnect()
    }

    fn set_motors(&mut self, left: i16, right: i16) -> Result<(), PortError> {
        (**self).set_motors(left, right)
    }

    fn set_led(&mut self, red: u8, green: u8, blue: u8) -> Result<(), PortError> {
        (**self).set_led(red, green, blue)
    }

    fn tone_on(&mut self, frequency_hz: u32) -> Result<(), PortError> {
        (**self).tone_on(frequency_hz)
    }

    fn tone_off(&mut self) -> Result<(), PortError> {
        (**self).tone_off()
    }

    fn block(&mut self, ms: u32) -> Result<(), PortError> {
        (**self).block(ms)
    }

    fn read_temperature_celsius(&mut self) -> Result<f64, PortError> {
        (**self).read_temperature_celsius()
    }

    fn read_left_light(&mut self) -> Result<i32, PortError> {
        (**self).read_left_light()
    }

    fn read_right_light(&mut self) -> Result<i32, PortError> {
        (**self).read_right_light()
    }
}
