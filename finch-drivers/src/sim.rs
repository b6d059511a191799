//! Simulated Finch robot
//!
//! This driver provides:
//! - Actuator state tracking (motors, LED, buzzer)
//! - Settable temperature and light readings
//! - A bounded history of the most recent port calls
//! - Optional real-time waits (`std` feature), otherwise waits only
//!   advance a virtual clock
//! - Link-drop injection for exercising abort paths
//!
//! # Usage
//!
//! ```ignore
//! let mut finch = SimulatedFinch::new(SimConfig::default());
//! finch.connect();
//! finch.set_motors(200, 200)?;
//! finch.block(1000)?;
//! assert_eq!(finch.elapsed_ms(), 1000);
//! ```

use finch_hal::port::MOTOR_FULL;
use finch_hal::{HardwarePort, PortError};
use heapless::HistoryBuffer;
use tracing::{debug, trace, warn};

/// Number of port calls kept in the history
pub const HISTORY_LEN: usize = 512;

/// Simulator configuration
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Sleep for real on `block` (needs the `std` feature)
    pub realtime: bool,
    /// Reported temperature (°C)
    pub temperature_c: f64,
    /// Reported left light level (0-255)
    pub left_light: i32,
    /// Reported right light level (0-255)
    pub right_light: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            realtime: false,
            temperature_c: 21.0,
            left_light: 128,
            right_light: 128,
        }
    }
}

/// One recorded port call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PortCall {
    Motors(i16, i16),
    Led(u8, u8, u8),
    ToneOn(u32),
    ToneOff,
    Block(u32),
    ReadTemperature,
    ReadLeftLight,
    ReadRightLight,
}

/// Simulated robot port
pub struct SimulatedFinch {
    config: SimConfig,
    connected: bool,
    motors: (i16, i16),
    led: (u8, u8, u8),
    tone: Option<u32>,
    /// Virtual time spent in `block` (ms)
    elapsed_ms: u64,
    /// Calls accepted before the link drops
    calls_until_drop: Option<u32>,
    history: HistoryBuffer<PortCall, HISTORY_LEN>,
}

impl SimulatedFinch {
    /// Create a disconnected simulator
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            connected: false,
            motors: (0, 0),
            led: (0, 0, 0),
            tone: None,
            elapsed_ms: 0,
            calls_until_drop: None,
            history: HistoryBuffer::new(),
        }
    }

    /// Check if the link is open
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Current motor duty cycles
    pub fn motors(&self) -> (i16, i16) {
        self.motors
    }

    /// Current LED colour
    pub fn led(&self) -> (u8, u8, u8) {
        self.led
    }

    /// Current tone, if sounding
    pub fn tone(&self) -> Option<u32> {
        self.tone
    }

    /// Motors stopped, LED dark, buzzer silent
    pub fn is_neutral(&self) -> bool {
        self.motors == (0, 0) && self.led == (0, 0, 0) && self.tone.is_none()
    }

    /// Total time spent blocking (ms)
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Set the reported temperature
    pub fn set_temperature(&mut self, celsius: f64) {
        self.config.temperature_c = celsius;
    }

    /// Set the reported light levels
    pub fn set_lights(&mut self, left: i32, right: i32) {
        self.config.left_light = left;
        self.config.right_light = right;
    }

    /// Drop the link after `calls` more successful port calls
    pub fn drop_link_after(&mut self, calls: u32) {
        self.calls_until_drop = Some(calls);
    }

    /// Recorded calls, oldest first
    pub fn history(&self) -> impl Iterator<Item = &PortCall> {
        self.history.oldest_ordered()
    }

    /// Forget recorded calls
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Gate a call on the link state, then record it
    fn accept(&mut self, call: PortCall) -> Result<(), PortError> {
        if !self.connected {
            return Err(PortError::Disconnected);
        }
        match self.calls_until_drop {
            Some(0) => {
                warn!("Simulated link dropped on {:?}", call);
                self.connected = false;
                self.calls_until_drop = None;
                return Err(PortError::Transport);
            }
            Some(ref mut remaining) => *remaining -= 1,
            None => {}
        }
        trace!("{:?}", call);
        self.history.write(call);
        Ok(())
    }
}

impl HardwarePort for SimulatedFinch {
    fn connect(&mut self) -> bool {
        debug!("Simulated Finch connected");
        self.connected = true;
        true
    }

    fn disconnect(&mut self) {
        debug!("Simulated Finch disconnected");
        self.connected = false;
    }

    fn set_motors(&mut self, left: i16, right: i16) -> Result<(), PortError> {
        self.accept(PortCall::Motors(left, right))?;
        // The robot saturates duty at full scale
        self.motors = (
            left.clamp(-MOTOR_FULL, MOTOR_FULL),
            right.clamp(-MOTOR_FULL, MOTOR_FULL),
        );
        Ok(())
    }

    fn set_led(&mut self, red: u8, green: u8, blue: u8) -> Result<(), PortError> {
        self.accept(PortCall::Led(red, green, blue))?;
        self.led = (red, green, blue);
        Ok(())
    }

    fn tone_on(&mut self, frequency_hz: u32) -> Result<(), PortError> {
        self.accept(PortCall::ToneOn(frequency_hz))?;
        self.tone = Some(frequency_hz);
        Ok(())
    }

    fn tone_off(&mut self) -> Result<(), PortError> {
        self.accept(PortCall::ToneOff)?;
        self.tone = None;
        Ok(())
    }

    fn block(&mut self, ms: u32) -> Result<(), PortError> {
        self.accept(PortCall::Block(ms))?;
        self.elapsed_ms += u64::from(ms);

        #[cfg(feature = "std")]
        if self.config.realtime {
            std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
        }
        Ok(())
    }

    fn read_temperature_celsius(&mut self) -> Result<f64, PortError> {
        self.accept(PortCall::ReadTemperature)?;
        if self.config.temperature_c.is_nan() {
            return Err(PortError::SensorUnavailable);
        }
        Ok(self.config.temperature_c)
    }

    fn read_left_light(&mut self) -> Result<i32, PortError> {
        self.accept(PortCall::ReadLeftLight)?;
        Ok(self.config.left_light)
    }

    fn read_right_light(&mut self) -> Result<i32, PortError> {
        self.accept(PortCall::ReadRightLight)?;
        Ok(self.config.right_light)
    }
}
