//! Recording port for unit tests

use alloc::vec::Vec;

use finch_hal::{HardwarePort, PortError};

/// One port call as observed by [`RecordingPort`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Motors(i16, i16),
    Led(u8, u8, u8),
    ToneOn(u32),
    ToneOff,
    Block(u32),
    ReadTemperature,
    ReadLight,
}

/// Port that records every call and can fail one on demand
#[derive(Debug, Default)]
pub struct RecordingPort {
    pub calls: Vec<Call>,
    /// Index of the call that returns `PortError::Transport`
    pub fail_at: Option<usize>,
    pub temperature_c: f64,
    motors: (i16, i16),
    led: (u8, u8, u8),
    tone: Option<u32>,
}

impl RecordingPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Motors stopped, LED dark, buzzer silent
    pub fn is_neutral(&self) -> bool {
        self.motors == (0, 0) && self.led == (0, 0, 0) && self.tone.is_none()
    }

    fn record(&mut self, call: Call) -> Result<(), PortError> {
        let index = self.calls.len();
        self.calls.push(call);
        if self.fail_at == Some(index) {
            return Err(PortError::Transport);
        }
        match call {
            Call::Motors(l, r) => self.motors = (l, r),
            Call::Led(r, g, b) => self.led = (r, g, b),
            Call::ToneOn(hz) => self.tone = Some(hz),
            Call::ToneOff => self.tone = None,
            _ => {}
        }
        Ok(())
    }
}

impl HardwarePort for RecordingPort {
    fn connect(&mut self) -> bool {
        true
    }

    fn disconnect(&mut self) {}

    fn set_motors(&mut self, left: i16, right: i16) -> Result<(), PortError> {
        self.record(Call::Motors(left, right))
    }

    fn set_led(&mut self, red: u8, green: u8, blue: u8) -> Result<(), PortError> {
        self.record(Call::Led(red, green, blue))
    }

    fn tone_on(&mut self, frequency_hz: u32) -> Result<(), PortError> {
        self.record(Call::ToneOn(frequency_hz))
    }

    fn tone_off(&mut self) -> Result<(), PortError> {
        self.record(Call::ToneOff)
    }

    fn block(&mut self, ms: u32) -> Result<(), PortError> {
        self.record(Call::Block(ms))
    }

    fn read_temperature_celsius(&mut self) -> Result<f64, PortError> {
        self.record(Call::ReadTemperature)?;
        Ok(self.temperature_c)
    }

    fn read_left_light(&mut self) -> Result<i32, PortError> {
        self.record(Call::ReadLight)?;
        Ok(0)
    }

    fn read_right_light(&mut self) -> Result<i32, PortError> {
        self.record(Call::ReadLight)?;
        Ok(0)
    }
}
