//! Sensor readings

/// Light sensor pair reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LightLevels {
    /// Left sensor (0-255)
    pub left: i32,
    /// Right sensor (0-255)
    pub right: i32,
}

impl LightLevels {
    /// Mean of both sensors, rounded toward zero
    pub fn average(&self) -> i32 {
        // Mean of two i32 values always fits back into i32
        ((i64::from(self.left) + i64::from(self.right)) / 2) as i32
    }
}

/// Convert degrees Celsius to degrees Fahrenheit
///
/// `F = C * 9 / 5 + 32`
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}
