//! Fixed hardware choreographies shared by the engine and routines

use finch_hal::port::MOTOR_FULL;
use finch_hal::{HardwarePort, PortError};
use rand::Rng;

/// Upper bound for random tones (Hz, inclusive)
pub const RANDOM_TONE_MAX_HZ: u32 = 2000;

/// Number of DISCO beats
pub const DISCO_BEATS: usize = 4;

/// Beat on which DISCO reverses the spin
pub const DISCO_FLIP_BEAT: usize = 2;

/// Length of one DISCO beat (ms)
pub const DISCO_BEAT_MS: u32 = 1000;

/// Set the LED to a random colour, each channel 0-255
pub fn random_led<P, R>(port: &mut P, rng: &mut R) -> Result<(), PortError>
where
    P: HardwarePort + ?Sized,
    R: Rng + ?Sized,
{
    let (red, green, blue) = (rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>());
    port.set_led(red, green, blue)
}

/// Start a random tone in 0-2000 Hz
pub fn random_tone<P, R>(port: &mut P, rng: &mut R) -> Result<(), PortError>
where
    P: HardwarePort + ?Sized,
    R: Rng + ?Sized,
{
    port.tone_on(rng.gen_range(0..=RANDOM_TONE_MAX_HZ))
}

/// Four-beat spin with random light and sound
///
/// Spins right at full duty, reverses once on beat 2, then leaves the
/// robot neutral.
pub fn disco<P, R>(port: &mut P, rng: &mut R) -> Result<(), PortError>
where
    P: HardwarePort + ?Sized,
    R: Rng + ?Sized,
{
    let (mut left, mut right) = (MOTOR_FULL, -MOTOR_FULL);
    port.set_motors(left, right)?;

    for beat in 0..DISCO_BEATS {
        if beat == DISCO_FLIP_BEAT {
            left = -left;
            right = -right;
            port.set_motors(left, right)?;
        }
        random_led(port, rng)?;
        random_tone(port, rng)?;
        port.block(DISCO_BEAT_MS)?;
    }

    port.tone_off()?;
    port.led_off()?;
    port.stop_motors()
}

/// Drive the robot to the neutral state: tone off, LED off, motors stopped
///
/// Every step is attempted even when an earlier one fails; the first
/// failure is returned.
pub fn settle<P: HardwarePort + ?Sized>(port: &mut P) -> Result<(), PortError> {
    let tone = port.tone_off();
    let led = port.led_off();
    let motors = port.stop_motors();
    tone.and(led).and(motors)
}
