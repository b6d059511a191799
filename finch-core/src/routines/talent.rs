//! Talent show routines
//!
//! Fixed performances that drive the port directly, outside any command
//! list. Like list execution, every routine leaves the robot neutral even
//! when a step fails part way through.

use core::fmt;

use finch_hal::port::MOTOR_FULL;
use finch_hal::{HardwarePort, PortError};
use rand::Rng;
use tracing::{info, warn};

use crate::engine::{random_led, settle};

/// Dance speed limits (duty cycle)
pub const DANCE_SPEED_MIN: i32 = 100;
pub const DANCE_SPEED_MAX: i32 = 255;

/// Number of brightness steps in the light and sound sweep
pub const SWEEP_STEPS: u8 = 255;

/// Tone step per sweep level (Hz)
pub const SWEEP_TONE_STEP_HZ: u32 = 100;

/// One note of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl Note {
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }
}

/// A motor setting held while a run of notes plays
#[derive(Debug, Clone, Copy)]
pub struct Phrase {
    pub motors: (i16, i16),
    pub notes: &'static [Note],
}

/// Jingle played by [`mixing_it_up`]
pub const MIXING_IT_UP: [Phrase; 5] = [
    // curve forward
    Phrase {
        motors: (MOTOR_FULL, 100),
        notes: &[Note::new(698, 1000), Note::new(659, 500)],
    },
    // sharp turn
    Phrase {
        motors: (-MOTOR_FULL, MOTOR_FULL),
        notes: &[Note::new(698, 500)],
    },
    // reverse
    Phrase {
        motors: (-MOTOR_FULL, -MOTOR_FULL),
        notes: &[Note::new(784, 1000), Note::new(659, 500)],
    },
    Phrase {
        motors: (MOTOR_FULL, MOTOR_FULL),
        notes: &[Note::new(784, 500)],
    },
    // spin
    Phrase {
        motors: (-MOTOR_FULL, MOTOR_FULL),
        notes: &[Note::new(988, 2000)],
    },
];

/// Talent routine error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineError {
    /// Dance speed outside 100-255
    Speed(i32),
    /// A port call failed
    Port(PortError),
}

impl fmt::Display for RoutineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutineError::Speed(v) => write!(
                f,
                "dance speed {} is outside {}-{}",
                v, DANCE_SPEED_MIN, DANCE_SPEED_MAX
            ),
            RoutineError::Port(e) => write!(f, "{}", e),
        }
    }
}

impl From<PortError> for RoutineError {
    fn from(e: PortError) -> Self {
        RoutineError::Port(e)
    }
}

/// Play a tone for `ms`, then silence it
pub fn play_note<P>(port: &mut P, frequency_hz: u32, ms: u32) -> Result<(), PortError>
where
    P: HardwarePort + ?Sized,
{
    port.tone_on(frequency_hz)?;
    port.block(ms)?;
    port.tone_off()
}

/// Play a tone under an LED colour, then darken the LED
///
/// A random colour is drawn when `color` is `None`.
pub fn play_note_with_led<P, R>(
    port: &mut P,
    rng: &mut R,
    note: Note,
    color: Option<(u8, u8, u8)>,
) -> Result<(), PortError>
where
    P: HardwarePort + ?Sized,
    R: Rng + ?Sized,
{
    match color {
        Some((red, green, blue)) => port.set_led(red, green, blue)?,
        None => random_led(port, rng)?,
    }
    play_note(port, note.frequency_hz, note.duration_ms)?;
    port.led_off()
}

/// Sweep the LED from dark to bright with a rising tone
pub fn light_and_sound<P>(port: &mut P) -> Result<(), PortError>
where
    P: HardwarePort + ?Sized,
{
    info!("Talent: light and sound");
    finish(port, |port| {
        for level in 0..SWEEP_STEPS {
            port.set_led(level, level, level)?;
            port.tone_on(u32::from(level) * SWEEP_TONE_STEP_HZ)?;
        }
        Ok(())
    })
}

/// Spinning dance at `speed` (100-255)
pub fn dance<P>(port: &mut P, speed: i32) -> Result<(), RoutineError>
where
    P: HardwarePort + ?Sized,
{
    if !(DANCE_SPEED_MIN..=DANCE_SPEED_MAX).contains(&speed) {
        return Err(RoutineError::Speed(speed));
    }
    info!("Talent: dance at speed {}", speed);

    let full = speed as i16;
    let half = full / 2;
    finish(port, |port| {
        port.set_motors(half, half)?;
        port.block(2000)?;
        port.set_motors(full, -full)?;
        port.block(4000)?;
        port.stop_motors()?;
        port.block(500)?;
        port.set_motors(half, half)?;
        port.block(2000)?;
        port.set_motors(-full, full)?;
        port.block(4000)?;
        port.stop_motors()
    })?;
    Ok(())
}

/// Jingle with moves, each note under a random colour
pub fn mixing_it_up<P, R>(port: &mut P, rng: &mut R) -> Result<(), PortError>
where
    P: HardwarePort + ?Sized,
    R: Rng + ?Sized,
{
    info!("Talent: mixing it up");
    finish(port, |port| {
        for phrase in MIXING_IT_UP.iter() {
            port.set_motors(phrase.motors.0, phrase.motors.1)?;
            for note in phrase.notes {
                play_note_with_led(port, rng, *note, None)?;
            }
        }
        port.stop_motors()
    })
}

/// Run `steps`, then settle regardless of the outcome
fn finish<P, F>(port: &mut P, steps: F) -> Result<(), PortError>
where
    P: HardwarePort + ?Sized,
    F: FnOnce(&mut P) -> Result<(), PortError>,
{
    let outcome = steps(port);
    if let Err(e) = &outcome {
        warn!("Routine interrupted: {:?}", e);
    }
    let cleanup = settle(port);
    outcome.and(cleanup)
}
