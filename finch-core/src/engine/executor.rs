//! Command list execution
//!
//! Walks a list once, in order, translating each entry into port calls.
//! There is no branching, reordering or retrying. Whatever happens, the
//! robot is settled to neutral (tone off, LED off, motors stopped) exactly
//! once after the walk ends.

use core::fmt;

use finch_hal::{celsius_to_fahrenheit, HardwarePort, PortError};
use rand::Rng;
use tracing::{debug, error, info, warn};

use super::choreography::{disco, random_led, random_tone, settle};
use super::events::{ExecutionEvent, Observer};
use crate::command::{Command, Operation};
use crate::program::CommandList;

/// Outcome of a completed execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Entries applied
    pub executed: usize,
}

/// Execution failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// An entry failed; the remaining entries were not applied
    Aborted {
        /// Position of the failing entry
        index: usize,
        /// Operation of the failing entry
        operation: Operation,
        /// Port error raised by the entry
        cause: PortError,
        /// Port error raised while settling, if any
        cleanup: Option<PortError>,
    },
    /// Every entry ran but the neutral-state cleanup failed
    Cleanup(PortError),
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::Aborted {
                index,
                operation,
                cause,
                cleanup,
            } => {
                write!(
                    f,
                    "execution aborted at entry {} ({}): {}",
                    index + 1,
                    operation,
                    cause
                )?;
                if let Some(cleanup) = cleanup {
                    write!(f, "; cleanup also failed: {}", cleanup)?;
                }
                Ok(())
            }
            ExecutionError::Cleanup(cause) => {
                write!(f, "could not return robot to neutral: {}", cause)
            }
        }
    }
}

/// Execute `list` against `port`
///
/// `rng` feeds the RAND_* and DISCO entries. `observer` sees every entry
/// before it is applied and every temperature reading.
pub fn execute<P, R, O>(
    list: &CommandList,
    port: &mut P,
    rng: &mut R,
    observer: &mut O,
) -> Result<ExecutionSummary, ExecutionError>
where
    P: HardwarePort + ?Sized,
    R: Rng + ?Sized,
    O: Observer + ?Sized,
{
    info!("Executing command list ({} entries)", list.len());
    observer.notify(&ExecutionEvent::Started { total: list.len() });

    let outcome = run_entries(list, port, rng, observer);
    let cleanup = settle(port);

    match (outcome, cleanup) {
        (Ok(executed), Ok(())) => {
            info!("Command list complete ({} entries)", executed);
            observer.notify(&ExecutionEvent::Finished { executed });
            Ok(ExecutionSummary { executed })
        }
        (Ok(executed), Err(cause)) => {
            error!(
                "All {} entries ran but the robot could not be settled: {:?}",
                executed, cause
            );
            observer.notify(&ExecutionEvent::Finished { executed });
            Err(ExecutionError::Cleanup(cause))
        }
        (Err((index, operation, cause)), cleanup) => {
            if let Err(e) = cleanup {
                error!("Cleanup after abort failed: {:?}", e);
            }
            Err(ExecutionError::Aborted {
                index,
                operation,
                cause,
                cleanup: cleanup.err(),
            })
        }
    }
}

/// Apply every entry, stopping at the first port failure
fn run_entries<P, R, O>(
    list: &CommandList,
    port: &mut P,
    rng: &mut R,
    observer: &mut O,
) -> Result<usize, (usize, Operation, PortError)>
where
    P: HardwarePort + ?Sized,
    R: Rng + ?Sized,
    O: Observer + ?Sized,
{
    for (index, command) in list.iter().enumerate() {
        debug!("[{}] {}", index, command);
        observer.notify(&ExecutionEvent::Executing {
            index,
            command: *command,
        });

        if let Err(cause) = dispatch(command, port, rng, observer) {
            warn!("Entry {} ({}) failed: {:?}", index, command, cause);
            observer.notify(&ExecutionEvent::Aborted { index, cause });
            return Err((index, command.operation(), cause));
        }
    }
    Ok(list.len())
}

/// Translate one entry into port calls
fn dispatch<P, R, O>(
    command: &Command,
    port: &mut P,
    rng: &mut R,
    observer: &mut O,
) -> Result<(), PortError>
where
    P: HardwarePort + ?Sized,
    R: Rng + ?Sized,
    O: Observer + ?Sized,
{
    match *command {
        Command::MoveForward(v) => port.set_motors(motor(v), motor(v)),
        Command::MoveBackward(v) => {
            let v = v.saturating_neg();
            port.set_motors(motor(v), motor(v))
        }
        Command::StopMotors => port.stop_motors(),
        Command::Wait(ms) => port.block(non_negative(ms)),
        Command::TurnRight(v) => port.set_motors(motor(v), motor(v.saturating_neg() / 2)),
        Command::TurnLeft(v) => port.set_motors(motor(v.saturating_neg() / 2), motor(v)),
        Command::LedOn(v) => {
            let level = intensity(v);
            port.set_led(level, level, level)
        }
        Command::LedOff => port.led_off(),
        Command::GetTemperature => {
            let celsius = port.read_temperature_celsius()?;
            let fahrenheit = celsius_to_fahrenheit(celsius);
            info!("Temperature: {:.1} F", fahrenheit);
            observer.notify(&ExecutionEvent::Temperature {
                celsius,
                fahrenheit,
            });
            Ok(())
        }
        Command::SoundOn(hz) => port.tone_on(non_negative(hz)),
        Command::SoundOff => port.tone_off(),
        Command::RandLed => random_led(port, rng),
        Command::RandSound => random_tone(port, rng),
        Command::RandLightSound => {
            random_led(port, rng)?;
            random_tone(port, rng)
        }
        Command::Disco => disco(port, rng),
    }
}

/// Saturate a stored value into the motor duty domain
fn motor(value: i32) -> i16 {
    value.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

/// Saturate a stored value into the LED channel domain
fn intensity(value: i32) -> u8 {
    value.clamp(0, u8::MAX as i32) as u8
}

/// Clamp negative durations and frequencies to zero
fn non_negative(value: i32) -> u32 {
    value.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::events::NoopObserver;
    use crate::engine::testing::{Call, RecordingPort};
    use alloc::vec::Vec;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;

    fn list(commands: &[Command]) -> CommandList {
        commands.iter().copied().collect()
    }

    fn run(
        port: &mut RecordingPort,
        commands: &[Command],
    ) -> Result<ExecutionSummary, ExecutionError> {
        let mut rng = StepRng::new(0, 1);
        execute(&list(commands), port, &mut rng, &mut NoopObserver)
    }

    const NEUTRAL: [Call; 3] = [Call::ToneOff, Call::Led(0, 0, 0), Call::Motors(0, 0)];

    #[test]
    fn test_dispatch_table() {
        let mut port = RecordingPort::new();
        run(
            &mut port,
            &[
                Command::MoveForward(200),
                Command::MoveBackward(200),
                Command::StopMotors,
                Command::Wait(2000),
                Command::TurnRight(201),
                Command::TurnLeft(100),
                Command::LedOn(100),
                Command::LedOff,
                Command::SoundOn(400),
                Command::SoundOff,
            ],
        )
        .unwrap();

        let mut expected = Vec::from([
            Call::Motors(200, 200),
            Call::Motors(-200, -200),
            Call::Motors(0, 0),
            Call::Block(2000),
            Call::Motors(201, -100),
            Call::Motors(-50, 100),
            Call::Led(100, 100, 100),
            Call::Led(0, 0, 0),
            Call::ToneOn(400),
            Call::ToneOff,
        ]);
        expected.extend_from_slice(&NEUTRAL);
        assert_eq!(port.calls, expected);
    }

    #[test]
    fn test_empty_list_still_settles() {
        let mut port = RecordingPort::new();
        let summary = run(&mut port, &[]).unwrap();
        assert_eq!(summary.executed, 0);
        assert_eq!(port.calls, NEUTRAL);
        assert!(port.is_neutral());
    }

    #[test]
    fn test_temperature_is_reported_in_fahrenheit() {
        let mut port = RecordingPort::new();
        port.temperature_c = 20.0;
        let mut readings = Vec::new();
        let mut observer = |event: &ExecutionEvent| {
            if let ExecutionEvent::Temperature { fahrenheit, .. } = event {
                readings.push(*fahrenheit);
            }
        };
        let mut rng = StepRng::new(0, 1);
        execute(
            &list(&[Command::GetTemperature]),
            &mut port,
            &mut rng,
            &mut observer,
        )
        .unwrap();

        assert_eq!(readings, [68.0]);
        // Sensing does not actuate anything
        assert_eq!(port.calls[0], Call::ReadTemperature);
        assert_eq!(&port.calls[1..], &NEUTRAL);
    }

    #[test]
    fn test_observer_sees_each_entry_in_order() {
        let mut port = RecordingPort::new();
        let mut seen = Vec::new();
        let mut observer = |event: &ExecutionEvent| {
            if let ExecutionEvent::Executing { index, command } = event {
                seen.push((*index, command.operation(), command.wire_parameter()));
            }
        };
        let mut rng = StepRng::new(0, 1);
        let commands = [Command::LedOn(10), Command::Wait(1000), Command::LedOff];
        execute(&list(&commands), &mut port, &mut rng, &mut observer).unwrap();

        assert_eq!(
            seen,
            [
                (0, Operation::LedOn, 10),
                (1, Operation::Wait, 1000),
                (2, Operation::LedOff, -1)
            ]
        );
    }

    #[test]
    fn test_failure_aborts_and_settles() {
        let mut port = RecordingPort::new();
        // Fail the third port call (the WAIT)
        port.fail_at = Some(2);
        let result = run(
            &mut port,
            &[
                Command::MoveForward(100),
                Command::SoundOn(300),
                Command::Wait(1000),
                Command::LedOn(50),
            ],
        );

        assert_eq!(
            result,
            Err(ExecutionError::Aborted {
                index: 2,
                operation: Operation::Wait,
                cause: PortError::Transport,
                cleanup: None,
            })
        );
        // LED_ON never ran, cleanup did
        assert!(!port.calls.contains(&Call::Led(50, 50, 50)));
        assert!(port.calls.ends_with(&NEUTRAL));
        assert!(port.is_neutral());
    }

    #[test]
    fn test_cleanup_failure_is_reported() {
        let mut port = RecordingPort::new();
        // First call is the LED_ON, second is cleanup's tone_off
        port.fail_at = Some(1);
        let result = run(&mut port, &[Command::LedOn(10)]);
        assert_eq!(result, Err(ExecutionError::Cleanup(PortError::Transport)));
        // The rest of the cleanup was still attempted
        assert!(port.calls.ends_with(&[Call::Led(0, 0, 0), Call::Motors(0, 0)]));
    }

    #[test]
    fn test_out_of_domain_values_saturate() {
        let mut port = RecordingPort::new();
        run(
            &mut port,
            &[
                Command::MoveForward(100_000),
                Command::LedOn(-5),
                Command::Wait(-1),
                Command::SoundOn(-1),
                Command::MoveBackward(i32::MIN),
            ],
        )
        .unwrap();
        assert_eq!(port.calls[0], Call::Motors(i16::MAX, i16::MAX));
        assert_eq!(port.calls[1], Call::Led(0, 0, 0));
        assert_eq!(port.calls[2], Call::Block(0));
        assert_eq!(port.calls[3], Call::ToneOn(0));
        assert_eq!(port.calls[4], Call::Motors(i16::MAX, i16::MAX));
    }

    #[test]
    fn test_disco_beats_and_single_flip() {
        let mut port = RecordingPort::new();
        run(&mut port, &[Command::Disco]).unwrap();

        let blocks = port
            .calls
            .iter()
            .filter(|c| **c == Call::Block(1000))
            .count();
        assert_eq!(blocks, 4);

        let spins: Vec<(i16, i16)> = port
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Motors(l, r) if (*l, *r) != (0, 0) => Some((*l, *r)),
                _ => None,
            })
            .collect();
        assert_eq!(spins, [(255, -255), (-255, 255)]);

        // Flip happens after the second beat's wait
        let flip = port
            .calls
            .iter()
            .position(|c| *c == Call::Motors(-255, 255))
            .unwrap();
        let waits_before = port.calls[..flip]
            .iter()
            .filter(|c| matches!(c, Call::Block(_)))
            .count();
        assert_eq!(waits_before, 2);
        assert!(port.is_neutral());
    }

    #[test]
    fn test_random_entries_stay_in_range() {
        let mut port = RecordingPort::new();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let commands = [Command::RandLightSound; 32];
        execute(&list(&commands), &mut port, &mut rng, &mut NoopObserver).unwrap();

        let tones: Vec<u32> = port
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::ToneOn(hz) => Some(*hz),
                _ => None,
            })
            .collect();
        assert_eq!(tones.len(), 32);
        assert!(tones.iter().all(|hz| *hz <= 2000));
    }
}
