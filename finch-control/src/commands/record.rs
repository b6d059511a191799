//! `record`: author a program and save it

use std::io::Write;

use clap::Args;
use finch_core::program::{AuthoringError, Entered, Session};
use tracing::debug;

use super::Context;
use crate::error::{AppError, Result};
use crate::storage::{ProgramName, StorageError};

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Program name (letters and digits)
    pub name: String,

    /// Operations in order, any case (e.g. move_forward wait led_off); `done` stops
    #[arg(required = true)]
    pub operations: Vec<String>,

    /// Motor speed for moves and turns (1-255)
    #[arg(long)]
    pub speed: Option<i32>,

    /// LED brightness for LED_ON (1-255)
    #[arg(long)]
    pub brightness: Option<i32>,

    /// WAIT duration in seconds (1.0-10.0)
    #[arg(long)]
    pub wait: Option<f64>,

    /// SOUND_ON frequency in Hz (50-2000)
    #[arg(long)]
    pub frequency: Option<i32>,

    /// Add to the saved program instead of replacing it
    #[arg(long)]
    pub append: bool,
}

pub fn execute(ctx: &Context, args: RecordArgs, out: &mut dyn Write) -> Result<()> {
    let name = ProgramName::new(&args.name)?;

    let mut session = Session::new(ctx.config.profile);
    if args.append {
        match ctx.store.load(&name) {
            Ok(decoded) => session.replace_list(decoded.list),
            Err(StorageError::NotFound { .. } | StorageError::DirectoryMissing { .. }) => {
                debug!("{} is not saved yet, starting empty", name)
            }
            Err(e) => return Err(e.into()),
        }
    }
    if let Some(v) = args.speed {
        session.set_motor_speed(v)?;
    }
    if let Some(v) = args.brightness {
        session.set_led_brightness(v)?;
    }
    if let Some(v) = args.wait {
        session.set_wait_seconds(v)?;
    }
    if let Some(v) = args.frequency {
        session.set_sound_frequency(v)?;
    }

    for input in &args.operations {
        match session.enter(input) {
            Ok(Entered::Appended(command)) => debug!("Recorded {}", command),
            Ok(Entered::Done) => break,
            Err(AuthoringError::UnknownOperation) => {
                return Err(AppError::UnknownOperation(input.clone()))
            }
            Err(e) => return Err(e.into()),
        }
    }

    let list = session.take_list();
    let path = ctx.store.save(&name, &list)?;
    writeln!(out, "Saved {} entries to {}", list.len(), path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{context, output};
    use finch_core::command::Command;
    use finch_core::config::ProfileError;
    use std::fs;

    fn args(name: &str, ops: &[&str]) -> RecordArgs {
        RecordArgs {
            name: name.to_string(),
            operations: ops.iter().map(|s| s.to_string()).collect(),
            speed: None,
            brightness: None,
            wait: None,
            frequency: None,
            append: false,
        }
    }

    #[test]
    fn test_record_with_overrides() {
        let (_temp_dir, ctx) = context();
        let mut out = Vec::new();
        let mut record = args("demo", &["move_forward", "WAIT", "Led_Off", "done", "DISCO"]);
        record.speed = Some(200);
        record.brightness = Some(100);
        record.wait = Some(2.0);
        record.frequency = Some(400);

        execute(&ctx, record, &mut out).unwrap();

        let path = ctx.store.dir().join("demo.txt");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "MOVE_FORWARD,200\nWAIT,2000\nLED_OFF,-1\n"
        );
        assert!(output(out).starts_with("Saved 3 entries"));
    }

    #[test]
    fn test_record_uses_config_profile() {
        let (_temp_dir, ctx) = context();
        execute(&ctx, args("p1", &["sound_on", "led_on"]), &mut Vec::new()).unwrap();

        let name = ProgramName::new("p1").unwrap();
        let decoded = ctx.store.load(&name).unwrap();
        assert_eq!(
            decoded.list.as_slice(),
            &[Command::SoundOn(440), Command::LedOn(255)]
        );
    }

    #[test]
    fn test_unknown_operation_saves_nothing() {
        let (_temp_dir, ctx) = context();
        let result = execute(&ctx, args("demo", &["wait", "moonwalk"]), &mut Vec::new());

        assert!(matches!(result, Err(AppError::UnknownOperation(op)) if op == "moonwalk"));
        let name = ProgramName::new("demo").unwrap();
        assert!(matches!(
            ctx.store.load(&name),
            Err(StorageError::DirectoryMissing { .. })
        ));
    }

    #[test]
    fn test_out_of_range_override() {
        let (_temp_dir, ctx) = context();
        let mut record = args("demo", &["wait"]);
        record.wait = Some(0.5);

        let result = execute(&ctx, record, &mut Vec::new());
        assert!(matches!(
            result,
            Err(AppError::Authoring(AuthoringError::Profile(
                ProfileError::WaitSeconds(_)
            )))
        ));
    }

    #[test]
    fn test_invalid_name() {
        let (_temp_dir, ctx) = context();
        let result = execute(&ctx, args("my prog", &["wait"]), &mut Vec::new());
        assert!(matches!(result, Err(AppError::Name(_))));
    }

    #[test]
    fn test_append_extends_saved_program() {
        let (_temp_dir, ctx) = context();
        execute(&ctx, args("demo", &["move_forward"]), &mut Vec::new()).unwrap();

        let mut more = args("demo", &["led_off"]);
        more.append = true;
        let mut out = Vec::new();
        execute(&ctx, more, &mut out).unwrap();

        assert_eq!(
            fs::read_to_string(ctx.store.dir().join("demo.txt")).unwrap(),
            "MOVE_FORWARD,100\nLED_OFF,-1\n"
        );
        assert!(output(out).starts_with("Saved 2 entries"));
    }

    #[test]
    fn test_append_to_unsaved_program_starts_empty() {
        let (_temp_dir, ctx) = context();
        let mut record = args("fresh", &["disco"]);
        record.append = true;

        execute(&ctx, record, &mut Vec::new()).unwrap();

        let decoded = ctx.store.load(&ProgramName::new("fresh").unwrap()).unwrap();
        assert_eq!(decoded.list.as_slice(), &[Command::Disco]);
    }
}
