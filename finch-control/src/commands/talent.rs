//! `talent`: run a talent show routine

use std::io::Write;

use clap::{Args, ValueEnum};
use finch_core::routines::{dance, light_and_sound, mixing_it_up};
use finch_hal::HardwarePort;

use super::Context;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Routine {
    /// LED and tone sweep
    LightAndSound,
    /// Spinning dance
    Dance,
    /// Jingle with moves and colours
    MixingItUp,
}

#[derive(Debug, Args)]
pub struct TalentArgs {
    #[arg(value_enum)]
    pub routine: Routine,

    /// Dance speed (100-255)
    #[arg(long, default_value_t = 200)]
    pub speed: i32,

    /// Skip real-time waits
    #[arg(long)]
    pub fast: bool,
}

pub fn execute(ctx: &Context, args: TalentArgs, out: &mut dyn Write) -> Result<()> {
    let mut finch = ctx.connect(args.fast)?;
    let mut rng = rand::thread_rng();

    let result: Result<()> = match args.routine {
        Routine::LightAndSound => light_and_sound(&mut finch).map_err(Into::into),
        Routine::Dance => dance(&mut finch, args.speed).map_err(Into::into),
        Routine::MixingItUp => mixing_it_up(&mut finch, &mut rng).map_err(Into::into),
    };
    finch.disconnect();
    result?;

    writeln!(out, "{:?} finished", args.routine)?;
    Ok(())
}
