//! `run`: load a saved program and execute it

use std::io::Write;

use clap::Args;
use finch_core::engine::execute as execute_list;
use finch_hal::HardwarePort;
use tracing::warn;

use super::Context;
use crate::echo::ConsoleEcho;
use crate::error::Result;
use crate::storage::ProgramName;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Program name
    pub name: String,

    /// Skip real-time waits
    #[arg(long)]
    pub fast: bool,
}

pub fn execute(ctx: &Context, args: RunArgs, out: &mut dyn Write) -> Result<()> {
    let name = ProgramName::new(&args.name)?;
    let decoded = ctx.store.load(&name)?;
    if !decoded.is_clean() {
        warn!(
            "{} has {} malformed lines, running the {} valid entries",
            name,
            decoded.skipped_count(),
            decoded.list.len()
        );
    }

    let mut finch = ctx.connect(args.fast)?;
    let mut rng = rand::thread_rng();

    writeln!(out, "Running {} ({} entries)", name, decoded.list.len())?;
    let mut echo = ConsoleEcho::new(out);
    let result = execute_list(&decoded.list, &mut finch, &mut rng, &mut echo);
    let out = echo.into_inner();
    finch.disconnect();

    let summary = result?;
    writeln!(
        out,
        "Done: {} entries, {:.1} s waiting",
        summary.executed,
        finch.elapsed_ms() as f64 / 1000.0
    )?;
    Ok(())
}
