//! `list`: list saved programs

use std::io::Write;

use super::Context;
use crate::error::Result;

pub fn execute(ctx: &Context, out: &mut dyn Write) -> Result<()> {
    let names = ctx.store.list()?;
    if names.is_empty() {
        writeln!(out, "No saved programs in {}", ctx.store.dir().display())?;
        return Ok(());
    }
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
