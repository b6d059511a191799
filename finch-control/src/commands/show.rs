//! `show`: print a saved program

use std::io::Write;

use clap::Args;
use finch_protocol::encode_line;

use super::Context;
use crate::error::Result;
use crate::storage::ProgramName;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Program name
    pub name: String,
}

pub fn execute(ctx: &Context, args: ShowArgs, out: &mut dyn Write) -> Result<()> {
    let name = ProgramName::new(&args.name)?;
    let decoded = ctx.store.load(&name)?;

    writeln!(out, "{} ({} entries)", name, decoded.list.len())?;
    for (index, command) in decoded.list.iter().enumerate() {
        writeln!(out, "{:>4}  {}", index + 1, encode_line(command))?;
    }

    if !decoded.is_clean() {
        writeln!(out, "skipped {} malformed lines:", decoded.skipped_count())?;
        for skipped in &decoded.skipped {
            writeln!(out, "  line {}: {}", skipped.line_number, skipped.reason)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{context, output};
    use crate::error::AppError;
    use crate::storage::StorageError;
    use std::fs;

    #[test]
    fn test_show_reports_skipped_lines() {
        let (_temp_dir, ctx) = context();
        fs::create_dir_all(ctx.store.dir()).unwrap();
        fs::write(
            ctx.store.dir().join("mixed.txt"),
            "MOVE_FORWARD,200\nBOGUS,5\nLED_OFF,-1\n",
        )
        .unwrap();

        let mut out = Vec::new();
        execute(
            &ctx,
            ShowArgs {
                name: "mixed".to_string(),
            },
            &mut out,
        )
        .unwrap();

        assert_eq!(
            output(out),
            "mixed (2 entries)\n   1  MOVE_FORWARD,200\n   2  LED_OFF,-1\n\
             skipped 1 malformed lines:\n  line 2: unknown operation name\n"
        );
    }

    #[test]
    fn test_show_missing_program() {
        let (_temp_dir, ctx) = context();
        fs::create_dir_all(ctx.store.dir()).unwrap();
        let result = execute(
            &ctx,
            ShowArgs {
                name: "ghost".to_string(),
            },
            &mut Vec::new(),
        );
        assert!(matches!(
            result,
            Err(AppError::Storage(StorageError::NotFound { .. }))
        ));
    }
}
