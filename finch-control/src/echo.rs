//! Console echo of execution progress

use std::io::Write;

use finch_core::engine::{ExecutionEvent, Observer};

/// Prints each entry as it runs, plus temperature readings
pub struct ConsoleEcho<W: Write> {
    out: W,
}

impl<W: Write> ConsoleEcho<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for ConsoleEcho<W> {
    fn notify(&mut self, event: &ExecutionEvent) {
        // Echo is informational; a closed stdout must not stop the robot
        let _ = match event {
            ExecutionEvent::Executing { index, command } => writeln!(
                self.out,
                "{:>4}  {:<18}{}",
                index + 1,
                command.operation(),
                command
                    .parameter()
                    .map(|v| v.to_string())
                    .unwrap_or_default()
            ),
            ExecutionEvent::Temperature {
                celsius,
                fahrenheit,
            } => writeln!(
                self.out,
                "      temperature {:.1} °F ({:.1} °C)",
                fahrenheit, celsius
            ),
            _ => Ok(()),
        };
        if event.is_terminal() {
            let _ = self.out.flush();
        }
    }
}
