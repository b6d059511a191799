//! Execution events reported to observers
//!
//! Observers are a side channel for echoing progress. Nothing they do feeds
//! back into dispatch order or hardware effects.

use finch_hal::PortError;

use crate::command::Command;

/// Progress notifications emitted while a list executes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExecutionEvent {
    /// Execution began
    Started { total: usize },
    /// Entry at `index` is about to be applied
    Executing { index: usize, command: Command },
    /// A GET_TEMPERATURE entry read the sensor
    Temperature { celsius: f64, fahrenheit: f64 },
    /// Every entry was applied
    Finished { executed: usize },
    /// Entry at `index` failed; cleanup follows
    Aborted { index: usize, cause: PortError },
}

impl ExecutionEvent {
    /// Check if this event ends an execution
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ExecutionEvent::Finished { .. } | ExecutionEvent::Aborted { .. }
        )
    }
}

/// Receiver of execution events
pub trait Observer {
    fn notify(&mut self, event: &ExecutionEvent);
}

impl<F: FnMut(&ExecutionEvent)> Observer for F {
    fn notify(&mut self, event: &ExecutionEvent) {
        self(event)
    }
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn notify(&mut self, _event: &ExecutionEvent) {}
}
