//! Subcommand implementations
//!
//! Each subcommand takes the shared [`Context`] and writes its report to
//! the given output, so the whole flow can run against a buffer in tests.

pub mod list;
pub mod record;
pub mod run;
pub mod sense;
pub mod show;
pub mod talent;

use finch_drivers::SimulatedFinch;
use finch_hal::HardwarePort;
use tracing::info;

use crate::config::ControlConfig;
use crate::error::{AppError, Result};
use crate::storage::ProgramStore;

/// State shared by every subcommand
#[derive(Debug, Clone)]
pub struct Context {
    pub config: ControlConfig,
    pub store: ProgramStore,
}

impl Context {
    pub fn new(config: ControlConfig) -> Self {
        let store = ProgramStore::new(config.data_dir.clone());
        Self { config, store }
    }

    /// Open the robot link
    ///
    /// `fast` skips real-time waits for this invocation.
    pub fn connect(&self, fast: bool) -> Result<SimulatedFinch> {
        let mut sim_config = self.config.sim_config();
        sim_config.realtime &= !fast;

        let mut finch = SimulatedFinch::new(sim_config);
        if !finch.connect() {
            return Err(AppError::Connect);
        }
        info!("Connected to simulated Finch");
        Ok(finch)
    }
}
