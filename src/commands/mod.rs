//! Command implementations

// Every command shares the `anyhow::Result` signature used by `cli::run`
#![allow(clippy::unnecessary_wraps)]

mod calendar;
mod classify;
mod deadline;
mod docket;
mod init;

use chrono::NaiveDate;

use markflow::config::Config;
use markflow::output::{OutputMode, Report, VersionReport};

pub use calendar::{business_day, holidays};
pub use classify::{status, urgency};
pub use deadline::{maintenance, office_action, opposition, statement_of_use};
pub use docket::{docket, summary};
pub use init::init;

/// Settings shared by every command
#[derive(Debug)]
pub struct Context {
    /// Output format
    pub mode: OutputMode,
    /// Evaluation date for every countdown
    pub as_of: NaiveDate,
    /// Loaded user configuration
    pub config: Config,
}

/// Show version
pub fn version(ctx: &Context) -> anyhow::Result<()> {
    VersionReport {
        version: markflow::VERSION,
    }
    .render(ctx.mode);
    Ok(())
}
