//! Runs one release from parsed CLI arguments.
use log::*;
use std::{io::Write, process::ExitCode};

use crate::{
    cli::Args, config::ReleaseConfig, orchestrator::Orchestrator,
    process::CommandRunner, result::Result,
};

/// Publish a release and report the outcome on `out`.
///
/// Failures are written to `out` with their full cause chain and map to
/// exit status 1.
pub fn execute(
    args: &Args,
    runner: Box<dyn CommandRunner>,
    out: &mut dyn Write,
) -> ExitCode {
    match release(args, runner, out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing left to report to if stdout is gone.
            let _ = writeln!(out, "{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn release(
    args: &Args,
    runner: Box<dyn CommandRunner>,
    out: &mut dyn Write,
) -> Result<()> {
    let config = ReleaseConfig::from(args);
    debug!("release config: {config:?}");

    let outcome = Orchestrator::new(config, runner).publish(out)?;

    if outcome.published {
        info!("published release {}", outcome.tag);
    }

    Ok(())
}
