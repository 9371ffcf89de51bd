use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::LauncherConfig;
use crate::interrupt;
use crate::launcher::Launcher;
use crate::prompt;
use crate::types::Outcome;

pub fn run_with_args(dirs: &[OsString], program: &str) -> Result<Outcome> {
    interrupt::install();
    let config = LauncherConfig::discover().context("locating analyzer")?;
    debug!(
        interpreter = %config.interpreter.to_string_lossy(),
        script = %config.script.display(),
        "resolved analyzer"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut input = prompt::confirmation_input().context("opening stdin")?;
    let outcome = Launcher::new(config).run(dirs, program, &mut input, &mut out)?;
    if outcome == Outcome::Cancelled {
        // the prompt line has no newline of its own
        writeln!(io::stderr(), "\nCancelled: no confirmation received.")?;
    }
    Ok(outcome)
}
