use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info};

use crate::config::LauncherConfig;
use crate::error::{LaunchError, LaunchResult};
use crate::interrupt::{self, Phase};
use crate::prompt;
use crate::types::{EXIT_LAUNCH_FAILURE, Outcome};

/// Confirms with the user and hands the root directories to the analyzer.
#[derive(Debug, Clone)]
pub struct Launcher {
    config: LauncherConfig,
}

impl Launcher {
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    /// Runs one launcher session: usage check, banner, confirmation, then
    /// the analyzer.
    ///
    /// `input` supplies the confirmation line and `out` receives the usage,
    /// banner and prompt text. The analyzer itself always inherits the
    /// process's real stdio.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails or the analyzer cannot be
    /// started.
    pub fn run<R, W>(
        &self,
        dirs: &[OsString],
        program: &str,
        input: &mut R,
        out: &mut W,
    ) -> LaunchResult<Outcome>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        if dirs.is_empty() {
            prompt::write_usage(out, program)?;
            return Ok(Outcome::Usage);
        }

        prompt::write_banner(out, dirs)?;
        for dir in dirs {
            if !Path::new(dir).is_dir() {
                debug!(dir = %Path::new(dir).display(), "not a directory; leaving it to the analyzer");
            }
        }

        interrupt::enter(Phase::Prompting);
        if !prompt::confirm(input, out)? {
            debug!("input closed before confirmation");
            return Ok(Outcome::Cancelled);
        }
        out.flush()?;

        self.invoke(dirs).map(Outcome::Completed)
    }

    /// Builds the analyzer command line: interpreter, script, then the
    /// directories exactly as given.
    ///
    /// # Errors
    /// Returns [`LaunchError::AnalyzerMissing`] if the script is not a file.
    pub fn command(&self, dirs: &[OsString]) -> LaunchResult<Command> {
        let script = &self.config.script;
        if !script.is_file() {
            return Err(LaunchError::AnalyzerMissing {
                path: script.clone(),
            });
        }
        let mut cmd = Command::new(self.config.interpreter_name());
        cmd.arg(script)
            .args(dirs)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        Ok(cmd)
    }

    /// Spawns the analyzer, waits for it and returns its exit code.
    ///
    /// # Errors
    /// Returns an error if the analyzer is missing, cannot be spawned, or
    /// cannot be waited on.
    pub fn invoke(&self, dirs: &[OsString]) -> LaunchResult<i32> {
        let mut cmd = self.command(dirs)?;
        info!(
            script = %self.config.script.display(),
            dirs = dirs.len(),
            "launching analyzer"
        );
        debug!(command = ?cmd, "spawning");

        interrupt::enter(Phase::RunningChild);
        let mut child = cmd.spawn().map_err(|source| {
            interrupt::enter(Phase::Prompting);
            LaunchError::Spawn {
                program: self.config.interpreter.to_string_lossy().into_owned(),
                source,
            }
        })?;
        let status = child.wait().map_err(LaunchError::Wait)?;
        debug!(%status, "analyzer exited");
        Ok(exit_code_of(status))
    }
}

/// Maps a child's termination to the launcher's own exit code. A child
/// killed by signal `N` maps to `128 + N`, as a shell reports it.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    EXIT_LAUNCH_FAILURE
}
