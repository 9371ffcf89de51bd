use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{LaunchError, LaunchResult};

/// File name of the analyzer, looked up next to the launcher executable.
pub const ANALYZER_SCRIPT: &str = "main.py";
/// Interpreter used to run the analyzer script.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Where the analyzer lives and what runs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub interpreter: OsString,
    pub script: PathBuf,
}

impl LauncherConfig {
    pub fn new(interpreter: impl Into<OsString>, script: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
        }
    }

    /// Resolves the analyzer relative to the running executable, never the
    /// working directory.
    ///
    /// # Errors
    /// Returns [`LaunchError::Locate`] if the executable path cannot be
    /// determined.
    pub fn discover() -> LaunchResult<Self> {
        let exe = std::env::current_exe().map_err(LaunchError::Locate)?;
        Self::beside(&exe)
    }

    /// Builds the default configuration for a launcher installed at `exe`.
    /// Symlinks are followed so a linked launcher still finds its own
    /// install directory.
    ///
    /// # Errors
    /// Returns [`LaunchError::Locate`] if `exe` has no parent directory.
    pub fn beside(exe: &Path) -> LaunchResult<Self> {
        let exe = exe.canonicalize().unwrap_or_else(|_| exe.to_path_buf());
        let dir = exe.parent().ok_or_else(|| {
            LaunchError::Locate(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ))
        })?;
        Ok(Self::new(DEFAULT_INTERPRETER, dir.join(ANALYZER_SCRIPT)))
    }

    pub fn interpreter_name(&self) -> &OsStr {
        &self.interpreter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_sits_next_to_executable() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("radonhal");
        std::fs::write(&exe, b"").unwrap();
        let cfg = LauncherConfig::beside(&exe).unwrap();
        let expected = dir.path().canonicalize().unwrap().join("main.py");
        assert_eq!(cfg.script, expected);
        assert_eq!(cfg.interpreter, OsString::from("python3"));
    }

    #[test]
    fn unresolvable_path_still_uses_its_parent() {
        let cfg = LauncherConfig::beside(Path::new("/nonexistent/bin/radonhal")).unwrap();
        assert_eq!(cfg.script, PathBuf::from("/nonexistent/bin/main.py"));
    }

    #[test]
    fn root_has_no_parent() {
        let err = LauncherConfig::beside(Path::new("/")).unwrap_err();
        assert!(matches!(err, LaunchError::Locate(_)));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_launcher_resolves_real_location() {
        let real = tempfile::tempdir().unwrap();
        let links = tempfile::tempdir().unwrap();
        let exe = real.path().join("radonhal");
        std::fs::write(&exe, b"").unwrap();
        let link = links.path().join("radonhal");
        std::os::unix::fs::symlink(&exe, &link).unwrap();

        let cfg = LauncherConfig::beside(&link).unwrap();
        let expected = real.path().canonicalize().unwrap().join("main.py");
        assert_eq!(cfg.script, expected);
    }
}
