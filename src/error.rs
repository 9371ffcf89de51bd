use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type LaunchResult<T> = Result<T, LaunchError>;

/// Everything that can stop the analyzer from running to completion.
///
/// Display strings carry no cause; render with `{:#}` through anyhow (or walk
/// `source()`) to get the underlying OS error.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("could not resolve launcher location")]
    Locate(#[source] io::Error),

    #[error("analyzer not found at {}", path.display())]
    AnalyzerMissing { path: PathBuf },

    #[error("failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for analyzer")]
    Wait(#[source] io::Error),

    #[error("terminal I/O failed")]
    Io(#[from] io::Error),
}
