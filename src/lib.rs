//! Launcher for the radonhal code-metrics analyzer.
//!
//! Prints the root directories it was given, waits for the user to confirm,
//! then runs `main.py` from its own install directory with those
//! directories and exits with the analyzer's status.

pub mod cli;
pub mod config;
pub mod error;
pub mod interrupt;
pub mod launcher;
pub mod prompt;
pub mod types;

pub use config::LauncherConfig;
pub use error::{LaunchError, LaunchResult};
pub use launcher::Launcher;
pub use types::Outcome;
