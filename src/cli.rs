use std::ffi::OsString;

use anyhow::Result;
use clap::{Parser, ValueHint};

use crate::prompt;
use crate::types::Outcome;

mod run_impl;

/// Arguments clap still answers for when they come first.
const INFO_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Describes the command line for `--help`. Directories themselves are
/// never parsed by clap; see [`split_args`].
#[derive(Parser, Debug, Clone)]
#[command(
    name = "radonhal",
    version,
    about = "Confirm, then run the radonhal analyzer over one or more source roots",
    long_about = None,
    override_usage = "radonhal <root_dir1> [<root_dir2> ...]",
    after_help = "Example: radonhal ./frontend/src ./backend"
)]
pub struct Args {
    /// Root directories handed to the analyzer unchanged, in order
    #[arg(
        value_name = "ROOT_DIR",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_hint = ValueHint::DirPath
    )]
    pub root_dirs: Vec<OsString>,
}

/// Splits a raw argument vector into the program name and the directories
/// to forward, byte for byte (a literal `--` included).
///
/// # Errors
/// Returns the clap help or version "error" when the first argument asks
/// for one; the caller prints it with [`clap::Error::exit`].
pub fn split_args<I>(argv: I) -> Result<(String, Vec<OsString>), clap::Error>
where
    I: IntoIterator<Item = OsString>,
{
    let mut argv = argv.into_iter();
    let argv0 = argv.next();
    let program = prompt::program_name(argv0.as_deref());
    let dirs: Vec<OsString> = argv.collect();

    if dirs
        .first()
        .is_some_and(|first| INFO_FLAGS.iter().any(|flag| first == flag))
    {
        Args::try_parse_from(argv0.into_iter().chain(dirs.iter().cloned()))?;
    }
    Ok((program, dirs))
}

/// Runs the launcher against the process's own arguments and terminal.
///
/// # Errors
/// Returns an error if the analyzer cannot be located or started, or if the
/// terminal cannot be read or written.
pub fn run() -> Result<Outcome> {
    let (program, dirs) = split_args(std::env::args_os()).unwrap_or_else(|err| err.exit());
    run_impl::run_with_args(&dirs, &program)
}
