use std::ffi::{OsStr, OsString};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

pub const CONFIRM_PROMPT: &str = "Press Enter to run analysis (or Ctrl-C to cancel)...";

/// Name shown in usage text: the file name the launcher was invoked as.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|s| Path::new(s).file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Writes the usage and example lines.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_usage<W: Write + ?Sized>(out: &mut W, program: &str) -> io::Result<()> {
    writeln!(out, "Usage: {program} <root_dir1> [<root_dir2> ...]")?;
    writeln!(out, "Example: {program} ./frontend/src ./backend")?;
    out.flush()
}

/// Writes the list of directories about to be handed to the analyzer.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_banner<W: Write + ?Sized>(out: &mut W, dirs: &[OsString]) -> io::Result<()> {
    let joined = dirs
        .iter()
        .map(|d| d.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "Directories to analyze: {joined}")
}

/// Opens stdin for the confirmation read.
///
/// The reader buffers one byte at a time, so only the confirmation line is
/// consumed and everything after it is left for the analyzer, which inherits
/// the same stdin.
///
/// # Errors
/// Returns an error if the stdin descriptor cannot be duplicated.
#[cfg(unix)]
pub fn confirmation_input() -> io::Result<Box<dyn BufRead>> {
    use std::os::fd::AsFd;
    let fd = io::stdin().as_fd().try_clone_to_owned()?;
    Ok(Box::new(BufReader::with_capacity(1, std::fs::File::from(fd))))
}

#[cfg(not(unix))]
pub fn confirmation_input() -> io::Result<Box<dyn BufRead>> {
    Ok(Box::new(io::stdin().lock()))
}

/// Shows the confirmation prompt and blocks for one line of input.
///
/// Returns `false` when input ends before a line is submitted. The line's
/// content is ignored.
///
/// # Errors
/// Returns an error if the prompt cannot be written or input cannot be read.
pub fn confirm<R, W>(input: &mut R, out: &mut W) -> io::Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "{CONFIRM_PROMPT}")?;
    out.flush()?;
    let mut line = Vec::new();
    let n = input.read_until(b'\n', &mut line)?;
    Ok(n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn usage_names_the_program() {
        let mut out = Vec::new();
        write_usage(&mut out, "radonhal").unwrap();
        let s = String::from_utf8(out).unwrap();
        assert_eq!(
            s,
            "Usage: radonhal <root_dir1> [<root_dir2> ...]\n\
             Example: radonhal ./frontend/src ./backend\n"
        );
    }

    #[test]
    fn banner_keeps_argument_order() {
        let dirs: Vec<OsString> = ["./frontend/src", "./backend", "b a"]
            .iter()
            .map(OsString::from)
            .collect();
        let mut out = Vec::new();
        write_banner(&mut out, &dirs).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Directories to analyze: ./frontend/src ./backend b a\n"
        );
    }

    #[test]
    fn program_name_strips_directories() {
        assert_eq!(program_name(Some(OsStr::new("/usr/local/bin/radonhal"))), "radonhal");
        assert_eq!(program_name(Some(OsStr::new("./run.sh"))), "run.sh");
        assert_eq!(program_name(None), "radonhal");
        assert_eq!(program_name(Some(OsStr::new(""))), "radonhal");
    }

    #[test]
    fn any_line_confirms() {
        let mut out = Vec::new();
        assert!(confirm(&mut Cursor::new("\n"), &mut out).unwrap());
        assert!(confirm(&mut Cursor::new("whatever\n"), &mut Vec::new()).unwrap());
        // unterminated final line still counts as submitted
        assert!(confirm(&mut Cursor::new("y"), &mut Vec::new()).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), CONFIRM_PROMPT);
    }

    #[test]
    fn one_byte_buffer_leaves_the_rest_unread() {
        let mut source = Cursor::new(b"\nrest-of-input\n".to_vec());
        {
            let mut reader = BufReader::with_capacity(1, &mut source);
            assert!(confirm(&mut reader, &mut Vec::new()).unwrap());
        }
        assert_eq!(source.position(), 1);
    }

    #[test]
    fn end_of_input_declines() {
        assert!(!confirm(&mut Cursor::new(""), &mut Vec::new()).unwrap());
    }
}
