/// Exit status for a run with no root directories.
pub const EXIT_USAGE: i32 = 2;
/// Exit status when the analyzer could not be started at all.
pub const EXIT_LAUNCH_FAILURE: i32 = 127;
/// Exit status when the user cancels at the confirmation prompt.
pub const EXIT_INTERRUPTED: i32 = 130;

/// How a launcher invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No root directories were supplied; usage was printed.
    Usage,
    /// The prompt was abandoned before a line was submitted.
    Cancelled,
    /// The analyzer ran and exited with this status.
    Completed(i32),
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Usage => EXIT_USAGE,
            Outcome::Cancelled => EXIT_INTERRUPTED,
            Outcome::Completed(code) => code,
        }
    }
}
