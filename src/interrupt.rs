//! Ctrl-C handling.
//!
//! While the prompt is up an interrupt ends the launcher with
//! [`EXIT_INTERRUPTED`]. Once the analyzer is running the interrupt belongs
//! to the child (the terminal signals the whole foreground group) and the
//! launcher keeps waiting so the child's status is what gets reported.

use std::sync::atomic::{AtomicU8, Ordering};

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::types::EXIT_INTERRUPTED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Phase {
    Prompting = 0,
    RunningChild = 1,
}

static PHASE: AtomicU8 = AtomicU8::new(Phase::Prompting as u8);
static HANDLER: OnceCell<Result<(), String>> = OnceCell::new();

/// Installs the process-wide handler. Safe to call more than once; only the
/// first call does anything. If installation fails the default disposition
/// (terminate) stays in effect.
pub fn install() {
    HANDLER.get_or_init(|| {
        ctrlc::set_handler(on_interrupt).map_err(|err| {
            warn!(error = %err, "could not install interrupt handler");
            err.to_string()
        })
    });
}

pub fn enter(phase: Phase) {
    PHASE.store(phase as u8, Ordering::SeqCst);
}

pub fn current() -> Phase {
    if PHASE.load(Ordering::SeqCst) == Phase::RunningChild as u8 {
        Phase::RunningChild
    } else {
        Phase::Prompting
    }
}

fn on_interrupt() {
    if current() == Phase::RunningChild {
        debug!("interrupt left to the analyzer");
        return;
    }
    // move past the prompt line before exiting
    eprintln!();
    std::process::exit(EXIT_INTERRUPTED);
}
