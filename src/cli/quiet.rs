//! Global quiet mode and TTY checks.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings, confirmations and prompts.
static QUIET: AtomicBool = AtomicBool::new(false);

/// Turn quiet mode on or off for the rest of the run.
pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

/// Check if quiet mode is enabled.
pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stdin is a terminal (interactive).
pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// Check if stdout is a terminal. Decides colors and the bare-run form.
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

/// Returns true if interactive prompts should be skipped.
/// True when quiet mode is on or stdin is not a terminal.
pub fn skip_prompt() -> bool {
    enabled() || !stdin_is_tty()
}
