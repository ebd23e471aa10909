//! Raw mode RAII guard.

use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Raw mode with a hidden cursor for the lifetime of the guard.
pub struct RawModeGuard {
    /// Cleared once the terminal has been restored.
    active: bool,
}

impl RawModeGuard {
    /// Enable raw mode and hide the cursor, returning a guard that undoes
    /// both on drop.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), Hide)?;
        Ok(Self { active: true })
    }

    /// Restore cooked mode early (also happens on drop).
    pub fn release(&mut self) {
        if self.active {
            let _ = execute!(io::stdout(), Show);
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
