//! Raw mode RAII guard.

use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Raw mode with a hidden cursor for as long as the guard lives.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self { active: true })
    }

    /// Restore the terminal early (also happens on drop).
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
