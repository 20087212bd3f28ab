//! Terminal color restoration
//!
//! The terminal must be back to its default color before the process exits,
//! whether input ran out, an error stopped processing, or the user pressed
//! Ctrl+C in the middle of a line. [`TerminalGuard`] resets on drop; on Unix a
//! SIGINT/SIGTERM handler does the same and exits. Both go through one shared
//! flag so the reset is written at most once.

use crossterm::execute;
use crossterm::style::ResetColor;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot latch for the terminal reset
pub struct ResetOnce {
    done: AtomicBool,
}

impl ResetOnce {
    pub const fn new() -> Self {
        Self {
            done: AtomicBool::new(false),
        }
    }

    /// Returns true exactly once: for the first caller
    pub fn claim(&self) -> bool {
        !self.done.swap(true, Ordering::SeqCst)
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}

impl Default for ResetOnce {
    fn default() -> Self {
        Self::new()
    }
}

static TERMINAL_RESET: ResetOnce = ResetOnce::new();

/// Restores the default terminal color when dropped
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Install interrupt handlers and return the guard.
    pub fn install() -> Self {
        #[cfg(unix)]
        unix::install_signal_handlers();

        Self { _private: () }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Reset the terminal color unless it has already been reset
pub fn restore_terminal() {
    if TERMINAL_RESET.claim() {
        if let Err(e) = execute!(io::stdout(), ResetColor) {
            log::debug!("Failed to reset terminal color: {}", e);
        }
    }
}

#[cfg(unix)]
mod unix {
    use super::TERMINAL_RESET;
    use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

    /// Reset to default color, then end the interrupted line
    const RESET_SEQUENCE: &[u8] = b"\x1b[0m\n";

    pub fn install_signal_handlers() {
        extern "C" fn termination_handler(_: libc::c_int) {
            // Only async-signal-safe calls from here on.
            if TERMINAL_RESET.claim() {
                unsafe {
                    libc::write(
                        libc::STDOUT_FILENO,
                        RESET_SEQUENCE.as_ptr() as *const libc::c_void,
                        RESET_SEQUENCE.len(),
                    );
                }
            }
            unsafe { libc::_exit(0) };
        }

        let handler = SigHandler::Handler(termination_handler);
        let action = SigAction::new(handler, SaFlags::empty(), SigSet::empty());

        unsafe {
            if let Err(e) = sigaction(Signal::SIGINT, &action) {
                log::error!("Failed to set SIGINT handler: {}", e);
            }
            if let Err(e) = sigaction(Signal::SIGTERM, &action) {
                log::error!("Failed to set SIGTERM handler: {}", e);
            }
        }
    }
}
