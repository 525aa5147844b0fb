use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, stderr};
use tracing::warn;

/// The terminal mode switches the game needs
pub trait TerminalControl {
    fn enable_raw_mode(&mut self) -> io::Result<()>;
    fn disable_raw_mode(&mut self) -> io::Result<()>;
    fn enter_alternate_screen(&mut self) -> io::Result<()>;
    fn leave_alternate_screen(&mut self) -> io::Result<()>;
}

/// Real terminal, drawn on through stderr
pub struct Crossterm;

impl TerminalControl for Crossterm {
    fn enable_raw_mode(&mut self) -> io::Result<()> {
        enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        disable_raw_mode()
    }

    fn enter_alternate_screen(&mut self) -> io::Result<()> {
        execute!(stderr(), EnterAlternateScreen)
    }

    fn leave_alternate_screen(&mut self) -> io::Result<()> {
        execute!(stderr(), LeaveAlternateScreen, Show)
    }
}

/// Undoes every terminal switch that succeeded, on every exit path.
///
/// A failed `acquire` drops the partly set up guard, which turns raw mode
/// back off. `restore` may be called early to see the error; the drop then
/// has nothing left to do.
pub struct TerminalGuard<C: TerminalControl = Crossterm> {
    control: C,
    raw_mode: bool,
    alternate_screen: bool,
}

impl<C: TerminalControl> TerminalGuard<C> {
    pub fn acquire(control: C) -> Result<Self> {
        let mut guard = Self {
            control,
            raw_mode: false,
            alternate_screen: false,
        };

        guard
            .control
            .enable_raw_mode()
            .context("Failed to enable raw mode")?;
        guard.raw_mode = true;

        guard
            .control
            .enter_alternate_screen()
            .context("Failed to enter alternate screen")?;
        guard.alternate_screen = true;

        Ok(guard)
    }

    /// Leave the alternate screen and raw mode. Both steps are attempted;
    /// the first failure is returned.
    pub fn restore(&mut self) -> Result<()> {
        let mut outcome = Ok(());

        if self.alternate_screen {
            self.alternate_screen = false;
            outcome = self
                .control
                .leave_alternate_screen()
                .context("Failed to leave alternate screen");
        }

        if self.raw_mode {
            self.raw_mode = false;
            let disabled = self
                .control
                .disable_raw_mode()
                .context("Failed to disable raw mode");
            outcome = outcome.and(disabled);
        }

        outcome
    }
}

impl<C: TerminalControl> Drop for TerminalGuard<C> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// Combine the game loop result with the terminal restore result.
/// A loop error wins; a restore error behind it is only logged.
pub fn finish(run: Result<()>, restored: Result<()>) -> Result<()> {
    match run {
        Err(err) => {
            if let Err(cleanup) = restored {
                warn!(error = %cleanup, "failed to restore terminal");
            }
            Err(err)
        }
        Ok(()) => restored,
    }
}
