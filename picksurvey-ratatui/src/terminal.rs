//! Raw mode and the alternate screen for the length of one survey run.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

/// A terminal switched into survey mode. `leave` switches it back.
pub(crate) struct TerminalSession {
    terminal: Tui,
}

impl TerminalSession {
    /// Enable raw mode and enter the alternate screen, undoing whatever
    /// already succeeded if a later step fails.
    pub(crate) fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(err)
            }
        }
    }

    pub(crate) fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Restore the normal screen. Every step runs even if an earlier one fails;
    /// the first error is reported.
    pub(crate) fn leave(mut self) -> io::Result<()> {
        let raw = disable_raw_mode();
        let screen = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let cursor = self.terminal.show_cursor();
        raw.and(screen).and(cursor)
    }
}
