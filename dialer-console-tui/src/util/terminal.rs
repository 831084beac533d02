//! Terminal lifecycle: raw mode and the alternate screen

use std::io::{Stdout, stdout};

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// The one terminal type the whole frontend draws to.
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode on the alternate screen and hands back the terminal.
pub fn init_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(out))?;
    Ok(terminal)
}

/// Leaves the alternate screen and restores the cursor.
///
/// Must run on every exit path, including errors, or the user's shell is left
/// in raw mode.
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
