// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal environment and styling utilities.
//!
//! This module owns the terminal lifecycle shared by both tools, and provides
//! functions to manipulate the terminal emulator's background colour using OSC
//! (Operating System Command) escape sequences.
//!
//! # Compatibility
//!
//! The colour functions rely on the terminal emulator supporting the specific
//! OSC codes. Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support
//! these sequences.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::theme::Theme;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Prepares the terminal for a TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background colour based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
pub fn setup_terminal(theme: &Theme) -> Result<Tui> {
    // Without this we'd get a thin black outline around the application
    set_terminal_bg(&Theme::to_hex(theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This is "best-effort" and does not return a result, as it is typically
/// called during cleanup.
pub fn restore_terminal(terminal: &mut Tui) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Takes the terminal back after [`restore_terminal`] handed it to another
/// program, forcing a full redraw on the next frame.
pub fn resume_terminal(terminal: &mut Tui, theme: &Theme) -> Result<()> {
    set_terminal_bg(&Theme::to_hex(theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(terminal.backend_mut(), EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    terminal.clear().context("Failed to clear terminal")?;

    Ok(())
}

/// Sets the terminal background colour using an OSC 11 escape sequence.
///
/// # Arguments
///
/// * `hex_color` - A string slice representing the colour (e.g., `"#1e1e1e"`).
pub fn set_terminal_bg(hex_color: &str) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1b]11;{}\x07", hex_color);
    let _ = stdout.flush();
}

/// Resets the terminal background to the user's configured colour (OSC 111).
pub fn reset_terminal_bg() {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1b]111\x07");
    let _ = stdout.flush();
}
