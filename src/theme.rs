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

//! Visual styling and colour configuration for the TUI.
//!
//! This module defines the colour palette shared by both tools and provides
//! conversion of colours into the hexadecimal strings used for terminal
//! emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub struct Theme {
    pub background_colour: Color,
    pub accent_colour: Color,
    pub border_colour: Color,
    pub gauge_track_colour: Color,
    pub input_colour: Color,
    pub status_colour: Color,

    pub result_title_fg: Color,
    pub result_uploader_fg: Color,

    pub pending_fg: Color,
    pub processing_fg: Color,
    pub done_fg: Color,
    pub error_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(50, 30, 60),
            input_colour: Color::Rgb(255, 255, 255),
            status_colour: Color::Rgb(162, 161, 166),

            result_title_fg: Color::Rgb(255, 255, 255),
            result_uploader_fg: Color::Rgb(162, 161, 166),

            pending_fg: Color::Rgb(162, 161, 166),
            processing_fg: Color::Rgb(179, 157, 219),
            done_fg: Color::Rgb(152, 195, 121),
            error_fg: Color::Rgb(224, 108, 117),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// Non-RGB colours have no hexadecimal form and map to black.
    pub fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => "#000000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_hex() {
        assert_eq!(Theme::to_hex(Theme::default().background_colour), "#281432");
    }
}
