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

//! Modal message box.

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{
    components::{Render, centered},
    theme::Theme,
};

const DIALOG_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DialogKind {
    Error,
    Info,
}

/// A message the user must acknowledge before anything else happens.
#[derive(Debug, Clone)]
pub(crate) struct Dialog {
    kind: DialogKind,
    title: String,
    message: String,
}

impl Dialog {
    pub(crate) fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub(crate) fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub(crate) fn kind(&self) -> DialogKind {
        self.kind
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if the event dismisses the dialog.
    pub(crate) fn handle_event(&self, event: &Event) -> bool {
        match event {
            Event::Key(key_event) => matches!(
                key_event.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
            ),
            _ => false,
        }
    }
}

impl Render for Dialog {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let colour = match self.kind {
            DialogKind::Error => theme.error_fg,
            DialogKind::Info => theme.accent_colour,
        };

        // Rough wrapped height, borders and padding plus the hint line
        let text_width = DIALOG_WIDTH.saturating_sub(4).max(1) as usize;
        let lines = self
            .message
            .lines()
            .map(|line| line.chars().count().div_ceil(text_width).max(1))
            .sum::<usize>();
        let height = lines as u16 + 5;

        let popup = centered(area, DIALOG_WIDTH, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colour))
            .title(Line::from(format!(" {} ", self.title)).bold())
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(theme.background_colour));

        let mut text = Text::from(self.message.as_str());
        text.push_line(Line::from(""));
        text.push_line(
            Line::from("Press Enter to close")
                .style(Style::default().fg(theme.status_colour))
                .alignment(Alignment::Right),
        );

        f.render_widget(Clear, popup);
        f.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }).block(block), popup);
    }
}
