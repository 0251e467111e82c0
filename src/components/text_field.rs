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

//! Single-line text entry.
//!
//! Wraps a `tui_input` buffer with a title and a focus flag. Enter and Esc are
//! reported to the owner, every other key edits the buffer.

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{components::Render, theme::Theme};

#[derive(Debug, PartialEq)]
pub(crate) enum FieldAction {
    /// Enter was pressed, carries the trimmed text.
    Submit(String),
    Cancel,
}

pub(crate) struct TextField {
    title: String,
    input: Input,
    focused: bool,
}

impl TextField {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            input: Input::default(),
            focused: false,
        }
    }

    /// Retitles the field and replaces its text, placing the cursor at the end.
    pub(crate) fn reset(&mut self, title: impl Into<String>, value: &str) {
        self.title = title.into();
        self.input = Input::new(value.to_string());
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn focused(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub(crate) fn handle_event(&mut self, event: &Event) -> Option<FieldAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Enter => Some(FieldAction::Submit(self.input.value().trim().to_string())),
            KeyCode::Esc => Some(FieldAction::Cancel),
            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
                None
            }
        }
    }
}

impl Render for TextField {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(self.title.as_str());

        let inner = block.inner(area);

        // Keep the cursor in view when the text is wider than the field
        let width = inner.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let text = Paragraph::new(self.input.value())
            .style(Style::default().fg(theme.input_colour))
            .scroll((0, scroll as u16))
            .block(block);

        f.render_widget(text, area);

        if self.focused {
            let cursor_x = inner.x + (self.input.visual_cursor().max(scroll) - scroll) as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_edits_and_enter_submits_trimmed() {
        let mut field = TextField::new("Search");

        for c in " adele ".chars() {
            assert_eq!(field.handle_event(&key(KeyCode::Char(c))), None);
        }

        assert_eq!(
            field.handle_event(&key(KeyCode::Enter)),
            Some(FieldAction::Submit("adele".to_string()))
        );
    }

    #[test]
    fn reset_prefills_value() {
        let mut field = TextField::new("Search");

        field.reset("Enter Artist Name", "Adele");
        field.handle_event(&key(KeyCode::Char('!')));

        assert_eq!(field.title(), "Enter Artist Name");
        assert_eq!(field.value(), "Adele!");
    }

    #[test]
    fn escape_cancels() {
        let mut field = TextField::new("Search");

        assert_eq!(field.handle_event(&key(KeyCode::Esc)), Some(FieldAction::Cancel));
    }
}
