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

//! Reusable widgets shared by both front-ends.
//!
//! Each component owns its own state, interprets the key events routed to
//! it, and reports anything the owning application must act on as a small
//! action value rather than acting itself.

mod dialog;
mod results_table;
mod text_field;

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
};

use crate::theme::Theme;

pub(crate) use dialog::{Dialog, DialogKind};
pub(crate) use results_table::{ResultsAction, ResultsTable};
pub(crate) use text_field::{FieldAction, TextField};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Returns a rectangle of `width` by `height` centred in `area`, clipped to
/// fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);

    let [centre] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);

    centre
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clipped_to_area() {
        let area = Rect::new(0, 0, 20, 10);

        let rect = centered(area, 40, 4);

        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 4);
        assert_eq!(rect.y, 3);
    }
}
