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

//! Downloader layout.
//!
//! Search field on top, the results table filling the middle, then a hint
//! line and the status line at the bottom. A dialog, when open, is drawn over
//! everything.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{components::Render, downloader::App};

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let [search, results, hint, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    app.search_field.draw(f, search, &app.theme);
    app.results.draw(f, results, &app.theme);

    let key = Style::default().fg(app.theme.accent_colour);
    let text = Style::default().fg(app.theme.status_colour);
    let hint_line = Line::from(vec![
        Span::styled(" Enter", key),
        Span::styled(" search/download  ", text),
        Span::styled("Tab", key),
        Span::styled(" switch  ", text),
        Span::styled("o", key),
        Span::styled(" add metadata  ", text),
        Span::styled("q", key),
        Span::styled(" quit", text),
    ]);
    f.render_widget(Paragraph::new(hint_line), hint);

    f.render_widget(
        Paragraph::new(format!(" {}", app.status)).style(
            Style::default()
                .fg(app.theme.status_colour)
                .bg(app.theme.gauge_track_colour),
        ),
        status,
    );

    if let Some(dialog) = app.dialog.as_mut() {
        dialog.draw(f, area, &app.theme);
    }
}
