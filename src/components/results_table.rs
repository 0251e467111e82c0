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

//! Interactive table of search results.
//!
//! Keyboard navigation follows the usual vi-style bindings, and a download is
//! requested for the highlighted row with Enter or `d`.

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Style, Stylize},
    text::{Line, Text},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::{components::Render, model::SearchResult, theme::Theme};

#[derive(Debug, PartialEq)]
pub(crate) enum ResultsAction {
    Download(SearchResult),
}

pub(crate) struct ResultsTable {
    results: Vec<SearchResult>,
    table_state: TableState,
    pub(crate) focused: bool,
}

impl ResultsTable {
    pub(crate) fn new() -> Self {
        Self {
            results: vec![],
            table_state: TableState::new(),
            focused: false,
        }
    }

    pub(crate) fn set_results(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        self.table_state = TableState::new();
        if !self.results.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub(crate) fn clear(&mut self) {
        self.set_results(vec![]);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub(crate) fn selected(&self) -> Option<&SearchResult> {
        self.table_state.selected().and_then(|i| self.results.get(i))
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<ResultsAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Enter | KeyCode::Char('d') => {
                return self.selected().cloned().map(ResultsAction::Download);
            }

            _ => {}
        }

        None
    }

    fn goto_next(&mut self) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.results.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.results.is_empty() {
            self.table_state.select(Some(self.results.len() - 1));
        }
    }
}

impl Render for ResultsTable {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.results.iter().enumerate().map(|(i, item)| {
            let text = Text::from(vec![
                Line::from(item.title.as_str())
                    .style(Style::default().fg(theme.result_title_fg))
                    .bold(),
                Line::from(format!("by {}", item.uploader))
                    .style(Style::default().fg(theme.result_uploader_fg)),
            ]);

            Row::new(vec![
                Cell::from(
                    Line::from(format!("{:>2}", i + 1))
                        .style(Style::default().fg(theme.status_colour))
                        .alignment(Alignment::Right),
                ),
                Cell::from(text),
            ])
            .height(2)
        });

        let border_colour = if self.focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let table = Table::new(rows, [Constraint::Length(3), Constraint::Min(0)])
            .column_spacing(1)
            .row_highlight_style(Style::default().bg(theme.gauge_track_colour))
            .highlight_symbol(">")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_colour))
                    .title("Results"),
            );

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
