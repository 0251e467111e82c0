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

//! Tagger layout.
//!
//! The file queue fills most of the screen, with a progress gauge, a hint
//! line and the status line beneath it. The active prompt and any dialog are
//! drawn as popups over the queue.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph},
};

use crate::{
    components::{Render, centered},
    tagger::{
        App, Stage,
        batch::{Batch, ItemStatus},
    },
    theme::Theme,
};

const PROMPT_WIDTH: u16 = 60;

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let [queue, gauge, hint, status] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_queue(f, queue, &app.batch, &app.theme);
    draw_gauge(f, gauge, &app.batch, &app.theme);
    draw_hint(f, hint, &app.stage, &app.theme);

    f.render_widget(
        Paragraph::new(format!(" {}", app.status)).style(
            Style::default()
                .fg(app.theme.status_colour)
                .bg(app.theme.gauge_track_colour),
        ),
        status,
    );

    if matches!(
        app.stage,
        Stage::AskArtist { .. } | Stage::AskTitle { .. } | Stage::SelectFiles
    ) {
        let popup = centered(area, PROMPT_WIDTH, 3);
        f.render_widget(Clear, popup);
        app.prompt.draw(f, popup, &app.theme);
    }

    if let Some(dialog) = app.dialogs.front_mut() {
        dialog.draw(f, area, &app.theme);
    }
}

fn draw_queue(f: &mut Frame, area: Rect, batch: &Batch, theme: &Theme) {
    let items: Vec<ListItem> = batch
        .items()
        .iter()
        .map(|item| {
            let colour = match item.status {
                ItemStatus::Pending => theme.pending_fg,
                ItemStatus::Processing => theme.processing_fg,
                ItemStatus::Done => theme.done_fg,
                ItemStatus::Error => theme.error_fg,
            };

            let line = Line::from(vec![
                Span::styled(format!(" {} ", item.status.marker()), Style::default().fg(colour).bold()),
                Span::styled(item.file_name(), Style::default().fg(colour)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title("Songs"),
    );

    f.render_widget(list, area);
}

fn draw_gauge(f: &mut Frame, area: Rect, batch: &Batch, theme: &Theme) {
    let (finished, total) = batch.progress();
    let ratio = if total == 0 {
        0.0
    } else {
        finished as f64 / total as f64
    };

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(ratio)
        .label(format!("{finished}/{total}"));

    f.render_widget(gauge, area);
}

fn draw_hint(f: &mut Frame, area: Rect, stage: &Stage, theme: &Theme) {
    let key = Style::default().fg(theme.accent_colour);
    let text = Style::default().fg(theme.status_colour);

    let spans = match stage {
        Stage::Idle => vec![
            Span::styled(" a", key),
            Span::styled(" add songs  ", text),
            Span::styled("r", key),
            Span::styled(" resume  ", text),
            Span::styled("q", key),
            Span::styled(" quit", text),
        ],
        Stage::Working => vec![Span::styled(" Working...", text)],
        _ => vec![
            Span::styled(" Enter", key),
            Span::styled(" confirm  ", text),
            Span::styled("Esc", key),
            Span::styled(" cancel", text),
        ],
    };

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
