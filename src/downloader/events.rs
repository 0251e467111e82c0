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

//! Event loop and key routing for the downloader.
//!
//! Every event is handled on the UI thread and followed by a redraw, so state
//! changes made here show up immediately.

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use crate::{
    components::{Dialog, FieldAction, ResultsAction},
    downloader::{App, Focus, render::draw, tasks::DownloadTask},
    error::SongError,
    model::SearchResult,
    tools::{launcher, ytdlp::YtDlp},
    util::term::{Tui, restore_terminal, resume_terminal},
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SearchResultsReady(Vec<SearchResult>),

    /// Replaces the status line.
    Status(String),

    LaunchCompanion,

    MissingTool(String),
    Error(String),

    Tick,

    ExitApplication,
}

/// Runs the downloader's event loop until the user quits or every sender is
/// gone.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::SearchResultsReady(results) => handle_search_results_ready(app, results),
            AppEvent::Status(message) => app.status = message,
            AppEvent::LaunchCompanion => handle_launch_companion(terminal, app)?,
            AppEvent::MissingTool(message) => show_missing_tool(app, message),
            AppEvent::Error(message) => app.status = format!("Error: {message}"),
            AppEvent::Tick | AppEvent::ExitApplication => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    // An open dialog swallows everything until it is dismissed
    if let Some(dialog) = &app.dialog {
        if dialog.handle_event(&event) {
            app.dialog = None;
        }
        return Ok(());
    }

    if key.code == KeyCode::Tab {
        let focus = match app.focus {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Search,
        };
        app.set_focus(focus);
        return Ok(());
    }

    match app.focus {
        Focus::Search => match app.search_field.handle_event(&event) {
            Some(FieldAction::Submit(query)) => start_search(app, &query),
            Some(FieldAction::Cancel) => app.set_focus(Focus::Results),
            None => {}
        },

        Focus::Results => {
            if let Some(ResultsAction::Download(item)) = app.results.process_event(&event) {
                start_download(app, item);
                return Ok(());
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => app.event_tx.send(AppEvent::ExitApplication)?,
                KeyCode::Char('o') => app.event_tx.send(AppEvent::LaunchCompanion)?,
                KeyCode::Char('/') | KeyCode::Char('i') => app.set_focus(Focus::Search),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Starts a search for `query` with the configured suffix appended.
fn start_search(app: &mut App, query: &str) {
    if query.is_empty() {
        return;
    }

    if let Err(e) = YtDlp::locate(&app.config) {
        show_missing_tool(app, e.to_string());
        return;
    }

    let query = format!("{query}{}", app.config.search_suffix);
    debug!("Search requested: {}", query);

    app.results.clear();
    app.status = format!("Searching: {query}...");
    submit(app, DownloadTask::Search(query));
}

fn start_download(app: &mut App, item: SearchResult) {
    let tool = YtDlp::locate(&app.config).and_then(|tool| tool.ensure_transcoder());
    if let Err(e) = tool {
        show_missing_tool(app, e.to_string());
        return;
    }

    app.status = format!("Queued: {}", item.title);
    submit(app, DownloadTask::Download(item));
}

fn submit(app: &mut App, task: DownloadTask) {
    if let Err(e) = app.task_queue.submit(task) {
        app.status = match e {
            SongError::TaskQueueFull => "Busy, try again when a download finishes.".to_string(),
            e => format!("Error: {e}"),
        };
    }
}

fn handle_search_results_ready(app: &mut App, results: Vec<SearchResult>) {
    if results.is_empty() {
        app.status = "No results found.".to_string();
    } else {
        app.status = format!("Found {} results.", results.len());
        app.set_focus(Focus::Results);
    }

    app.results.set_results(results);
}

fn show_missing_tool(app: &mut App, message: String) {
    warn!("{}", message);
    app.status = "Ready".to_string();
    app.dialog = Some(Dialog::error("Missing Tool", message));
}

/// Hands the terminal to the companion tagger until it exits.
///
/// Key reading is paused for the duration so that nothing the user types is
/// stolen from the companion.
fn handle_launch_companion(terminal: &mut Tui, app: &mut App) -> Result<()> {
    app.input_gate.pause();
    restore_terminal(terminal);

    launcher::launch_companion(&app.config.companion);

    let resumed = resume_terminal(terminal, &app.theme);
    app.input_gate.resume();

    resumed.context("Failed to restore the terminal after the tagger exited")
}

#[cfg(test)]
mod tests {
    use crate::config::AppConfig;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn result(id: &str) -> SearchResult {
        SearchResult {
            title: format!("Song {id}"),
            video_id: id.to_string(),
            uploader: "Uploader".to_string(),
        }
    }

    fn app() -> App {
        let config = AppConfig {
            yt_dlp: "/nonexistent/bin/yt-dlp".to_string(),
            ..AppConfig::default()
        };
        App::new(config)
    }

    #[test]
    fn empty_results_report_nothing_found() {
        let mut app = app();

        handle_search_results_ready(&mut app, vec![]);

        assert_eq!(app.status, "No results found.");
        assert!(app.results.is_empty());
        assert_eq!(app.focus, Focus::Search);
    }

    #[test]
    fn results_move_focus_to_table() {
        let mut app = app();

        handle_search_results_ready(&mut app, vec![result("a"), result("b")]);

        assert_eq!(app.focus, Focus::Results);
        assert_eq!(app.results.selected().map(|r| r.video_id.as_str()), Some("a"));
    }

    #[test]
    fn search_without_tool_opens_dialog() {
        let mut app = app();

        for c in "adele".chars() {
            process_key_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        process_key_event(&mut app, key(KeyCode::Enter)).unwrap();

        let dialog = app.dialog.as_ref().expect("dialog");
        assert!(dialog.message().contains("yt-dlp"));

        // Any further keys only dismiss the dialog
        process_key_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(app.dialog.is_some());
        process_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.dialog.is_none());
    }

    #[test]
    fn tab_toggles_focus() {
        let mut app = app();

        process_key_event(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.focus, Focus::Results);

        process_key_event(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.focus, Focus::Search);
    }

    #[test]
    fn quit_from_results() {
        let mut app = app();
        app.set_focus(Focus::Results);

        process_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }
}
