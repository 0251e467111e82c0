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

//! Event loop and the per-file prompt sequence of the tagger.
//!
//! Each file goes through the same steps: ask for the artist (pre-filled with
//! a guess from the file name), ask for the title, then hand the pair to a
//! task worker. The outcome arrives as [`AppEvent::ItemFinished`], after which
//! the next file is started. Cancelling either prompt halts the batch where it
//! is.

use std::{mem, path::PathBuf};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::{
    components::{Dialog, FieldAction},
    error::{self, SongError},
    tagger::{
        App, Stage,
        batch::{ItemStatus, collect_files},
        render::draw,
        tasks::{TagReport, TagTask},
    },
    util::{guess::guess_artist_title, term::Tui},
};

pub(crate) const ARTIST_PROMPT: &str = "Enter Artist Name";
pub(crate) const TITLE_PROMPT: &str = "Enter Song Title";
pub(crate) const FILES_PROMPT: &str = "Select More Songs (file or folder)";

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    ItemFinished(usize, error::Result<TagReport>),

    Tick,

    ExitApplication,
}

/// Runs the tagger's event loop until the user quits.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::ItemFinished(index, outcome) => handle_item_finished(app, index, outcome),
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

    if let Some(dialog) = app.dialogs.front() {
        if dialog.handle_event(&event) {
            app.dialogs.pop_front();
        }
        return Ok(());
    }

    match app.stage {
        Stage::AskArtist { .. } | Stage::AskTitle { .. } | Stage::SelectFiles => {
            if let Some(action) = app.prompt.handle_event(&event) {
                handle_prompt_action(app, action);
            }
        }

        Stage::Idle => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.event_tx.send(AppEvent::ExitApplication)?,
            KeyCode::Char('a') => open_prompt(app, Stage::SelectFiles, FILES_PROMPT, ""),
            KeyCode::Char('r') if !app.batch.is_finished() => process_next(app),
            _ => {}
        },

        Stage::Working => {
            if key.code == KeyCode::Char('q') {
                app.event_tx.send(AppEvent::ExitApplication)?;
            }
        }
    }

    Ok(())
}

fn handle_prompt_action(app: &mut App, action: FieldAction) {
    let stage = mem::replace(&mut app.stage, Stage::Idle);
    app.prompt.set_focused(false);

    match (stage, action) {
        (Stage::AskArtist { guessed_title }, FieldAction::Submit(artist)) if !artist.is_empty() => {
            open_prompt(app, Stage::AskTitle { artist }, TITLE_PROMPT, &guessed_title);
        }
        (Stage::AskArtist { .. }, _) => halt(app, "Artist name input cancelled."),

        (Stage::AskTitle { artist }, FieldAction::Submit(title)) if !title.is_empty() => {
            submit_current(app, artist, title);
        }
        (Stage::AskTitle { .. }, _) => halt(app, "Song title input cancelled."),

        (Stage::SelectFiles, FieldAction::Submit(path)) if !path.is_empty() => {
            add_files(app, &[PathBuf::from(path)]);
        }

        (stage, _) => app.stage = stage,
    }
}

fn open_prompt(app: &mut App, stage: Stage, title: &str, value: &str) {
    app.prompt.reset(title, value);
    app.prompt.set_focused(true);
    app.stage = stage;
}

/// Adds files or directories to the batch, starting work if nothing is in
/// progress.
pub(crate) fn add_files(app: &mut App, paths: &[PathBuf]) {
    let files = collect_files(paths);
    let added = app.batch.extend(files);
    info!("Added {} files", added);

    if added == 0 {
        app.status = "No supported files found.".to_string();
        return;
    }

    app.status = format!("{added} files selected.");

    if matches!(app.stage, Stage::Idle) {
        process_next(app);
    }
}

/// Starts the prompt sequence for the current file, or finishes the batch.
fn process_next(app: &mut App) {
    let Some(index) = app.batch.current() else {
        app.stage = Stage::Idle;
        app.status = "All files processed.".to_string();
        return;
    };

    app.batch.set_status(index, ItemStatus::Processing);

    let Some(item) = app.batch.current_item() else {
        return;
    };
    let (artist, title) = guess_artist_title(&item.path);
    app.status = format!("Processing: {}", item.file_name());

    open_prompt(app, Stage::AskArtist { guessed_title: title }, ARTIST_PROMPT, &artist);
}

/// Stops the batch on the current file, which stays pending.
fn halt(app: &mut App, message: &str) {
    info!("{}", message);

    if let Some(index) = app.batch.current() {
        app.batch.set_status(index, ItemStatus::Pending);
    }
    app.stage = Stage::Idle;
    app.status = message.to_string();
}

fn submit_current(app: &mut App, artist: String, title: String) {
    let Some((index, path)) = app
        .batch
        .current()
        .zip(app.batch.current_item().map(|item| item.path.clone()))
    else {
        return;
    };

    app.status = format!("Looking up: {artist} - {title}...");

    let task = TagTask {
        index,
        path,
        artist,
        title,
    };

    match app.task_queue.submit(task) {
        Ok(()) => app.stage = Stage::Working,
        Err(e) => handle_item_finished(app, index, Err(e)),
    }
}

fn handle_item_finished(app: &mut App, index: usize, outcome: error::Result<TagReport>) {
    match outcome {
        Ok(report) => {
            app.batch.set_status(index, ItemStatus::Done);
            app.status = format!("Processed: {}", display_name(&report.path));
            app.batch.set_path(index, report.path);

            if !report.lyrics_found {
                app.dialogs.push_back(Dialog::info("Lyrics", "No lyrics found."));
            }
        }

        Err(SongError::NotFound) => {
            app.batch.set_status(index, ItemStatus::Error);
            app.status = "Metadata not found.".to_string();
            app.dialogs.push_back(Dialog::error("Not Found", SongError::NotFound.to_string()));
        }

        Err(e) => {
            warn!("Item {} failed: {}", index, e);
            app.batch.set_status(index, ItemStatus::Error);
            app.status = "Error during metadata embedding.".to_string();
            app.dialogs.push_back(Dialog::error("Error", e.to_string()));
        }
    }

    // A stale result must not move the batch along
    if app.batch.current() == Some(index) {
        app.batch.advance();
        process_next(app);
    }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
