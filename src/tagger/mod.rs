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

//! # Song tagger.
//!
//! Works through a batch of audio files, asking for each file's artist and
//! title, looking up full metadata, cover art and lyrics, writing them into
//! the file's tags and renaming the file to `"Artist - Title"`.
//!
//! The UI thread owns the terminal and the prompt sequence; lookups and
//! writes run on a task worker and report back through the event channel.

mod batch;
mod events;
mod render;
mod tasks;

use std::{
    collections::VecDeque,
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
};

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    components::{Dialog, TextField},
    config::{self, AppConfig},
    input::{InputGate, spawn_key_reader, spawn_ticker},
    lookup::LookupClient,
    tagger::{
        batch::Batch,
        events::{AppEvent, add_files, process_events},
        tasks::{TagTask, TaskContext, run_task},
    },
    tasks::TaskQueue,
    theme::Theme,
    util::term::{Tui, restore_terminal, setup_terminal},
};

/// Where the tagger is in its per-file prompt sequence.
#[derive(Debug)]
pub(crate) enum Stage {
    /// Waiting for the user, nothing in flight.
    Idle,
    SelectFiles,
    AskArtist { guessed_title: String },
    AskTitle { artist: String },
    /// A task is tagging the current file.
    Working,
}

/// Application state.
pub(crate) struct App {
    pub(crate) theme: Theme,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) task_queue: TaskQueue<TagTask>,

    pub(crate) batch: Batch,
    pub(crate) stage: Stage,
    pub(crate) prompt: TextField,

    pub(crate) status: String,
    pub(crate) dialogs: VecDeque<Dialog>,
}

impl App {
    /// Creates the application state and starts its task worker.
    pub(crate) fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let ctx = TaskContext {
            client: LookupClient::new(&config),
            config: config.clone(),
            event_tx: event_tx.clone(),
        };

        // Files are tagged strictly one after another, a single worker is
        // enough
        let task_queue = TaskQueue::spawn(1, config.task_capacity, move |task| run_task(task, &ctx));

        Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_queue,
            batch: Batch::default(),
            stage: Stage::Idle,
            prompt: TextField::new(""),
            status: "Press a to select songs.".to_string(),
            dialogs: VecDeque::new(),
        }
    }
}

/// Runs the tagger on `paths` until the user quits.
///
/// Each path may be a file or a directory to search for supported files.
pub fn run(paths: Vec<PathBuf>) -> Result<()> {
    let config = config::load_config();
    info!("Starting tagger with {} paths", paths.len());

    let mut app = App::new(config);
    if !paths.is_empty() {
        add_files(&mut app, &paths);
    }

    let mut terminal = setup_terminal(&app.theme)?;
    let res = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    // The tagger never hands the terminal over, so input is never paused
    spawn_key_reader(app.event_tx.clone(), InputGate::default(), AppEvent::Key);
    spawn_ticker(app.event_tx.clone(), || AppEvent::Tick);

    process_events(terminal, app)
}
