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

//! # Song downloader.
//!
//! Searches for songs with the external download tool and saves the chosen
//! result as an MP3 named after its cleaned-up title.
//!
//! ## Architecture
//!
//! * The **Main Thread** owns the terminal, processes [`AppEvent`]s and
//!   redraws after each one.
//! * **Task Workers** run searches and downloads, which block on the external
//!   tool, and report back through the same event channel.
//! * A **Key Reader** and a **Ticker** thread feed input and periodic redraws
//!   into the event channel.

mod events;
mod render;
mod tasks;

use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    components::{Dialog, ResultsTable, TextField},
    config::{self, AppConfig},
    downloader::{
        events::{AppEvent, process_events},
        tasks::{DownloadTask, TaskContext, run_task},
    },
    input::{InputGate, spawn_key_reader, spawn_ticker},
    tasks::TaskQueue,
    theme::Theme,
    util::term::{Tui, restore_terminal, setup_terminal},
};

const SEARCH_TITLE: &str = "Search";

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Focus {
    Search,
    Results,
}

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,
    pub(crate) theme: Theme,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) task_queue: TaskQueue<DownloadTask>,
    pub(crate) input_gate: InputGate,

    pub(crate) focus: Focus,
    pub(crate) search_field: TextField,
    pub(crate) results: ResultsTable,

    pub(crate) status: String,
    pub(crate) dialog: Option<Dialog>,
}

impl App {
    /// Creates the application state and starts its task workers.
    pub(crate) fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let ctx = TaskContext {
            config: config.clone(),
            event_tx: event_tx.clone(),
        };
        let task_queue = TaskQueue::spawn(config.workers, config.task_capacity, move |task| {
            run_task(task, &ctx)
        });

        let mut search_field = TextField::new(SEARCH_TITLE);
        search_field.set_focused(true);

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_queue,
            input_gate: InputGate::default(),
            focus: Focus::Search,
            search_field,
            results: ResultsTable::new(),
            status: "Ready".to_string(),
            dialog: None,
        }
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.search_field.set_focused(focus == Focus::Search);
        self.results.focused = focus == Focus::Results;
    }
}

/// Runs the downloader until the user quits.
///
/// Manages the terminal lifecycle, restoring the terminal whether or not the
/// event loop failed.
pub fn run() -> Result<()> {
    let config = config::load_config();
    info!("Starting downloader, saving to {}", config.download_dir().display());

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app.theme)?;
    let res = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    spawn_key_reader(app.event_tx.clone(), app.input_gate.clone(), AppEvent::Key);
    spawn_ticker(app.event_tx.clone(), || AppEvent::Tick);

    process_events(terminal, app)
}
