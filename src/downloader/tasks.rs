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

//! Blocking work offloaded from the downloader's UI thread.
//!
//! Searching and downloading both run the external download tool and can take
//! many seconds, so they are submitted to the task queue and report back via
//! [`AppEvent`]s.

use std::sync::mpsc::Sender;

use tracing::{error, info};

use crate::{
    config::AppConfig,
    downloader::events::AppEvent,
    error::{Result, SongError},
    model::SearchResult,
    tools::ytdlp::YtDlp,
    util::{sanitize::clean_title, unique::unique_filename_in},
};

const DOWNLOAD_EXTENSION: &str = ".mp3";

#[derive(Debug)]
pub(crate) enum DownloadTask {
    Search(String),
    Download(SearchResult),
}

/// Shared resources required by task handlers.
pub(crate) struct TaskContext {
    pub(crate) config: AppConfig,
    pub(crate) event_tx: Sender<AppEvent>,
}

/// Runs a single task on a worker thread.
///
/// Failures are reported to the UI as events, a missing tool gets its own
/// event so it can be shown as a blocking dialog.
pub(crate) fn run_task(task: DownloadTask, ctx: &TaskContext) {
    let result = match task {
        DownloadTask::Search(query) => search(ctx, &query),
        DownloadTask::Download(item) => download(ctx, &item),
    };

    if let Err(e) = result {
        error!("Task failed: {}", e);

        let event = match e {
            SongError::MissingTool { .. } => AppEvent::MissingTool(e.to_string()),
            _ => AppEvent::Error(e.to_string()),
        };
        let _ = ctx.event_tx.send(event);
    }
}

fn search(ctx: &TaskContext, query: &str) -> Result<()> {
    let tool = YtDlp::locate(&ctx.config)?;
    let results = tool.search(query, ctx.config.search_limit)?;

    let _ = ctx.event_tx.send(AppEvent::SearchResultsReady(results));

    Ok(())
}

fn download(ctx: &TaskContext, item: &SearchResult) -> Result<()> {
    let tool = YtDlp::locate(&ctx.config)?;
    tool.ensure_transcoder()?;

    let dir = ctx.config.download_dir();
    let name = unique_filename_in(&dir, &download_filename(item));

    let _ = ctx
        .event_tx
        .send(AppEvent::Status(format!("Downloading: {name}...")));

    tool.download(&item.video_id, &dir.join(&name))?;
    info!("Downloaded {} to {}", item.video_id, dir.join(&name).display());

    let _ = ctx.event_tx.send(AppEvent::Status(format!("Downloaded: {name}")));

    Ok(())
}

/// Returns the file name a result is saved under before collisions are
/// resolved.
///
/// A title that cleans down to nothing falls back to the video id.
pub(crate) fn download_filename(item: &SearchResult) -> String {
    let stem = clean_title(&item.title);
    let stem = if stem.is_empty() { item.video_id.as_str() } else { stem.as_str() };

    format!("{stem}{DOWNLOAD_EXTENSION}")
}
