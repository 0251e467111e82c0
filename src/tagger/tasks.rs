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

//! Tagging work run on a task worker.
//!
//! One task carries one file through the whole pipeline: metadata lookup,
//! cover download, lyrics fetch, embedding and finally the rename. The UI
//! learns the outcome from a single [`AppEvent::ItemFinished`].

use std::{path::PathBuf, sync::mpsc::Sender};

use tracing::{error, info, warn};

use crate::{
    config::AppConfig,
    error::Result,
    lookup::LookupClient,
    model::{CoverArt, TrackMetadata},
    scratch::ScratchDir,
    tagger::events::AppEvent,
    tags::{self, TagWriter},
};

#[derive(Debug)]
pub(crate) struct TagTask {
    pub(crate) index: usize,
    pub(crate) path: PathBuf,
    pub(crate) artist: String,
    pub(crate) title: String,
}

/// What happened to a file that was tagged successfully.
#[derive(Debug)]
pub(crate) struct TagReport {
    pub(crate) path: PathBuf,
    pub(crate) lyrics_found: bool,
}

/// Shared resources required by task handlers.
pub(crate) struct TaskContext {
    pub(crate) config: AppConfig,
    pub(crate) client: LookupClient,
    pub(crate) event_tx: Sender<AppEvent>,
}

pub(crate) fn run_task(task: TagTask, ctx: &TaskContext) {
    let index = task.index;
    let outcome = tag_file(ctx, &task);

    if let Err(e) = &outcome {
        error!("Tagging {} failed: {}", task.path.display(), e);
    }

    let _ = ctx.event_tx.send(AppEvent::ItemFinished(index, outcome));
}

fn tag_file(ctx: &TaskContext, task: &TagTask) -> Result<TagReport> {
    // Fail before any network traffic for a file we cannot write
    let writer = TagWriter::for_path(&task.path)?;

    let found = ctx.client.search_track(&task.artist, &task.title)?;
    info!("Matched {} - {} on {}", found.artist, found.title, found.album);

    let scratch = ScratchDir::create(&ctx.config.scratch_dir)?;

    let cover = found
        .cover_url
        .as_deref()
        .and_then(|url| fetch_cover(ctx, url, &found.artist, &found.title, &scratch));

    let lyrics = ctx.client.fetch_lyrics(&found.artist, &found.title);

    let metadata = TrackMetadata {
        artist: found.artist,
        title: found.title,
        album: found.album,
        year: found.year,
        lyrics,
        cover,
    };

    writer.write(&task.path, &metadata)?;

    // The tags are in place whether or not the file can be renamed
    let path = match tags::rename_to_metadata(&task.path, &metadata.artist, &metadata.title) {
        Ok(path) => path,
        Err(e) => {
            error!("{}", e);
            task.path.clone()
        }
    };

    Ok(TagReport {
        path,
        lyrics_found: metadata.lyrics.is_some(),
    })
}

/// A missing cover does not stop the rest of the tags being written.
fn fetch_cover(
    ctx: &TaskContext,
    url: &str,
    artist: &str,
    title: &str,
    scratch: &ScratchDir,
) -> Option<CoverArt> {
    match ctx.client.download_cover(url, artist, title, scratch) {
        Ok(cover) => Some(cover),
        Err(e) => {
            warn!("Cover download failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs::File, sync::mpsc, time::Duration};

    use tempfile::TempDir;

    use super::*;
    use crate::error::SongError;

    fn context(event_tx: Sender<AppEvent>) -> TaskContext {
        let config = AppConfig {
            // Nothing listens here, any request fails fast
            metadata_api: "http://127.0.0.1:9".to_string(),
            lyrics_api: "http://127.0.0.1:9".to_string(),
            ..AppConfig::default()
        };

        TaskContext {
            client: LookupClient::new(&config),
            config,
            event_tx,
        }
    }

    #[test]
    fn unsupported_file_fails_before_lookup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("song.wav");
        File::create(&path).unwrap();

        let (event_tx, event_rx) = mpsc::channel();
        let ctx = context(event_tx);

        run_task(
            TagTask {
                index: 3,
                path,
                artist: "Adele".to_string(),
                title: "Hello".to_string(),
            },
            &ctx,
        );

        match event_rx.recv_timeout(Duration::from_secs(1)) {
            Ok(AppEvent::ItemFinished(3, Err(SongError::UnsupportedFormat(ext)))) => {
                assert_eq!(ext, ".wav")
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn lookup_failure_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("song.mp3");
        File::create(&path).unwrap();

        let (event_tx, _event_rx) = mpsc::channel();
        let ctx = context(event_tx);

        let task = TagTask {
            index: 0,
            path: path.clone(),
            artist: "Adele".to_string(),
            title: "Hello".to_string(),
        };

        assert!(tag_file(&ctx, &task).is_err());
        assert!(path.exists());
    }
}
