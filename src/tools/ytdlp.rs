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

//! Search and download through the `yt-dlp` command-line tool.
//!
//! Both operations run the tool synchronously and block until it exits, they
//! are meant to be called from a task worker, never from the UI thread.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{ExitStatus, Stdio},
};

use tracing::{debug, info, warn};

use crate::{
    config::AppConfig,
    error::{Result, SongError},
    model::SearchResult,
    tools::{self, FFMPEG_URL, YT_DLP_URL},
};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

const SEARCH_FORMAT: &str = "%(title)s|%(id)s|%(uploader)s";

#[derive(Debug, Clone)]
pub struct YtDlp {
    program: PathBuf,
    ffmpeg_location: Option<PathBuf>,
}

impl YtDlp {
    /// Finds the download tool named in the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SongError::MissingTool`] if it is not installed.
    pub fn locate(config: &AppConfig) -> Result<Self> {
        let program = tools::locate_tool(&config.yt_dlp, YT_DLP_URL)?;

        Ok(Self {
            program,
            ffmpeg_location: config.ffmpeg_location.as_deref().map(PathBuf::from),
        })
    }

    /// Checks the transcoder the download tool needs for MP3 extraction.
    ///
    /// A configured location must exist, otherwise `ffmpeg` must be on `PATH`.
    pub fn ensure_transcoder(&self) -> Result<()> {
        match &self.ffmpeg_location {
            Some(location) if location.exists() => Ok(()),
            Some(location) => Err(SongError::MissingTool {
                tool: location.display().to_string(),
                url: FFMPEG_URL,
            }),
            None => tools::locate_tool("ffmpeg", FFMPEG_URL).map(|_| ()),
        }
    }

    /// Runs a flat-playlist search and returns up to `limit` results.
    pub fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchResult>> {
        let args = search_args(query, limit);
        info!(program = %self.program.display(), ?args, "Searching");

        let output = tools::command(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;

        self.check_status(output.status)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let results: Vec<SearchResult> = stdout
            .lines()
            .map(str::trim)
            .filter_map(SearchResult::parse_line)
            .collect();

        debug!("Search returned {} results", results.len());

        Ok(results)
    }

    /// Downloads the best audio stream of `video_id` and transcodes it to an
    /// MP3 at `output`.
    pub fn download(&self, video_id: &str, output: &Path) -> Result<()> {
        let args = download_args(video_id, output, self.ffmpeg_location.as_deref());
        info!(program = %self.program.display(), ?args, "Downloading");

        let status = tools::command(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        self.check_status(status)
    }

    fn check_status(&self, status: ExitStatus) -> Result<()> {
        if status.success() {
            return Ok(());
        }

        warn!(program = %self.program.display(), code = ?status.code(), "Tool failed");

        Err(SongError::ToolFailed {
            tool: self
                .program
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.program.display().to_string()),
            code: status.code(),
        })
    }
}

fn search_args(query: &str, limit: u32) -> Vec<String> {
    vec![
        format!("ytsearch{limit}:{query}"),
        "--flat-playlist".into(),
        "--print".into(),
        SEARCH_FORMAT.into(),
    ]
}

fn download_args(video_id: &str, output: &Path, ffmpeg_location: Option<&Path>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        format!("{WATCH_URL}{video_id}").into(),
        "-f".into(),
        "bestaudio".into(),
        "-x".into(),
        "--audio-format".into(),
        "mp3".into(),
        "--audio-quality".into(),
        "0".into(),
        "-o".into(),
        output.as_os_str().to_owned(),
        "--no-playlist".into(),
        "--quiet".into(),
    ];

    if let Some(location) = ffmpeg_location {
        args.push("--ffmpeg-location".into());
        args.push(location.as_os_str().to_owned());
    }

    args
}
