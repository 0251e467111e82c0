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

//! Failure taxonomy shared by both tools.
//!
//! Every failure is terminal for the single item being worked on, but never
//! for the application. The front-ends decide how each variant is surfaced
//! (blocking dialog, status line, or log only).

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = SongError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SongError {
    /// An external executable could not be found.
    #[error("{tool} was not found, download it from {url}")]
    MissingTool { tool: String, url: &'static str },

    /// An external executable ran but reported failure.
    #[error("{tool} exited with {}", .code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}")))]
    ToolFailed { tool: String, code: Option<i32> },

    #[error("lookup failed: {0}")]
    Lookup(String),

    #[error("No metadata found.")]
    NotFound,

    #[error("Unsupported format \"{0}\". Only .mp3 and .m4a are supported.")]
    UnsupportedFormat(String),

    #[error("failed to rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("too many tasks are already waiting")]
    TaskQueueFull,

    #[error("task workers have stopped")]
    TaskQueueClosed,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Http(#[from] Box<ureq::Error>),

    #[error(transparent)]
    Id3(#[from] id3::Error),

    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}

impl From<ureq::Error> for SongError {
    fn from(e: ureq::Error) -> Self {
        SongError::Http(Box::new(e))
    }
}
