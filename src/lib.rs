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

//! # Song grabbing and tagging.
//!
//! Two terminal tools share this library:
//!
//! * `songgrab` searches for songs through the external `yt-dlp` tool and
//!   downloads the chosen result as an MP3 with a cleaned-up file name.
//! * `songtag` fills in artist, title, album, year, cover art and lyrics for
//!   MP3 and M4A files, then renames them to `"Artist - Title"`.
//!
//! ## Architecture
//!
//! Each tool runs the same setup-run-teardown pattern: the main thread owns
//! the terminal and an event loop, while anything that blocks (external
//! processes, HTTP lookups, tag writes) is submitted to a bounded
//! [`tasks::TaskQueue`] and reports back with events over `std::sync::mpsc`
//! channels.

pub mod config;
pub mod downloader;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod model;
pub mod scratch;
pub mod tagger;
pub mod tags;
pub mod tasks;
pub mod theme;
pub mod tools;
pub mod util;

mod components;
mod input;
