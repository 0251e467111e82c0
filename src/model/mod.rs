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

//! Domain models and core data structures.
//!
//! Everything here is ephemeral: search results live for one search session
//! and a metadata record lives for one tagging pass over one file.

use std::path::PathBuf;

/// One entry of a flat-playlist search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub video_id: String,
    pub uploader: String,
}

impl SearchResult {
    /// Parses a `title|id|uploader` line, anything with a different number of
    /// fields is rejected.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.split('|');
        let (Some(title), Some(video_id), Some(uploader), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };

        Some(Self {
            title: title.to_string(),
            video_id: video_id.to_string(),
            uploader: uploader.to_string(),
        })
    }
}

/// An embedded cover image and its MIME type.
#[derive(Debug, Clone)]
pub struct CoverArt {
    pub mime: String,
    pub data: Vec<u8>,
    /// Where the image was staged, if it was written to disk.
    pub path: Option<PathBuf>,
}

impl CoverArt {
    pub fn is_png(&self) -> bool {
        self.mime.contains("png")
    }

    pub fn is_webp(&self) -> bool {
        self.mime == "image/webp"
    }
}

/// The tag fields written for one file.
///
/// Genre is not carried, it is always written empty.
#[derive(Debug, Clone, Default)]
pub struct TrackMetadata {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub year: Option<String>,
    pub lyrics: Option<String>,
    pub cover: Option<CoverArt>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_field_lines() {
        let result = SearchResult::parse_line("Song (Lyrics)|dQw4w9WgXcQ|Some Channel").unwrap();

        assert_eq!(result.title, "Song (Lyrics)");
        assert_eq!(result.video_id, "dQw4w9WgXcQ");
        assert_eq!(result.uploader, "Some Channel");
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(SearchResult::parse_line("").is_none());
        assert!(SearchResult::parse_line("a|b").is_none());
        assert!(SearchResult::parse_line("a|b|c|d").is_none());
    }
}
