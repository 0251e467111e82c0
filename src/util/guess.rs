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

//! Best-effort artist and title guessing from a file name.
//!
//! This only pre-fills the tagging prompts, it is never treated as
//! authoritative.

use std::{path::Path, sync::LazyLock};

use regex::Regex;

static LYRICS_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[(\[]?lyrics[)\]]?").unwrap());

/// Separators tried in priority order. The last one is a mis-encoded en dash
/// still found in file names produced by older tools.
const SEPARATORS: [&str; 4] = [" - ", "_", ".", "\u{201a}\u{c4}\u{ec}"];

/// Guesses `(artist, title)` from a file path or bare file name.
///
/// The extension and any lyrics marker are removed first. The first separator
/// that splits the name into a non-empty artist and a non-empty title wins;
/// the title keeps any further occurrences of that separator. When nothing
/// matches the artist is empty and the whole name is the title.
pub fn guess_artist_title(filename: impl AsRef<Path>) -> (String, String) {
    let path = filename.as_ref();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = LYRICS_MARKER.replace_all(&stem, "");
    let name = name.trim();

    for sep in SEPARATORS {
        if let Some((artist, title)) = name.split_once(sep) {
            let (artist, title) = (artist.trim(), title.trim());
            if !artist.is_empty() && !title.is_empty() {
                return (artist.to_string(), title.to_string());
            }
        }
    }

    (String::new(), name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(name: &str) -> (String, String) {
        guess_artist_title(name)
    }

    #[test]
    fn splits_on_spaced_hyphen() {
        assert_eq!(guess("Artist - Title"), ("Artist".into(), "Title".into()));
    }

    #[test]
    fn no_separator_gives_empty_artist() {
        assert_eq!(guess("NoSeparatorHere"), ("".into(), "NoSeparatorHere".into()));
    }

    #[test]
    fn strips_extension_and_directories() {
        assert_eq!(
            guess("/music/in/Artist - Title.mp3"),
            ("Artist".into(), "Title".into())
        );
    }

    #[test]
    fn strips_lyrics_marker() {
        assert_eq!(
            guess("Artist - Title (Lyrics).m4a"),
            ("Artist".into(), "Title".into())
        );
    }

    #[test]
    fn title_keeps_later_separators() {
        assert_eq!(
            guess("Artist - Title - Live.mp3"),
            ("Artist".into(), "Title - Live".into())
        );
    }

    #[test]
    fn separator_priority() {
        assert_eq!(guess("Some_Artist - A_Song.mp3"), ("Some_Artist".into(), "A_Song".into()));
        assert_eq!(guess("artist_song.mp3"), ("artist".into(), "song".into()));
    }

    #[test]
    fn empty_parts_fall_through_to_next_separator() {
        assert_eq!(guess("_Artist.Song.mp3"), ("_Artist".into(), "Song".into()));
    }

    #[test]
    fn legacy_dash() {
        assert_eq!(
            guess("Artist\u{201a}\u{c4}\u{ec}Title.mp3"),
            ("Artist".into(), "Title".into())
        );
    }
}
