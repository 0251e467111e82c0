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

//! Title and filename clean-up.
//!
//! Video titles returned by a search are noisy: they carry platform
//! boilerplate such as "(Official Lyrics Video)" and characters that are not
//! allowed in file names. The rules here are applied in a fixed order, later
//! rules act on what earlier ones leave behind.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that may not appear in a file name on common filesystems.
pub const RESERVED_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

static BRACKETED_LYRICS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[\[(][^\[\]()]*lyrics[^\[\]()]*[\])]?|\s*\blyrics\s*$").unwrap()
});

static OFFICIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)official\s*(audio|video)?").unwrap());

static LYRIC_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\blyrics?\b").unwrap());

static EMPTY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)|\[\s*\]").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Cleans a raw track title into a candidate file name stem.
///
/// The result may be empty for a title made only of boilerplate, callers must
/// cope with that.
///
/// # Examples
///
/// ```
/// use songgrab::util::sanitize::clean_title;
///
/// assert_eq!(clean_title("Artist - Song Name (Official Lyrics Video)"), "Artist - Song Name");
/// ```
pub fn clean_title(title: &str) -> String {
    // Removing one marker can expose another, so repeat until nothing changes
    let mut title = sanitize_filename(title);

    loop {
        let cleaned = clean_pass(&title);
        if cleaned == title {
            return cleaned;
        }
        title = cleaned;
    }
}

fn clean_pass(title: &str) -> String {
    let title = BRACKETED_LYRICS.replace_all(title, "");
    let title = OFFICIAL.replace_all(&title, "");
    let title = LYRIC_WORD.replace_all(&title, "");
    let title = EMPTY_BRACKETS.replace_all(&title, "");
    let title = WHITESPACE.replace_all(&title, " ");

    title
        .trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .to_string()
}

/// Removes the reserved file name characters, leaving everything else alone.
pub fn sanitize_filename(name: &str) -> String {
    name.chars().filter(|c| !RESERVED_CHARS.contains(c)).collect()
}

/// Collapses every run of whitespace into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bracketed_lyrics_markers() {
        assert_eq!(clean_title("Song (Lyrics)"), "Song");
        assert_eq!(clean_title("Song [Official Lyrics Video]"), "Song");
        assert_eq!(clean_title("Song (lyrics video) - Artist"), "Song - Artist");
        assert_eq!(clean_title("Artist - Song LYRICS"), "Artist - Song");
    }

    #[test]
    fn strips_official_boilerplate() {
        assert_eq!(clean_title("Artist - Song (Official Video)"), "Artist - Song");
        assert_eq!(clean_title("Artist - Song official audio"), "Artist - Song");
        assert_eq!(clean_title("Artist - Song [OFFICIAL]"), "Artist - Song");
    }

    #[test]
    fn strips_standalone_lyric_words_only() {
        assert_eq!(clean_title("Lyric - Song"), "Song");
        assert_eq!(clean_title("Lyrical Song"), "Lyrical Song");
    }

    #[test]
    fn removes_reserved_characters() {
        let cleaned = clean_title(r#"AC/DC: "Back" <In> Black? |*\"#);
        assert!(!cleaned.contains(RESERVED_CHARS));
        assert_eq!(cleaned, "ACDC Back In Black");
    }

    #[test]
    fn trims_separators_at_the_edges() {
        assert_eq!(clean_title("  - _Song_ -  "), "Song");
    }

    #[test]
    fn scenario_official_lyrics_video() {
        assert_eq!(
            clean_title("Artist - Song Name (Official Lyrics Video)"),
            "Artist - Song Name"
        );
    }

    #[test]
    fn boilerplate_only_title_is_empty() {
        assert_eq!(clean_title("(Official Lyrics Video)"), "");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let titles = [
            "Artist - Song Name (Official Lyrics Video)",
            "Artist - Song [Lyrics] (Official Audio)",
            "Some Band — A Song lyrics",
            "What? | Who: *Why*",
            "  spaced   out   title  ",
            "Lyrics",
            "Song (Lyric Video) [HD]",
            "Song (?)",
            "Song lyr:ics",
            "Song off|icial video",
            "A [*]",
            "Song (())",
            "Song (Lyr*ics)",
        ];

        for title in titles {
            let once = clean_title(title);
            assert_eq!(clean_title(&once), once, "not idempotent for {title:?}");
        }
    }

    #[test]
    fn no_lyrics_marker_survives_in_brackets() {
        let titles = ["A (Lyrics)", "A [LYRICS]", "A (with lyrics)", "B [Lyrics Video] C"];
        for title in titles {
            assert!(!clean_title(title).to_lowercase().contains("lyrics"));
        }
    }

    #[test]
    fn markers_split_by_reserved_characters_are_removed() {
        assert_eq!(clean_title("Song lyr:ics"), "Song");
        assert_eq!(clean_title("Song off|icial video"), "Song");
        assert_eq!(clean_title("Song (?)"), "Song");
        assert_eq!(clean_title("A [*]"), "A");
    }

    #[test]
    fn nested_empty_brackets_are_removed() {
        assert_eq!(clean_title("Song (())"), "Song");
    }

    #[test]
    fn sanitize_filename_keeps_spacing() {
        assert_eq!(sanitize_filename("a:b  c"), "ab  c");
        assert_eq!(collapse_whitespace("a  b\t c"), "a b c");
    }
}
