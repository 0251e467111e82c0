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

//! Plain lyrics lookup.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info};

use crate::lookup::LookupClient;

static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[.*?\]").unwrap());

#[derive(Debug, Deserialize)]
struct LyricsResponse {
    #[serde(default)]
    lyrics: Option<String>,
}

impl LookupClient {
    /// Fetches lyrics for `artist` and `title`.
    ///
    /// Any failure, including a missing song, yields `None`.
    pub fn fetch_lyrics(&self, artist: &str, title: &str) -> Option<String> {
        let url = format!(
            "{}/{}/{}",
            self.lyrics_api,
            urlencoding::encode(artist),
            urlencoding::encode(title)
        );
        info!("Fetching lyrics for {} - {}", artist, title);

        let response: LyricsResponse = match self.agent.get(&url).call() {
            Ok(response) => match response.into_json() {
                Ok(body) => body,
                Err(e) => {
                    debug!("Unreadable lyrics response: {}", e);
                    return None;
                }
            },
            Err(e) => {
                debug!("No lyrics: {}", e);
                return None;
            }
        };

        response.lyrics.as_deref().and_then(clean_lyrics)
    }
}

/// Removes bracketed annotations such as `[Chorus]` and surrounding blank
/// space, returning `None` if nothing is left.
pub fn clean_lyrics(lyrics: &str) -> Option<String> {
    let cleaned = ANNOTATION.replace_all(lyrics, "");
    let cleaned = cleaned.trim();

    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_annotations() {
        let lyrics = "[Verse 1]\nFirst line\nSecond line\n\n[Chorus]\nSing it";

        assert_eq!(
            clean_lyrics(lyrics).as_deref(),
            Some("First line\nSecond line\n\n\nSing it")
        );
    }

    #[test]
    fn annotations_only_is_none() {
        assert_eq!(clean_lyrics("[Instrumental]\n  "), None);
        assert_eq!(clean_lyrics(""), None);
    }
}
