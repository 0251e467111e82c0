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

//! Track metadata search.

use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    error::{Result, SongError},
    lookup::LookupClient,
};

/// The first search hit for an artist and title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupMatch {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub year: Option<String>,
    pub cover_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchTrack>,
}

#[derive(Debug, Deserialize)]
struct SearchTrack {
    title: String,
    artist: SearchArtist,
    album: SearchAlbum,
    #[serde(default)]
    release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchArtist {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SearchAlbum {
    title: String,
    #[serde(default)]
    cover_xl: Option<String>,
    #[serde(default)]
    cover_big: Option<String>,
}

impl From<SearchTrack> for LookupMatch {
    fn from(track: SearchTrack) -> Self {
        let year = track
            .release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
            .map(str::to_string);

        let cover_url = track
            .album
            .cover_xl
            .filter(|url| !url.is_empty())
            .or(track.album.cover_big.filter(|url| !url.is_empty()));

        Self {
            artist: track.artist.name,
            title: track.title,
            album: track.album.title,
            year,
            cover_url,
        }
    }
}

impl LookupClient {
    /// Searches for `artist` and `title` and returns the first match.
    ///
    /// # Errors
    ///
    /// Returns [`SongError::NotFound`] when the search has no hits, or an HTTP
    /// or decoding error.
    pub fn search_track(&self, artist: &str, title: &str) -> Result<LookupMatch> {
        let query = format!("{artist} {title}");
        let url = format!("{}/search?q={}", self.metadata_api, urlencoding::encode(&query));
        info!("Looking up {:?}", query);

        let response: SearchResponse = self
            .agent
            .get(&url)
            .call()?
            .into_json()
            .map_err(|e| SongError::Lookup(format!("invalid search response: {e}")))?;

        let found = first_match(response)?;
        debug!(?found, "Metadata match");

        Ok(found)
    }
}

fn first_match(response: SearchResponse) -> Result<LookupMatch> {
    response
        .data
        .into_iter()
        .next()
        .map(LookupMatch::from)
        .ok_or(SongError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<LookupMatch> {
        first_match(serde_json::from_str(body).unwrap())
    }

    #[test]
    fn takes_first_hit() {
        let found = parse(
            r#"{
                "data": [
                    {
                        "title": "Song",
                        "artist": { "name": "Artist" },
                        "album": {
                            "title": "Album",
                            "cover_big": "https://img/big.jpg",
                            "cover_xl": "https://img/xl.jpg"
                        },
                        "release_date": "2020-03-01"
                    },
                    {
                        "title": "Other",
                        "artist": { "name": "Someone" },
                        "album": { "title": "Else" }
                    }
                ],
                "total": 2
            }"#,
        )
        .unwrap();

        assert_eq!(
            found,
            LookupMatch {
                artist: "Artist".into(),
                title: "Song".into(),
                album: "Album".into(),
                year: Some("2020".into()),
                cover_url: Some("https://img/xl.jpg".into()),
            }
        );
    }

    #[test]
    fn falls_back_to_big_cover_and_no_year() {
        let found = parse(
            r#"{ "data": [ {
                "title": "Song",
                "artist": { "name": "Artist" },
                "album": { "title": "Album", "cover_big": "https://img/big.jpg", "cover_xl": null }
            } ] }"#,
        )
        .unwrap();

        assert_eq!(found.cover_url.as_deref(), Some("https://img/big.jpg"));
        assert_eq!(found.year, None);
    }

    #[test]
    fn empty_search_is_not_found() {
        assert!(matches!(parse(r#"{ "data": [] }"#), Err(SongError::NotFound)));
        assert!(matches!(parse(r#"{ "error": {} }"#), Err(SongError::NotFound)));
    }
}
