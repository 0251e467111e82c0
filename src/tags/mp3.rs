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

//! ID3v2 tag writing for MP3 files.

use std::path::Path;

use id3::{
    ErrorKind, Tag, TagLike, Version,
    frame::{Lyrics, Picture, PictureType},
};
use tracing::debug;

use crate::{error::Result, model::TrackMetadata};

const LYRICS_LANGUAGE: &str = "eng";
const LYRICS_DESCRIPTION: &str = "desc";
const COVER_DESCRIPTION: &str = "Cover";

pub(super) fn write(path: &Path, metadata: &TrackMetadata) -> Result<()> {
    let mut tag = match Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) if matches!(e.kind, ErrorKind::NoTag) => Tag::new(),
        Err(e) => return Err(e.into()),
    };

    apply(&mut tag, metadata);

    tag.write_to_path(path, Version::Id3v24)?;

    Ok(())
}

fn apply(tag: &mut Tag, metadata: &TrackMetadata) {
    tag.remove_all_pictures();

    tag.set_artist(metadata.artist.as_str());
    tag.set_title(metadata.title.as_str());
    tag.set_album(metadata.album.as_str());

    if let Some(year) = metadata.year.as_deref().filter(|y| !y.is_empty()) {
        tag.set_text("TDRC", year);
    }

    // Genre is always written blank
    tag.set_text("TCON", "");

    if let Some(lyrics) = metadata.lyrics.as_deref() {
        tag.remove_all_lyrics();
        tag.add_frame(Lyrics {
            lang: LYRICS_LANGUAGE.to_string(),
            description: LYRICS_DESCRIPTION.to_string(),
            text: lyrics.to_string(),
        });
    }

    match &metadata.cover {
        // ID3 readers cannot display WEBP, so the cover is dropped
        Some(cover) if cover.is_webp() => debug!("Skipping WEBP cover"),
        Some(cover) => {
            tag.add_frame(Picture {
                mime_type: cover.mime.clone(),
                picture_type: PictureType::CoverFront,
                description: COVER_DESCRIPTION.to_string(),
                data: cover.data.clone(),
            });
        }
        None => {}
    }
}
