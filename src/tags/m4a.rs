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

//! `ilst` atom writing for MPEG-4 audio files.

use std::path::Path;

use lofty::{
    config::{ParseOptions, WriteOptions},
    picture::{MimeType, Picture, PictureType},
    prelude::*,
    probe::Probe,
    tag::{ItemKey, Tag, TagType},
};

use crate::{
    error::{Result, SongError},
    model::{CoverArt, TrackMetadata},
};

pub(super) fn write(path: &Path, metadata: &TrackMetadata) -> Result<()> {
    // Audio properties are not needed to rewrite the tags
    let mut tagged_file = Probe::open(path)?.options(tag_only()).read()?;

    if tagged_file.tag(TagType::Mp4Ilst).is_none() {
        tagged_file.insert_tag(Tag::new(TagType::Mp4Ilst));
    }

    let tag = tagged_file
        .tag_mut(TagType::Mp4Ilst)
        .ok_or_else(|| SongError::UnsupportedFormat(format!("{} has no ilst", path.display())))?;

    apply(tag, metadata);

    tag.save_to_path(path, WriteOptions::default())?;

    Ok(())
}

fn tag_only() -> ParseOptions {
    ParseOptions::new().read_properties(false)
}

fn apply(tag: &mut Tag, metadata: &TrackMetadata) {
    tag.set_artist(metadata.artist.clone());
    tag.set_title(metadata.title.clone());
    tag.set_album(metadata.album.clone());

    if let Some(year) = metadata.year.as_deref().filter(|y| !y.is_empty()) {
        tag.insert_text(ItemKey::RecordingDate, year.to_string());
    }

    // Genre is always cleared
    tag.remove_key(ItemKey::Genre);

    if let Some(lyrics) = metadata.lyrics.as_deref() {
        tag.remove_key(ItemKey::Lyrics);
        tag.insert_text(ItemKey::Lyrics, lyrics.to_string());
    }

    if let Some(cover) = &metadata.cover {
        // ilst keeps no picture types, so a cover read back is never `CoverFront`
        for _ in 0..tag.picture_count() {
            tag.remove_picture(0);
        }
        tag.push_picture(cover_picture(cover));
    }
}

fn cover_picture(cover: &CoverArt) -> Picture {
    Picture::unchecked(cover.data.clone())
        .pic_type(PictureType::CoverFront)
        .mime_type(cover_mime(cover))
        .build()
}

/// Anything that is not PNG is stored as JPEG.
fn cover_mime(cover: &CoverArt) -> MimeType {
    if cover.is_png() {
        MimeType::Png
    } else {
        MimeType::Jpeg
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use tempfile::TempDir;

    use super::*;

    /// A bare MP4 container: `ftyp`, a `moov` holding only `mvhd`, and an
    /// empty `mdat`.
    fn empty_m4a(dir: &TempDir) -> PathBuf {
        let mut mvhd = vec![0u8; 100];
        mvhd[12..16].copy_from_slice(&1000u32.to_be_bytes()); // timescale
        mvhd[20..24].copy_from_slice(&0x0001_0000u32.to_be_bytes()); // rate
        mvhd[24..26].copy_from_slice(&0x0100u16.to_be_bytes()); // volume
        mvhd[96..100].copy_from_slice(&1u32.to_be_bytes()); // next track id

        let mut data = Vec::new();
        data.extend_from_slice(&20u32.to_be_bytes());
        data.extend_from_slice(b"ftypM4A ");
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(b"M4A ");

        data.extend_from_slice(&(8 + 8 + mvhd.len() as u32).to_be_bytes());
        data.extend_from_slice(b"moov");
        data.extend_from_slice(&(8 + mvhd.len() as u32).to_be_bytes());
        data.extend_from_slice(b"mvhd");
        data.extend_from_slice(&mvhd);

        data.extend_from_slice(&8u32.to_be_bytes());
        data.extend_from_slice(b"mdat");

        let path = dir.path().join("song.m4a");
        fs::write(&path, data).unwrap();
        path
    }

    fn cover(mime: &str) -> CoverArt {
        CoverArt {
            mime: mime.into(),
            data: vec![1, 2, 3],
            path: None,
        }
    }

    #[test]
    fn cover_format_inferred_from_mime() {
        assert_eq!(cover_mime(&cover("image/png")), MimeType::Png);
        assert_eq!(cover_mime(&cover("image/jpeg")), MimeType::Jpeg);
        assert_eq!(cover_mime(&cover("image/webp")), MimeType::Jpeg);
    }

    #[test]
    fn fields_map_to_ilst_items() {
        let mut tag = Tag::new(TagType::Mp4Ilst);
        tag.set_genre("Pop".to_string());

        let metadata = TrackMetadata {
            artist: "Artist".into(),
            title: "Title".into(),
            album: "Album".into(),
            year: Some("2020".into()),
            lyrics: Some("Words".into()),
            cover: Some(cover("image/png")),
        };
        apply(&mut tag, &metadata);

        assert_eq!(tag.artist().as_deref(), Some("Artist"));
        assert_eq!(tag.title().as_deref(), Some("Title"));
        assert_eq!(tag.album().as_deref(), Some("Album"));
        assert_eq!(tag.get_string(ItemKey::RecordingDate), Some("2020"));
        assert_eq!(tag.get_string(ItemKey::Lyrics), Some("Words"));
        assert!(tag.genre().is_none());
        assert_eq!(tag.pictures().len(), 1);
        assert_eq!(tag.pictures()[0].mime_type(), Some(&MimeType::Png));
    }

    #[test]
    fn missing_year_is_not_written() {
        let mut tag = Tag::new(TagType::Mp4Ilst);
        apply(&mut tag, &TrackMetadata::default());

        assert!(tag.get_string(ItemKey::RecordingDate).is_none());
        assert!(tag.pictures().is_empty());
    }

    #[test]
    fn tags_are_written_to_file_and_replaced_on_rewrite() {
        let dir = TempDir::new().unwrap();
        let path = empty_m4a(&dir);

        let mut metadata = TrackMetadata {
            artist: "Artist".into(),
            title: "Title".into(),
            album: "Album".into(),
            year: Some("2020".into()),
            lyrics: Some("First words".into()),
            cover: Some(cover("image/png")),
        };
        write(&path, &metadata).unwrap();

        metadata.lyrics = Some("Other words".into());
        write(&path, &metadata).unwrap();

        let tagged_file = Probe::open(&path).unwrap().options(tag_only()).read().unwrap();
        let tag = tagged_file.tag(TagType::Mp4Ilst).unwrap();

        assert_eq!(tag.artist().as_deref(), Some("Artist"));
        assert_eq!(tag.title().as_deref(), Some("Title"));
        assert_eq!(tag.album().as_deref(), Some("Album"));
        assert_eq!(tag.get_string(ItemKey::RecordingDate), Some("2020"));
        assert_eq!(tag.get_string(ItemKey::Lyrics), Some("Other words"));
        assert!(tag.genre().is_none());
        assert_eq!(tag.pictures().len(), 1);
        assert_eq!(tag.pictures()[0].mime_type(), Some(&MimeType::Png));
    }
}
