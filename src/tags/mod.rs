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

//! Embedding metadata into audio files.
//!
//! Two container formats are supported, each with its own writer, selected by
//! file extension:
//!
//! * **`.mp3`**: ID3v2 frames written with the `id3` crate.
//! * **`.m4a`**: iTunes-style `ilst` atoms written with `lofty`.
//!
//! Both writers replace existing cover art and lyrics, and always leave the
//! genre empty. After tagging, [`rename_to_metadata`] gives the file its
//! `"{artist} - {title}"` name.

mod m4a;
mod mp3;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    error::{Result, SongError},
    model::TrackMetadata,
    util::sanitize::{collapse_whitespace, sanitize_filename},
};

/// The closed set of tag writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagWriter {
    Id3,
    Mp4,
}

impl TagWriter {
    /// Picks the writer for `path` from its extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`SongError::UnsupportedFormat`] for any other extension.
    pub fn for_path(path: &Path) -> Result<Self> {
        let extension = lowercase_extension(path);

        match extension.as_str() {
            ".mp3" => Ok(Self::Id3),
            ".m4a" => Ok(Self::Mp4),
            _ => Err(SongError::UnsupportedFormat(extension)),
        }
    }

    /// Writes `metadata` into the file at `path`.
    pub fn write(self, path: &Path, metadata: &TrackMetadata) -> Result<()> {
        info!(writer = ?self, "Embedding metadata into {}", path.display());

        match self {
            Self::Id3 => mp3::write(path, metadata),
            Self::Mp4 => m4a::write(path, metadata),
        }
    }
}

/// Selects the writer for `path` and embeds `metadata`.
pub fn embed_metadata(path: &Path, metadata: &TrackMetadata) -> Result<()> {
    TagWriter::for_path(path)?.write(path, metadata)
}

/// Returns whether a file is one of the supported audio formats.
pub fn is_supported(path: &Path) -> bool {
    TagWriter::for_path(path).is_ok()
}

/// Renames `path` to `"{artist} - {title}{ext}"` in the same directory.
///
/// Reserved characters are removed from both parts and whitespace runs are
/// collapsed. The tags already written stay in place if the rename fails.
/// Another file already holding the target name is never replaced.
///
/// # Errors
///
/// Returns [`SongError::Rename`] with both paths when the rename fails,
/// including when the target name is taken.
pub fn rename_to_metadata(path: &Path, artist: &str, title: &str) -> Result<PathBuf> {
    let target = path.with_file_name(metadata_filename(path, artist, title));

    if target == path {
        return Ok(path.to_path_buf());
    }

    let rename_error = |source: io::Error| SongError::Rename {
        from: path.to_path_buf(),
        to: target.clone(),
        source,
    };

    // A target differing only in case may be this very file
    if target.exists() && !is_same_file(path, &target) {
        return Err(rename_error(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "a file with that name already exists",
        )));
    }

    fs::rename(path, &target).map_err(rename_error)?;

    Ok(target)
}

#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> bool {
    matches!((fs::canonicalize(a), fs::canonicalize(b)), (Ok(a), Ok(b)) if a == b)
}

fn metadata_filename(path: &Path, artist: &str, title: &str) -> String {
    let name = format!(
        "{} - {}{}",
        sanitize_filename(artist).trim(),
        sanitize_filename(title).trim(),
        lowercase_extension(path)
    );

    collapse_whitespace(&name)
}

fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn writer_selection() {
        assert_eq!(TagWriter::for_path(Path::new("a.mp3")).unwrap(), TagWriter::Id3);
        assert_eq!(TagWriter::for_path(Path::new("a.MP3")).unwrap(), TagWriter::Id3);
        assert_eq!(TagWriter::for_path(Path::new("a.m4a")).unwrap(), TagWriter::Mp4);
    }

    #[test]
    fn other_extensions_are_unsupported() {
        for name in ["a.flac", "a.wav", "noext"] {
            match TagWriter::for_path(Path::new(name)) {
                Err(SongError::UnsupportedFormat(_)) => {}
                other => panic!("unexpected {other:?} for {name}"),
            }
        }
    }

    #[test]
    fn unsupported_file_is_left_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("song.ogg");
        fs::write(&path, b"OggS").unwrap();

        let result = embed_metadata(&path, &TrackMetadata::default());

        assert!(matches!(result, Err(SongError::UnsupportedFormat(ext)) if ext == ".ogg"));
        assert_eq!(fs::read(&path).unwrap(), b"OggS");
    }

    #[test]
    fn filename_from_metadata() {
        assert_eq!(
            metadata_filename(Path::new("x.MP3"), " AC/DC ", "Back   in: Black"),
            "ACDC - Back in Black.mp3"
        );
    }

    #[test]
    fn renames_beside_original() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("download (1).mp3");
        File::create(&path).unwrap();

        let renamed = rename_to_metadata(&path, "Artist", "Title").unwrap();

        assert_eq!(renamed, dir.path().join("Artist - Title.mp3"));
        assert!(renamed.exists());
        assert!(!path.exists());
    }

    #[test]
    fn already_named_file_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Artist - Title.m4a");
        File::create(&path).unwrap();

        assert_eq!(rename_to_metadata(&path, "Artist", "Title").unwrap(), path);
    }

    #[test]
    fn failed_rename_reports_both_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.mp3");

        match rename_to_metadata(&path, "Artist", "Title") {
            Err(SongError::Rename { from, to, .. }) => {
                assert_eq!(from, path);
                assert_eq!(to, dir.path().join("Artist - Title.mp3"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn existing_target_is_never_replaced() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("Artist - Title.mp3");
        let path = dir.path().join("Title (1).mp3");
        fs::write(&existing, b"first").unwrap();
        fs::write(&path, b"second").unwrap();

        match rename_to_metadata(&path, "Artist", "Title") {
            Err(SongError::Rename { from, to, source }) => {
                assert_eq!(from, path);
                assert_eq!(to, existing);
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected {other:?}"),
        }

        assert_eq!(fs::read(&existing).unwrap(), b"first");
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }
}
