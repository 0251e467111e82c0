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

//! Collision-free file names.
//!
//! The existence check and the eventual write are not atomic, two concurrent
//! downloads of the same title may still race for one name.

use std::{path::Path, sync::LazyLock};

use regex::Regex;

static COUNTER_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\d+\)$").unwrap());

/// Returns a file name that does not exist in the current directory.
pub fn unique_filename(name: &str) -> String {
    unique_filename_in(Path::new("."), name)
}

/// Returns a file name that does not exist in `dir`.
///
/// A name that is free is returned unchanged. Otherwise any trailing `(k)`
/// counter is dropped from the stem and ` (n)` is appended before the
/// extension, counting up from 1 until a free name is found.
pub fn unique_filename_in(dir: &Path, name: &str) -> String {
    if !dir.join(name).exists() {
        return name.to_string();
    }

    let (stem, extension) = split_extension(name);
    let base = COUNTER_SUFFIX.replace(stem, "");
    let base = base.trim();

    (1u64..)
        .map(|n| format!("{base} ({n}){extension}"))
        .find(|candidate| !dir.join(candidate).exists())
        .unwrap_or_else(|| name.to_string())
}

/// Splits `name` into a stem and an extension that keeps its leading dot.
///
/// A leading dot alone does not start an extension, so `.hidden` has none.
pub(crate) fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 && !name[..idx].ends_with(['/', '\\']) => name.split_at(idx),
        _ => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use tempfile::TempDir;

    use super::*;

    fn touch(dir: &TempDir, name: &str) {
        File::create(dir.path().join(name)).unwrap();
    }

    #[test]
    fn free_name_is_unchanged() {
        let dir = TempDir::new().unwrap();
        assert_eq!(unique_filename_in(dir.path(), "track.mp3"), "track.mp3");
    }

    #[test]
    fn first_collision_gets_counter_one() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "track.mp3");

        assert_eq!(unique_filename_in(dir.path(), "track.mp3"), "track (1).mp3");
    }

    #[test]
    fn scenario_two_existing_files() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "track.mp3");
        touch(&dir, "track (1).mp3");

        assert_eq!(unique_filename_in(dir.path(), "track.mp3"), "track (2).mp3");
    }

    #[test]
    fn sequential_collisions_resolve_to_next_counter() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "song.mp3");
        for k in 1..=7 {
            touch(&dir, &format!("song ({k}).mp3"));
        }

        assert_eq!(unique_filename_in(dir.path(), "song.mp3"), "song (8).mp3");
    }

    #[test]
    fn existing_counter_is_replaced_not_stacked() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "song (1).mp3");

        assert_eq!(unique_filename_in(dir.path(), "song (1).mp3"), "song (2).mp3");
    }

    #[test]
    fn names_without_extension() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "notes");

        assert_eq!(unique_filename_in(dir.path(), "notes"), "notes (1)");
    }

    #[test]
    fn extension_split() {
        assert_eq!(split_extension("track.mp3"), ("track", ".mp3"));
        assert_eq!(split_extension("a.b.m4a"), ("a.b", ".m4a"));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
        assert_eq!(split_extension("plain"), ("plain", ""));
    }
}
