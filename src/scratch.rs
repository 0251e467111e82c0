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

//! Scoped scratch space for transient cover images.
//!
//! Each tagging operation creates its own [`ScratchDir`] and passes it
//! explicitly to whatever needs to stage files. The directory and everything
//! in it is removed when the handle is dropped.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use tracing::debug;

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Creates a fresh scratch directory under `root`.
    ///
    /// `root` is created if needed, and stale images left directly in it by an
    /// earlier run are removed first.
    pub fn create(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref();
        fs::create_dir_all(root)?;
        clear_old_covers(root);

        let dir = tempfile::Builder::new().prefix("cover-").tempdir_in(root)?;
        debug!("Created scratch directory {}", dir.path().display());

        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn clear_old_covers(root: &Path) {
    let Ok(entries) = fs::read_dir(root) else {
        return;
    };

    for path in entries.filter_map(|e| e.ok()).map(|e| e.path()) {
        if path.is_file() && is_image(&path) {
            // Best effort, a file held open elsewhere is simply left behind
            let _ = fs::remove_file(&path);
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    #[test]
    fn removed_on_drop() {
        let root = TempDir::new().unwrap();
        let scratch = ScratchDir::create(root.path()).unwrap();
        let path = scratch.path().to_path_buf();
        File::create(scratch.join("cover.jpg")).unwrap();

        assert!(path.is_dir());
        drop(scratch);
        assert!(!path.exists());
    }

    #[test]
    fn clears_stale_images_only() {
        let root = TempDir::new().unwrap();
        File::create(root.path().join("old.PNG")).unwrap();
        File::create(root.path().join("old.webp")).unwrap();
        File::create(root.path().join("notes.txt")).unwrap();

        let _scratch = ScratchDir::create(root.path()).unwrap();

        assert!(!root.path().join("old.PNG").exists());
        assert!(!root.path().join("old.webp").exists());
        assert!(root.path().join("notes.txt").exists());
    }

    #[test]
    fn handles_are_independent() {
        let root = TempDir::new().unwrap();
        let a = ScratchDir::create(root.path()).unwrap();
        let b = ScratchDir::create(root.path()).unwrap();

        assert_ne!(a.path(), b.path());
    }
}
