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

//! The files selected for tagging and how far through them we are.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::tags;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemStatus {
    Pending,
    Processing,
    Done,
    Error,
}

impl ItemStatus {
    pub(crate) fn marker(self) -> &'static str {
        match self {
            ItemStatus::Pending => " ",
            ItemStatus::Processing => ">",
            ItemStatus::Done => "+",
            ItemStatus::Error => "!",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct BatchItem {
    pub(crate) path: PathBuf,
    pub(crate) status: ItemStatus,
}

impl BatchItem {
    pub(crate) fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// An ordered list of files worked through one at a time.
#[derive(Debug, Default)]
pub(crate) struct Batch {
    items: Vec<BatchItem>,
    current: usize,
}

impl Batch {
    /// Appends `paths` to the batch, skipping files already in it.
    pub(crate) fn extend(&mut self, paths: impl IntoIterator<Item = PathBuf>) -> usize {
        let before = self.items.len();

        for path in paths {
            if !self.items.iter().any(|item| item.path == path) {
                self.items.push(BatchItem {
                    path,
                    status: ItemStatus::Pending,
                });
            }
        }

        self.items.len() - before
    }

    pub(crate) fn items(&self) -> &[BatchItem] {
        &self.items
    }

    /// Index of the item being worked on, if any are left.
    pub(crate) fn current(&self) -> Option<usize> {
        (self.current < self.items.len()).then_some(self.current)
    }

    pub(crate) fn current_item(&self) -> Option<&BatchItem> {
        self.items.get(self.current)
    }

    pub(crate) fn set_status(&mut self, index: usize, status: ItemStatus) {
        if let Some(item) = self.items.get_mut(index) {
            item.status = status;
        }
    }

    /// Records where an item ended up after being renamed.
    pub(crate) fn set_path(&mut self, index: usize, path: PathBuf) {
        if let Some(item) = self.items.get_mut(index) {
            item.path = path;
        }
    }

    /// Moves on to the next item.
    pub(crate) fn advance(&mut self) {
        if self.current < self.items.len() {
            self.current += 1;
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.current >= self.items.len()
    }

    /// Returns how many items are finished, whatever the outcome, and the
    /// total.
    pub(crate) fn progress(&self) -> (usize, usize) {
        let finished = self
            .items
            .iter()
            .filter(|item| matches!(item.status, ItemStatus::Done | ItemStatus::Error))
            .count();

        (finished, self.items.len())
    }
}

/// Expands `paths` into the files to tag.
///
/// Files are taken as given, so an unsupported one is reported when its turn
/// comes. Directories are walked for supported files, in name order.
pub(crate) fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(walk_supported(path));
        } else if path.is_file() {
            files.push(path.clone());
        }
    }

    files
}

fn walk_supported(dir: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| tags::is_supported(path))
}
