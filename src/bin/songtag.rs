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

//! Entry point of the song tagger.
//!
//! Every argument is a file or directory to tag.

use std::{env, path::PathBuf};

use anyhow::Result;

fn main() -> Result<()> {
    songgrab::logging::init_logging("songtag");

    let paths: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();

    songgrab::tagger::run(paths)
}
