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

//! External executables.
//!
//! Downloading and transcoding are delegated to command-line tools. This
//! module finds them before they are needed and creates their processes.
//!
//! # Sub-modules
//!
//! * [`ytdlp`]: Search and download through the download tool.
//! * [`launcher`]: Starting the companion executable.

pub mod launcher;
pub mod ytdlp;

use std::{
    env,
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::Command,
};

use crate::error::{Result, SongError};

pub const YT_DLP_URL: &str = "https://github.com/yt-dlp/yt-dlp/releases";
pub const FFMPEG_URL: &str = "https://ffmpeg.org/download.html";

/// Resolves `program` to an executable path.
///
/// A value containing a path separator must point at an existing file, a bare
/// name is searched for along `PATH`.
///
/// # Errors
///
/// Returns [`SongError::MissingTool`] naming the tool and where to get it.
pub fn locate_tool(program: &str, url: &'static str) -> Result<PathBuf> {
    locate_tool_in(program, url, env::var_os("PATH"))
}

fn locate_tool_in(program: &str, url: &'static str, path_var: Option<OsString>) -> Result<PathBuf> {
    let missing = || SongError::MissingTool {
        tool: program.to_string(),
        url,
    };

    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return if candidate.is_file() {
            Ok(candidate.to_path_buf())
        } else {
            Err(missing())
        };
    }

    let path_var = path_var.ok_or_else(missing)?;
    env::split_paths(&path_var)
        .flat_map(|dir| executable_names(program).map(move |name| dir.join(name)))
        .find(|path| path.is_file())
        .ok_or_else(missing)
}

fn executable_names(program: &str) -> impl Iterator<Item = String> + '_ {
    let with_suffix = (!env::consts::EXE_SUFFIX.is_empty() && !program.ends_with(env::consts::EXE_SUFFIX))
        .then(|| format!("{program}{}", env::consts::EXE_SUFFIX));
    std::iter::once(program.to_string()).chain(with_suffix)
}

/// Creates a command that never opens a console window of its own.
pub(crate) fn command(program: impl AsRef<OsStr>) -> Command {
    #[allow(unused_mut)]
    let mut cmd = Command::new(program);

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }

    cmd
}
