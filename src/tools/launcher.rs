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

//! Starting the companion executable that ships beside this one.
//!
//! The companion is a terminal application too, so it is run in the
//! foreground on the inherited terminal. Callers hand the terminal over before
//! launching and take it back afterwards.

use std::{
    env,
    path::{Path, PathBuf},
    process::Command,
};

use tracing::{error, info};

use crate::error::Result;

/// Returns where the companion named `name` is expected, beside `current`.
pub fn companion_path(current: &Path, name: &str) -> PathBuf {
    current.with_file_name(format!("{name}{}", env::consts::EXE_SUFFIX))
}

/// Runs the companion executable and waits for it to exit.
///
/// Failures are logged, never surfaced to the user.
pub fn launch_companion(name: &str) {
    if let Err(e) = try_launch(name) {
        error!("Error opening {}: {}", name, e);
    }
}

fn try_launch(name: &str) -> Result<()> {
    let path = companion_path(&env::current_exe()?, name);
    info!("Launching {}", path.display());

    // Shares this console, so no window suppression here
    let status = Command::new(&path).status()?;
    info!("{} exited with {}", name, status);

    Ok(())
}
