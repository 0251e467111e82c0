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

//! Diagnostic logging.
//!
//! The terminal belongs to the user interface, so log output goes to a file
//! under the platform cache directory instead. The filter defaults to `info`
//! and can be overridden with the `SONGGRAB_LOG` environment variable, using
//! the usual `tracing` directive syntax.

use std::{
    env,
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SONGGRAB_LOG";

/// Returns the log file used by the binary called `name`.
pub fn log_path(name: &str) -> PathBuf {
    let dir = dirs::cache_dir()
        .map(|dir| dir.join("songgrab"))
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .or_else(|| env::current_dir().ok())
        .unwrap_or_default();

    dir.join(format!("{name}.log"))
}

/// Installs the global subscriber for the binary called `name`.
///
/// Logging is optional, if the file cannot be opened the application runs
/// without it.
pub fn init_logging(name: &str) {
    let path = log_path(name);
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
