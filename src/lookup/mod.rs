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

//! Remote metadata, lyrics and cover art lookups.
//!
//! All requests are blocking and run on a task worker. There are no retries
//! and no timeouts beyond what the HTTP stack applies itself.
//!
//! # Sub-modules
//!
//! * [`deezer`]: Track search returning canonical names, album, year and
//!   cover art location.
//! * [`lyrics`]: Plain lyrics keyed by artist and title.
//! * [`cover`]: Downloading cover art into a scratch directory.

pub mod cover;
pub mod deezer;
pub mod lyrics;

use crate::config::AppConfig;

pub use deezer::LookupMatch;

/// A shared HTTP agent plus the API endpoints it talks to.
#[derive(Clone)]
pub struct LookupClient {
    agent: ureq::Agent,
    metadata_api: String,
    lyrics_api: String,
}

impl LookupClient {
    pub fn new(config: &AppConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("songgrab/", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            agent,
            metadata_api: config.metadata_api.trim_end_matches('/').to_string(),
            lyrics_api: config.lyrics_api.trim_end_matches('/').to_string(),
        }
    }
}
