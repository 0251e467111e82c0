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

//! Application configuration.
//!
//! This module manages the configuration file shared by both tools. A missing
//! or unreadable file silently falls back to the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "songgrab";

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,

    /// Program name or path of the download tool.
    pub yt_dlp: String,
    /// Directory (or binary) handed to the download tool for transcoding.
    pub ffmpeg_location: Option<String>,
    /// Where downloads land, the working directory when unset.
    pub download_dir: Option<String>,

    pub search_limit: u32,
    pub search_suffix: String,

    pub metadata_api: String,
    pub lyrics_api: String,

    pub scratch_dir: String,
    pub companion: String,

    pub workers: usize,
    pub task_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            yt_dlp: "yt-dlp".into(),
            ffmpeg_location: None,
            download_dir: None,
            search_limit: 10,
            search_suffix: " lyrics".into(),
            metadata_api: "https://api.deezer.com".into(),
            lyrics_api: "https://api.lyrics.ovh/v1".into(),
            scratch_dir: "temp_metadata".into(),
            companion: "songtag".into(),
            workers: 2,
            task_capacity: 16,
        }
    }
}

impl AppConfig {
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn load_config() -> AppConfig {
    match confy::load(CONFIG_NAME, None) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Using default configuration: {}", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: AppConfig = serde_json::from_str(r#"{ "search_limit": 5 }"#).unwrap();

        assert_eq!(cfg.search_limit, 5);
        assert_eq!(cfg.yt_dlp, "yt-dlp");
        assert_eq!(cfg.search_suffix, " lyrics");
    }

    #[test]
    fn download_dir_defaults_to_working_directory() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.download_dir(), PathBuf::from("."));
    }
}
