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

//! Cover art download.

use std::{fs, io::Read};

use tracing::info;

use crate::{
    error::Result,
    lookup::LookupClient,
    model::CoverArt,
    scratch::ScratchDir,
    util::sanitize::sanitize_filename,
};

impl LookupClient {
    /// Downloads the image at `url` into `scratch`.
    ///
    /// The staged file is always named `"{artist} - {title}.jpg"`, whatever
    /// the actual encoding; the returned MIME type tells the real one.
    pub fn download_cover(
        &self,
        url: &str,
        artist: &str,
        title: &str,
        scratch: &ScratchDir,
    ) -> Result<CoverArt> {
        info!("Downloading cover {}", url);

        let response = self.agent.get(url).call()?;
        let (extension, mime) = image_type(response.content_type());

        let mut data = Vec::new();
        response.into_reader().read_to_end(&mut data)?;

        let staged = scratch.join(format!("temp_cover.{extension}"));
        fs::write(&staged, &data)?;

        let path = scratch.join(format!(
            "{} - {}.jpg",
            sanitize_filename(artist),
            sanitize_filename(title)
        ));
        if path != staged {
            if path.exists() {
                fs::remove_file(&path)?;
            }
            fs::rename(&staged, &path)?;
        }

        Ok(CoverArt {
            mime: mime.to_string(),
            data,
            path: Some(path),
        })
    }
}

/// Maps a `Content-Type` to a file extension and MIME type, JPEG unless the
/// server says otherwise.
pub fn image_type(content_type: &str) -> (&'static str, &'static str) {
    if content_type.contains("png") {
        ("png", "image/png")
    } else if content_type.contains("webp") {
        ("webp", "image/webp")
    } else {
        ("jpg", "image/jpeg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types() {
        assert_eq!(image_type("image/png"), ("png", "image/png"));
        assert_eq!(image_type("image/webp"), ("webp", "image/webp"));
        assert_eq!(image_type("image/jpeg"), ("jpg", "image/jpeg"));
        assert_eq!(image_type(""), ("jpg", "image/jpeg"));
    }
}
