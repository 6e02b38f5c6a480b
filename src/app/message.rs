// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::Gallery;
use crate::lightbox::{ClickTarget, LightboxKey};
use crate::media::ImageData;
use std::path::PathBuf;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the background directory scan.
    GalleryScanned(Result<Gallery, Error>),
    /// A thumbnail finished decoding (or failed to).
    ThumbnailLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    Clicked(ClickTarget),
    KeyPressed(LightboxKey),
}

/// Runtime flags passed in from the launcher, typically parsed from CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Gallery directory given on the command line.
    pub gallery_dir: Option<PathBuf>,
    /// Optional config directory override (from `--config-dir`).
    pub config_dir: Option<String>,
}
