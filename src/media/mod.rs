// SPDX-License-Identifier: MPL-2.0
//! Image decoding for the gallery grid.
//!
//! Full-size images are handed to iced by path and decoded by its renderer;
//! only thumbnails are decoded here, off the UI thread.

mod thumbnail;

pub use thumbnail::{load_thumbnail, load_thumbnail_async, scaled_dimensions};

use iced::widget::image;

/// Decoded RGBA image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}
