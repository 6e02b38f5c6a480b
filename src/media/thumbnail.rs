// SPDX-License-Identifier: MPL-2.0
//! Thumbnail generation.

use super::ImageData;
use crate::error::{Error, Result};
use image_rs::imageops::FilterType;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

/// Dimensions of `(width, height)` scaled so the longest edge is at most
/// `max_edge`, keeping the aspect ratio. Smaller images are left alone.
#[must_use]
pub fn scaled_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_edge || longest == 0 {
        return (width, height);
    }
    let scale = f64::from(max_edge) / f64::from(longest);
    let scaled = |edge: u32| ((f64::from(edge) * scale).round() as u32).max(1);
    (scaled(width), scaled(height))
}

/// Decodes the image at `path` and downscales it for the grid.
///
/// # Errors
///
/// - [`Error::Io`] if the file cannot be read
/// - [`Error::Image`] if the bytes are not a decodable image
pub fn load_thumbnail(path: &Path, max_edge: u32) -> Result<ImageData> {
    let bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&bytes)?;

    let (width, height) = img.dimensions();
    let (target_width, target_height) = scaled_dimensions(width, height, max_edge);

    let img = if (target_width, target_height) == (width, height) {
        img
    } else {
        img.resize_exact(target_width, target_height, FilterType::Triangle)
    };

    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(target_width, target_height, pixels))
}

/// Runs [`load_thumbnail`] on tokio's blocking pool.
pub async fn load_thumbnail_async(path: PathBuf, max_edge: u32) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_thumbnail(&path, max_edge))
        .await
        .map_err(|e| Error::Io(format!("thumbnail task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([10, 120, 200, 255]))
            .save(&path)
            .expect("failed to write png");
        path
    }

    #[test]
    fn scaled_dimensions_preserves_aspect_ratio() {
        assert_eq!(scaled_dimensions(800, 400, 200), (200, 100));
        assert_eq!(scaled_dimensions(300, 900, 150), (50, 150));
    }

    #[test]
    fn scaled_dimensions_never_upscales() {
        assert_eq!(scaled_dimensions(40, 30, 200), (40, 30));
        assert_eq!(scaled_dimensions(0, 0, 200), (0, 0));
    }

    #[test]
    fn scaled_dimensions_keeps_thin_images_visible() {
        assert_eq!(scaled_dimensions(10_000, 1, 100), (100, 1));
    }

    #[test]
    fn load_thumbnail_downscales_large_image() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "wide.png", 64, 32);

        let thumb = load_thumbnail(&path, 16).expect("thumbnail should load");

        assert_eq!((thumb.width, thumb.height), (16, 8));
    }

    #[test]
    fn load_thumbnail_keeps_small_image_size() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "small.png", 4, 2);

        let thumb = load_thumbnail(&path, 64).expect("thumbnail should load");

        assert_eq!((thumb.width, thumb.height), (4, 2));
    }

    #[test]
    fn load_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_thumbnail(&temp_dir.path().join("missing.png"), 64);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn load_invalid_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.jpg");
        fs::write(&path, b"not really a jpeg").expect("failed to write file");

        let result = load_thumbnail(&path, 64);

        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[tokio::test]
    async fn async_loader_matches_blocking_loader() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_png(temp_dir.path(), "async.png", 20, 40);

        let thumb = load_thumbnail_async(path, 10)
            .await
            .expect("thumbnail should load");

        assert_eq!((thumb.width, thumb.height), (5, 10));
    }
}
