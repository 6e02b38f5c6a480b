// SPDX-License-Identifier: MPL-2.0
//! Gallery model: the ordered, read-only list of images shown in the grid.
//!
//! A gallery is built once, either by scanning a directory for supported
//! image formats or from an explicit list of paths, and never changes after
//! that. Every image knows its display position, which is also the index the
//! lightbox uses to address it.

use crate::config::SortOrder;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// File extensions accepted into the gallery (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// One gallery entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    source: PathBuf,
    position: usize,
}

impl GalleryImage {
    /// Path of the full-size image.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// 0-based position in the gallery.
    pub fn position(&self) -> usize {
        self.position
    }

    /// File name for captions, lossily converted.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Ordered collection of gallery images.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<GalleryImage>,
}

impl Gallery {
    /// Creates an empty gallery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a gallery from paths, keeping their order.
    pub fn from_sources<I, P>(sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let images = sources
            .into_iter()
            .enumerate()
            .map(|(position, source)| GalleryImage {
                source: source.into(),
                position,
            })
            .collect();
        Self { images }
    }

    /// Scans `directory` (non-recursively) for supported images and sorts them.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                files.push(path);
            }
        }

        sort_image_files(&mut files, sort_order);

        tracing::info!(
            directory = %directory.display(),
            count = files.len(),
            ?sort_order,
            "scanned gallery directory"
        );

        Ok(Self::from_sources(files))
    }

    /// Runs [`Gallery::scan_directory`] on tokio's blocking pool.
    pub async fn scan_directory_async(directory: PathBuf, sort_order: SortOrder) -> Result<Self> {
        tokio::task::spawn_blocking(move || Self::scan_directory(&directory, sort_order))
            .await
            .map_err(|e| Error::Io(format!("gallery scan task failed: {e}")))?
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the gallery holds no image.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&GalleryImage> {
        self.images.get(index)
    }

    /// Iterates images in display order.
    pub fn iter(&self) -> impl Iterator<Item = &GalleryImage> {
        self.images.iter()
    }

    /// Iterates image paths in display order.
    pub fn sources(&self) -> impl Iterator<Item = &Path> {
        self.images.iter().map(GalleryImage::source)
    }
}

/// Checks if a file has a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

fn sort_image_files(files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_keeps_only_supported_extensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.jpeg");
        create_test_file(temp_dir.path(), "c.png");
        create_test_file(temp_dir.path(), "d.gif");
        create_test_file(temp_dir.path(), "e.webp");
        create_test_file(temp_dir.path(), "notes.txt");
        create_test_file(temp_dir.path(), "no_extension");

        let gallery = Gallery::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(gallery.len(), 4);
    }

    #[test]
    fn scan_directory_matches_extensions_case_insensitively() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "upper.JPG");
        create_test_file(temp_dir.path(), "mixed.PnG");

        let gallery = Gallery::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(gallery.len(), 2);
    }

    #[test]
    fn scan_directory_sorts_alphabetically_and_assigns_positions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img_c = create_test_file(temp_dir.path(), "c.jpg");
        let img_a = create_test_file(temp_dir.path(), "a.jpg");
        let img_b = create_test_file(temp_dir.path(), "b.jpg");

        let gallery = Gallery::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        let sources: Vec<&Path> = gallery.sources().collect();
        assert_eq!(sources, vec![img_a.as_path(), img_b.as_path(), img_c.as_path()]);
        for (expected, image) in gallery.iter().enumerate() {
            assert_eq!(image.position(), expected);
        }
    }

    #[test]
    fn scan_directory_skips_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("nested.jpg")).expect("failed to create dir");
        create_test_file(temp_dir.path(), "real.jpg");

        let gallery = Gallery::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.get(0).map(GalleryImage::file_name).as_deref(), Some("real.jpg"));
    }

    #[test]
    fn scan_directory_handles_empty_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let gallery = Gallery::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("failed to scan directory");

        assert!(gallery.is_empty());
        assert!(gallery.get(0).is_none());
    }

    #[test]
    fn scan_missing_directory_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does-not-exist");

        let result = Gallery::scan_directory(&missing, SortOrder::Alphabetical);

        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn scan_directory_async_matches_blocking_scan() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "b.png");
        create_test_file(temp_dir.path(), "a.gif");

        let gallery =
            Gallery::scan_directory_async(temp_dir.path().to_path_buf(), SortOrder::Alphabetical)
                .await
                .expect("failed to scan directory");

        assert_eq!(gallery.get(0).map(GalleryImage::file_name).as_deref(), Some("a.gif"));
        assert_eq!(gallery.len(), 2);
    }

    #[test]
    fn from_sources_preserves_given_order() {
        let gallery = Gallery::from_sources(["z.png", "a.png", "m.png"]);

        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.get(0).map(GalleryImage::source), Some(Path::new("z.png")));
        assert_eq!(gallery.get(2).map(GalleryImage::position), Some(2));
    }

    #[test]
    fn is_supported_image_rejects_other_formats() {
        assert!(is_supported_image(Path::new("photo.jpeg")));
        assert!(!is_supported_image(Path::new("photo.tiff")));
        assert!(!is_supported_image(Path::new("archive.jpg.zip")));
        assert!(!is_supported_image(Path::new("jpg")));
    }
}
