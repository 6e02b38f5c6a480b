// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Directory name, thumbnail grid layout and decode concurrency
//! - **Window**: Default and minimum window dimensions

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Directory name looked up under the user's picture folder (and the current
/// directory) when no gallery directory is configured.
pub const DEFAULT_GALLERY_DIR_NAME: &str = "gallery";

/// Default longest edge of a grid thumbnail, in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 192;

/// Minimum thumbnail edge.
pub const MIN_THUMBNAIL_SIZE: u32 = 64;

/// Maximum thumbnail edge.
pub const MAX_THUMBNAIL_SIZE: u32 = 512;

/// Default number of thumbnails per grid row.
pub const DEFAULT_GRID_COLUMNS: u32 = 4;

/// Minimum number of thumbnails per grid row.
pub const MIN_GRID_COLUMNS: u32 = 1;

/// Maximum number of thumbnails per grid row.
pub const MAX_GRID_COLUMNS: u32 = 12;

/// Default number of thumbnails decoded at the same time.
pub const DEFAULT_THUMBNAIL_WORKERS: u32 = 4;

/// Minimum concurrent thumbnail decodes.
pub const MIN_THUMBNAIL_WORKERS: u32 = 1;

/// Maximum concurrent thumbnail decodes.
pub const MAX_THUMBNAIL_WORKERS: u32 = 16;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_THUMBNAIL_SIZE > 0);
    assert!(MAX_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);

    assert!(MIN_GRID_COLUMNS > 0);
    assert!(MAX_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);

    assert!(MIN_THUMBNAIL_WORKERS > 0);
    assert!(DEFAULT_THUMBNAIL_WORKERS >= MIN_THUMBNAIL_WORKERS);
    assert!(DEFAULT_THUMBNAIL_WORKERS <= MAX_THUMBNAIL_WORKERS);

    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_defaults_are_valid() {
        assert_eq!(DEFAULT_THUMBNAIL_SIZE, 192);
        assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
        assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
    }

    #[test]
    fn grid_column_defaults_are_valid() {
        assert_eq!(DEFAULT_GRID_COLUMNS, 4);
        assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
        assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
    }
}
