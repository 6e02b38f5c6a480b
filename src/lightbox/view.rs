// SPDX-License-Identifier: MPL-2.0
//! Display seam between the lightbox controller and whatever draws it.

use std::path::{Path, PathBuf};

/// Whether the overlay is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        matches!(self, Visibility::Shown)
    }
}

/// Surface the controller drives.
///
/// Implementations only record what to display; they never call back into
/// the controller.
pub trait LightboxView {
    /// Makes the overlay visible.
    fn show(&mut self);
    /// Hides the overlay.
    fn hide(&mut self);
    /// Replaces the image displayed in the overlay.
    fn set_image(&mut self, source: &Path);
}

/// View state read by the iced `view` function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayState {
    visibility: Visibility,
    image: Option<PathBuf>,
}

impl OverlayState {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_shown(&self) -> bool {
        self.visibility.is_shown()
    }

    /// Source of the image currently in the overlay's image slot.
    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }
}

impl LightboxView for OverlayState {
    fn show(&mut self) {
        self.visibility = Visibility::Shown;
    }

    fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    fn set_image(&mut self, source: &Path) {
        self.image = Some(source.to_path_buf());
    }
}
