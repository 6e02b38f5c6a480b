// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller.
//!
//! The controller owns the gallery, the index of the image currently shown
//! and the overlay visibility. It is the only place that mutates them; the
//! view it drives just mirrors the result.
//!
//! `current_index` stays meaningful across close/open cycles: closing the
//! overlay does not reset it, only a thumbnail click or navigation changes it.
//! All operations are no-ops on an empty gallery.

pub mod input;
pub mod view;

pub use input::{Action, ClickTarget, LightboxKey};
pub use view::{LightboxView, OverlayState, Visibility};

use crate::gallery::{Gallery, GalleryImage};

#[derive(Debug, Clone)]
pub struct Lightbox<V> {
    gallery: Gallery,
    current_index: usize,
    visibility: Visibility,
    view: V,
}

impl<V: LightboxView> Lightbox<V> {
    /// Creates a hidden lightbox positioned on the first image.
    pub fn new(gallery: Gallery, view: V) -> Self {
        Self {
            gallery,
            current_index: 0,
            visibility: Visibility::Hidden,
            view,
        }
    }

    /// Shows the image at `index`.
    ///
    /// Out-of-range indices leave the state untouched.
    pub fn open(&mut self, index: usize) {
        if index >= self.gallery.len() {
            tracing::warn!(index, len = self.gallery.len(), "ignoring open of unknown gallery index");
            return;
        }
        self.current_index = index;
        self.render();
        self.visibility = Visibility::Shown;
        self.view.show();
    }

    /// Hides the overlay. Calling it while hidden changes nothing.
    pub fn close(&mut self) {
        self.visibility = Visibility::Hidden;
        self.view.hide();
    }

    /// Advances to the next image, wrapping to the first after the last.
    pub fn navigate_next(&mut self) {
        let len = self.gallery.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
        self.render();
    }

    /// Steps back to the previous image, wrapping to the last before the first.
    pub fn navigate_previous(&mut self) {
        let len = self.gallery.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + len - 1) % len;
        self.render();
    }

    /// Pushes the source of the current image to the view.
    pub fn render(&mut self) {
        if let Some(image) = self.gallery.get(self.current_index) {
            self.view.set_image(image.source());
        }
    }

    /// Runs the operation requested by an input binding.
    pub fn apply(&mut self, action: Action) {
        tracing::debug!(?action, current_index = self.current_index, "lightbox action");
        match action {
            Action::Open(index) => self.open(index),
            Action::Close => self.close(),
            Action::Next => self.navigate_next(),
            Action::Previous => self.navigate_previous(),
        }
    }

    /// Handles a click on one of the bound elements.
    pub fn click(&mut self, target: ClickTarget) {
        if let Some(action) = target.action() {
            self.apply(action);
        }
    }

    /// Handles a keyboard shortcut. Keys do nothing while the overlay is hidden.
    pub fn key(&mut self, key: LightboxKey) {
        if self.visibility.is_shown() {
            self.apply(key.action());
        }
    }
}

impl<V> Lightbox<V> {
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_shown(&self) -> bool {
        self.visibility.is_shown()
    }

    /// Gallery entry at `current_index`, `None` on an empty gallery.
    pub fn current_image(&self) -> Option<&GalleryImage> {
        self.gallery.get(self.current_index)
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
