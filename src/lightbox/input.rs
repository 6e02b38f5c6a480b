// SPDX-License-Identifier: MPL-2.0
//! Click and key bindings for the lightbox.
//!
//! Each interactive element maps to at most one controller operation. Clicks
//! on elements inside the overlay are scoped: they are consumed by the
//! element and never reach the background, so only a click on the backdrop
//! itself dismisses the overlay.

/// Element that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Grid thumbnail bound to the gallery position it displays.
    Thumbnail(usize),
    /// Close control in the overlay corner.
    CloseControl,
    /// Overlay backdrop around the image and controls.
    Background,
    /// The displayed image itself.
    Image,
    /// Left navigation arrow.
    PreviousArrow,
    /// Right navigation arrow.
    NextArrow,
}

impl ClickTarget {
    /// Operation this click triggers, if any.
    pub fn action(self) -> Option<Action> {
        match self {
            ClickTarget::Thumbnail(index) => Some(Action::Open(index)),
            ClickTarget::CloseControl | ClickTarget::Background => Some(Action::Close),
            ClickTarget::Image => None,
            ClickTarget::PreviousArrow => Some(Action::Previous),
            ClickTarget::NextArrow => Some(Action::Next),
        }
    }
}

/// Keys the lightbox reacts to while shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    pub fn action(self) -> Action {
        match self {
            LightboxKey::Escape => Action::Close,
            LightboxKey::ArrowLeft => Action::Previous,
            LightboxKey::ArrowRight => Action::Next,
        }
    }
}

/// Controller operation requested by an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open(usize),
    Close,
    Previous,
    Next,
}
