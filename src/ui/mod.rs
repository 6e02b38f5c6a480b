// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each one
//! takes a borrowed view model and emits [`ClickTarget`](crate::lightbox::ClickTarget)
//! values that the application maps into its own messages.
//!
//! - [`gallery_grid`] - Thumbnail grid and empty state
//! - [`lightbox_overlay`] - Backdrop, full image, arrows, close control
//! - [`styles`] - Button and overlay styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery_grid;
pub mod lightbox_overlay;
pub mod styles;
pub mod theming;
