// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is an image gallery with a lightbox viewer, built with the
//! Iced GUI framework.
//!
//! The [`lightbox`] controller holds all navigation state and is independent
//! of the GUI; [`app`] wires it to iced, [`gallery`] builds the image list and
//! [`media`] decodes thumbnails.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod lightbox;
pub mod media;
pub mod ui;
