// SPDX-License-Identifier: MPL-2.0
//! Application root state and the iced event loop.
//!
//! `App` owns the lightbox controller, the per-image thumbnail states and the
//! display preferences read from the configuration. Slow work (directory scan,
//! thumbnail decoding) runs as tasks whose results come back as messages, so
//! the controller is only ever touched from `update`.
//!
//! Thumbnails are decoded through a queue: at most `thumbnail_workers` decodes
//! run at once, and each finished one starts the next queued index.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, SortOrder, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT,
    WINDOW_DEFAULT_WIDTH,
};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::lightbox::{Lightbox, OverlayState};
use crate::ui::gallery_grid::ThumbnailState;
use iced::{window, Subscription, Task, Theme};
use std::collections::VecDeque;
use std::fmt;
use std::path::PathBuf;

/// Progress of the startup directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStatus {
    Scanning,
    Done,
    Failed(String),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    lightbox: Lightbox<OverlayState>,
    thumbnails: Vec<ThumbnailState>,
    gallery_dir: PathBuf,
    scan_status: ScanStatus,
    /// Resolved once in `new`; `System` mode queries the desktop.
    theme: Theme,
    thumbnail_size: u32,
    columns: u32,
    /// Gallery indices whose thumbnail decode has not started yet.
    pending_thumbnails: VecDeque<usize>,
    thumbnails_in_flight: usize,
    thumbnail_workers: usize,
    /// i18n key of a warning raised while loading the configuration.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery_dir", &self.gallery_dir)
            .field("scan_status", &self.scan_status)
            .field("images", &self.lightbox.gallery().len())
            .field("lightbox_shown", &self.lightbox.is_shown())
            .field("thumbnails_in_flight", &self.thumbnails_in_flight)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and starts scanning the gallery directory.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_deref().map(PathBuf::from));
        let i18n = I18n::new(flags.lang.clone(), &config);

        let gallery_dir = paths::resolve_gallery_dir(
            flags.gallery_dir.as_deref(),
            config.gallery.directory.as_deref(),
        );
        let sort_order = config.gallery.sort_order.unwrap_or_default();

        let app = App {
            i18n,
            lightbox: Lightbox::new(Gallery::new(), OverlayState::default()),
            thumbnails: Vec::new(),
            gallery_dir,
            scan_status: ScanStatus::Scanning,
            theme: config.general.theme_mode.resolve(),
            thumbnail_size: config.gallery.effective_thumbnail_size(),
            columns: config.gallery.effective_columns(),
            pending_thumbnails: VecDeque::new(),
            thumbnails_in_flight: 0,
            thumbnail_workers: config.gallery.effective_thumbnail_workers() as usize,
            config_warning,
        };

        let task = app.scan_gallery(sort_order);
        (app, task)
    }

    fn scan_gallery(&self, sort_order: SortOrder) -> Task<Message> {
        tracing::info!(directory = %self.gallery_dir.display(), "scanning gallery");
        Task::perform(
            Gallery::scan_directory_async(self.gallery_dir.clone(), sort_order),
            Message::GalleryScanned,
        )
    }

    fn title(&self) -> String {
        match self.lightbox.current_image() {
            Some(image) if self.lightbox.is_shown() => {
                let name = image.file_name();
                self.i18n
                    .tr_with_args("app-title-with-image", &[("name", name.as_str())])
            }
            _ => self.i18n.tr("app-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::keyboard_shortcuts()
    }
}
