// SPDX-License-Identifier: MPL-2.0
//! Message handling for [`App`].

use super::{App, Message, ScanStatus};
use crate::error::Error;
use crate::gallery::Gallery;
use crate::lightbox::{Lightbox, OverlayState};
use crate::media::{self, ImageData};
use crate::ui::gallery_grid::ThumbnailState;
use iced::Task;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GalleryScanned(result) => self.handle_gallery_scanned(result),
            Message::ThumbnailLoaded { index, result } => {
                self.handle_thumbnail_loaded(index, result)
            }
            Message::Clicked(target) => {
                self.lightbox.click(target);
                Task::none()
            }
            Message::KeyPressed(key) => {
                self.lightbox.key(key);
                Task::none()
            }
        }
    }

    fn handle_gallery_scanned(&mut self, result: Result<Gallery, Error>) -> Task<Message> {
        let gallery = match result {
            Ok(gallery) => {
                self.scan_status = ScanStatus::Done;
                gallery
            }
            Err(err) => {
                tracing::warn!(directory = %self.gallery_dir.display(), %err, "gallery scan failed");
                self.scan_status = ScanStatus::Failed(err.to_string());
                Gallery::new()
            }
        };

        self.thumbnails = vec![ThumbnailState::Loading; gallery.len()];
        self.pending_thumbnails = (0..gallery.len()).collect();
        self.thumbnails_in_flight = 0;
        self.lightbox = Lightbox::new(gallery, OverlayState::default());

        let workers = self.thumbnail_workers;
        self.start_thumbnail_decodes(workers)
    }

    /// Starts up to `count` queued decodes without exceeding the worker cap.
    fn start_thumbnail_decodes(&mut self, count: usize) -> Task<Message> {
        let size = self.thumbnail_size;
        let mut tasks = Vec::new();

        while tasks.len() < count && self.thumbnails_in_flight < self.thumbnail_workers {
            let Some(index) = self.pending_thumbnails.pop_front() else {
                break;
            };
            let Some(image) = self.lightbox.gallery().get(index) else {
                continue;
            };
            self.thumbnails_in_flight += 1;
            tasks.push(Task::perform(
                media::load_thumbnail_async(image.source().to_path_buf(), size),
                move |result| Message::ThumbnailLoaded { index, result },
            ));
        }

        Task::batch(tasks)
    }

    fn handle_thumbnail_loaded(
        &mut self,
        index: usize,
        result: Result<ImageData, Error>,
    ) -> Task<Message> {
        let Some(slot) = self.thumbnails.get_mut(index) else {
            tracing::debug!(index, "dropping thumbnail for unknown gallery index");
            return Task::none();
        };
        *slot = match result {
            Ok(data) => ThumbnailState::Ready(data),
            Err(err) => {
                let source = self.lightbox.gallery().get(index).map(|image| image.source());
                tracing::warn!(index, ?source, %err, "thumbnail unavailable");
                ThumbnailState::Failed
            }
        };

        self.thumbnails_in_flight = self.thumbnails_in_flight.saturating_sub(1);
        self.start_thumbnail_decodes(1)
    }
}
