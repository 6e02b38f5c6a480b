// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The grid is always drawn; the lightbox overlay is stacked above it while
//! the controller reports it as shown.

use super::{App, Message, ScanStatus};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::{gallery_grid, lightbox_overlay};
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match &self.scan_status {
            ScanStatus::Scanning => centered_text(self.i18n.tr("gallery-loading")),
            ScanStatus::Failed(error) => Column::new()
                .push(centered_text(
                    self.i18n
                        .tr_with_args("gallery-scan-error", &[("error", error.as_str())]),
                ))
                .push(self.grid())
                .into(),
            ScanStatus::Done => self.grid(),
        };

        let mut page = Column::new().width(Length::Fill).height(Length::Fill);
        if let Some(key) = &self.config_warning {
            page = page.push(
                Container::new(
                    Text::new(self.i18n.tr(key))
                        .size(typography::CAPTION)
                        .color(palette::ERROR_500),
                )
                .width(Length::Fill)
                .padding(spacing::XS),
            );
        }
        page = page.push(body);

        let mut stack = Stack::new().push(page);
        let current = self.lightbox.current_image();
        if let Some(image) = current.filter(|_| self.lightbox.view().is_shown()) {
            let overlay = lightbox_overlay::view(
                lightbox_overlay::ViewContext { i18n: &self.i18n },
                lightbox_overlay::ViewModel {
                    image,
                    total_count: self.lightbox.gallery().len(),
                },
            );
            stack = stack.push(overlay.map(Message::Clicked));
        }

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn grid(&self) -> Element<'_, Message> {
        gallery_grid::view(
            gallery_grid::ViewContext {
                i18n: &self.i18n,
                gallery_dir: &self.gallery_dir,
            },
            gallery_grid::ViewModel {
                gallery: self.lightbox.gallery(),
                thumbnails: &self.thumbnails,
                thumbnail_size: self.thumbnail_size,
                columns: self.columns,
            },
        )
        .map(Message::Clicked)
    }
}

fn centered_text<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .into()
}
