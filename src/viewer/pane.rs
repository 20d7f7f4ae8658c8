// SPDX-License-Identifier: MPL-2.0
//! Image pane: renders the active image at the current zoom.

use super::component::Message;
use super::zoom::ZoomPercent;
use crate::media::ImageData;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Image, Scrollable};
use iced::{ContentFit, Element, Length};

/// Renders the image, fitted to the available space at default zoom and
/// scrollable in both axes once zoomed in.
pub fn view(image: &ImageData, zoom: ZoomPercent) -> Element<'_, Message> {
    if zoom.is_default() {
        return Image::new(image.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let factor = zoom.as_factor();
    #[allow(clippy::cast_precision_loss)]
    let width = (image.width as f32 * factor).max(1.0);
    #[allow(clippy::cast_precision_loss)]
    let height = (image.height as f32 * factor).max(1.0);

    Scrollable::new(
        Image::new(image.handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height)),
    )
    .direction(Direction::Both {
        vertical: Scrollbar::hidden(),
        horizontal: Scrollbar::hidden(),
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
