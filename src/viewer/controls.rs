// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: navigation, counter, zoom, and the close button.

use super::component::Message;
use super::zoom::ZoomPercent;
use crate::bridge::Snapshot;
use crate::i18n::fluent::I18n;
use fluent_bundle::{FluentArgs, FluentValue};
use iced::{
    alignment::Vertical,
    widget::{button, Row, Space, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snapshot: &'a Snapshot,
}

/// Top bar: counter on the left, close on the right.
pub fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut bar = Row::new().spacing(10).padding(10).align_y(Vertical::Center);

    if ctx.snapshot.is_gallery() && ctx.snapshot.options.show_counter {
        let mut args = FluentArgs::new();
        args.set("current", FluentValue::from(ctx.snapshot.index + 1));
        args.set("total", FluentValue::from(ctx.snapshot.image_count()));
        bar = bar.push(Text::new(ctx.i18n.tr_with("lightbox-counter", &args)));
    }

    bar = bar.push(Space::new().width(Length::Fill).height(Length::Shrink));

    let close_button = button(Text::new(ctx.i18n.tr("lightbox-close-button")))
        .on_press(Message::Close)
        .padding([6, 12]);
    bar.push(close_button).into()
}

/// Bottom bar: previous/next and the zoom controls.
pub fn bottom_bar<'a>(ctx: &ViewContext<'a>, zoom: ZoomPercent) -> Element<'a, Message> {
    let mut bar = Row::new().spacing(10).padding(10).align_y(Vertical::Center);

    if ctx.snapshot.is_gallery() {
        let previous = button(Text::new(ctx.i18n.tr("lightbox-previous-button")))
            .on_press_maybe(ctx.snapshot.previous_index().map(|_| Message::NavigatePrevious))
            .padding([6, 12]);
        let next = button(Text::new(ctx.i18n.tr("lightbox-next-button")))
            .on_press_maybe(ctx.snapshot.next_index().map(|_| Message::NavigateNext))
            .padding([6, 12]);
        bar = bar.push(previous).push(next);
    }

    bar = bar.push(Space::new().width(Length::Fill).height(Length::Shrink));

    if ctx.snapshot.options.zoomable {
        let zoom_out = button(Text::new(ctx.i18n.tr("lightbox-zoom-out-button")))
            .on_press_maybe((!zoom.is_min()).then_some(Message::ZoomOut))
            .padding([6, 12]);
        let reset = button(Text::new(ctx.i18n.tr("lightbox-zoom-reset-button")))
            .on_press_maybe((!zoom.is_default()).then_some(Message::ResetZoom))
            .padding([6, 12]);
        let zoom_in = button(Text::new(ctx.i18n.tr("lightbox-zoom-in-button")))
            .on_press_maybe((!zoom.is_max()).then_some(Message::ZoomIn))
            .padding([6, 12]);
        bar = bar.push(zoom_out).push(reset).push(zoom_in);
    }

    bar.into()
}
