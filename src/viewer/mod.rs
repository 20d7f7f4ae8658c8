// SPDX-License-Identifier: MPL-2.0
//! Modal image viewer: component state, overlay views, zoom and transitions.
//!
//! The viewer renders as a full-surface overlay: a dimmed backdrop, a top bar
//! with counter and close button, the image pane, and a bottom bar with
//! navigation and zoom controls. Hosts stack it over their own content.

pub mod component;
pub mod controls;
pub mod pane;
pub mod transition;
pub mod zoom;

pub use component::{Effect, ErrorState, Message, State};
pub use zoom::ZoomPercent;

use crate::bridge::Snapshot;
use crate::config;
use crate::i18n::fluent::I18n;
use iced::widget::{button, container, mouse_area, opaque, Column, Container, Text};
use iced::{alignment, Background, Color, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snapshot: &'a Snapshot,
    pub state: &'a State,
}

/// Renders the full overlay for the mounted snapshot.
///
/// Presses not captured by a control (the backdrop, the letterboxed area
/// around the image) dismiss the session when `backdrop_dismiss` is set; the
/// component decides, the view only reports the press.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = if let Some(error) = ctx.state.error() {
        error_view(ctx.i18n, error)
    } else if let Some(image) = ctx.state.image() {
        pane::view(image, ctx.state.zoom())
    } else {
        loading_view(ctx.i18n)
    };

    let controls_ctx = controls::ViewContext {
        i18n: ctx.i18n,
        snapshot: ctx.snapshot,
    };

    let chrome = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(controls::top_bar(&controls_ctx))
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .push(controls::bottom_bar(&controls_ctx, ctx.state.zoom()));

    let backdrop_alpha = config::BACKDROP_ALPHA * ctx.state.opacity();
    let overlay = container(chrome)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            text_color: Some(Color::WHITE),
            background: Some(Background::Color(Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: backdrop_alpha,
            })),
            ..container::Style::default()
        });

    opaque(mouse_area(overlay).on_press(Message::BackdropPressed)).into()
}

fn loading_view(i18n: &I18n) -> Element<'_, Message> {
    Container::new(Text::new(i18n.tr("lightbox-loading")).size(18))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn error_view<'a>(i18n: &'a I18n, error: &'a ErrorState) -> Element<'a, Message> {
    let heading = Container::new(Text::new(i18n.tr("error-load-heading")).size(24))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let summary = Container::new(Text::new(i18n.tr(error.error.i18n_key())).width(Length::Fill))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let toggle_label = if error.show_details {
        i18n.tr("error-details-hide")
    } else {
        i18n.tr("error-details-show")
    };

    let toggle_button =
        Container::new(button(Text::new(toggle_label)).on_press(Message::ToggleErrorDetails))
            .align_x(alignment::Horizontal::Center);

    let mut error_content = Column::new()
        .spacing(12)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(summary)
        .push(toggle_button);

    if error.show_details {
        let details_heading =
            Container::new(Text::new(i18n.tr("error-details-technical-heading")).size(16))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center);

        let details_body =
            Container::new(Text::new(error.error.to_string()).width(Length::Fill))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left);

        let details_column = Column::new()
            .spacing(8)
            .width(Length::Fill)
            .push(details_heading)
            .push(details_body);

        error_content = error_content.push(
            Container::new(details_column)
                .width(Length::Fill)
                .padding(16),
        );
    }

    Container::new(error_content)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::Session;
    use crate::error::Error;
    use crate::media::ImageData;
    use crate::source::{DisplayOptions, Source};

    fn snapshot() -> Snapshot {
        let source = Source::from(["a.jpg", "b.jpg"]);
        Snapshot::compute(&source, &Session::open(0), 0, DisplayOptions::default())
    }

    #[test]
    fn view_renders_loading_state() {
        let i18n = I18n::default();
        let state = State::new();
        let snapshot = snapshot();
        let _element = view(ViewContext {
            i18n: &i18n,
            snapshot: &snapshot,
            state: &state,
        });
    }

    #[test]
    fn view_renders_loaded_image() {
        let i18n = I18n::default();
        let mut state = State::new();
        state.image_loaded(Ok(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])));
        let snapshot = snapshot();
        let _element = view(ViewContext {
            i18n: &i18n,
            snapshot: &snapshot,
            state: &state,
        });
    }

    #[test]
    fn view_renders_error_state() {
        let i18n = I18n::default();
        let mut state = State::new();
        state.image_loaded(Err(Error::Image("bad bytes".to_string())));
        let snapshot = snapshot();
        let _element = view(ViewContext {
            i18n: &i18n,
            snapshot: &snapshot,
            state: &state,
        });
    }
}
