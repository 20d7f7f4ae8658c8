// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component is deliberately prop-driven: which images exist, which index
//! is active, and whether the viewer is open all come from the mounted
//! [`Snapshot`]. The component owns only presentation state (loaded pixels,
//! zoom, fade, error details) and reports intent upward through [`Effect`].

use super::transition::{Direction, Fade};
use super::zoom::ZoomPercent;
use crate::bridge::Snapshot;
use crate::config;
use crate::error::Error;
use crate::media::ImageData;
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use std::time::Instant;

/// Messages emitted by the viewer's widgets and subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close button was pressed.
    Close,
    /// The dimmed backdrop was pressed.
    BackdropPressed,
    NavigateNext,
    NavigatePrevious,
    /// Jump straight to a gallery index.
    SelectIndex(usize),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleErrorDetails,
    /// A key was pressed while the viewer had a session mounted.
    KeyPressed(Key),
    /// Animation tick while a session is mounted.
    Tick(Instant),
}

/// State changes the viewer reports back to whoever mounted it.
///
/// These two events are the entire wire contract between the component and
/// the bridge (or a declarative host): the open flag and the active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenChanged(bool),
    IndexChanged(usize),
}

/// A load failure and whether its technical details are expanded.
#[derive(Debug, Clone)]
pub struct ErrorState {
    pub error: Error,
    pub show_details: bool,
}

impl ErrorState {
    fn new(error: Error) -> Self {
        Self {
            error,
            show_details: false,
        }
    }
}

/// Presentation state for the mounted session.
#[derive(Debug, Clone)]
pub struct State {
    image: Option<ImageData>,
    error: Option<ErrorState>,
    loading: bool,
    loading_started: Option<Instant>,
    zoom: ZoomPercent,
    fade: Option<Fade>,
    opacity: f32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            image: None,
            error: None,
            loading: false,
            loading_started: None,
            zoom: ZoomPercent::default(),
            fade: None,
            opacity: 1.0,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets for a freshly opened session and starts the fade-in.
    pub fn open(&mut self, now: Instant) {
        *self = Self::default();
        self.fade = Some(Fade::fade_in(now));
        self.opacity = 0.0;
    }

    /// Starts the fade-out. Loaded pixels stay so the image is visible while
    /// the overlay fades.
    pub fn close(&mut self, now: Instant) {
        self.fade = Some(Fade::fade_out(now));
    }

    /// Resets content state for a new active image and starts the load clock.
    pub fn begin_image(&mut self, now: Instant) {
        self.image = None;
        self.error = None;
        self.loading = true;
        self.loading_started = Some(now);
        self.zoom = ZoomPercent::default();
    }

    /// Accepts the result of loading the active image.
    pub fn image_loaded(&mut self, result: Result<ImageData, Error>) {
        self.loading = false;
        self.loading_started = None;
        match result {
            Ok(image) => {
                self.image = Some(image);
                self.error = None;
            }
            Err(error) => {
                self.image = None;
                self.error = Some(ErrorState::new(error));
            }
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&ErrorState> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomPercent {
        self.zoom
    }

    /// Current overlay opacity factor, updated on every tick.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Handles a message against the currently mounted snapshot.
    ///
    /// While the snapshot is closed (fading out) the viewer is inert: only
    /// ticks are processed, so stray input cannot resurrect the session.
    pub fn handle_message(&mut self, message: Message, snapshot: &Snapshot) -> Effect {
        if !snapshot.open {
            if let Message::Tick(now) = message {
                self.tick(now);
            }
            return Effect::None;
        }

        match message {
            Message::Close => Effect::OpenChanged(false),
            Message::BackdropPressed => {
                if snapshot.options.backdrop_dismiss {
                    Effect::OpenChanged(false)
                } else {
                    Effect::None
                }
            }
            Message::NavigateNext => snapshot
                .next_index()
                .map_or(Effect::None, Effect::IndexChanged),
            Message::NavigatePrevious => snapshot
                .previous_index()
                .map_or(Effect::None, Effect::IndexChanged),
            Message::SelectIndex(index) => {
                if index != snapshot.index && index < snapshot.image_count() {
                    Effect::IndexChanged(index)
                } else {
                    Effect::None
                }
            }
            Message::ZoomIn => {
                if snapshot.options.zoomable {
                    self.zoom = self.zoom.zoom_in();
                }
                Effect::None
            }
            Message::ZoomOut => {
                if snapshot.options.zoomable {
                    self.zoom = self.zoom.zoom_out();
                }
                Effect::None
            }
            Message::ResetZoom => {
                self.zoom = ZoomPercent::default();
                Effect::None
            }
            Message::ToggleErrorDetails => {
                if let Some(error) = self.error.as_mut() {
                    error.show_details = !error.show_details;
                }
                Effect::None
            }
            Message::KeyPressed(key) => match key_intent(&key) {
                Some(intent) => self.handle_message(intent, snapshot),
                None => Effect::None,
            },
            Message::Tick(now) => {
                self.tick(now);
                Effect::None
            }
        }
    }

    fn tick(&mut self, now: Instant) {
        if let Some(fade) = self.fade {
            self.opacity = fade.progress(now);
            if fade.is_settled(now) && fade.direction() == Direction::In {
                self.fade = None;
            }
        }

        // Safety net for loads that never report back.
        if self.loading {
            let timed_out = self
                .loading_started
                .is_some_and(|started| now.saturating_duration_since(started) > config::load_timeout());
            if timed_out {
                self.image_loaded(Err(Error::Fetch("image load timed out".to_string())));
            }
        }
    }
}

/// Maps a key press to the viewer intent it stands for.
fn key_intent(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::Close),
        Key::Named(Named::ArrowRight) => Some(Message::NavigateNext),
        Key::Named(Named::ArrowLeft) => Some(Message::NavigatePrevious),
        Key::Character(c) => match c.as_str() {
            "+" | "=" => Some(Message::ZoomIn),
            "-" => Some(Message::ZoomOut),
            "0" => Some(Message::ResetZoom),
            _ => None,
        },
        Key::Named(_) | Key::Unidentified => None,
    }
}
