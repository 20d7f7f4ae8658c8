// SPDX-License-Identifier: MPL-2.0
//! The embeddable rendering surface.
//!
//! A [`Lightbox`] is what a host application adds to its own state to give
//! the imperative bridge somewhere to render. It mirrors the anchor's mounted
//! snapshot into the update cycle, forwards viewer effects back to the
//! bridge, and orchestrates image loading and prefetch around navigation.
//!
//! While any `Lightbox` exists, the bridge has a surface and [`crate::show`]
//! takes effect. In a headless process that never constructs one, `show`
//! stays a silent no-op.

use crate::bridge::{self, Mounted, SessionId};
use crate::config;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageCache, ImageData};
use crate::viewer;
use iced::{keyboard, time, Element, Subscription, Task};
use std::time::Instant;

/// Messages the surface feeds through the host's update loop.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
    /// Animation and teardown tick while a session is mounted.
    Tick(Instant),
    /// The active image finished loading.
    Loaded {
        session: SessionId,
        source: String,
        result: Result<ImageData, Error>,
    },
    /// A neighbor finished prefetching.
    Prefetched {
        source: String,
        result: Result<ImageData, Error>,
    },
}

/// Rendering surface for imperative viewer sessions.
pub struct Lightbox {
    viewer: viewer::State,
    cache: ImageCache,
    i18n: I18n,
    mounted: Option<Mounted>,
}

impl Lightbox {
    /// Creates a surface and attaches it to the bridge.
    #[must_use]
    pub fn new() -> Self {
        bridge::attach_surface();
        Self {
            viewer: viewer::State::new(),
            cache: ImageCache::new(),
            i18n: I18n::default(),
            mounted: None,
        }
    }

    /// Creates a surface with an explicit locale, bypassing OS detection.
    #[must_use]
    pub fn with_locale(locale: &str) -> Self {
        let mut lightbox = Self::new();
        lightbox.i18n = I18n::new(Some(locale));
        lightbox
    }

    /// Handles a surface message and returns follow-up work.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(msg) => {
                let now = Instant::now();
                if let Some(mounted) = bridge::mounted() {
                    let effect = self.viewer.handle_message(msg, &mounted.snapshot);
                    bridge::handle_effect(mounted.snapshot.session, &effect, now);
                }
                self.sync(now)
            }
            Message::Tick(now) => {
                bridge::tick(now);
                if let Some(mounted) = bridge::mounted() {
                    self.viewer
                        .handle_message(viewer::Message::Tick(now), &mounted.snapshot);
                }
                self.sync(now)
            }
            Message::Loaded {
                session,
                source,
                result,
            } => {
                if let Ok(image) = &result {
                    self.cache.insert(source.clone(), image.clone());
                }
                let current = bridge::mounted().is_some_and(|mounted| {
                    mounted.snapshot.session == session
                        && mounted.snapshot.current_source() == Some(source.as_str())
                });
                if current {
                    self.viewer.image_loaded(result);
                }
                Task::none()
            }
            Message::Prefetched { source, result } => {
                if let Ok(image) = result {
                    self.cache.insert(source, image);
                }
                Task::none()
            }
        }
    }

    /// Renders the overlay for the mounted session, if any.
    ///
    /// Hosts stack the returned element over their own view, e.g. with
    /// `iced::widget::stack`.
    #[must_use]
    pub fn view(&self) -> Option<Element<'_, Message>> {
        let mounted = self.mounted.as_ref()?;
        Some(
            viewer::view(viewer::ViewContext {
                i18n: &self.i18n,
                snapshot: &mounted.snapshot,
                state: &self.viewer,
            })
            .map(Message::Viewer),
        )
    }

    /// Ticks and keyboard input while a session is mounted; idle otherwise.
    #[must_use]
    pub fn subscription(&self) -> Subscription<Message> {
        if bridge::mounted().is_some() {
            Subscription::batch([
                time::every(config::tick_interval()).map(Message::Tick),
                keyboard::listen().filter_map(|event| match event {
                    keyboard::Event::KeyPressed { key, modifiers, .. } => {
                        key_message(key, modifiers)
                    }
                    _ => None,
                }),
            ])
        } else {
            Subscription::none()
        }
    }

    /// Mirrors the anchor into the surface and issues any loads the mounted
    /// snapshot calls for.
    fn sync(&mut self, now: Instant) -> Task<Message> {
        let Some(current) = bridge::mounted() else {
            if self.mounted.take().is_some() {
                self.viewer = viewer::State::new();
            }
            return Task::none();
        };

        let previous = self.mounted.take();
        let snapshot = current.snapshot.clone();

        let new_session = previous
            .as_ref()
            .is_none_or(|p| p.snapshot.session != snapshot.session);
        let reopened = previous
            .as_ref()
            .is_some_and(|p| !p.snapshot.open && snapshot.open);
        let index_changed = previous
            .as_ref()
            .is_some_and(|p| p.snapshot.index != snapshot.index);
        let was_open = previous.as_ref().is_none_or(|p| p.snapshot.open);

        let mut tasks = Vec::new();

        if new_session || reopened {
            self.viewer.open(now);
            if let Some(context) = &current.context {
                if let Some(locale) = &context.locale {
                    if let Ok(lang) = locale.parse() {
                        self.i18n.set_locale(lang);
                    }
                }
            }
        }

        if was_open && !snapshot.open {
            self.viewer.close(now);
        }

        if snapshot.open && (new_session || reopened || index_changed) {
            if let Some(source) = snapshot.current_source() {
                let source = source.to_string();
                self.viewer.begin_image(now);
                if let Some(image) = self.cache.get(&source) {
                    self.viewer.image_loaded(Ok(image));
                } else {
                    let session = snapshot.session;
                    tasks.push(Task::perform(
                        media::load(source.clone()),
                        move |result| Message::Loaded {
                            session,
                            source: source.clone(),
                            result,
                        },
                    ));
                }
            }

            for neighbor in self.cache.prefetch_plan(&snapshot.images, snapshot.index) {
                tasks.push(Task::perform(media::load(neighbor.clone()), move |result| {
                    Message::Prefetched {
                        source: neighbor.clone(),
                        result,
                    }
                }));
            }
        }

        self.mounted = Some(current);
        Task::batch(tasks)
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Lightbox {
    fn drop(&mut self) {
        bridge::detach_surface();
    }
}

fn key_message(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    Some(Message::Viewer(viewer::Message::KeyPressed(key)))
}
