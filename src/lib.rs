// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a lightbox-style modal image viewer for the Iced GUI
//! framework.
//!
//! The crate has two halves. The [`viewer`] module is a regular Iced
//! component: a dimmed overlay with an image pane, gallery navigation, zoom,
//! and fade transitions, embeddable in any application's `view`/`update`.
//! The [`bridge`] module adds an imperative path on top: [`show`] opens a
//! viewer session from plain code, no declarative wiring at the call site.
//!
//! A host embeds a [`Lightbox`] once (the rendering surface) and can then
//! call [`show`] from anywhere inside its update cycle:
//!
//! ```no_run
//! // From any event handler in your application:
//! let _ = iced_lightbox::show("photos/sunset.jpg");
//! let _ = iced_lightbox::show(["a.jpg", "b.jpg", "c.jpg"]);
//! ```
//!
//! Without a `Lightbox` in the process (headless tools, tests), [`show`] is
//! a silent no-op. [`install`] optionally registers a host [`Context`]
//! (locale, display defaults) that every imperative session inherits.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod bridge;
pub mod config;
pub mod error;
pub mod i18n;
pub mod lightbox;
pub mod media;
pub mod source;
pub mod viewer;

pub use bridge::{install, mounted, show, Context, Mounted, Snapshot};
pub use error::{Error, Result, SourceError};
pub use lightbox::{Lightbox, Message};
pub use source::{DisplayOptions, Source, ViewerOptions};
