// SPDX-License-Identifier: MPL-2.0
//! Image data and source classification.
//!
//! A lightbox source is a plain string. Strings with an `http(s)` scheme are
//! fetched from the network; everything else is treated as a filesystem path.

pub mod loader;

pub use loader::{ImageCache, load};

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::PathBuf;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Decodes encoded bytes (PNG, JPEG, GIF, WebP, BMP).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Image`] when the bytes are not a supported
    /// image.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let decoded = image_rs::load_from_memory(bytes)?;
        let (width, height) = decoded.dimensions();
        Ok(Self::from_rgba(width, height, decoded.to_rgba8().into_raw()))
    }

    /// Returns the aspect ratio, if the image has any area.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.height == 0 {
            None
        } else {
            #[allow(clippy::cast_precision_loss)]
            Some(self.width as f32 / self.height as f32)
        }
    }
}

/// Where a source string points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// A filesystem path.
    Local(PathBuf),
    /// An `http://` or `https://` URL.
    Remote(String),
}

/// Classifies a source string as local or remote.
#[must_use]
pub fn classify(source: &str) -> SourceKind {
    let lowered = source.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        SourceKind::Remote(source.to_string())
    } else {
        SourceKind::Local(PathBuf::from(source))
    }
}
