// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Source(SourceError),
    Image(String),
    Fetch(String),
}

/// Rejection reasons for caller-supplied image sources.
///
/// A source that names no image at all is rejected up front instead of
/// mounting an empty viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    /// A single-image source with an empty URL or path.
    EmptySrc,

    /// A gallery source with no entries.
    EmptyGallery,

    /// An options source that sets neither `src` nor `images`.
    NoImages,
}

impl SourceError {
    /// Returns the i18n message key for this rejection reason.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SourceError::EmptySrc => "error-source-empty-src",
            SourceError::EmptyGallery => "error-source-empty-gallery",
            SourceError::NoImages => "error-source-no-images",
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::EmptySrc => write!(f, "Single-image source has an empty URL"),
            SourceError::EmptyGallery => write!(f, "Gallery source contains no images"),
            SourceError::NoImages => write!(f, "Options name neither a source nor a gallery"),
        }
    }
}

impl Error {
    /// Returns the i18n message key for the user-facing summary of this
    /// error. Raw messages stay in the details section of the error view.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-io",
            Error::Source(e) => e.i18n_key(),
            Error::Image(_) => "error-load-image",
            Error::Fetch(_) => "error-load-fetch",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Source(e) => write!(f, "Source Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
        }
    }
}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Error::Source(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
