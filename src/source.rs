// SPDX-License-Identifier: MPL-2.0
//! Caller-supplied image sources and per-session display options.
//!
//! [`Source`] is the normalized form of everything [`crate::show`] accepts: a
//! single URL or path, a list of them, or a full [`ViewerOptions`]. Keeping
//! the union tagged means an unrecognized shape cannot reach the mount path;
//! the only inputs left to reject are the ones that name no image at all.

use crate::error::SourceError;
use serde::{Deserialize, Serialize};

/// Per-session viewer options.
///
/// Hosts can embed this in their own settings files; the crate itself never
/// persists it. Unset fields fall back to the crate defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Single image URL or path. Ignored when `images` is non-empty.
    pub src: Option<String>,
    /// Gallery image URLs or paths.
    pub images: Vec<String>,
    /// Initial gallery index.
    pub index: usize,
    /// Caller-requested open flag. The imperative path forces this to true
    /// at mount time regardless of what the caller set.
    pub open: bool,
    /// Whether zoom controls and zoom keyboard shortcuts are enabled.
    pub zoomable: bool,
    /// Whether pressing the backdrop closes the session.
    pub backdrop_dismiss: bool,
    /// Whether the `current / total` counter renders for galleries.
    pub show_counter: bool,
    /// Whether next/previous wrap around at the gallery edges.
    pub loop_navigation: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            src: None,
            images: Vec::new(),
            index: 0,
            open: false,
            zoomable: true,
            backdrop_dismiss: true,
            show_counter: true,
            loop_navigation: false,
        }
    }
}

impl ViewerOptions {
    /// Returns the display knobs, without the image list itself.
    #[must_use]
    pub fn display(&self) -> DisplayOptions {
        DisplayOptions {
            zoomable: self.zoomable,
            backdrop_dismiss: self.backdrop_dismiss,
            show_counter: self.show_counter,
            loop_navigation: self.loop_navigation,
        }
    }
}

/// Display knobs carried into every snapshot.
// Allow excessive bools: orthogonal on/off switches mirrored from ViewerOptions.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub zoomable: bool,
    pub backdrop_dismiss: bool,
    pub show_counter: bool,
    pub loop_navigation: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        ViewerOptions::default().display()
    }
}

/// Normalized image source accepted by [`crate::show`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// One image, from a string.
    Single(String),
    /// A gallery, from a list of strings. Starts at index 0.
    Gallery(Vec<String>),
    /// Full options passed through verbatim, including an initial index.
    Options(ViewerOptions),
}

impl Source {
    /// Rejects sources that name no image.
    ///
    /// # Errors
    ///
    /// Returns the specific [`SourceError`] for an empty single source, an
    /// empty gallery, or options with neither `src` nor `images`.
    pub fn validate(&self) -> std::result::Result<(), SourceError> {
        match self {
            Source::Single(src) => {
                if src.is_empty() {
                    return Err(SourceError::EmptySrc);
                }
            }
            Source::Gallery(images) => {
                if images.is_empty() {
                    return Err(SourceError::EmptyGallery);
                }
            }
            Source::Options(options) => {
                if options.images.is_empty() {
                    match &options.src {
                        Some(src) if !src.is_empty() => {}
                        _ => return Err(SourceError::NoImages),
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns the caller-requested initial index (0 unless options set one).
    #[must_use]
    pub fn initial_index(&self) -> usize {
        match self {
            Source::Single(_) | Source::Gallery(_) => 0,
            Source::Options(options) => options.index,
        }
    }

    /// Returns the number of images this source names.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Source::Single(_) => 1,
            Source::Gallery(images) => images.len(),
            Source::Options(options) => {
                if options.images.is_empty() {
                    usize::from(options.src.is_some())
                } else {
                    options.images.len()
                }
            }
        }
    }

    /// Returns whether this source names no image at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Source {
    fn from(src: &str) -> Self {
        Source::Single(src.to_string())
    }
}

impl From<String> for Source {
    fn from(src: String) -> Self {
        Source::Single(src)
    }
}

impl From<Vec<String>> for Source {
    fn from(images: Vec<String>) -> Self {
        Source::Gallery(images)
    }
}

impl From<&[&str]> for Source {
    fn from(images: &[&str]) -> Self {
        Source::Gallery(images.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Source {
    fn from(images: [&str; N]) -> Self {
        Source::from(&images[..])
    }
}

impl From<ViewerOptions> for Source {
    fn from(options: ViewerOptions) -> Self {
        Source::Options(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_normalizes_to_single() {
        let source = Source::from("a.jpg");
        assert_eq!(source, Source::Single("a.jpg".to_string()));
        assert_eq!(source.initial_index(), 0);
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn vec_normalizes_to_gallery() {
        let source = Source::from(vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        assert!(matches!(&source, Source::Gallery(images) if images.len() == 2));
        assert_eq!(source.initial_index(), 0);
    }

    #[test]
    fn slice_of_strs_normalizes_to_gallery() {
        let source = Source::from(["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn options_pass_through_with_index() {
        let options = ViewerOptions {
            images: vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()],
            index: 2,
            ..ViewerOptions::default()
        };
        let source = Source::from(options);
        assert_eq!(source.initial_index(), 2);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn empty_string_is_rejected() {
        assert_eq!(Source::from("").validate(), Err(SourceError::EmptySrc));
    }

    #[test]
    fn empty_gallery_is_rejected() {
        let source = Source::from(Vec::<String>::new());
        assert_eq!(source.validate(), Err(SourceError::EmptyGallery));
    }

    #[test]
    fn imageless_options_are_rejected() {
        let source = Source::from(ViewerOptions::default());
        assert_eq!(source.validate(), Err(SourceError::NoImages));
    }

    #[test]
    fn options_with_empty_src_string_are_rejected() {
        let options = ViewerOptions {
            src: Some(String::new()),
            ..ViewerOptions::default()
        };
        assert_eq!(
            Source::from(options).validate(),
            Err(SourceError::NoImages)
        );
    }

    #[test]
    fn options_with_src_validate() {
        let options = ViewerOptions {
            src: Some("a.jpg".to_string()),
            ..ViewerOptions::default()
        };
        assert!(Source::from(options).validate().is_ok());
    }

    #[test]
    fn display_mirrors_option_knobs() {
        let options = ViewerOptions {
            zoomable: false,
            loop_navigation: true,
            ..ViewerOptions::default()
        };
        let display = options.display();
        assert!(!display.zoomable);
        assert!(display.loop_navigation);
        assert!(display.backdrop_dismiss);
        assert!(display.show_counter);
    }
}
