// SPDX-License-Identifier: MPL-2.0
//! Immutable display properties for one render pass.
//!
//! A [`Snapshot`] is recomputed from the frozen caller-supplied [`Source`]
//! plus the current session state every time the bridge re-renders. Nothing
//! here mutates; replacing the snapshot at the anchor is the only way state
//! reaches the screen.

use super::session::{Session, SessionId};
use crate::source::{DisplayOptions, Source};

/// Display properties computed for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The session this snapshot belongs to.
    pub session: SessionId,
    /// Monotonic per-bridge render counter. Each re-mount bumps it, so a
    /// surface can detect replacement without comparing full contents.
    pub revision: u64,
    /// Single image source, for single-image sessions.
    pub src: Option<String>,
    /// Gallery image sources, empty for single-image sessions.
    pub images: Vec<String>,
    /// Active gallery index, clamped to the image count.
    pub index: usize,
    /// Whether the viewer is open. False only during fade-out.
    pub open: bool,
    /// Display knobs inherited from the source or the installed context.
    pub options: DisplayOptions,
}

impl Snapshot {
    /// Computes the snapshot for the given source and session state.
    ///
    /// The open flag comes from the session phase alone, so the imperative
    /// path always mounts open regardless of any caller-supplied flag.
    #[must_use]
    pub(crate) fn compute(
        source: &Source,
        session: &Session,
        revision: u64,
        context_defaults: DisplayOptions,
    ) -> Self {
        let (src, images, options) = match source {
            Source::Single(src) => (Some(src.clone()), Vec::new(), context_defaults),
            Source::Gallery(images) => (None, images.clone(), context_defaults),
            Source::Options(options) => {
                (options.src.clone(), options.images.clone(), options.display())
            }
        };

        let count = if images.is_empty() {
            usize::from(src.is_some())
        } else {
            images.len()
        };
        let index = session.index().min(count.saturating_sub(1));

        Self {
            session: session.id(),
            revision,
            src,
            images,
            index,
            open: session.is_open(),
            options,
        }
    }

    /// Returns the number of images this snapshot can show.
    #[must_use]
    pub fn image_count(&self) -> usize {
        if self.images.is_empty() {
            usize::from(self.src.is_some())
        } else {
            self.images.len()
        }
    }

    /// Returns whether more than one image is available.
    #[must_use]
    pub fn is_gallery(&self) -> bool {
        self.image_count() > 1
    }

    /// Returns the source string at the given index.
    #[must_use]
    pub fn source_at(&self, index: usize) -> Option<&str> {
        if self.images.is_empty() {
            if index == 0 {
                self.src.as_deref()
            } else {
                None
            }
        } else {
            self.images.get(index).map(String::as_str)
        }
    }

    /// Returns the active source string.
    #[must_use]
    pub fn current_source(&self) -> Option<&str> {
        self.source_at(self.index)
    }

    /// Returns the index of the next image, honoring wrap-around.
    #[must_use]
    pub fn next_index(&self) -> Option<usize> {
        let count = self.image_count();
        if count < 2 {
            return None;
        }
        if self.index + 1 < count {
            Some(self.index + 1)
        } else if self.options.loop_navigation {
            Some(0)
        } else {
            None
        }
    }

    /// Returns the index of the previous image, honoring wrap-around.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        let count = self.image_count();
        if count < 2 {
            return None;
        }
        if self.index > 0 {
            Some(self.index - 1)
        } else if self.options.loop_navigation {
            Some(count - 1)
        } else {
            None
        }
    }
}
