// SPDX-License-Identifier: MPL-2.0
//! The root mount point.
//!
//! One slot, owned by the bridge for the lifetime of the process. Mounting
//! replaces whatever was there; there is no stacking and no queueing.

use super::snapshot::Snapshot;
use super::Context;
use std::sync::Arc;

/// A snapshot mounted at the anchor, together with the context it inherited.
#[derive(Debug, Clone)]
pub struct Mounted {
    /// The live display properties.
    pub snapshot: Snapshot,
    /// Host context captured at install time, if any.
    pub context: Option<Arc<Context>>,
}

/// Single-slot mount point for the viewer.
#[derive(Debug)]
pub struct Anchor {
    slot: Option<Mounted>,
}

impl Anchor {
    /// Creates an empty anchor.
    #[must_use]
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Mounts a snapshot, replacing any previous one.
    pub fn mount(&mut self, mounted: Mounted) {
        self.slot = Some(mounted);
    }

    /// Renders nothing into the anchor.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Returns the currently mounted snapshot, if any.
    #[must_use]
    pub fn mounted(&self) -> Option<&Mounted> {
        self.slot.as_ref()
    }

    /// Returns whether anything is mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.slot.is_some()
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::session::Session;
    use crate::source::{DisplayOptions, Source};

    fn mounted_for(source: &str) -> Mounted {
        let source = Source::from(source);
        let session = Session::open(0);
        Mounted {
            snapshot: Snapshot::compute(&source, &session, 0, DisplayOptions::default()),
            context: None,
        }
    }

    #[test]
    fn new_anchor_is_empty() {
        let anchor = Anchor::new();
        assert!(!anchor.is_mounted());
        assert!(anchor.mounted().is_none());
    }

    #[test]
    fn mount_replaces_rather_than_stacks() {
        let mut anchor = Anchor::new();
        anchor.mount(mounted_for("a.jpg"));
        anchor.mount(mounted_for("b.jpg"));

        let mounted = anchor.mounted().expect("snapshot should be mounted");
        assert_eq!(mounted.snapshot.src.as_deref(), Some("b.jpg"));
    }

    #[test]
    fn clear_empties_the_slot() {
        let mut anchor = Anchor::new();
        anchor.mount(mounted_for("a.jpg"));
        anchor.clear();
        assert!(!anchor.is_mounted());
    }
}
