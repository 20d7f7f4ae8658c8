// SPDX-License-Identifier: MPL-2.0
//! Viewer session lifecycle.
//!
//! One [`Session`] covers a single open-to-closed cycle of the lightbox. The
//! phase machine is `Open -> Closing -> gone`; the closed state is the absence
//! of a session in the bridge. While closing, the session keeps a teardown
//! deadline so the fade-out can finish before the anchor is cleared.

use crate::config;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Unique identifier for a viewer session.
///
/// Events carry the id of the session they were emitted for, so callbacks of
/// a superseded session are ignored instead of mutating its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// Creates a new unique session ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The viewer is visible and interactive.
    Open,
    /// The close event fired; the viewer is fading out and will be torn
    /// down once the deadline passes.
    Closing {
        /// When the anchor may be cleared.
        deadline: Instant,
    },
}

/// State of one open-to-closed cycle of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    index: usize,
    phase: Phase,
}

impl Session {
    /// Opens a new session at the given gallery index.
    #[must_use]
    pub fn open(index: usize) -> Self {
        Self {
            id: SessionId::new(),
            index,
            phase: Phase::Open,
        }
    }

    /// Returns this session's id.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the active gallery index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns whether the session is open (not yet closing).
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Returns whether the session is fading out.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        matches!(self.phase, Phase::Closing { .. })
    }

    /// Moves the active index. Navigation is allowed in any phase; a stray
    /// navigate event during fade-out is harmless.
    pub fn navigate_to(&mut self, index: usize) {
        self.index = index;
    }

    /// Starts the fade-out. The teardown deadline is the fade-out duration
    /// from `now`. Calling this while already closing keeps the earlier
    /// deadline.
    pub fn begin_close(&mut self, now: Instant) {
        if self.phase == Phase::Open {
            self.phase = Phase::Closing {
                deadline: now + config::fade_out(),
            };
        }
    }

    /// Cancels a pending close, discarding the teardown deadline.
    pub fn cancel_close(&mut self) {
        self.phase = Phase::Open;
    }

    /// Returns whether the teardown deadline has passed.
    #[must_use]
    pub fn teardown_due(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Open => false,
            Phase::Closing { deadline } => now >= deadline,
        }
    }
}
