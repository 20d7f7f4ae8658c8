// SPDX-License-Identifier: MPL-2.0
//! The imperative mount bridge.
//!
//! [`show`] opens a viewer session from plain imperative code. Because the
//! session lives outside any declarative `view` tree, the bridge owns the
//! render loop itself: every state change recomputes a fresh [`Snapshot`]
//! from the frozen caller source plus the current [`Session`] phase and
//! replaces the previous snapshot at the process-wide [`Anchor`].
//!
//! The bridge holds at most one session. A second [`show`] while a session
//! is open replaces it entirely; the last caller wins. All mutation happens
//! behind one mutex, and in practice on the UI thread only, since [`show`]
//! is meant to be called from event callbacks inside the host's update loop.

mod anchor;
mod session;
mod snapshot;

pub use anchor::{Anchor, Mounted};
pub use session::{Phase, Session, SessionId};
pub use snapshot::Snapshot;

use crate::error::Result;
use crate::source::{DisplayOptions, Source};
use crate::viewer::Effect;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

/// Host context captured by [`install`] and inherited by every session the
/// imperative path mounts. When nothing was installed, sessions mount with
/// crate defaults.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`). Resolved against
    /// the surface's available Fluent bundles at render time.
    pub locale: Option<String>,
    /// Host-wide display defaults for sessions opened from plain string or
    /// gallery sources. A full [`crate::ViewerOptions`] source overrides them.
    pub defaults: DisplayOptions,
}

/// The frozen source and live session of the one active viewer.
#[derive(Debug)]
struct ActiveSession {
    source: Source,
    session: Session,
}

/// Bridge state: surface availability, installed context, active session,
/// and the anchor slot.
#[derive(Debug)]
struct Bridge {
    surfaces: usize,
    context: Option<Arc<Context>>,
    active: Option<ActiveSession>,
    anchor: Anchor,
    revision: u64,
}

impl Bridge {
    const fn new() -> Self {
        Self {
            surfaces: 0,
            context: None,
            active: None,
            anchor: Anchor::new(),
            revision: 0,
        }
    }

    fn install(&mut self, context: Context) {
        self.context = Some(Arc::new(context));
    }

    fn attach_surface(&mut self) {
        self.surfaces += 1;
    }

    fn detach_surface(&mut self) {
        self.surfaces = self.surfaces.saturating_sub(1);
        if self.surfaces == 0 {
            // Nothing can render the anchor anymore; a ghost session must
            // not reappear when a surface attaches later.
            self.active = None;
            self.anchor.clear();
        }
    }

    fn show(&mut self, source: Source) -> Result<()> {
        if self.surfaces == 0 {
            return Ok(());
        }
        source.validate()?;

        // Replacing the active session also discards any pending teardown
        // deadline, so reopening during a fade-out cannot tear down the new
        // session.
        let session = Session::open(source.initial_index());
        self.active = Some(ActiveSession { source, session });
        self.remount();
        Ok(())
    }

    /// Recomputes the snapshot from current state and replaces the mounted
    /// one. This is the bridge's manual re-render step.
    fn remount(&mut self) {
        let revision = self.revision + 1;
        let defaults = self
            .context
            .as_ref()
            .map_or_else(DisplayOptions::default, |context| context.defaults);
        let snapshot = match self.active.as_ref() {
            Some(active) => Snapshot::compute(&active.source, &active.session, revision, defaults),
            None => return,
        };
        self.revision = revision;
        self.anchor.mount(Mounted {
            snapshot,
            context: self.context.clone(),
        });
    }

    fn handle_effect(&mut self, session: SessionId, effect: &Effect, now: Instant) {
        {
            let Some(active) = self.active.as_mut() else {
                return;
            };
            if active.session.id() != session {
                // Event from a superseded session; its instance was already
                // replaced at the anchor.
                return;
            }
            match effect {
                Effect::None => return,
                Effect::OpenChanged(false) => active.session.begin_close(now),
                Effect::OpenChanged(true) => active.session.cancel_close(),
                Effect::IndexChanged(index) => active.session.navigate_to(*index),
            }
        }
        self.remount();
    }

    fn tick(&mut self, now: Instant) -> bool {
        let due = self
            .active
            .as_ref()
            .is_some_and(|active| active.session.teardown_due(now));
        if due {
            self.active = None;
            self.anchor.clear();
        }
        due
    }

    fn mounted(&self) -> Option<Mounted> {
        self.anchor.mounted().cloned()
    }
}

static BRIDGE: Mutex<Bridge> = Mutex::new(Bridge::new());

fn with_bridge<R>(f: impl FnOnce(&mut Bridge) -> R) -> R {
    let mut bridge = BRIDGE.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut bridge)
}

/// Installs the host context inherited by every imperative session.
///
/// Call once during host setup. Calling again replaces the context; sessions
/// mounted afterwards carry the new one.
pub fn install(context: Context) {
    with_bridge(|bridge| bridge.install(context));
}

/// Programmatically opens the viewer.
///
/// Accepts a single URL or path, a list of them, or full
/// [`crate::ViewerOptions`]. The mounted snapshot always has its open flag
/// forced true. When no surface is attached (no [`crate::Lightbox`] exists,
/// e.g. in a headless process) the call is a silent no-op.
///
/// # Errors
///
/// Returns [`crate::Error::Source`] when the source names no image at all.
pub fn show(source: impl Into<Source>) -> Result<()> {
    with_bridge(|bridge| bridge.show(source.into()))
}

/// Returns the currently mounted snapshot and its inherited context.
#[must_use]
pub fn mounted() -> Option<Mounted> {
    with_bridge(|bridge| bridge.mounted())
}

pub(crate) fn attach_surface() {
    with_bridge(Bridge::attach_surface);
}

pub(crate) fn detach_surface() {
    with_bridge(Bridge::detach_surface);
}

pub(crate) fn handle_effect(session: SessionId, effect: &Effect, now: Instant) {
    with_bridge(|bridge| bridge.handle_effect(session, effect, now));
}

pub(crate) fn tick(now: Instant) -> bool {
    with_bridge(|bridge| bridge.tick(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::source::ViewerOptions;
    use std::time::Duration;

    fn attached_bridge() -> Bridge {
        let mut bridge = Bridge::new();
        bridge.attach_surface();
        bridge
    }

    fn mounted_snapshot(bridge: &Bridge) -> Snapshot {
        bridge.mounted().expect("snapshot should be mounted").snapshot
    }

    #[test]
    fn show_without_surface_is_a_silent_noop() {
        let mut bridge = Bridge::new();
        bridge.show(Source::from("a.jpg")).expect("show should not error");
        assert!(bridge.mounted().is_none());
    }

    #[test]
    fn show_mounts_an_open_snapshot() {
        let mut bridge = attached_bridge();
        bridge.show(Source::from("a.jpg")).expect("show should succeed");

        let snapshot = mounted_snapshot(&bridge);
        assert_eq!(snapshot.src.as_deref(), Some("a.jpg"));
        assert!(snapshot.open);
        assert_eq!(snapshot.index, 0);
    }

    #[test]
    fn show_rejects_empty_sources_when_a_surface_exists() {
        let mut bridge = attached_bridge();
        assert!(bridge.show(Source::from("")).is_err());
        assert!(bridge.mounted().is_none());
    }

    #[test]
    fn second_show_replaces_the_first_session() {
        let mut bridge = attached_bridge();
        bridge.show(Source::from("a.jpg")).expect("first show");
        let first = mounted_snapshot(&bridge);
        bridge.show(Source::from("b.jpg")).expect("second show");
        let second = mounted_snapshot(&bridge);

        assert_ne!(first.session, second.session);
        assert_eq!(second.src.as_deref(), Some("b.jpg"));
    }

    #[test]
    fn close_event_remounts_closed_then_tears_down_after_delay() {
        let now = Instant::now();
        let mut bridge = attached_bridge();
        bridge.show(Source::from("a.jpg")).expect("show");
        let session = mounted_snapshot(&bridge).session;

        bridge.handle_effect(session, &Effect::OpenChanged(false), now);
        let closing = mounted_snapshot(&bridge);
        assert!(!closing.open);

        assert!(!bridge.tick(now + config::fade_out() - Duration::from_millis(1)));
        assert!(bridge.tick(now + config::fade_out()));
        assert!(bridge.mounted().is_none());
    }

    #[test]
    fn reopen_during_fade_out_cancels_teardown() {
        let now = Instant::now();
        let mut bridge = attached_bridge();
        bridge.show(Source::from("a.jpg")).expect("first show");
        let session = mounted_snapshot(&bridge).session;
        bridge.handle_effect(session, &Effect::OpenChanged(false), now);

        bridge.show(Source::from("b.jpg")).expect("second show");
        assert!(!bridge.tick(now + Duration::from_secs(1)));

        let snapshot = mounted_snapshot(&bridge);
        assert!(snapshot.open);
        assert_eq!(snapshot.src.as_deref(), Some("b.jpg"));
    }

    #[test]
    fn index_event_remounts_synchronously() {
        let mut bridge = attached_bridge();
        let source = Source::from(ViewerOptions {
            images: vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into(), "d.jpg".into()],
            ..ViewerOptions::default()
        });
        bridge.show(source).expect("show");
        let session = mounted_snapshot(&bridge).session;

        bridge.handle_effect(session, &Effect::IndexChanged(3), Instant::now());
        assert_eq!(mounted_snapshot(&bridge).index, 3);
    }

    #[test]
    fn stale_session_events_are_ignored() {
        let mut bridge = attached_bridge();
        bridge.show(Source::from("a.jpg")).expect("first show");
        let stale = mounted_snapshot(&bridge).session;
        bridge.show(Source::from("b.jpg")).expect("second show");

        bridge.handle_effect(stale, &Effect::OpenChanged(false), Instant::now());
        assert!(mounted_snapshot(&bridge).open);
    }

    #[test]
    fn each_remount_bumps_the_revision() {
        let mut bridge = attached_bridge();
        bridge.show(Source::from(["a.jpg", "b.jpg"])).expect("show");
        let first = mounted_snapshot(&bridge).revision;
        let session = mounted_snapshot(&bridge).session;

        bridge.handle_effect(session, &Effect::IndexChanged(1), Instant::now());
        assert!(mounted_snapshot(&bridge).revision > first);
    }

    #[test]
    fn detaching_the_last_surface_clears_the_anchor() {
        let mut bridge = attached_bridge();
        bridge.show(Source::from("a.jpg")).expect("show");
        bridge.detach_surface();
        assert!(bridge.mounted().is_none());
    }

    #[test]
    fn installed_defaults_reach_plain_sources() {
        let mut bridge = attached_bridge();
        bridge.install(Context {
            locale: None,
            defaults: DisplayOptions {
                loop_navigation: true,
                ..DisplayOptions::default()
            },
        });
        bridge.show(Source::from(["a.jpg", "b.jpg"])).expect("show");

        let mounted = bridge.mounted().expect("mounted");
        assert!(mounted.snapshot.options.loop_navigation);
        assert!(mounted.context.is_some());
    }
}
