// SPDX-License-Identifier: MPL-2.0
//! Compile-time display defaults for the lightbox.
//!
//! Runtime per-session overrides go through [`crate::ViewerOptions`]; this
//! module only holds the constants those overrides fall back to. The crate
//! never reads or writes configuration files.

use std::time::Duration;

/// Minimum zoom percentage.
pub const MIN_ZOOM_PERCENT: f32 = 10.0;

/// Maximum zoom percentage.
pub const MAX_ZOOM_PERCENT: f32 = 800.0;

/// Zoom percentage applied when a session opens or navigates.
pub const DEFAULT_ZOOM_PERCENT: f32 = 100.0;

/// Zoom change applied per zoom-in/zoom-out step.
pub const DEFAULT_ZOOM_STEP_PERCENT: f32 = 25.0;

/// Fade-in duration when a session opens, in milliseconds.
pub const FADE_IN_MS: u64 = 200;

/// Fade-out duration when a session closes, in milliseconds.
///
/// The bridge keeps the closing snapshot mounted for exactly this long so the
/// backdrop can finish fading before the anchor is cleared.
pub const FADE_OUT_MS: u64 = 300;

/// Interval of the animation tick subscription while a session is mounted.
pub const TICK_INTERVAL_MS: u64 = 16;

/// Timeout for loading a single image, local or remote.
pub const LOAD_TIMEOUT_SECS: u64 = 10;

/// Opacity of the fully faded-in backdrop.
pub const BACKDROP_ALPHA: f32 = 0.85;

/// Returns the fade-in duration.
#[must_use]
pub fn fade_in() -> Duration {
    Duration::from_millis(FADE_IN_MS)
}

/// Returns the fade-out duration, which doubles as the teardown delay.
#[must_use]
pub fn fade_out() -> Duration {
    Duration::from_millis(FADE_OUT_MS)
}

/// Returns the animation tick interval.
#[must_use]
pub fn tick_interval() -> Duration {
    Duration::from_millis(TICK_INTERVAL_MS)
}

/// Returns the image load timeout.
#[must_use]
pub fn load_timeout() -> Duration {
    Duration::from_secs(LOAD_TIMEOUT_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_range_is_ordered() {
        assert!(MIN_ZOOM_PERCENT < DEFAULT_ZOOM_PERCENT);
        assert!(DEFAULT_ZOOM_PERCENT < MAX_ZOOM_PERCENT);
    }

    #[test]
    fn fade_out_matches_teardown_delay() {
        assert_eq!(fade_out(), Duration::from_millis(300));
    }

    #[test]
    fn tick_interval_is_subsecond() {
        assert!(tick_interval() < Duration::from_secs(1));
    }

    #[test]
    fn backdrop_alpha_is_a_valid_opacity() {
        assert!((0.0..=1.0).contains(&BACKDROP_ALPHA));
    }
}
