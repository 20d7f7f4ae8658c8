// SPDX-License-Identifier: MPL-2.0
//! Fade transitions for the modal overlay.
//!
//! The backdrop fades in when a session opens and fades out when it closes.
//! The fade-out duration equals the bridge's teardown delay, so the overlay
//! finishes fading exactly when the anchor is cleared.

use crate::config;
use std::time::Instant;

/// Direction of the running fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

/// A fade in progress, or settled at its end state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    direction: Direction,
    started: Instant,
}

impl Fade {
    /// Starts fading in at `now`.
    #[must_use]
    pub fn fade_in(now: Instant) -> Self {
        Self {
            direction: Direction::In,
            started: now,
        }
    }

    /// Starts fading out at `now`.
    #[must_use]
    pub fn fade_out(now: Instant) -> Self {
        Self {
            direction: Direction::Out,
            started: now,
        }
    }

    /// Returns the fade direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the opacity factor at `now`, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let duration = match self.direction {
            Direction::In => config::fade_in(),
            Direction::Out => config::fade_out(),
        };
        let elapsed = now.saturating_duration_since(self.started);
        #[allow(clippy::cast_precision_loss)]
        let ratio = (elapsed.as_millis() as f32 / duration.as_millis() as f32).clamp(0.0, 1.0);
        match self.direction {
            Direction::In => ratio,
            Direction::Out => 1.0 - ratio,
        }
    }

    /// Returns whether the fade has reached its end state at `now`.
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        let target = match self.direction {
            Direction::In => 1.0,
            Direction::Out => 0.0,
        };
        (self.progress(now) - target).abs() < f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fade_in_goes_from_zero_to_one() {
        let now = Instant::now();
        let fade = Fade::fade_in(now);

        assert!(fade.progress(now) < 0.01);
        assert!(fade.progress(now + config::fade_in() / 2) > 0.25);
        assert!((fade.progress(now + config::fade_in()) - 1.0).abs() < f32::EPSILON);
        assert!(fade.is_settled(now + config::fade_in()));
    }

    #[test]
    fn fade_out_goes_from_one_to_zero() {
        let now = Instant::now();
        let fade = Fade::fade_out(now);

        assert!((fade.progress(now) - 1.0).abs() < 0.01);
        assert!(fade.progress(now + config::fade_out()) < f32::EPSILON);
        assert!(fade.is_settled(now + config::fade_out()));
    }

    #[test]
    fn progress_is_clamped_past_the_end() {
        let now = Instant::now();
        let fade = Fade::fade_out(now);
        assert_eq!(fade.progress(now + Duration::from_secs(10)), 0.0);
    }
}
