// SPDX-License-Identifier: MPL-2.0
//! Zoom state for the image pane.

use crate::config::{
    DEFAULT_ZOOM_PERCENT, DEFAULT_ZOOM_STEP_PERCENT, MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT,
};

/// Zoom percentage, guaranteed to be within valid range (10%–800%).
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPercent(f32);

impl ZoomPercent {
    /// Creates a new zoom percentage, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a multiplier (e.g., 100% → 1.0).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }

    /// Returns whether the zoom is at the default value.
    #[must_use]
    pub fn is_default(self) -> bool {
        (self.0 - DEFAULT_ZOOM_PERCENT).abs() < f32::EPSILON
    }

    /// Returns whether the zoom is at the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_PERCENT
    }

    /// Returns whether the zoom is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_PERCENT
    }

    /// Increases zoom by one step.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + DEFAULT_ZOOM_STEP_PERCENT)
    }

    /// Decreases zoom by one step.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - DEFAULT_ZOOM_STEP_PERCENT)
    }
}

impl Default for ZoomPercent {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(ZoomPercent::new(1.0).value(), MIN_ZOOM_PERCENT);
        assert_eq!(ZoomPercent::new(5000.0).value(), MAX_ZOOM_PERCENT);
    }

    #[test]
    fn default_is_default() {
        assert!(ZoomPercent::default().is_default());
        assert!(!ZoomPercent::new(150.0).is_default());
    }

    #[test]
    fn as_factor_converts_percentage() {
        assert!((ZoomPercent::new(200.0).as_factor() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_in_and_out_step_symmetrically() {
        let start = ZoomPercent::default();
        let stepped = start.zoom_in().zoom_out();
        assert!((stepped.value() - start.value()).abs() < f32::EPSILON);
    }

    #[test]
    fn zoom_saturates_at_bounds() {
        let mut zoom = ZoomPercent::new(MAX_ZOOM_PERCENT);
        zoom = zoom.zoom_in();
        assert!(zoom.is_max());

        let mut zoom = ZoomPercent::new(MIN_ZOOM_PERCENT);
        zoom = zoom.zoom_out();
        assert!(zoom.is_min());
    }
}
