// crates/polyui-layout/src/scale.rs

use glam::Vec2;
use polyui_core::{Axis, Vec2Ext};

/// Surface size information handed to every layout call.
///
/// Paddings in [`polyui_core::Align`] are authored against
/// `reference_size`; when the surface is resized they are scaled by
/// `current_size / reference_size` on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleContext {
    pub current_size: Vec2,
    pub reference_size: Vec2,
}

impl ScaleContext {
    pub fn new(current_size: Vec2, reference_size: Vec2) -> Self {
        Self { current_size, reference_size }
    }

    /// First layout of a surface: nothing to rescale.
    pub fn identity(size: Vec2) -> Self {
        Self::new(size, size)
    }

    /// Same reference, new surface size.
    pub fn resized(&self, current_size: Vec2) -> Self {
        Self::new(current_size, self.reference_size)
    }

    /// Per-axis padding multiplier. Axes with no usable reference are not scaled.
    pub fn factor(&self) -> Vec2 {
        let axis_factor = |current: f32, reference: f32| {
            if reference > 0.0 && current > 0.0 {
                current / reference
            } else {
                1.0
            }
        };
        Vec2::new(
            axis_factor(self.current_size.x, self.reference_size.x),
            axis_factor(self.current_size.y, self.reference_size.y),
        )
    }

    pub fn is_identity(&self) -> bool {
        self.factor() == Vec2::ONE
    }

    /// Full window extent on `axis`.
    pub fn window_extent(&self, axis: Axis) -> f32 {
        self.current_size.on(axis)
    }
}

impl Default for ScaleContext {
    fn default() -> Self {
        Self::identity(Vec2::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_has_unit_factor() {
        let scale = ScaleContext::identity(Vec2::new(640.0, 480.0));
        assert!(scale.is_identity());
        assert_eq!(scale.window_extent(Axis::Y), 480.0);
    }

    #[test]
    fn test_resize_factor() {
        let scale = ScaleContext::identity(Vec2::new(400.0, 300.0)).resized(Vec2::new(800.0, 150.0));
        assert_eq!(scale.factor(), Vec2::new(2.0, 0.5));
        assert!(!scale.is_identity());
    }

    #[test]
    fn test_degenerate_reference_is_ignored() {
        let scale = ScaleContext::new(Vec2::new(100.0, 100.0), Vec2::new(0.0, 50.0));
        assert_eq!(scale.factor(), Vec2::new(1.0, 2.0));
    }
}
