//! Canvas sizing policy
//!
//! Width is linear in leaf count and height linear in depth, each floored at
//! a configured minimum: small trees keep a usable canvas, large trees grow
//! proportionally.

use serde::Serialize;

use crate::tree::TreeMetrics;

use super::config::LayoutConfig;

/// Drawing surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl LayoutConfig {
    /// Derive the drawing surface size from tree metrics.
    ///
    /// Monotonic in both metrics and never below the configured floors.
    pub fn canvas_size(&self, metrics: &TreeMetrics) -> CanvasSize {
        CanvasSize {
            width: (metrics.leaves as f64 * self.leaf_unit).max(self.min_width),
            height: (metrics.depth as f64 * self.depth_unit).max(self.min_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_tree_sits_on_the_floor() {
        let config = LayoutConfig::detailed();
        let size = config.canvas_size(&TreeMetrics { depth: 0, leaves: 1 });
        assert_eq!(size.width, 1800.0);
        assert_eq!(size.height, 1400.0);
    }

    #[test]
    fn test_wide_tree_grows_linearly() {
        let config = LayoutConfig::detailed();
        let size = config.canvas_size(&TreeMetrics { depth: 3, leaves: 40 });
        assert_eq!(size.width, 4000.0);
        assert_eq!(size.height, 1400.0);
    }

    #[test]
    fn test_deep_tree_grows_linearly() {
        let config = LayoutConfig::detailed();
        let size = config.canvas_size(&TreeMetrics { depth: 12, leaves: 2 });
        assert_eq!(size.width, 1800.0);
        assert_eq!(size.height, 2400.0);
    }

    #[test]
    fn test_sizing_is_monotonic() {
        let config = LayoutConfig::compact();
        let mut previous_width = 0.0;
        for leaves in 0..64 {
            let size = config.canvas_size(&TreeMetrics { depth: 1, leaves });
            assert!(size.width >= previous_width);
            previous_width = size.width;
        }
        let mut previous_height = 0.0;
        for depth in 0..64 {
            let size = config.canvas_size(&TreeMetrics { depth, leaves: 1 });
            assert!(size.height >= previous_height);
            previous_height = size.height;
        }
    }
}
