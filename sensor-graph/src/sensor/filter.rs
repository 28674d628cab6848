//! Exponential moving average over the three sensor axes
//!
//! Folds any number of raw readings per frame into one smoothed value.
//! O(1) per reading, no raw events are buffered.

use super::sample::Sample;
use crate::config::FILTER_ALPHA;

/// Per-axis EMA: `filtered' = alpha * raw + (1 - alpha) * filtered`
pub struct Filter {
    /// Smoothing coefficient in (0, 1] - lower = smoother, 1 = passthrough
    alpha: f32,

    /// Current smoothed value per axis
    state: Sample,
}

impl Filter {
    /// Create a filter starting from zero on every axis
    pub fn new(alpha: f32) -> Self {
        debug_assert!(alpha > 0.0 && alpha <= 1.0, "alpha must be in (0, 1], got {alpha}");
        Self {
            alpha,
            state: Sample::ZERO,
        }
    }

    /// Blend one raw reading into the state and return the new state
    pub fn update(&mut self, raw: Sample) -> Sample {
        let a = self.alpha;
        self.state.x = a * raw.x + (1.0 - a) * self.state.x;
        self.state.y = a * raw.y + (1.0 - a) * self.state.y;
        self.state.z = a * raw.z + (1.0 - a) * self.state.z;
        self.state
    }

    /// Current smoothed value
    pub fn current(&self) -> Sample {
        self.state
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::new(FILTER_ALPHA)
    }
}
