//! Runtime knobs for a [`Backdrop`](crate::Backdrop).

use crate::constants::*;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct BackdropConfig {
    pub max_ambient: usize,
    pub ambient_spacing_px: f32,
    pub trail_capacity: usize,
    pub resize_debounce: Duration,
    pub seed: u64,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            max_ambient: AMBIENT_MAX_PARTICLES,
            ambient_spacing_px: AMBIENT_SPACING_PX,
            trail_capacity: TRAIL_CAPACITY,
            resize_debounce: RESIZE_DEBOUNCE,
            seed: 42,
        }
    }
}

impl BackdropConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Pool size for a viewport `width` px wide.
    pub fn ambient_count(&self, width: f32) -> usize {
        if !(width > 0.0) || !(self.ambient_spacing_px > 0.0) {
            return 0;
        }
        ((width / self.ambient_spacing_px).floor() as usize).min(self.max_ambient)
    }
}
