use instant::Instant;
use std::time::Duration;

/// Size of the drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Negative and non-finite extents collapse to zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Coalesces bursts of resize events into one rebuild.
///
/// Every `request` restarts the window; `poll` hands back the most recent
/// viewport once `window` has elapsed since the last request.
#[derive(Clone, Debug)]
pub struct ResizeDebouncer {
    window: Duration,
    pending: Option<(Viewport, Instant)>,
}

impl ResizeDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn request(&mut self, viewport: Viewport, now: Instant) {
        self.pending = Some((viewport, now));
    }

    pub fn poll(&mut self, now: Instant) -> Option<Viewport> {
        match self.pending {
            Some((vp, at)) if now >= at + self.window => {
                self.pending = None;
                Some(vp)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
