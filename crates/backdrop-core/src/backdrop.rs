use crate::config::BackdropConfig;
use crate::error::SimError;
use crate::field::AmbientField;
use crate::surface::Surface;
use crate::trail::CursorTrail;
use crate::viewport::{ResizeDebouncer, Viewport};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Counts from one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub ambient: usize,
    pub ambient_links: usize,
    pub trail: usize,
    pub trail_links: usize,
}

/// All mutable backdrop state: both pools, the pointer and the viewport.
///
/// Input handlers write into it between frames; [`Backdrop::step`] reads it,
/// advances both pools and paints them.
pub struct Backdrop {
    config: BackdropConfig,
    field: Option<AmbientField>,
    trail: CursorTrail,
    pointer: Option<Vec2>,
    viewport: Viewport,
    resize: ResizeDebouncer,
    rng: StdRng,
}

impl Backdrop {
    pub fn new(config: BackdropConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: BackdropConfig, rng: StdRng) -> Self {
        Self {
            trail: CursorTrail::new(config.trail_capacity),
            resize: ResizeDebouncer::new(config.resize_debounce),
            field: None,
            pointer: None,
            viewport: Viewport::default(),
            rng,
            config,
        }
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    pub fn field(&self) -> Option<&AmbientField> {
        self.field.as_ref()
    }

    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_built(&self) -> bool {
        self.field.is_some()
    }

    /// Repopulates the ambient pool for `viewport` right away.
    pub fn rebuild(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        match self.field.as_mut() {
            Some(field) => field.rebuild(viewport, &self.config, &mut self.rng),
            None => {
                self.field = Some(AmbientField::build(viewport, &self.config, &mut self.rng));
            }
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
        self.trail.spawn(x, y, &mut self.rng);
    }

    /// Bounds follow the new size at once; the pool rebuild waits for the
    /// debounce window to pass without further resizes.
    pub fn on_resize(&mut self, viewport: Viewport, now: Instant) {
        self.viewport = viewport;
        self.resize.request(viewport, now);
    }

    pub fn has_pending_resize(&self) -> bool {
        self.resize.is_pending()
    }

    /// One frame: settle a pending resize, clear, then step field and trail.
    pub fn step(
        &mut self,
        surface: &mut dyn Surface,
        now: Instant,
    ) -> Result<FrameStats, SimError> {
        if self.field.is_none() {
            return Err(SimError::NotInitialized);
        }
        if let Some(vp) = self.resize.poll(now) {
            log::debug!("[resize] settled at {:.0}x{:.0}", vp.width, vp.height);
            self.rebuild(vp);
        }
        let field = self.field.as_mut().ok_or(SimError::NotInitialized)?;

        surface.clear();
        let ambient_links = field.step(self.viewport, self.pointer, surface);
        let trail_links = self.trail.step(&mut self.rng, surface);

        Ok(FrameStats {
            ambient: field.len(),
            ambient_links,
            trail: self.trail.len(),
            trail_links,
        })
    }
}
