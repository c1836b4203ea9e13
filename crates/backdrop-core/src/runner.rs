use crate::backdrop::{Backdrop, FrameStats};
use crate::error::SimError;
use crate::surface::Surface;
use crate::viewport::Viewport;
use instant::Instant;

/// Host hook that calls back once per display refresh.
///
/// On the web this is `requestAnimationFrame`; tests use a counter and call
/// [`Runner::on_frame`] by hand.
pub trait FrameScheduler {
    fn request_frame(&mut self);
    fn cancel_frame(&mut self) {}
}

/// Start/stop-able frame loop owning a [`Backdrop`] and the surface it paints.
pub struct Runner<S: Surface> {
    backdrop: Backdrop,
    surface: S,
    running: bool,
    frames: u64,
}

impl<S: Surface> Runner<S> {
    pub fn new(backdrop: Backdrop, surface: S) -> Self {
        Self {
            backdrop,
            surface,
            running: false,
            frames: 0,
        }
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn backdrop_mut(&mut self) -> &mut Backdrop {
        &mut self.backdrop
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Builds the ambient pool from the surface size if needed and arms the first frame.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.running {
            log::warn!("[loop] start ignored; already running");
            return;
        }
        if !self.backdrop.is_built() {
            let vp = Viewport::new(self.surface.width(), self.surface.height());
            self.backdrop.rebuild(vp);
        }
        self.running = true;
        log::info!("[loop] started");
        scheduler.request_frame();
    }

    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        if !self.running {
            return;
        }
        self.running = false;
        scheduler.cancel_frame();
        log::info!("[loop] stopped after {} frames", self.frames);
    }

    /// Runs one frame and re-arms. Returns `Ok(None)` once stopped.
    ///
    /// A failed frame stops the loop before the error is handed back.
    pub fn on_frame(
        &mut self,
        now: Instant,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<Option<FrameStats>, SimError> {
        if !self.running {
            return Ok(None);
        }
        match self.backdrop.step(&mut self.surface, now) {
            Ok(stats) => {
                self.frames += 1;
                scheduler.request_frame();
                Ok(Some(stats))
            }
            Err(e) => {
                self.running = false;
                Err(e)
            }
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.backdrop.on_pointer_move(x, y);
    }

    pub fn on_resize(&mut self, width: f32, height: f32, now: Instant) {
        self.backdrop.on_resize(Viewport::new(width, height), now);
    }
}
