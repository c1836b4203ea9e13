use crate::canvas::CanvasSurface;
use crate::constants::STATS_LOG_EVERY_FRAMES;
use backdrop_core::{FrameScheduler, Runner};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` as a [`FrameScheduler`].
pub struct RafScheduler {
    tick: Tick,
    handle: Option<i32>,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(h) => self.handle = Some(h),
                Err(e) => log::error!("[loop] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn cancel_frame(&mut self) {
        if let (Some(w), Some(h)) = (web::window(), self.handle.take()) {
            _ = w.cancel_animation_frame(h);
        }
    }
}

pub struct FrameContext {
    pub runner: Runner<CanvasSurface>,
    pub scheduler: RafScheduler,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // The pending callback is the one running now.
        self.scheduler.handle = None;
        match self.runner.on_frame(Instant::now(), &mut self.scheduler) {
            Ok(Some(stats)) if self.runner.frames() % STATS_LOG_EVERY_FRAMES == 0 => {
                log::debug!(
                    "[loop] frame {} ambient={} links={} trail={} links={}",
                    self.runner.frames(),
                    stats.ambient,
                    stats.ambient_links,
                    stats.trail,
                    stats.trail_links
                );
            }
            Ok(_) => {}
            Err(e) => log::error!("[loop] frame error, loop stopped: {}", e),
        }
    }

    pub fn start(&mut self) {
        self.runner.start(&mut self.scheduler);
    }

    pub fn stop(&mut self) {
        self.runner.stop(&mut self.scheduler);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.runner.on_pointer_move(x, y);
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.runner.on_resize(width, height, Instant::now());
    }
}

/// Wraps `runner` in a self re-arming animation-frame callback and starts it.
pub fn start_loop(runner: Runner<CanvasSurface>) -> Rc<RefCell<FrameContext>> {
    let tick: Tick = Rc::new(RefCell::new(None));
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        runner,
        scheduler: RafScheduler {
            tick: tick.clone(),
            handle: None,
        },
    }));
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    frame_ctx.borrow_mut().start();
    frame_ctx
}
