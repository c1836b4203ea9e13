#![cfg(target_arch = "wasm32")]
use backdrop_core::{Backdrop, BackdropConfig, Runner};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod loader;
mod nav;
mod parallax;
mod reveal;
mod sections;
mod social;

use canvas::CanvasSurface;
use frame::FrameContext;
use sections::Section;

thread_local! {
    static BACKGROUND: RefCell<Option<Rc<RefCell<FrameContext>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::document_ready(&document).await?;

    loader::schedule_hide(&document);

    let current: nav::CurrentSection = Rc::new(Cell::new(Section::Home));
    nav::wire_nav(&document);
    if let Err(e) = nav::observe_sections(&document, current.clone()) {
        log::warn!("[nav] section tracking disabled: {:?}", e);
    }
    events::wire_section_keys(&document, current.clone());
    events::wire_swipe(&document, current.clone());
    parallax::wire_hero(&window, &document, current);
    parallax::wire_scroll(&window, &document);
    reveal::wire_reveal(&window, &document);
    social::wire_social_icons(&document);
    contact::wire_contact_form(&document);

    start_background(&window, &document)
}

fn start_background(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let vp = dom::sync_canvas_to_window(&canvas);
    log::info!("[loop] canvas {}x{}", vp.width, vp.height);

    let backdrop = Backdrop::with_rng(BackdropConfig::default(), StdRng::from_entropy());
    let surface = CanvasSurface::new(canvas.clone())?;
    let frame_ctx = frame::start_loop(Runner::new(backdrop, surface));

    events::wire_pointer(window, frame_ctx.clone());
    events::wire_resize(window, canvas, frame_ctx.clone());
    BACKGROUND.with(|bg| *bg.borrow_mut() = Some(frame_ctx));
    Ok(())
}

fn with_background(f: impl FnOnce(&mut FrameContext)) {
    BACKGROUND.with(|bg| match bg.borrow().as_ref() {
        Some(ctx) => f(&mut ctx.borrow_mut()),
        None => log::warn!("[loop] background not started"),
    });
}

/// Halts the background animation; the last frame stays on the canvas.
#[wasm_bindgen]
pub fn stop_background() {
    with_background(FrameContext::stop);
}

#[wasm_bindgen]
pub fn resume_background() {
    with_background(FrameContext::start);
}
