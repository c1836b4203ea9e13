use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Forwards window pointer moves to the backdrop in canvas px.
pub fn wire_pointer(window: &web::Window, frame_ctx: Rc<RefCell<FrameContext>>) {
    dom::add_listener(window, "pointermove", move |ev: web::PointerEvent| {
        frame_ctx
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    });
}

/// Keeps the canvas matched to the window; the backdrop debounces the pool rebuild.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    frame_ctx: Rc<RefCell<FrameContext>>,
) {
    dom::add_listener(window, "resize", move |_ev: web::Event| {
        let vp = dom::sync_canvas_to_window(&canvas);
        frame_ctx.borrow_mut().on_resize(vp.width, vp.height);
    });
}
