use crate::constants::{BACKGROUND_SELECTOR, HERO_SELECTOR};
use crate::dom;
use crate::nav::CurrentSection;
use crate::sections::{hero_offset, scroll_parallax_offset, Section};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drifts the hero content with the pointer while the home section is current.
pub fn wire_hero(window: &web::Window, document: &web::Document, current: CurrentSection) {
    let Some(hero) = dom::query_html(document, HERO_SELECTOR) else {
        return;
    };
    dom::add_listener(window, "pointermove", move |ev: web::PointerEvent| {
        if current.get() != Section::Home {
            return;
        }
        let vp = dom::window_size();
        let (dx, dy) = hero_offset(
            ev.client_x() as f64,
            ev.client_y() as f64,
            vp.width as f64,
            vp.height as f64,
        );
        _ = hero
            .style()
            .set_property("transform", &format!("translate({}px, {}px)", dx, dy));
    });
}

/// Scrolls the background at half rate, at most once per animation frame.
pub fn wire_scroll(window: &web::Window, document: &web::Document) {
    let Some(background) = dom::query_html(document, BACKGROUND_SELECTOR) else {
        return;
    };
    let ticking = Rc::new(Cell::new(false));
    let wnd = window.clone();
    dom::add_listener(window, "scroll", move |_ev: web::Event| {
        if ticking.replace(true) {
            return;
        }
        let background = background.clone();
        let ticking = ticking.clone();
        let scroll_wnd = wnd.clone();
        let update = Closure::once_into_js(move || {
            let offset = scroll_parallax_offset(scroll_wnd.scroll_y().unwrap_or(0.0));
            _ = background
                .style()
                .set_property("transform", &format!("translateY({}px)", offset));
            ticking.set(false);
        });
        if wnd.request_animation_frame(update.unchecked_ref()).is_err() {
            ticking.set(false);
        }
    });
}
