use crate::dom;
use crate::nav::{self, CurrentSection};
use crate::sections::{classify_swipe, section_after_swipe};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

fn first_changed_y(ev: &web::TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| t.screen_y() as f64)
}

/// Vertical swipes move to the next or previous section.
pub fn wire_swipe(document: &web::Document, current: CurrentSection) {
    let start_y = Rc::new(Cell::new(0.0_f64));

    let start = start_y.clone();
    dom::add_listener(document, "touchstart", move |ev: web::TouchEvent| {
        if let Some(y) = first_changed_y(&ev) {
            start.set(y);
        }
    });

    let doc = document.clone();
    dom::add_listener(document, "touchend", move |ev: web::TouchEvent| {
        let Some(end_y) = first_changed_y(&ev) else {
            return;
        };
        let target = classify_swipe(start_y.get(), end_y)
            .and_then(|swipe| section_after_swipe(current.get(), swipe));
        if let Some(target) = target {
            nav::scroll_to_section(&doc, target);
        }
    });
}
