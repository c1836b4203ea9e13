use crate::dom;
use crate::nav::{self, CurrentSection};
use crate::sections::section_for_key;
use web_sys as web;

/// ArrowDown / ArrowUp step through the page sections.
pub fn wire_section_keys(document: &web::Document, current: CurrentSection) {
    let doc = document.clone();
    dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
        if let Some(target) = section_for_key(current.get(), &ev.key()) {
            ev.prevent_default();
            nav::scroll_to_section(&doc, target);
        }
    });
}
