use crate::constants::{HIDDEN_CLASS, LOADER_HIDE_MS, LOADER_ID, LOADER_REMOVE_MS};
use crate::dom;
use web_sys as web;

/// Fades the splash loader out, then drops it from the DOM.
pub fn schedule_hide(document: &web::Document) {
    let Some(loader) = document.get_element_by_id(LOADER_ID) else {
        log::debug!("[loader] no #{}", LOADER_ID);
        return;
    };
    dom::set_timeout(LOADER_HIDE_MS, move || {
        _ = loader.class_list().add_1(HIDDEN_CLASS);
        dom::set_timeout(LOADER_REMOVE_MS, move || loader.remove());
    });
}
