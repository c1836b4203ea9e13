use crate::constants::{
    CONTACT_FORM_ID, FORM_SENDING_MS, FORM_SENT_MS, SENDING_HTML, SENT_HTML, SUBMIT_SELECTOR,
};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn log_fields(form: &web::HtmlFormElement) {
    let Ok(data) = web::FormData::new_with_form(form) else {
        return;
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return;
    };
    for entry in entries.flatten() {
        let pair: js_sys::Array = entry.unchecked_into();
        log::info!(
            "[contact] {} = {}",
            pair.get(0).as_string().unwrap_or_default(),
            pair.get(1).as_string().unwrap_or_default()
        );
    }
}

/// Intercepts the contact form and plays the sending / sent button states.
pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let target = form.clone();
    dom::add_listener(&target, "submit", move |ev: web::Event| {
        ev.prevent_default();
        log_fields(&form);

        let Some(button) = form
            .query_selector(SUBMIT_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
        else {
            return;
        };
        let original = button.inner_html();
        button.set_inner_html(SENDING_HTML);
        button.set_disabled(true);

        let form = form.clone();
        dom::set_timeout(FORM_SENDING_MS, move || {
            button.set_inner_html(SENT_HTML);
            dom::set_timeout(FORM_SENT_MS, move || {
                button.set_inner_html(&original);
                button.set_disabled(false);
                form.reset();
            });
        });
    });
}
