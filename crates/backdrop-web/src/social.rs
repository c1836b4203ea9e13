use crate::constants::{
    BREAKING_CLASS, BREAKING_MS, BURST_DOT_STYLE, BURST_DURATION_MS, PLATFORM_ATTR,
    SOCIAL_ICON_SELECTOR, SOCIAL_OPEN_DELAY_MS,
};
use crate::dom;
use crate::sections::{burst_offset, social_url, BURST_PARTICLES};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn keyframe(transform: &str, opacity: f64, easing: Option<&str>) -> js_sys::Object {
    let frame = js_sys::Object::new();
    _ = js_sys::Reflect::set(&frame, &"transform".into(), &transform.into());
    _ = js_sys::Reflect::set(&frame, &"opacity".into(), &JsValue::from_f64(opacity));
    if let Some(easing) = easing {
        _ = js_sys::Reflect::set(&frame, &"easing".into(), &easing.into());
    }
    frame
}

/// Throws a ring of dots out from the icon centre; each removes itself when done.
fn burst(document: &web::Document, icon: &web::Element) {
    let Some(body) = document.body() else {
        return;
    };
    let rect = icon.get_bounding_client_rect();
    let cx = rect.left() + rect.width() / 2.0;
    let cy = rect.top() + rect.height() / 2.0;

    for i in 0..BURST_PARTICLES {
        let Ok(dot) = document.create_element("div") else {
            return;
        };
        let style = format!("{} left: {}px; top: {}px;", BURST_DOT_STYLE, cx, cy);
        _ = dot.set_attribute("style", &style);
        if body.append_child(&dot).is_err() {
            return;
        }

        let (dx, dy) = burst_offset(i, js_sys::Math::random());
        let frames = js_sys::Array::of2(
            &keyframe("translate(0, 0) scale(1)", 1.0, Some("ease-out")),
            &keyframe(&format!("translate({}px, {}px) scale(0)", dx, dy), 0.0, None),
        );
        let animation = dot.animate_with_f64(Some(&frames), BURST_DURATION_MS);
        let done = Closure::once_into_js(move || dot.remove());
        animation.set_onfinish(Some(done.unchecked_ref()));
    }
}

/// Icon clicks play the break effect, then open the platform in a new tab.
pub fn wire_social_icons(document: &web::Document) {
    for icon in dom::query_all(document, SOCIAL_ICON_SELECTOR) {
        let doc = document.clone();
        let target = icon.clone();
        dom::add_listener(&target, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            _ = icon.class_list().add_1(BREAKING_CLASS);
            burst(&doc, &icon);
            let breaking = icon.clone();
            dom::set_timeout(BREAKING_MS, move || {
                _ = breaking.class_list().remove_1(BREAKING_CLASS);
            });

            let platform = icon.get_attribute(PLATFORM_ATTR).unwrap_or_default();
            log::info!("[social] opening {}", platform);
            if let Some(url) = social_url(&platform) {
                dom::set_timeout(SOCIAL_OPEN_DELAY_MS, move || {
                    if let Some(w) = web::window() {
                        _ = w.open_with_url_and_target(url, "_blank");
                    }
                });
            }
        });
    }
}
