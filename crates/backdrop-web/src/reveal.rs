use crate::constants::{REVEAL_ITEM_SELECTOR, SKILL_BAR_SELECTOR, WIDTH_ATTR};
use crate::dom;
use crate::sections::{in_view, reveal_delay_ms};
use wasm_bindgen::JsCast;
use web_sys as web;

fn visible(el: &web::Element, viewport_height: f64) -> bool {
    let rect = el.get_bounding_client_rect();
    in_view(rect.top(), rect.bottom(), viewport_height)
}

/// Fills every skill bar in view to its `data-width`.
fn fill_skill_bars(document: &web::Document) {
    let height = dom::window_size().height as f64;
    for bar in dom::query_all(document, SKILL_BAR_SELECTOR) {
        if !visible(&bar, height) {
            continue;
        }
        let (Some(width), Ok(bar)) = (
            bar.get_attribute(WIDTH_ATTR),
            bar.dyn_into::<web::HtmlElement>(),
        ) else {
            continue;
        };
        _ = bar.style().set_property("width", &width);
    }
}

/// Slides list items in view into place, staggered by document order.
fn reveal_items(document: &web::Document) {
    let height = dom::window_size().height as f64;
    for (index, item) in dom::query_all(document, REVEAL_ITEM_SELECTOR)
        .into_iter()
        .enumerate()
    {
        if !visible(&item, height) {
            continue;
        }
        let Ok(item) = item.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        dom::set_timeout(reveal_delay_ms(index), move || {
            let style = item.style();
            _ = style.set_property("opacity", "1");
            _ = style.set_property("transform", "translateX(0)");
        });
    }
}

/// Runs both reveals once now and again on every scroll.
pub fn wire_reveal(window: &web::Window, document: &web::Document) {
    fill_skill_bars(document);
    reveal_items(document);

    let doc = document.clone();
    dom::add_listener(window, "scroll", move |_ev: web::Event| {
        fill_skill_bars(&doc);
        reveal_items(&doc);
    });
}
