use crate::constants::{
    ACTIVE_CLASS, HAMBURGER_SELECTOR, INDICATOR_MOVE_MS, INDICATOR_SELECTOR, MOVING_CLASS,
    NAV_LINK_SELECTOR, NAV_MENU_SELECTOR, OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLD, SECTION_ATTR,
    SECTION_SELECTOR,
};
use crate::dom;
use crate::sections::{indicator_left, section_scroll_top, Section};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Section currently in view, shared by the navigation handlers.
pub type CurrentSection = Rc<Cell<Section>>;

pub fn scroll_to_section(document: &web::Document, section: Section) {
    let Some(el) = document
        .get_element_by_id(section.id())
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::warn!("[nav] no #{} on the page", section.id());
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let opts = web::ScrollToOptions::new();
    opts.set_top(section_scroll_top(el.offset_top() as f64));
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

fn link_section(link: &web::Element) -> Option<Section> {
    link.get_attribute(SECTION_ATTR)
        .as_deref()
        .and_then(Section::from_id)
}

/// Slides the indicator under `link`.
pub fn move_indicator(document: &web::Document, link: &web::Element) {
    let (Some(indicator), Some(menu)) = (
        dom::query_html(document, INDICATOR_SELECTOR),
        document.query_selector(NAV_MENU_SELECTOR).ok().flatten(),
    ) else {
        return;
    };
    let link_rect = link.get_bounding_client_rect();
    let menu_rect = menu.get_bounding_client_rect();
    let left = indicator_left(link_rect.left(), link_rect.width(), menu_rect.left());

    _ = indicator.class_list().add_1(MOVING_CLASS);
    _ = indicator.style().set_property("left", &format!("{}px", left));
    dom::set_timeout(INDICATOR_MOVE_MS, move || {
        _ = indicator.class_list().remove_1(MOVING_CLASS);
    });
}

/// Marks the link for `section` active, clears the others and moves the indicator.
pub fn set_active_link(document: &web::Document, section: Section) {
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        _ = link.class_list().remove_1(ACTIVE_CLASS);
        if link_section(&link) == Some(section) {
            _ = link.class_list().add_1(ACTIVE_CLASS);
            move_indicator(document, &link);
        }
    }
}

fn close_menu(document: &web::Document) {
    for sel in [HAMBURGER_SELECTOR, NAV_MENU_SELECTOR] {
        if let Some(el) = document.query_selector(sel).ok().flatten() {
            _ = el.class_list().remove_1(ACTIVE_CLASS);
        }
    }
}

/// Hamburger toggle, nav link clicks and the initial indicator position.
pub fn wire_nav(document: &web::Document) {
    if let Some(hamburger) = document.query_selector(HAMBURGER_SELECTOR).ok().flatten() {
        let doc = document.clone();
        let burger = hamburger.clone();
        dom::add_listener(&hamburger, "click", move |_ev: web::Event| {
            _ = burger.class_list().toggle(ACTIVE_CLASS);
            if let Some(menu) = doc.query_selector(NAV_MENU_SELECTOR).ok().flatten() {
                _ = menu.class_list().toggle(ACTIVE_CLASS);
            }
        });
    }

    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let Some(section) = link_section(&link) else {
            continue;
        };
        let doc = document.clone();
        dom::add_listener(&link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            set_active_link(&doc, section);
            scroll_to_section(&doc, section);
            close_menu(&doc);
        });
    }

    let active = format!("{}.{}", NAV_LINK_SELECTOR, ACTIVE_CLASS);
    if let Some(link) = document.query_selector(&active).ok().flatten() {
        move_indicator(document, &link);
    }
}

/// Tracks which section is in view and mirrors it onto the nav.
pub fn observe_sections(document: &web::Document, current: CurrentSection) -> anyhow::Result<()> {
    let doc = document.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(section) = Section::from_id(&target.id()) else {
                    continue;
                };
                if current.replace(section) != section {
                    log::debug!("[nav] section -> {}", section.id());
                }
                for s in dom::query_all(&doc, SECTION_SELECTOR) {
                    _ = s.class_list().remove_1(ACTIVE_CLASS);
                }
                _ = target.class_list().add_1(ACTIVE_CLASS);
                set_active_link(&doc, section);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    opts.set_root_margin(OBSERVER_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let sections = dom::query_all(document, SECTION_SELECTOR);
    for s in &sections {
        observer.observe(s);
    }
    log::info!("[nav] observing {} sections", sections.len());
    Ok(())
}
