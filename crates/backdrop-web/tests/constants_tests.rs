// Host-side tests for page timings and DOM hooks.
// The web crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod sections {
    include!("../src/sections.rs");
}

use constants::*;
use sections::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(LOADER_HIDE_MS > 0);
    assert!(LOADER_REMOVE_MS > 0);
    assert!(INDICATOR_MOVE_MS > 0);
    assert!(FORM_SENDING_MS > 0);
    assert!(FORM_SENT_MS > 0);
    assert!(BREAKING_MS > 0);
    assert!(BURST_DURATION_MS > 0.0);
    assert!(STATS_LOG_EVERY_FRAMES > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn loader_fades_before_it_is_removed() {
    assert!(LOADER_REMOVE_MS < LOADER_HIDE_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn observer_options_match_navbar() {
    assert!(OBSERVER_THRESHOLD > 0.0 && OBSERVER_THRESHOLD <= 1.0);
    let inset = format!("-{}px", NAVBAR_OFFSET_PX as i32);
    let margins: Vec<_> = OBSERVER_ROOT_MARGIN.split_whitespace().collect();
    assert_eq!(margins, [inset.as_str(), "0px", inset.as_str(), "0px"]);
}

#[test]
fn selectors_are_well_formed() {
    for sel in [
        NAV_LINK_SELECTOR,
        NAV_MENU_SELECTOR,
        HAMBURGER_SELECTOR,
        INDICATOR_SELECTOR,
        SECTION_SELECTOR,
        HERO_SELECTOR,
        BACKGROUND_SELECTOR,
        SKILL_BAR_SELECTOR,
        REVEAL_ITEM_SELECTOR,
        SOCIAL_ICON_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel} should be a class selector");
    }
    for id in [CANVAS_ID, LOADER_ID, CONTACT_FORM_ID] {
        assert!(!id.is_empty() && !id.contains(' '));
    }
}

#[test]
fn button_labels_carry_text() {
    assert!(SENDING_HTML.contains("Sending..."));
    assert!(SENT_HTML.contains("Message Sent!"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn social_link_opens_while_icon_is_breaking() {
    assert!(SOCIAL_OPEN_DELAY_MS < BREAKING_MS);
    assert!(BURST_DOT_STYLE.contains("position: fixed"));
}
