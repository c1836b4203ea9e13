// Host-side tests for section navigation and parallax helpers.
// The web crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod sections {
    include!("../src/sections.rs");
}

use sections::*;

#[test]
fn sections_are_in_page_order() {
    let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
    assert_eq!(ids, ["home", "about", "skills", "projects", "contact"]);
    for (i, s) in Section::ALL.iter().enumerate() {
        assert_eq!(s.index(), i);
        assert_eq!(Section::from_id(s.id()), Some(*s));
    }
    assert_eq!(Section::from_id("blog"), None);
    assert_eq!(Section::from_id(""), None);
}

#[test]
fn neighbours_stop_at_the_ends() {
    assert_eq!(Section::Home.prev(), None);
    assert_eq!(Section::Home.next(), Some(Section::About));
    assert_eq!(Section::Projects.next(), Some(Section::Contact));
    assert_eq!(Section::Contact.next(), None);
    assert_eq!(Section::Contact.prev(), Some(Section::Projects));
}

#[test]
fn arrow_keys_step_sections() {
    assert_eq!(
        section_for_key(Section::About, "ArrowDown"),
        Some(Section::Skills)
    );
    assert_eq!(section_for_key(Section::About, "ArrowUp"), Some(Section::Home));
    assert_eq!(section_for_key(Section::Home, "ArrowUp"), None);
    assert_eq!(section_for_key(Section::Contact, "ArrowDown"), None);
    assert_eq!(section_for_key(Section::About, "ArrowLeft"), None);
    assert_eq!(section_for_key(Section::About, "j"), None);
}

#[test]
fn short_touches_are_not_swipes() {
    assert_eq!(classify_swipe(300.0, 300.0), None);
    assert_eq!(classify_swipe(300.0, 250.0), None);
    assert_eq!(classify_swipe(300.0, 350.0), None);
}

#[test]
fn swipe_direction_follows_finger() {
    // Finger moves up the screen: content scrolls on to the next section.
    assert_eq!(classify_swipe(400.0, 300.0), Some(Swipe::Up));
    assert_eq!(classify_swipe(300.0, 400.0), Some(Swipe::Down));

    assert_eq!(
        section_after_swipe(Section::Skills, Swipe::Up),
        Some(Section::Projects)
    );
    assert_eq!(
        section_after_swipe(Section::Skills, Swipe::Down),
        Some(Section::About)
    );
    assert_eq!(section_after_swipe(Section::Contact, Swipe::Up), None);
    assert_eq!(section_after_swipe(Section::Home, Swipe::Down), None);
}

#[test]
fn scroll_target_leaves_room_for_navbar() {
    assert_eq!(section_scroll_top(1000.0), 930.0);
    assert_eq!(section_scroll_top(0.0), -NAVBAR_OFFSET_PX);
}

#[test]
fn hero_offset_is_a_small_fraction_of_the_window() {
    let (dx, dy) = hero_offset(960.0, 270.0, 1920.0, 1080.0);
    assert!((dx - 0.5).abs() < 1e-9);
    assert!((dy - 0.25).abs() < 1e-9);

    let (dx, dy) = hero_offset(1920.0, 1080.0, 1920.0, 1080.0);
    assert!((dx - 1.0).abs() < 1e-9);
    assert!((dy - 1.0).abs() < 1e-9);
}

#[test]
fn hero_offset_ignores_empty_window() {
    assert_eq!(hero_offset(10.0, 10.0, 0.0, 600.0), (0.0, 0.0));
    assert_eq!(hero_offset(10.0, 10.0, 800.0, 0.0), (0.0, 0.0));
}

#[test]
fn background_scrolls_at_half_rate_upward() {
    assert_eq!(scroll_parallax_offset(0.0), 0.0);
    assert_eq!(scroll_parallax_offset(200.0), -100.0);
}

#[test]
fn indicator_centres_under_link() {
    // Link spans 300..380 inside a menu starting at 100.
    assert_eq!(indicator_left(300.0, 80.0, 100.0), 230.0);
    assert_eq!(indicator_left(100.0, 20.0, 100.0), 0.0);
}

#[test]
fn in_view_needs_overlap_with_viewport() {
    assert!(in_view(100.0, 200.0, 800.0));
    assert!(in_view(-50.0, 10.0, 800.0));
    assert!(in_view(799.0, 900.0, 800.0));
    // Touching an edge is not enough.
    assert!(!in_view(800.0, 900.0, 800.0));
    assert!(!in_view(-100.0, 0.0, 800.0));
    assert!(!in_view(10.0, 20.0, 0.0));
}

#[test]
fn reveal_is_staggered_by_document_order() {
    assert_eq!(reveal_delay_ms(0), 0);
    assert_eq!(reveal_delay_ms(1), 100);
    assert_eq!(reveal_delay_ms(7), 700);
    assert_eq!(reveal_delay_ms(usize::MAX), i32::MAX);
}

#[test]
fn burst_dots_ring_the_icon() {
    let (dx, dy) = burst_offset(0, 0.0);
    assert!((dx - 50.0).abs() < 1e-9 && dy.abs() < 1e-9);

    // A quarter turn, at the far end of the flight range.
    let (dx, dy) = burst_offset(2, 1.0);
    assert!(dx.abs() < 1e-9 && (dy - 80.0).abs() < 1e-9);

    for i in 0..BURST_PARTICLES {
        let (dx, dy) = burst_offset(i, 0.5);
        assert!(((dx * dx + dy * dy).sqrt() - 65.0).abs() < 1e-9);
    }
}

#[test]
fn only_known_platforms_open() {
    assert_eq!(social_url("github"), Some("https://github.com"));
    assert_eq!(social_url("linkedin"), Some("https://linkedin.com"));
    assert_eq!(social_url("twitter"), Some("https://twitter.com"));
    assert_eq!(social_url("instagram"), Some("https://instagram.com"));
    assert_eq!(social_url("myspace"), None);
    assert_eq!(social_url(""), None);
}
