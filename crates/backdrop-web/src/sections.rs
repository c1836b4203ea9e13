// Page sections and the small bits of geometry and timing the page plumbing needs.
// Pure functions only, so host tests can include this file.

use std::f64::consts::TAU;

// Fixed navbar height that section scrolling leaves clear
pub const NAVBAR_OFFSET_PX: f64 = 70.0;
// Minimum vertical travel for a touch gesture to count as a swipe
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
// Hero drift: percent of viewport times this many px
pub const HERO_PARALLAX_SCALE: f64 = 0.01;
// Background scroll rate relative to the page
pub const SCROLL_PARALLAX_RATE: f64 = -0.5;
// Half the indicator width, so it centres under a link
pub const INDICATOR_HALF_WIDTH_PX: f64 = 10.0;
// Delay between consecutive list items revealing
pub const REVEAL_STAGGER_MS: i32 = 100;
// Social icon burst: dots per click and how far they fly
pub const BURST_PARTICLES: usize = 8;
pub const BURST_DISTANCE_MIN_PX: f64 = 50.0;
pub const BURST_DISTANCE_SPAN_PX: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Section> {
        Section::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Section> {
        self.index().checked_sub(1).map(|i| Section::ALL[i])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Up,
    Down,
}

/// Classifies a touch from `start_y` to `end_y` (screen px).
#[inline]
pub fn classify_swipe(start_y: f64, end_y: f64) -> Option<Swipe> {
    let diff = start_y - end_y;
    if diff.abs() <= SWIPE_THRESHOLD_PX {
        None
    } else if diff > 0.0 {
        Some(Swipe::Up)
    } else {
        Some(Swipe::Down)
    }
}

/// Swiping up reveals the next section, swiping down the previous one.
#[inline]
pub fn section_after_swipe(current: Section, swipe: Swipe) -> Option<Section> {
    match swipe {
        Swipe::Up => current.next(),
        Swipe::Down => current.prev(),
    }
}

#[inline]
pub fn section_for_key(current: Section, key: &str) -> Option<Section> {
    match key {
        "ArrowDown" => current.next(),
        "ArrowUp" => current.prev(),
        _ => None,
    }
}

#[inline]
pub fn section_scroll_top(offset_top: f64) -> f64 {
    offset_top - NAVBAR_OFFSET_PX
}

/// Hero translation in px for a pointer at (`x`, `y`) in a `width` x `height` window.
#[inline]
pub fn hero_offset(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        x / width * 100.0 * HERO_PARALLAX_SCALE,
        y / height * 100.0 * HERO_PARALLAX_SCALE,
    )
}

#[inline]
pub fn scroll_parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * SCROLL_PARALLAX_RATE
}

/// Left offset of the nav indicator inside the menu for a link box.
#[inline]
pub fn indicator_left(link_left: f64, link_width: f64, menu_left: f64) -> f64 {
    link_left - menu_left + link_width / 2.0 - INDICATOR_HALF_WIDTH_PX
}

/// Whether a box spanning `top..bottom` overlaps a viewport `viewport_height` tall.
#[inline]
pub fn in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

/// Reveal delay for the `index`-th item in document order.
#[inline]
pub fn reveal_delay_ms(index: usize) -> i32 {
    i32::try_from(index)
        .unwrap_or(i32::MAX)
        .saturating_mul(REVEAL_STAGGER_MS)
}

/// Offset of the `i`-th burst dot; `roll` in [0, 1) stretches its flight.
#[inline]
pub fn burst_offset(i: usize, roll: f64) -> (f64, f64) {
    let angle = i as f64 / BURST_PARTICLES as f64 * TAU;
    let distance = BURST_DISTANCE_MIN_PX + roll * BURST_DISTANCE_SPAN_PX;
    (angle.cos() * distance, angle.sin() * distance)
}

pub fn social_url(platform: &str) -> Option<&'static str> {
    match platform {
        "github" => Some("https://github.com"),
        "linkedin" => Some("https://linkedin.com"),
        "twitter" => Some("https://twitter.com"),
        "instagram" => Some("https://instagram.com"),
        _ => None,
    }
}
