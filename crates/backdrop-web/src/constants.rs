// DOM hooks and page timings used by the web frontend.

// Element ids
pub const CANVAS_ID: &str = "bgCanvas";
pub const LOADER_ID: &str = "loader";
pub const CONTACT_FORM_ID: &str = "contactForm";

// Selectors
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const INDICATOR_SELECTOR: &str = ".rocket-indicator";
pub const SECTION_SELECTOR: &str = ".section";
pub const HERO_SELECTOR: &str = ".hero-content";
pub const BACKGROUND_SELECTOR: &str = ".interactive-background";
pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub const REVEAL_ITEM_SELECTOR: &str = ".list-item, .contact-item, .skill-item";
pub const SOCIAL_ICON_SELECTOR: &str = ".social-icon";

// Classes and attributes
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const MOVING_CLASS: &str = "moving";
pub const SECTION_ATTR: &str = "data-section";
pub const WIDTH_ATTR: &str = "data-width";
pub const PLATFORM_ATTR: &str = "data-platform";
pub const BREAKING_CLASS: &str = "breaking";

// Timings (milliseconds)
pub const LOADER_HIDE_MS: i32 = 3000;
pub const LOADER_REMOVE_MS: i32 = 500; // matches the CSS fade-out
pub const INDICATOR_MOVE_MS: i32 = 500;
pub const FORM_SENDING_MS: i32 = 2000;
pub const FORM_SENT_MS: i32 = 2000;
pub const BREAKING_MS: i32 = 600;
pub const SOCIAL_OPEN_DELAY_MS: i32 = 300;
pub const BURST_DURATION_MS: f64 = 600.0;

// Social burst dots
pub const BURST_DOT_STYLE: &str = "position: fixed; width: 4px; height: 4px; \
background: #667eea; border-radius: 50%; pointer-events: none; z-index: 9999;";

// Section tracking
pub const OBSERVER_THRESHOLD: f64 = 0.3;
pub const OBSERVER_ROOT_MARGIN: &str = "-70px 0px -70px 0px";

// Contact button labels
pub const SENDING_HTML: &str = "<span>Sending...</span><i class=\"fas fa-spinner fa-spin\"></i>";
pub const SENT_HTML: &str = "<span>Message Sent!</span><i class=\"fas fa-check\"></i>";

// Frame stats are logged once per this many frames
pub const STATS_LOG_EVERY_FRAMES: u64 = 600;
