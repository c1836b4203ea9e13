use std::time::Duration;

use crate::surface::Rgb;

// Shared simulation tuning constants used by the field, the trail and the web frontend.

// Ambient pool sizing
pub const AMBIENT_MAX_PARTICLES: usize = 100;
pub const AMBIENT_SPACING_PX: f32 = 10.0; // one particle per this many px of viewport width

// Ambient particle attributes
pub const AMBIENT_RADIUS_MIN: f32 = 1.0;
pub const AMBIENT_RADIUS_SPAN: f32 = 2.0;
pub const AMBIENT_OPACITY_MIN: f32 = 0.2;
pub const AMBIENT_OPACITY_SPAN: f32 = 0.5;
pub const AMBIENT_SPEED_MAX: f32 = 0.25; // per-axis initial velocity magnitude
pub const AMBIENT_RGB: Rgb = Rgb::new(102, 126, 234);

// Pointer attraction
pub const POINTER_RADIUS_PX: f32 = 100.0;
pub const POINTER_FORCE: f32 = 0.001;

// Ambient links
pub const AMBIENT_LINK_DISTANCE_PX: f32 = 100.0;
pub const AMBIENT_LINK_ALPHA: f32 = 0.1;

// Cursor trail pool
pub const TRAIL_CAPACITY: usize = 15;

// Cursor particle attributes
pub const TRAIL_SPAWN_JITTER_PX: f32 = 10.0;
pub const TRAIL_RADIUS_MIN: f32 = 1.0;
pub const TRAIL_RADIUS_SPAN: f32 = 3.0;
pub const TRAIL_DECAY_MIN: f32 = 0.02;
pub const TRAIL_DECAY_MAX: f32 = 0.04;
pub const TRAIL_RED: (u8, u8) = (102, 152);
pub const TRAIL_GREEN: (u8, u8) = (126, 176);
pub const TRAIL_BLUE: (u8, u8) = (234, 255);

// Cursor particle motion
pub const TRAIL_EASE: f32 = 0.1; // fraction of remaining distance covered per tick
pub const TRAIL_WANDER_PX: f32 = 1.0;
pub const TRAIL_OPACITY_SCALE: f32 = 0.8; // opacity = life * scale

// Glow halo
pub const TRAIL_GLOW_RADIUS_SCALE: f32 = 2.0;
pub const TRAIL_GLOW_ALPHA_SCALE: f32 = 0.2;

// Trail links
pub const TRAIL_LINK_DISTANCE_PX: f32 = 50.0;
pub const TRAIL_LINK_ALPHA: f32 = 0.3;

// Resize coalescing window
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);
