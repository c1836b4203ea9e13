pub mod keyboard;
pub mod pointer;
pub mod touch;

pub use keyboard::wire_section_keys;
pub use pointer::{wire_pointer, wire_resize};
pub use touch::wire_swipe;
