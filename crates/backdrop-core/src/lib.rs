pub mod backdrop;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod runner;
pub mod surface;
pub mod trail;
pub mod viewport;

pub use backdrop::*;
pub use config::*;
pub use error::*;
pub use field::*;
pub use runner::*;
pub use surface::*;
pub use trail::*;
pub use viewport::*;
