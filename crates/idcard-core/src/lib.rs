pub mod card;
pub mod config;
pub mod constants;
pub mod knot;
pub mod profile;
pub mod spring;
pub mod state;
pub mod tether;
pub mod tilt;
pub mod viewport;

pub use card::*;
pub use config::*;
pub use constants::*;
pub use knot::*;
pub use profile::*;
pub use spring::*;
pub use state::*;
pub use tether::*;
pub use tilt::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static KNOT_WGSL: &str = include_str!("../shaders/knot.wgsl");
pub static FLAT_WGSL: &str = include_str!("../shaders/flat.wgsl");
