//! # Particle Physics
//!
//! Plain data and closed-form math shared by the canvas demos: particles,
//! colors, viewport bounds and the 2D elastic collision response.

pub mod bounds;
pub mod collision;
pub mod color;
pub mod constants;
pub mod particle;

pub use bounds::*;
pub use collision::*;
pub use color::*;
pub use constants::*;
pub use particle::*;
