//! # Particle Renderer
//!
//! Draws recorded scene commands as instanced SDF shapes.

pub mod camera;
pub mod context;
pub mod error;
pub mod renderer;

pub use camera::*;
pub use context::*;
pub use error::*;
pub use renderer::*;
