//! # Particle Simulation
//!
//! CPU-side 2D demos driven one frame at a time: the elastic-collision
//! [`ParticleField`] plus hover circles, an orbit trail and a rectangle
//! overlap test, all behind the [`Scene`] enum. Scenes draw through the
//! [`DrawSurface`] trait and read the pointer from a per-frame snapshot.

pub mod clock;
pub mod error;
pub mod field;
pub mod hover;
pub mod orbit;
pub mod params;
pub mod pointer;
pub mod random;
pub mod rectangles;
pub mod scene;
pub mod surface;

pub use clock::*;
pub use error::*;
pub use field::*;
pub use hover::*;
pub use orbit::*;
pub use params::*;
pub use pointer::*;
pub use rectangles::*;
pub use scene::*;
pub use surface::*;
