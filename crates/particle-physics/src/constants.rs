//! Tuning constants for the 2D canvas demos
//!
//! Units are pixels and frames: one simulation step advances every body by
//! exactly one velocity, there is no `dt`.

// Elastic-collision field
/// Number of particles in the collision field
pub const FIELD_PARTICLE_COUNT: usize = 100;

/// Radius shared by every particle in the collision field
pub const FIELD_PARTICLE_RADIUS: f32 = 20.0;

/// Default particle mass (the resolution formula supports unequal masses)
pub const DEFAULT_MASS: f32 = 1.0;

/// Initial velocity components are drawn from `[-MAX_INITIAL_SPEED, MAX_INITIAL_SPEED)`
pub const MAX_INITIAL_SPEED: f32 = 0.5;

/// Pointer distance below which a particle's halo fades in
pub const HALO_DISTANCE: f32 = 80.0;

/// Upper bound of the halo opacity
pub const OPACITY_CAP: f32 = 0.2;

/// Opacity change per frame while fading in or out
pub const OPACITY_STEP: f32 = 0.02;

/// Rejected placement draws before a particle is placed regardless of overlap
pub const PLACEMENT_ATTEMPTS: usize = 10_000;

/// Outline width of collision particles
pub const OUTLINE_WIDTH: f32 = 1.0;

// Hover circles
pub const HOVER_CIRCLE_COUNT: usize = 500;
pub const HOVER_MIN_RADIUS: f32 = 1.0;
/// Random extra radius on top of `HOVER_MIN_RADIUS`
pub const HOVER_RADIUS_SPREAD: f32 = 3.0;
/// Circles stop growing at this radius
pub const HOVER_MAX_RADIUS: f32 = 40.0;
/// Half side of the square around the pointer that makes circles grow
pub const HOVER_REACH: f32 = 50.0;
pub const HOVER_GROWTH: f32 = 1.0;
pub const HOVER_MAX_SPEED: f32 = 0.5;

// Orbit trail
pub const ORBIT_PARTICLE_COUNT: usize = 10;
pub const ORBIT_MIN_RADIUS: f32 = 1.0;
pub const ORBIT_RADIUS_SPREAD: f32 = 2.0;
/// Radians advanced per frame
pub const ORBIT_ANGULAR_VELOCITY: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: u32 = 50;
pub const ORBIT_MAX_DISTANCE: u32 = 120;
/// Fraction of the gap between anchor and pointer closed each frame
pub const ORBIT_DRAG: f32 = 0.05;
/// Segments kept per particle to fake the fading trail
pub const ORBIT_TRAIL_LENGTH: usize = 24;

// Rectangle overlap
pub const RECT_SIZE: f32 = 100.0;
