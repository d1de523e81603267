//! Tunable parameters for each demo
//!
//! Every struct follows the same builder pattern:
//!
//! ```
//! use particle_simulation::{FieldParams, PairResolution};
//!
//! let params = FieldParams::default()
//!     .with_count(40)
//!     .with_radius(12.0)
//!     .with_resolution(PairResolution::Once);
//! assert_eq!(params.count, 40);
//! ```

use particle_physics::constants::*;
use particle_physics::{Color, PALETTE};

/// How often an overlapping pair is handed to the collision response per frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PairResolution {
    /// Every particle checks every other particle, so each pair is visited
    /// twice. The separation guard makes the second visit a no-op in the
    /// common case.
    #[default]
    Both,
    /// Only pairs with `i < j` are checked
    Once,
}

/// Elastic-collision field parameters
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    pub radius: f32,
    pub mass: f32,
    /// Velocity components are drawn from `[-max_speed, max_speed)`
    pub max_speed: f32,
    pub palette: Vec<Color>,
    /// Pointer distance that lights up the halo
    pub halo_distance: f32,
    pub opacity_cap: f32,
    pub opacity_step: f32,
    /// Rejected draws before a particle is placed regardless of overlap
    pub placement_attempts: usize,
    pub outline_width: f32,
    pub resolution: PairResolution,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: FIELD_PARTICLE_COUNT,
            radius: FIELD_PARTICLE_RADIUS,
            mass: DEFAULT_MASS,
            max_speed: MAX_INITIAL_SPEED,
            palette: PALETTE.to_vec(),
            halo_distance: HALO_DISTANCE,
            opacity_cap: OPACITY_CAP,
            opacity_step: OPACITY_STEP,
            placement_attempts: PLACEMENT_ATTEMPTS,
            outline_width: OUTLINE_WIDTH,
            resolution: PairResolution::default(),
        }
    }
}

impl FieldParams {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts;
        self
    }

    pub fn with_resolution(mut self, resolution: PairResolution) -> Self {
        self.resolution = resolution;
        self
    }
}

/// Bouncing circles that swell under the pointer
#[derive(Clone, Debug, PartialEq)]
pub struct HoverParams {
    pub count: usize,
    pub min_radius: f32,
    pub radius_spread: f32,
    pub max_radius: f32,
    /// Half side of the square around the pointer
    pub reach: f32,
    pub growth: f32,
    pub max_speed: f32,
    pub palette: Vec<Color>,
}

impl Default for HoverParams {
    fn default() -> Self {
        Self {
            count: HOVER_CIRCLE_COUNT,
            min_radius: HOVER_MIN_RADIUS,
            radius_spread: HOVER_RADIUS_SPREAD,
            max_radius: HOVER_MAX_RADIUS,
            reach: HOVER_REACH,
            growth: HOVER_GROWTH,
            max_speed: HOVER_MAX_SPEED,
            palette: PALETTE.to_vec(),
        }
    }
}

impl HoverParams {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

/// Particles circling an anchor that trails the pointer
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitParams {
    pub count: usize,
    pub min_radius: f32,
    pub radius_spread: f32,
    pub angular_velocity: f32,
    pub min_distance: u32,
    pub max_distance: u32,
    /// Fraction of the anchor-to-pointer gap closed per frame
    pub drag: f32,
    pub trail_length: usize,
    pub palette: Vec<Color>,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            count: ORBIT_PARTICLE_COUNT,
            min_radius: ORBIT_MIN_RADIUS,
            radius_spread: ORBIT_RADIUS_SPREAD,
            angular_velocity: ORBIT_ANGULAR_VELOCITY,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            drag: ORBIT_DRAG,
            trail_length: ORBIT_TRAIL_LENGTH,
            palette: PALETTE.to_vec(),
        }
    }
}

impl OrbitParams {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_trail_length(mut self, trail_length: usize) -> Self {
        self.trail_length = trail_length.max(1);
        self
    }
}

/// Pointer-driven rectangle against a static one
#[derive(Clone, Debug, PartialEq)]
pub struct RectangleParams {
    pub width: f32,
    pub height: f32,
    pub follower_color: Color,
    pub target_color: Color,
    pub hit_color: Color,
}

impl Default for RectangleParams {
    fn default() -> Self {
        Self {
            width: RECT_SIZE,
            height: RECT_SIZE,
            follower_color: Color::YELLOW,
            target_color: Color::BLUE,
            hit_color: Color::RED,
        }
    }
}
