//! Circular particle used by the elastic-collision field

use glam::Vec2;

use crate::bounds::Viewport;
use crate::color::Color;
use crate::constants::DEFAULT_MASS;

/// Which velocity components a boundary check flipped
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Rigid circle with a pointer-driven halo
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Center in viewport coordinates
    pub position: Vec2,
    /// Displacement per frame
    pub velocity: Vec2,
    /// Fixed for the particle's lifetime
    pub radius: f32,
    pub mass: f32,
    pub color: Color,
    /// Halo alpha, kept within `[0, cap]` by [`Particle::update_halo`]
    pub opacity: f32,
}

impl Particle {
    pub fn new(position: Vec2, radius: f32, color: Color) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
            mass: DEFAULT_MASS,
            color,
            opacity: 0.0,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn distance_to(&self, other: &Particle) -> f32 {
        self.position.distance(other.position)
    }

    /// Whether the circles intersect; touching circles do not overlap
    pub fn overlaps(&self, other: &Particle) -> bool {
        self.distance_to(other) - (self.radius + other.radius) < 0.0
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Negate each velocity component whose edge touches or crosses the viewport border
    ///
    /// Position is not clamped, a fast particle can sit past the border for a frame.
    pub fn reflect(&mut self, viewport: &Viewport) -> Reflection {
        let mut reflection = Reflection::default();

        if self.position.x - self.radius <= 0.0 || self.position.x + self.radius >= viewport.width {
            self.velocity.x = -self.velocity.x;
            reflection.x = true;
        }
        if self.position.y - self.radius <= 0.0 || self.position.y + self.radius >= viewport.height
        {
            self.velocity.y = -self.velocity.y;
            reflection.y = true;
        }

        reflection
    }

    /// Fade the halo in while the pointer is within `reach`, out otherwise
    ///
    /// `pointer` is `None` until the pointer has been seen; the halo then only fades.
    pub fn update_halo(&mut self, pointer: Option<Vec2>, reach: f32, cap: f32, step: f32) {
        let near = pointer.is_some_and(|p| self.position.distance(p) < reach);

        if near && self.opacity < cap {
            self.opacity = (self.opacity + step).min(cap);
        } else if self.opacity > 0.0 {
            self.opacity = (self.opacity - step).max(0.0);
        }
    }

    /// Explicit Euler, one frame is one unit of time
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), 20.0, Color::WHITE)
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = particle_at(100.0, 100.0);
        assert!(a.overlaps(&particle_at(139.0, 100.0)));
        assert!(!a.overlaps(&particle_at(140.0, 100.0)));
    }

    #[test]
    fn test_reflect_past_right_edge() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut p = particle_at(800.0 - 20.0 + 1.0, 300.0).with_velocity(Vec2::new(2.0, 0.5));

        let reflection = p.reflect(&viewport);

        assert_eq!(reflection, Reflection { x: true, y: false });
        assert_eq!(p.velocity, Vec2::new(-2.0, 0.5));
    }

    #[test]
    fn test_reflect_inside_is_noop() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut p = particle_at(400.0, 300.0).with_velocity(Vec2::new(1.0, -1.0));

        assert!(!p.reflect(&viewport).any());
        assert_eq!(p.velocity, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_halo_fades_in_and_caps() {
        let mut p = particle_at(100.0, 100.0);
        let pointer = Some(Vec2::new(120.0, 100.0));

        let mut history = Vec::new();
        for _ in 0..50 {
            p.update_halo(pointer, 80.0, 0.2, 0.02);
            assert!(p.opacity <= 0.2);
            history.push(p.opacity);
        }

        // At the cap the fade-out branch runs, so a parked pointer flickers
        // between the cap and one step below it.
        let first_cap = history
            .iter()
            .position(|&o| o == 0.2)
            .expect("halo never reached the cap");
        for pair in history[first_cap..].chunks_exact(2) {
            assert!((pair[0] - 0.2).abs() < 1e-6, "expected cap, got {}", pair[0]);
            assert!((pair[1] - 0.18).abs() < 1e-6, "expected one step below, got {}", pair[1]);
        }
    }

    #[test]
    fn test_halo_fades_out_to_zero() {
        let mut p = particle_at(100.0, 100.0);
        p.opacity = 0.05;

        for _ in 0..5 {
            p.update_halo(Some(Vec2::new(500.0, 500.0)), 80.0, 0.2, 0.02);
            assert!(p.opacity >= 0.0);
        }
        assert_eq!(p.opacity, 0.0);
    }

    #[test]
    fn test_halo_without_pointer_only_fades() {
        let mut p = particle_at(0.0, 0.0);
        p.update_halo(None, 80.0, 0.2, 0.02);
        assert_eq!(p.opacity, 0.0);
    }

    #[test]
    fn test_integrate_adds_velocity() {
        let mut p = particle_at(10.0, 10.0).with_velocity(Vec2::new(0.5, -0.25));
        p.integrate();
        assert_eq!(p.position, Vec2::new(10.5, 9.75));
    }
}
