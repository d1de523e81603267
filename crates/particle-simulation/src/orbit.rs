//! Particles circling an anchor that lazily follows the pointer
//!
//! Each particle draws the segment it travelled this frame. The fading
//! trail comes from keeping the last few segments and drawing older ones
//! more transparent, since the surface is cleared every frame.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use glam::Vec2;
use particle_physics::{Color, Viewport};
use rand::Rng;

use crate::field::StepStats;
use crate::params::OrbitParams;
use crate::pointer::Pointer;
use crate::random::pick_color;
use crate::surface::DrawSurface;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitParticle {
    pub position: Vec2,
    /// Also the stroke width of the trail
    pub radius: f32,
    /// Current angle on the orbit, radians
    pub angle: f32,
    /// Orbit radius around the anchor
    pub distance: f32,
    pub color: Color,
    /// Smoothed pointer position the particle circles around
    pub anchor: Vec2,
    trail: VecDeque<(Vec2, Vec2)>,
}

impl OrbitParticle {
    pub fn new(position: Vec2, radius: f32, angle: f32, distance: f32, color: Color) -> Self {
        Self {
            position,
            radius,
            angle,
            distance,
            color,
            anchor: position,
            trail: VecDeque::new(),
        }
    }

    /// Recent segments, oldest first
    pub fn trail(&self) -> impl Iterator<Item = &(Vec2, Vec2)> {
        self.trail.iter()
    }

    fn update(&mut self, target: Vec2, params: &OrbitParams) {
        let last = self.position;

        self.angle = (self.angle + params.angular_velocity) % TAU;
        self.anchor += (target - self.anchor) * params.drag;
        self.position = self.anchor + Vec2::new(self.angle.cos(), self.angle.sin()) * self.distance;

        self.trail.push_back((last, self.position));
        while self.trail.len() > params.trail_length {
            self.trail.pop_front();
        }
    }

    fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let len = self.trail.len() as f32;
        for (age, (from, to)) in self.trail.iter().enumerate() {
            let alpha = (age as f32 + 1.0) / len;
            surface.stroke_line(*from, *to, self.color.with_alpha(alpha), self.radius);
        }
    }
}

pub struct OrbitTrail {
    particles: Vec<OrbitParticle>,
    viewport: Viewport,
    params: OrbitParams,
}

impl OrbitTrail {
    pub fn new(viewport: Viewport, params: OrbitParams) -> Self {
        Self::initialize(viewport, params, &mut rand::rng())
    }

    /// Every particle starts at the viewport center on a random orbit
    pub fn initialize<R: Rng>(viewport: Viewport, params: OrbitParams, rng: &mut R) -> Self {
        let center = viewport.center();
        let (low, high) = (
            params.min_distance.min(params.max_distance),
            params.min_distance.max(params.max_distance),
        );

        let particles = (0..params.count)
            .map(|_| {
                OrbitParticle::new(
                    center,
                    params.min_radius + rng.random::<f32>() * params.radius_spread,
                    rng.random::<f32>() * TAU,
                    rng.random_range(low..=high) as f32,
                    pick_color(&params.palette, rng),
                )
            })
            .collect();

        Self {
            particles,
            viewport,
            params,
        }
    }

    pub fn from_particles(viewport: Viewport, params: OrbitParams, particles: Vec<OrbitParticle>) -> Self {
        Self {
            particles,
            viewport,
            params,
        }
    }

    pub fn resize<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) {
        *self = Self::initialize(viewport, self.params.clone(), rng);
    }

    /// The anchor chases the pointer, or the viewport center before the pointer is seen
    pub fn step<S: DrawSurface + ?Sized>(&mut self, pointer: Pointer, surface: &mut S) -> StepStats {
        let target = pointer.or(self.viewport.center());
        for particle in &mut self.particles {
            particle.update(target, &self.params);
            particle.draw(surface);
        }
        StepStats::default()
    }

    pub fn particles(&self) -> &[OrbitParticle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn params(&self) -> &OrbitParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{CommandList, DrawCommand};

    fn lone_particle(params: OrbitParams) -> OrbitTrail {
        let particle = OrbitParticle::new(Vec2::new(100.0, 100.0), 2.0, 0.0, 50.0, Color::WHITE);
        OrbitTrail::from_particles(Viewport::new(200.0, 200.0), params, vec![particle])
    }

    #[test]
    fn test_anchor_eases_toward_pointer() {
        let mut scene = lone_particle(OrbitParams::default());
        let mut surface = CommandList::new();

        scene.step(Pointer::at(200.0, 100.0), &mut surface);

        let anchor = scene.particles()[0].anchor;
        assert!((anchor.x - 105.0).abs() < 1e-4, "anchor = {:?}", anchor);
        assert!((anchor.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_position_stays_on_orbit() {
        let mut scene = lone_particle(OrbitParams::default());
        let mut surface = CommandList::new();

        for _ in 0..30 {
            scene.step(Pointer::at(150.0, 80.0), &mut surface);
            let p = &scene.particles()[0];
            assert!((p.position.distance(p.anchor) - 50.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_trail_is_bounded_and_fades() {
        let params = OrbitParams::default().with_trail_length(4);
        let mut scene = lone_particle(params);
        let mut surface = CommandList::new();

        for _ in 0..10 {
            surface.reset();
            scene.step(Pointer::absent(), &mut surface);
        }

        assert_eq!(scene.particles()[0].trail().count(), 4);
        let alphas: Vec<f32> = surface
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::StrokeLine { color, line_width, .. } => {
                    assert_eq!(*line_width, 2.0);
                    color.a
                }
                other => panic!("unexpected command {:?}", other),
            })
            .collect();
        assert_eq!(alphas, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_segments_connect() {
        let mut scene = lone_particle(OrbitParams::default());
        let mut surface = CommandList::new();
        for _ in 0..5 {
            scene.step(Pointer::absent(), &mut surface);
        }

        let segments: Vec<_> = scene.particles()[0].trail().copied().collect();
        for pair in segments.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_initial_orbits_in_range() {
        let scene = OrbitTrail::new(Viewport::new(640.0, 480.0), OrbitParams::default());
        assert_eq!(scene.particles().len(), 10);
        for p in scene.particles() {
            assert!(p.distance >= 50.0 && p.distance <= 120.0);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
            assert_eq!(p.position, Vec2::new(320.0, 240.0));
        }
    }

    #[test]
    fn test_count_is_configurable() {
        let params = OrbitParams::default().with_count(3);
        let scene = OrbitTrail::new(Viewport::new(640.0, 480.0), params);
        assert_eq!(scene.particles().len(), 3);
    }
}
