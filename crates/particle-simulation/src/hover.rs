//! Bouncing circles that swell while the pointer hovers near them

use glam::Vec2;
use particle_physics::{Color, Viewport};
use rand::Rng;

use crate::field::StepStats;
use crate::params::HoverParams;
use crate::pointer::Pointer;
use crate::random::{pick_color, point_inside};
use crate::surface::DrawSurface;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverCircle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Radius the circle shrinks back to
    pub min_radius: f32,
    pub color: Color,
}

impl HoverCircle {
    /// Bounce, move, then grow or shrink depending on the pointer
    fn update(&mut self, viewport: &Viewport, pointer: Option<Vec2>, params: &HoverParams) -> bool {
        let mut bounced = false;
        if self.position.x + self.radius > viewport.width || self.position.x < self.radius {
            self.velocity.x = -self.velocity.x;
            bounced = true;
        }
        if self.position.y + self.radius > viewport.height || self.position.y < self.radius {
            self.velocity.y = -self.velocity.y;
            bounced = true;
        }
        self.position += self.velocity;

        let near = pointer.is_some_and(|p| {
            let d = p - self.position;
            d.x.abs() < params.reach && d.y.abs() < params.reach
        });

        if near && self.radius < params.max_radius {
            self.radius += params.growth;
        } else if self.radius > self.min_radius {
            self.radius = (self.radius - params.growth).max(self.min_radius);
        }

        bounced
    }
}

pub struct HoverCircles {
    circles: Vec<HoverCircle>,
    viewport: Viewport,
    params: HoverParams,
}

impl HoverCircles {
    pub fn new(viewport: Viewport, params: HoverParams) -> Self {
        Self::initialize(viewport, params, &mut rand::rng())
    }

    pub fn initialize<R: Rng>(viewport: Viewport, params: HoverParams, rng: &mut R) -> Self {
        let circles = (0..params.count)
            .map(|_| {
                let radius = params.min_radius + rng.random::<f32>() * params.radius_spread;
                HoverCircle {
                    position: point_inside(&viewport, radius, rng),
                    velocity: Vec2::new(
                        -rng.random::<f32>() * params.max_speed,
                        -rng.random::<f32>() * params.max_speed,
                    ),
                    radius,
                    min_radius: radius,
                    color: pick_color(&params.palette, rng),
                }
            })
            .collect();

        Self {
            circles,
            viewport,
            params,
        }
    }

    /// Build from explicit circles, mostly for tests
    pub fn from_circles(viewport: Viewport, params: HoverParams, circles: Vec<HoverCircle>) -> Self {
        Self {
            circles,
            viewport,
            params,
        }
    }

    pub fn resize<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) {
        *self = Self::initialize(viewport, self.params.clone(), rng);
    }

    pub fn step<S: DrawSurface + ?Sized>(&mut self, pointer: Pointer, surface: &mut S) -> StepStats {
        let mut stats = StepStats::default();
        for circle in &mut self.circles {
            surface.fill_circle(circle.position, circle.radius, circle.color, 1.0);
            if circle.update(&self.viewport, pointer.position, &self.params) {
                stats.reflections += 1;
            }
        }
        stats
    }

    pub fn circles(&self) -> &[HoverCircle] {
        &self.circles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn params(&self) -> &HoverParams {
        &self.params
    }
}
