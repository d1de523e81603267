//! Elastic-collision particle field
//!
//! Owns a fixed set of equally sized circles inside a viewport. Each frame
//! every particle is drawn, checked against every other particle, bounced
//! off the viewport border, has its pointer halo updated and finally moves
//! by its velocity. Resizing throws the particles away and places new ones.

use glam::Vec2;
use particle_physics::{resolve_collision, Particle, Viewport};
use rand::Rng;

use crate::error::FieldError;
use crate::params::{FieldParams, PairResolution};
use crate::pointer::Pointer;
use crate::surface::DrawSurface;

/// What happened during one [`ParticleField::step`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Overlapping pairs whose velocities were exchanged
    pub contacts: usize,
    /// Particles that bounced off at least one border
    pub reflections: usize,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    params: FieldParams,
}

impl ParticleField {
    /// Place `params.count` particles using the thread-local RNG
    pub fn new(viewport: Viewport, params: FieldParams) -> Result<Self, FieldError> {
        Self::initialize(viewport, params, &mut rand::rng())
    }

    /// Place `params.count` non-overlapping particles at random
    ///
    /// Each particle lies fully inside the viewport and gets a random
    /// velocity and palette color. A candidate that overlaps an already
    /// placed particle is redrawn; after `params.placement_attempts`
    /// rejections it is kept anyway so an over-crowded viewport still
    /// terminates.
    pub fn initialize<R: Rng>(
        viewport: Viewport,
        params: FieldParams,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        validate(&viewport, &params)?;

        let mut particles: Vec<Particle> = Vec::with_capacity(params.count);
        let mut forced = 0usize;

        for _ in 0..params.count {
            let mut position = random_position(&viewport, params.radius, rng);
            let mut attempts = 0usize;

            while particles
                .iter()
                .any(|p| p.position.distance(position) - (p.radius + params.radius) < 0.0)
            {
                if attempts >= params.placement_attempts {
                    forced += 1;
                    break;
                }
                position = random_position(&viewport, params.radius, rng);
                attempts += 1;
            }

            let color = params.palette[rng.random_range(0..params.palette.len())];
            let particle = Particle::new(position, params.radius, color)
                .with_velocity(random_velocity(params.max_speed, rng))
                .with_mass(params.mass);
            particles.push(particle);
        }

        if forced > 0 {
            log::warn!(
                "{} of {} particles overlap: viewport {}x{} is too crowded for radius {}",
                forced,
                params.count,
                viewport.width,
                viewport.height,
                params.radius
            );
        }

        log::debug!(
            "Placed {} particles in {}x{} viewport",
            particles.len(),
            viewport.width,
            viewport.height
        );

        Ok(Self {
            particles,
            viewport,
            params,
        })
    }

    /// Wrap explicit particles without any placement
    pub fn from_particles(viewport: Viewport, params: FieldParams, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            viewport,
            params,
        }
    }

    /// Discard every particle and place a fresh set for `viewport`
    ///
    /// On error the current particles and viewport are kept.
    pub fn resize<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) -> Result<(), FieldError> {
        *self = Self::initialize(viewport, self.params.clone(), rng)?;
        Ok(())
    }

    /// Advance one frame, issuing draw calls on `surface`
    ///
    /// Particles are processed in order; each one sees the already updated
    /// state of the particles before it. Until the pointer has been seen the
    /// halo follows the viewport center.
    pub fn step<S: DrawSurface + ?Sized>(&mut self, pointer: Pointer, surface: &mut S) -> StepStats {
        let mut stats = StepStats::default();
        let pointer = pointer.or(self.viewport.center());

        for i in 0..self.particles.len() {
            self.draw_particle(i, surface);
            stats.contacts += self.collide(i);

            let particle = &mut self.particles[i];
            if particle.reflect(&self.viewport).any() {
                stats.reflections += 1;
            }
            particle.update_halo(
                Some(pointer),
                self.params.halo_distance,
                self.params.opacity_cap,
                self.params.opacity_step,
            );
            particle.integrate();
        }

        stats
    }

    fn draw_particle<S: DrawSurface + ?Sized>(&self, i: usize, surface: &mut S) {
        let p = &self.particles[i];
        surface.fill_circle(p.position, p.radius, p.color, p.opacity);
        surface.stroke_circle(p.position, p.radius, p.color, self.params.outline_width);
    }

    /// Resolve every overlap involving particle `i`, returns the number resolved
    fn collide(&mut self, i: usize) -> usize {
        let start = match self.params.resolution {
            PairResolution::Both => 0,
            PairResolution::Once => i + 1,
        };

        let mut contacts = 0;
        for j in start..self.particles.len() {
            if j == i {
                continue;
            }
            let (a, b) = pair_mut(&mut self.particles, i, j);
            if a.overlaps(b) && resolve_collision(a, b) {
                contacts += 1;
            }
        }
        contacts
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Retune the pointer halo without rebuilding the field
    ///
    /// Halos above a lowered cap fade down one step per frame.
    pub fn set_halo(&mut self, halo_distance: f32, opacity_cap: f32, opacity_step: f32) {
        self.params.halo_distance = halo_distance.max(0.0);
        self.params.opacity_cap = opacity_cap.clamp(0.0, 1.0);
        self.params.opacity_step = opacity_step.max(0.0);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.particles.iter().map(Particle::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    pub fn max_opacity(&self) -> f32 {
        self.particles
            .iter()
            .map(|p| p.opacity)
            .fold(0.0, f32::max)
    }
}

fn validate(viewport: &Viewport, params: &FieldParams) -> Result<(), FieldError> {
    if !(params.radius.is_finite() && params.radius > 0.0) {
        return Err(FieldError::InvalidRadius(params.radius));
    }
    if params.palette.is_empty() {
        return Err(FieldError::EmptyPalette);
    }
    if !viewport.fits_circle(params.radius) {
        return Err(FieldError::ViewportTooSmall {
            width: viewport.width,
            height: viewport.height,
            diameter: params.radius * 2.0,
        });
    }
    Ok(())
}

fn random_position<R: Rng>(viewport: &Viewport, radius: f32, rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.random_range(radius..=viewport.width - radius),
        rng.random_range(radius..=viewport.height - radius),
    )
}

fn random_velocity<R: Rng>(max_speed: f32, rng: &mut R) -> Vec2 {
    if max_speed <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        rng.random_range(-max_speed..max_speed),
        rng.random_range(-max_speed..max_speed),
    )
}

/// Two distinct mutable elements of one slice
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_mut_both_orders() {
        let mut items = [1, 2, 3, 4];

        let (a, b) = pair_mut(&mut items, 0, 3);
        std::mem::swap(a, b);
        assert_eq!(items, [4, 2, 3, 1]);

        let (a, b) = pair_mut(&mut items, 2, 1);
        assert_eq!((*a, *b), (3, 2));
    }

    #[test]
    fn test_random_velocity_zero_speed() {
        let mut rng = rand::rng();
        assert_eq!(random_velocity(0.0, &mut rng), Vec2::ZERO);
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        let viewport = Viewport::new(100.0, 100.0);
        let params = FieldParams::default().with_radius(f32::NAN);
        assert!(matches!(
            validate(&viewport, &params),
            Err(FieldError::InvalidRadius(_))
        ));
    }
}
