//! The four demos behind one steppable, drawable type

use particle_physics::{Color, Viewport};

use crate::error::FieldError;
use crate::field::{ParticleField, StepStats};
use crate::hover::HoverCircles;
use crate::orbit::OrbitTrail;
use crate::params::{FieldParams, HoverParams, OrbitParams, RectangleParams};
use crate::pointer::Pointer;
use crate::rectangles::RectangleOverlap;
use crate::surface::DrawSurface;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Hover,
    Orbit,
    Collision,
    Rectangles,
}

impl SceneKind {
    pub const ALL: [SceneKind; 4] = [
        SceneKind::Hover,
        SceneKind::Orbit,
        SceneKind::Collision,
        SceneKind::Rectangles,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SceneKind::Hover => "Hover Circles",
            SceneKind::Orbit => "Circular Motion",
            SceneKind::Collision => "Elastic Collision",
            SceneKind::Rectangles => "Rectangle Overlap",
        }
    }
}

/// Parameters for every scene, so switching back and forth keeps tweaks
#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub background: Color,
    pub field: FieldParams,
    pub hover: HoverParams,
    pub orbit: OrbitParams,
    pub rectangles: RectangleParams,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            field: FieldParams::default(),
            hover: HoverParams::default(),
            orbit: OrbitParams::default(),
            rectangles: RectangleParams::default(),
        }
    }
}

pub enum Scene {
    Hover(HoverCircles),
    Orbit(OrbitTrail),
    Collision(ParticleField),
    Rectangles(RectangleOverlap),
}

impl Scene {
    pub fn build(kind: SceneKind, viewport: Viewport, params: &SceneParams) -> Result<Self, FieldError> {
        let scene = match kind {
            SceneKind::Hover => Scene::Hover(HoverCircles::new(viewport, params.hover.clone())),
            SceneKind::Orbit => Scene::Orbit(OrbitTrail::new(viewport, params.orbit.clone())),
            SceneKind::Collision => {
                Scene::Collision(ParticleField::new(viewport, params.field.clone())?)
            }
            SceneKind::Rectangles => {
                Scene::Rectangles(RectangleOverlap::new(viewport, params.rectangles.clone()))
            }
        };

        log::info!(
            "Built {} scene: {} objects in {}x{}",
            kind.name(),
            scene.object_count(),
            viewport.width,
            viewport.height
        );
        Ok(scene)
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Hover(_) => SceneKind::Hover,
            Scene::Orbit(_) => SceneKind::Orbit,
            Scene::Collision(_) => SceneKind::Collision,
            Scene::Rectangles(_) => SceneKind::Rectangles,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn viewport(&self) -> Viewport {
        match self {
            Scene::Hover(scene) => scene.viewport(),
            Scene::Orbit(scene) => scene.viewport(),
            Scene::Collision(field) => field.viewport(),
            Scene::Rectangles(scene) => scene.viewport(),
        }
    }

    pub fn object_count(&self) -> usize {
        match self {
            Scene::Hover(scene) => scene.circles().len(),
            Scene::Orbit(scene) => scene.particles().len(),
            Scene::Collision(field) => field.len(),
            Scene::Rectangles(_) => 2,
        }
    }

    /// Clear to `background` and advance one frame
    pub fn step<S: DrawSurface + ?Sized>(
        &mut self,
        pointer: Pointer,
        background: Color,
        surface: &mut S,
    ) -> StepStats {
        surface.clear(background);
        match self {
            Scene::Hover(scene) => scene.step(pointer, surface),
            Scene::Orbit(scene) => scene.step(pointer, surface),
            Scene::Collision(field) => field.step(pointer, surface),
            Scene::Rectangles(scene) => scene.step(pointer, surface),
        }
    }

    /// Rebuild for a new viewport; takes effect from the next step
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), FieldError> {
        let mut rng = rand::rng();
        match self {
            Scene::Hover(scene) => scene.resize(viewport, &mut rng),
            Scene::Orbit(scene) => scene.resize(viewport, &mut rng),
            Scene::Collision(field) => field.resize(viewport, &mut rng)?,
            Scene::Rectangles(scene) => scene.resize(viewport),
        }
        log::debug!("Resized {} to {}x{}", self.name(), viewport.width, viewport.height);
        Ok(())
    }
}
