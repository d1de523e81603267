//! Sampling helpers shared by the demos

use glam::Vec2;
use particle_physics::{Color, Viewport};
use rand::Rng;

/// Uniform palette pick; white when the palette is empty
pub fn pick_color<R: Rng>(palette: &[Color], rng: &mut R) -> Color {
    if palette.is_empty() {
        return Color::WHITE;
    }
    palette[rng.random_range(0..palette.len())]
}

/// Uniform point keeping `margin` away from every border
///
/// A viewport narrower than two margins collapses that axis onto `margin`.
pub fn point_inside<R: Rng>(viewport: &Viewport, margin: f32, rng: &mut R) -> Vec2 {
    let span_x = (viewport.width - margin * 2.0).max(0.0);
    let span_y = (viewport.height - margin * 2.0).max(0.0);
    Vec2::new(
        rng.random::<f32>() * span_x + margin,
        rng.random::<f32>() * span_y + margin,
    )
}
