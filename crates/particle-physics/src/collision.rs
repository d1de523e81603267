//! 2D elastic collision response between two circles
//!
//! Velocities are rotated into a frame whose x axis is the contact normal,
//! the 1D elastic collision equation is applied along that axis, and the
//! result is rotated back. Tangential components pass through unchanged.
//! Positions are never corrected, so overlapping circles may stay
//! overlapped for a few frames after bouncing.

use glam::Vec2;

use crate::particle::Particle;

/// Rotate `velocity` counter-clockwise by `angle` radians
pub fn rotate(velocity: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(
        velocity.x * cos - velocity.y * sin,
        velocity.x * sin + velocity.y * cos,
    )
}

/// Closing speed of `a` towards `b` along the line between their centers
///
/// Positive while approaching, zero or negative while separating. Not
/// normalized: scaled by the center distance.
pub fn approach_speed(a: &Particle, b: &Particle) -> f32 {
    let relative_velocity = a.velocity - b.velocity;
    let offset = b.position - a.position;
    relative_velocity.dot(offset)
}

/// 1D elastic collision: velocity of the body with `u1, m1` after hitting `u2, m2`
fn elastic_1d(u1: f32, u2: f32, m1: f32, m2: f32) -> f32 {
    u1 * (m1 - m2) / (m1 + m2) + u2 * 2.0 * m2 / (m1 + m2)
}

/// Exchange momentum between two colliding particles
///
/// Returns `false` without touching either particle when the pair is
/// already separating; resolving such a pair again would swap the
/// velocities back and make the particles stick.
pub fn resolve_collision(a: &mut Particle, b: &mut Particle) -> bool {
    if approach_speed(a, b) <= 0.0 {
        return false;
    }

    let offset = b.position - a.position;
    let angle = -offset.y.atan2(offset.x);

    let (m1, m2) = (a.mass, b.mass);
    let u1 = rotate(a.velocity, angle);
    let u2 = rotate(b.velocity, angle);

    let v1 = Vec2::new(elastic_1d(u1.x, u2.x, m1, m2), u1.y);
    let v2 = Vec2::new(elastic_1d(u2.x, u1.x, m2, m1), u2.y);

    a.velocity = rotate(v1, -angle);
    b.velocity = rotate(v2, -angle);
    true
}
