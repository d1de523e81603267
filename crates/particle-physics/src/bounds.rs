//! Viewport and rectangle geometry
//!
//! Coordinates follow the canvas convention: origin at the top-left corner,
//! y grows downwards.

use glam::Vec2;

/// Size of the drawable area
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether a circle of `radius` fits at all
    pub fn fits_circle(&self, radius: f32) -> bool {
        self.width >= radius * 2.0 && self.height >= radius * 2.0
    }
}

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Overlap test with inclusive edges, so touching rectangles intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x + self.width >= other.x
            && self.x <= other.x + other.width
            && self.y + self.height >= other.y
            && self.y <= other.y + other.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 100.0, 100.0, 100.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_separated_rects_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.5, 0.0, 100.0, 100.0);
        let c = Rect::new(0.0, 150.0, 100.0, 40.0);
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_non_square_uses_height() {
        // A wide, flat rectangle must not be treated as square.
        let flat = Rect::new(0.0, 0.0, 200.0, 10.0);
        let below = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(!flat.intersects(&below));
    }

    #[test]
    fn test_viewport_fits_circle() {
        let viewport = Viewport::new(100.0, 30.0);
        assert!(viewport.fits_circle(15.0));
        assert!(!viewport.fits_circle(16.0));
        assert_eq!(viewport.center(), Vec2::new(50.0, 15.0));
    }
}
