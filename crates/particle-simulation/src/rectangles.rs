//! A pointer-driven rectangle that flags the static one it touches

use particle_physics::{Color, Rect, Viewport};

use crate::field::StepStats;
use crate::params::RectangleParams;
use crate::pointer::Pointer;
use crate::surface::DrawSurface;

pub struct RectangleOverlap {
    follower: Rect,
    target: Rect,
    target_color: Color,
    viewport: Viewport,
    params: RectangleParams,
}

impl RectangleOverlap {
    /// Follower starts at the viewport center, target at the origin
    pub fn new(viewport: Viewport, params: RectangleParams) -> Self {
        let center = viewport.center();
        Self {
            follower: Rect::new(center.x, center.y, params.width, params.height),
            target: Rect::new(0.0, 0.0, params.width, params.height),
            target_color: params.target_color,
            viewport,
            params,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        *self = Self::new(viewport, self.params.clone());
    }

    /// Draw, move the follower's top-left corner to the pointer, then test
    ///
    /// Once hit, the target stays in the hit color until rebuilt.
    pub fn step<S: DrawSurface + ?Sized>(&mut self, pointer: Pointer, surface: &mut S) -> StepStats {
        surface.fill_rect(self.follower, self.params.follower_color, 1.0);
        surface.fill_rect(self.target, self.target_color, 1.0);

        if let Some(position) = pointer.position {
            self.follower.x = position.x;
            self.follower.y = position.y;
        }

        let mut stats = StepStats::default();
        if self.target.intersects(&self.follower) {
            self.target_color = self.params.hit_color;
            stats.contacts = 1;
        }
        stats
    }

    pub fn follower(&self) -> Rect {
        self.follower
    }

    pub fn target(&self) -> Rect {
        self.target
    }

    pub fn target_color(&self) -> Color {
        self.target_color
    }

    pub fn is_hit(&self) -> bool {
        self.target_color == self.params.hit_color
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CommandList;

    #[test]
    fn test_turns_red_on_touch_and_stays() {
        let mut scene = RectangleOverlap::new(Viewport::new(800.0, 600.0), RectangleParams::default());
        let mut surface = CommandList::new();

        scene.step(Pointer::at(300.0, 300.0), &mut surface);
        assert!(!scene.is_hit());

        // Edges touch exactly at x = 100.
        scene.step(Pointer::at(100.0, 50.0), &mut surface);
        assert!(scene.is_hit());
        assert_eq!(scene.target_color(), Color::RED);

        scene.step(Pointer::at(500.0, 500.0), &mut surface);
        assert!(scene.is_hit());
    }

    #[test]
    fn test_absent_pointer_keeps_follower_centered() {
        let mut scene = RectangleOverlap::new(Viewport::new(800.0, 600.0), RectangleParams::default());
        let mut surface = CommandList::new();

        scene.step(Pointer::absent(), &mut surface);

        assert_eq!(scene.follower().min(), glam::Vec2::new(400.0, 300.0));
        assert_eq!(surface.len(), 2);
    }

    #[test]
    fn test_resize_resets_hit() {
        let mut scene = RectangleOverlap::new(Viewport::new(800.0, 600.0), RectangleParams::default());
        let mut surface = CommandList::new();
        scene.step(Pointer::at(10.0, 10.0), &mut surface);
        assert!(scene.is_hit());

        scene.resize(Viewport::new(1024.0, 768.0));
        assert!(!scene.is_hit());
    }
}
