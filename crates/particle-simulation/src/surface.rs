//! Drawing interface between the demos and whatever puts pixels on screen
//!
//! Demos issue shape commands through [`DrawSurface`]; [`CommandList`]
//! records them in order so a renderer can replay them later (and tests can
//! inspect them).

use glam::Vec2;
use particle_physics::{Color, Rect};

/// The handful of 2D primitives the demos draw with
pub trait DrawSurface {
    /// Wipe everything drawn so far and fill with `color`
    fn clear(&mut self, color: Color);

    /// Filled disc; `alpha` scales the color's own alpha
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32);

    /// Circle outline centered on the circle's edge
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32);

    /// Line segment with round caps
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f32);

    /// Filled axis-aligned rectangle; `alpha` scales the color's own alpha
    fn fill_rect(&mut self, rect: Rect, color: Color, alpha: f32);
}

/// One recorded draw call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
        alpha: f32,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Color,
        line_width: f32,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        color: Color,
        line_width: f32,
    },
    FillRect {
        rect: Rect,
        color: Color,
        alpha: f32,
    },
}

/// Ordered list of draw commands for one frame
#[derive(Clone, Debug, Default)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop recorded commands but keep the allocation for the next frame
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Commands after the most recent clear, plus that clear's color
    ///
    /// Anything recorded before a clear is invisible, so a renderer only
    /// needs this tail.
    pub fn visible(&self) -> (Option<Color>, &[DrawCommand]) {
        match self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear(_)))
        {
            Some(index) => {
                let color = match self.commands[index] {
                    DrawCommand::Clear(color) => Some(color),
                    _ => None,
                };
                (color, &self.commands[index + 1..])
            }
            None => (None, &self.commands),
        }
    }
}

impl DrawSurface for CommandList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, alpha: f32) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            line_width,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            color,
            line_width,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, alpha: f32) {
        self.commands.push(DrawCommand::FillRect { rect, color, alpha });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_skips_everything_before_last_clear() {
        let mut list = CommandList::new();
        list.fill_circle(Vec2::ZERO, 1.0, Color::RED, 1.0);
        list.clear(Color::WHITE);
        list.fill_circle(Vec2::ONE, 2.0, Color::BLUE, 0.5);

        let (clear, tail) = list.visible();
        assert_eq!(clear, Some(Color::WHITE));
        assert_eq!(tail.len(), 1);
    }

    #[test]
    fn test_visible_without_clear_returns_all() {
        let mut list = CommandList::new();
        list.stroke_line(Vec2::ZERO, Vec2::ONE, Color::RED, 2.0);
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED, 1.0);

        let (clear, tail) = list.visible();
        assert_eq!(clear, None);
        assert_eq!(tail.len(), 2);
    }

    #[test]
    fn test_reset_keeps_capacity() {
        let mut list = CommandList::with_capacity(8);
        list.clear(Color::WHITE);
        list.reset();
        assert!(list.is_empty());
        assert!(list.commands.capacity() >= 8);
    }
}
