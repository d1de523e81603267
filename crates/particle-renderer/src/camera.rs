//! Pixel-space camera for 2D drawing

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Camera uniform for GPU
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// Maps window pixels (origin top-left, y down) to clip space
pub struct Camera {
    pub width: f32,
    pub height: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.width, self.height, 0.0, -1.0, 1.0)
    }

    /// Clip-space position of a pixel coordinate
    pub fn to_clip(&self, pixel: Vec2) -> Vec2 {
        let clip = self.build_view_projection_matrix() * pixel.extend(0.0).extend(1.0);
        Vec2::new(clip.x, clip.y)
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.build_view_projection_matrix().to_cols_array_2d(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1) as f32;
        self.height = height.max(1) as f32;
    }
}
