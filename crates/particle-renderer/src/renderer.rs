//! Instanced shape renderer for recorded draw commands

use bytemuck::{Pod, Zeroable};
use particle_physics::Color;
use particle_simulation::{CommandList, DrawCommand};

use crate::camera::{Camera, CameraUniform};

const SHAPE_FILL_CIRCLE: f32 = 0.0;
const SHAPE_STROKE_CIRCLE: f32 = 1.0;
const SHAPE_LINE: f32 = 2.0;
const SHAPE_RECT: f32 = 3.0;

/// Instances allocated up front; the buffer doubles when a frame needs more
const INITIAL_CAPACITY: usize = 1024;

/// One shape per instance (matches `ShapeInput` in shape.wgsl)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeInstance {
    pub a: [f32; 2],
    pub b: [f32; 2],
    pub color: [f32; 4],
    /// x: kind, y: radius, z: line width, w: padding
    pub params: [f32; 4],
}

impl ShapeInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2, 2 => Float32x4, 3 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Convert the visible part of a frame into GPU instances
///
/// Fully transparent shapes are dropped. With `linear_output` colors are
/// decoded from sRGB so an sRGB render target encodes them back unchanged.
pub fn build_instances(commands: &[DrawCommand], linear_output: bool) -> Vec<ShapeInstance> {
    let encode = |color: Color, alpha: f32| {
        let color = if linear_output { color.to_linear() } else { color };
        let mut rgba = color.to_array();
        rgba[3] *= alpha.clamp(0.0, 1.0);
        rgba
    };

    commands
        .iter()
        .filter_map(|command| {
            let instance = match *command {
                DrawCommand::Clear(_) => return None,
                DrawCommand::FillCircle {
                    center,
                    radius,
                    color,
                    alpha,
                } => ShapeInstance {
                    a: center.to_array(),
                    b: center.to_array(),
                    color: encode(color, alpha),
                    params: [SHAPE_FILL_CIRCLE, radius, 0.0, 0.0],
                },
                DrawCommand::StrokeCircle {
                    center,
                    radius,
                    color,
                    line_width,
                } => ShapeInstance {
                    a: center.to_array(),
                    b: center.to_array(),
                    color: encode(color, 1.0),
                    params: [SHAPE_STROKE_CIRCLE, radius, line_width, 0.0],
                },
                DrawCommand::StrokeLine {
                    from,
                    to,
                    color,
                    line_width,
                } => ShapeInstance {
                    a: from.to_array(),
                    b: to.to_array(),
                    color: encode(color, 1.0),
                    params: [SHAPE_LINE, 0.0, line_width, 0.0],
                },
                DrawCommand::FillRect { rect, color, alpha } => ShapeInstance {
                    a: rect.min().to_array(),
                    b: rect.max().to_array(),
                    color: encode(color, alpha),
                    params: [SHAPE_RECT, 0.0, 0.0, 0.0],
                },
            };
            (instance.color[3] > 0.0).then_some(instance)
        })
        .collect()
}

/// Background used until a scene issues its own clear
pub fn default_clear_color() -> Color {
    let base = catppuccin::PALETTE.latte.colors.base.rgb;
    Color::rgb8(base.r, base.g, base.b)
}

pub struct ShapeRenderer {
    render_pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: u32,
    clear_color: Color,
    linear_output: bool,
    camera: Camera,
}

impl ShapeRenderer {
    pub fn new(device: &wgpu::Device, surface_config: &wgpu::SurfaceConfiguration) -> Self {
        let camera = Camera::new(surface_config.width, surface_config.height);

        // Create camera buffer
        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Load shader
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shape Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/shape.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Shape Bind Group Layout"),
            entries: &[
                // Camera (Uniform) - Binding 0
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Shape Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shape Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Shapes are drawn in command order, so no depth buffer
        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shape Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vertex"),
                buffers: &[ShapeInstance::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fragment"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let instance_buffer = Self::create_instance_buffer(device, INITIAL_CAPACITY);

        Self {
            render_pipeline,
            camera_buffer,
            camera_bind_group,
            instance_buffer,
            instance_capacity: INITIAL_CAPACITY,
            instance_count: 0,
            clear_color: default_clear_color(),
            linear_output: surface_config.format.is_srgb(),
            camera,
        }
    }

    fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Shape Instance Buffer"),
            size: (capacity * std::mem::size_of::<ShapeInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub fn resize(&mut self, new_config: &wgpu::SurfaceConfiguration) {
        self.camera.resize(new_config.width, new_config.height);
        self.linear_output = new_config.format.is_srgb();
    }

    /// Upload the visible part of `commands` and the camera
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, commands: &CommandList) {
        let (clear, visible) = commands.visible();
        if let Some(color) = clear {
            self.clear_color = color;
        }

        let instances = build_instances(visible, self.linear_output);
        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len().next_power_of_two();
            self.instance_buffer = Self::create_instance_buffer(device, self.instance_capacity);
            log::debug!("Grew shape instance buffer to {}", self.instance_capacity);
        }

        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera.to_uniform()]),
        );
        self.instance_count = instances.len() as u32;
    }

    /// Clear the target and draw everything uploaded by `prepare`
    pub fn render(&self, device: &wgpu::Device, queue: &wgpu::Queue, surface_view: &wgpu::TextureView) {
        let clear = if self.linear_output {
            self.clear_color.to_linear()
        } else {
            self.clear_color
        };

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Shape Render Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shape Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: clear.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if self.instance_count > 0 {
                render_pass.set_pipeline(&self.render_pipeline);
                render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
                render_pass.draw(0..6, 0..self.instance_count);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    pub fn instance_count(&self) -> u32 {
        self.instance_count
    }
}
