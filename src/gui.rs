use egui::Context;
use egui_wgpu::Renderer;
use egui_winit::State;
use particle_simulation::{PairResolution, SceneKind, SceneParams, StepStats};
use wgpu::{Device, TextureFormat};
use winit::{event::WindowEvent, window::Window};

pub struct UiState {
    pub fps: f32,
    pub frame_time: f32,
    pub scene: SceneKind,
    pub object_count: usize,
    /// Shapes uploaded to the GPU for the last drawn tick
    pub shape_count: u32,
    pub stats: StepStats,
    pub kinetic_energy: Option<f32>,
    pub paused: bool,
    pub params: SceneParams,
    /// Scene picked in the overlay, consumed by the app after the frame
    pub requested_scene: Option<SceneKind>,
    /// Set by the rebuild button, consumed by the app after the frame
    pub rebuild_requested: bool,
}

impl UiState {
    pub fn new(scene: SceneKind, params: SceneParams) -> Self {
        Self {
            fps: 0.0,
            frame_time: 0.0,
            scene,
            object_count: 0,
            shape_count: 0,
            stats: StepStats::default(),
            kinetic_energy: None,
            paused: false,
            params,
            requested_scene: None,
            rebuild_requested: false,
        }
    }
}

pub struct Gui {
    context: Context,
    state: State,
    renderer: Renderer,
}

impl Gui {
    pub fn new(device: &Device, output_color_format: TextureFormat, window: &Window) -> Self {
        let context = Context::default();
        context.set_visuals(egui::Visuals::light());
        let id = context.viewport_id();

        let state = State::new(
            context.clone(),
            id,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(device.limits().max_texture_dimension_2d as usize),
        );

        let renderer = Renderer::new(
            device,
            output_color_format,
            egui_wgpu::RendererOptions {
                msaa_samples: 1,
                depth_stencil_format: None,
                dithering: false,
                predictable_texture_filtering: false,
            },
        );

        Self {
            context,
            state,
            renderer,
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        response.consumed
    }

    pub fn render(
        &mut self,
        device: &Device,
        queue: &wgpu::Queue,
        window: &Window,
        view: &wgpu::TextureView,
        ui_state: &mut UiState,
    ) {
        let raw_input = self.state.take_egui_input(window);

        let full_output = self.context.run(raw_input, |ctx| {
            Self::ui(ctx, ui_state);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let clipped_primitives = self
            .context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let size = window.inner_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Egui Encoder"),
        });

        self.renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            self.renderer
                .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        }

        queue.submit(std::iter::once(encoder.finish()));

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }

    fn ui(ctx: &Context, state: &mut UiState) {
        // Diagnostics Panel (Top Left)
        egui::Window::new("Diagnostics")
            .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                ui.label(format!("FPS: {:.1}", state.fps));
                ui.label(format!("Frame Time: {:.2} ms", state.frame_time));
                ui.separator();
                ui.label(format!("Scene: {}", state.scene.name()));
                ui.label(format!("Objects: {}", state.object_count));
                ui.label(format!("Shapes drawn: {}", state.shape_count));
                if state.scene == SceneKind::Collision {
                    ui.label(format!("Contacts: {}", state.stats.contacts));
                    ui.label(format!("Wall hits: {}", state.stats.reflections));
                    if let Some(energy) = state.kinetic_energy {
                        ui.label(format!("Kinetic energy: {:.3}", energy));
                    }
                }
                if state.paused {
                    ui.colored_label(egui::Color32::from_rgb(0xD2, 0x0F, 0x39), "Paused");
                }
            });

        // Scene Selector (Top Right)
        egui::Window::new("Scenes")
            .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
            .resizable(false)
            .collapsible(true)
            .show(ctx, |ui| {
                for (index, kind) in SceneKind::ALL.into_iter().enumerate() {
                    let label = format!("{}  {}", index + 1, kind.name());
                    if ui.selectable_label(state.scene == kind, label).clicked() && state.scene != kind {
                        state.requested_scene = Some(kind);
                    }
                }
                ui.separator();
                ui.label("R rebuild · Space pause · Esc quit");
            });

        // Field Controls (Bottom Left)
        egui::Window::new("Collision Field")
            .anchor(egui::Align2::LEFT_BOTTOM, [10.0, -10.0])
            .resizable(false)
            .collapsible(true)
            .default_open(false)
            .show(ctx, |ui| {
                let field = &mut state.params.field;

                ui.heading("Layout (rebuild)");
                ui.add(egui::Slider::new(&mut field.count, 1..=400).text("Particles"));
                ui.add(egui::Slider::new(&mut field.radius, 2.0..=60.0).text("Radius"));
                ui.add(egui::Slider::new(&mut field.mass, 0.1..=10.0).text("Mass"));
                ui.add(egui::Slider::new(&mut field.max_speed, 0.0..=5.0).text("Max speed"));

                ui.separator();
                ui.heading("Halo (live)");
                ui.add(
                    egui::Slider::new(&mut field.halo_distance, 0.0..=300.0).text("Reach"),
                );
                ui.add(egui::Slider::new(&mut field.opacity_cap, 0.0..=1.0).text("Max opacity"));
                ui.add(
                    egui::Slider::new(&mut field.opacity_step, 0.001..=0.1)
                        .text("Fade step")
                        .logarithmic(true),
                );

                ui.separator();
                ui.heading("Pairs (rebuild)");
                ui.horizontal(|ui| {
                    ui.radio_value(&mut field.resolution, PairResolution::Both, "Both");
                    ui.radio_value(&mut field.resolution, PairResolution::Once, "Once");
                });

                ui.separator();
                if ui.button("Rebuild field").clicked() {
                    state.rebuild_requested = true;
                }
            });
    }
}
