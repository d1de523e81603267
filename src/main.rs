//! Canvas Demos
//!
//! Hover circles, circular motion, elastic collisions and rectangle overlap,
//! stepped at a fixed 60 Hz and drawn with wgpu.

mod gui;

use gui::{Gui, UiState};
use particle_physics::Viewport;
use particle_renderer::{GpuContext, RenderError, ShapeRenderer};
use particle_simulation::{
    CommandList, FieldError, FrameClock, PointerTracker, Scene, SceneKind, SceneParams,
    DEFAULT_TICK_RATE,
};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    error::{EventLoopError, OsError},
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const INITIAL_SCENE: SceneKind = SceneKind::Collision;
const FRAME_TIME_SAMPLES: usize = 60;

#[derive(Debug)]
enum AppError {
    EventLoop(EventLoopError),
    Window(OsError),
    Render(RenderError),
    Scene(FieldError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EventLoop(e) => write!(f, "event loop error: {}", e),
            AppError::Window(e) => write!(f, "failed to create window: {}", e),
            AppError::Render(e) => write!(f, "renderer error: {}", e),
            AppError::Scene(e) => write!(f, "failed to build scene: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EventLoop(e) => Some(e),
            AppError::Window(e) => Some(e),
            AppError::Render(e) => Some(e),
            AppError::Scene(e) => Some(e),
        }
    }
}

impl From<EventLoopError> for AppError {
    fn from(e: EventLoopError) -> Self {
        AppError::EventLoop(e)
    }
}

impl From<OsError> for AppError {
    fn from(e: OsError) -> Self {
        AppError::Window(e)
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Render(e)
    }
}

impl From<FieldError> for AppError {
    fn from(e: FieldError) -> Self {
        AppError::Scene(e)
    }
}

fn viewport_of(width: u32, height: u32) -> Viewport {
    Viewport::new(width.max(1) as f32, height.max(1) as f32)
}

struct GpuState {
    context: GpuContext,
    renderer: ShapeRenderer,
    gui: Gui,
    ui_state: UiState,

    scene: Scene,
    commands: CommandList,
    clock: FrameClock,
    pointer: PointerTracker,

    last_frame_time: Instant,
    frame_times: VecDeque<f32>,
}

impl GpuState {
    async fn new(window: Arc<Window>, pointer: PointerTracker) -> Result<Self, AppError> {
        let size = window.inner_size();

        let context = GpuContext::new(window.clone(), size.width, size.height).await?;

        let renderer = ShapeRenderer::new(&context.device, &context.config);
        log::info!("✓ Renderer initialized");

        let gui = Gui::new(&context.device, context.format(), &window);
        log::info!("✓ GUI initialized");

        let params = SceneParams::default();
        let scene = Scene::build(INITIAL_SCENE, viewport_of(size.width, size.height), &params)?;
        let mut ui_state = UiState::new(scene.kind(), params);
        ui_state.object_count = scene.object_count();

        Ok(Self {
            context,
            renderer,
            gui,
            ui_state,
            scene,
            commands: CommandList::with_capacity(1024),
            clock: FrameClock::new(DEFAULT_TICK_RATE),
            pointer,
            last_frame_time: Instant::now(),
            frame_times: VecDeque::with_capacity(FRAME_TIME_SAMPLES),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if !self.context.resize(new_size.width, new_size.height) {
            return;
        }
        self.renderer.resize(&self.context.config);

        if let Err(e) = self.scene.resize(viewport_of(new_size.width, new_size.height)) {
            log::warn!("Keeping previous {} layout: {}", self.scene.name(), e);
        }
        self.ui_state.object_count = self.scene.object_count();
    }

    /// Replace the running scene; on failure the current one keeps running
    fn switch_scene(&mut self, kind: SceneKind) {
        let (width, height) = self.context.size();
        let viewport = viewport_of(width, height);
        match Scene::build(kind, viewport, &self.ui_state.params) {
            Ok(scene) => {
                self.scene = scene;
                self.commands.reset();
                self.ui_state.scene = kind;
                self.ui_state.object_count = self.scene.object_count();
                self.ui_state.stats = Default::default();
                self.ui_state.kinetic_energy = None;
            }
            Err(e) => log::error!("Could not build {}: {}", kind.name(), e),
        }
    }

    fn toggle_pause(&mut self) {
        self.clock.toggle_pause();
        self.ui_state.paused = self.clock.is_paused();
        log::info!("{}", if self.ui_state.paused { "Paused" } else { "Resumed" });
    }

    /// Run the ticks that are due, keeping only the last tick's drawing
    fn update(&mut self, elapsed: std::time::Duration) {
        let ticks = self.clock.advance(elapsed);
        let pointer = self.pointer.snapshot();
        let background = self.ui_state.params.background;

        // Halo sliders apply live; everything else waits for a rebuild
        if let Scene::Collision(field) = &mut self.scene {
            let halo = &self.ui_state.params.field;
            field.set_halo(halo.halo_distance, halo.opacity_cap, halo.opacity_step);
        }

        for _ in 0..ticks {
            self.commands.reset();
            self.ui_state.stats = self.scene.step(pointer, background, &mut self.commands);
        }

        if let Scene::Collision(field) = &self.scene {
            self.ui_state.kinetic_energy = Some(field.kinetic_energy());
        }
    }

    fn render(&mut self, window: &Window) -> Result<(f32, f32), wgpu::SurfaceError> {
        // Track frame time
        let now = Instant::now();
        let elapsed = now - self.last_frame_time;
        self.last_frame_time = now;

        self.frame_times.push_back(elapsed.as_secs_f32() * 1000.0);
        if self.frame_times.len() > FRAME_TIME_SAMPLES {
            self.frame_times.pop_front();
        }
        let avg_frame_time =
            self.frame_times.iter().sum::<f32>() / self.frame_times.len().max(1) as f32;
        let fps = if avg_frame_time > 0.0 {
            1000.0 / avg_frame_time
        } else {
            0.0
        };

        self.update(elapsed);

        self.ui_state.fps = fps;
        self.ui_state.frame_time = avg_frame_time;

        // Render
        let output = self.context.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer
            .prepare(&self.context.device, &self.context.queue, &self.commands);
        self.ui_state.shape_count = self.renderer.instance_count();
        self.renderer
            .render(&self.context.device, &self.context.queue, &view);

        self.gui.render(
            &self.context.device,
            &self.context.queue,
            window,
            &view,
            &mut self.ui_state,
        );

        output.present();

        // Apply requests made in the overlay this frame
        if let Some(kind) = self.ui_state.requested_scene.take() {
            self.switch_scene(kind);
        }
        if std::mem::take(&mut self.ui_state.rebuild_requested) {
            self.switch_scene(self.scene.kind());
        }

        Ok((fps, avg_frame_time))
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    pointer: PointerTracker,
    error: Option<AppError>,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            gpu_state: None,
            pointer: PointerTracker::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        if code == KeyCode::Escape {
            event_loop.exit();
            return;
        }

        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };

        match code {
            KeyCode::Digit1 => gpu_state.switch_scene(SceneKind::Hover),
            KeyCode::Digit2 => gpu_state.switch_scene(SceneKind::Orbit),
            KeyCode::Digit3 => gpu_state.switch_scene(SceneKind::Collision),
            KeyCode::Digit4 => gpu_state.switch_scene(SceneKind::Rectangles),
            KeyCode::KeyR => gpu_state.switch_scene(gpu_state.scene.kind()),
            KeyCode::Space => gpu_state.toggle_pause(),
            _ => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("Canvas Demos")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        match pollster::block_on(GpuState::new(window.clone(), self.pointer.clone())) {
            Ok(gpu_state) => {
                self.window = Some(window);
                self.gpu_state = Some(gpu_state);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // The demos follow the cursor even over the overlay
        if let WindowEvent::CursorMoved { position, .. } = &event {
            self.pointer.set(position.x as f32, position.y as f32);
        }

        // Handle GUI events
        if let (Some(gpu_state), Some(window)) = (&mut self.gpu_state, &self.window) {
            if gpu_state.gui.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => self.handle_key(event_loop, code),

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
                    match gpu_state.render(window) {
                        Ok((fps, frame_time)) => {
                            window.set_title(&format!(
                                "Canvas Demos - {} - {:.0} FPS ({:.2}ms)",
                                gpu_state.scene.name(),
                                fps,
                                frame_time
                            ));
                        }
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu_state.context.reconfigure()
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run() -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting canvas demos...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
