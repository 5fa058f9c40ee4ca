use std::sync::Arc;

use anyhow::{ensure, Result};
use clap::Parser;
use log::{error, info, trace, warn};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use viewport_fp::cli::Cli;
use viewport_fp::core::{Clock, FixedHz, FpsCounter, WinitController};
use viewport_fp::types::CameraUniform;
use viewport_fp::viewport::{Signal, Viewport};

const FPS_REPORT_INTERVAL: f32 = 1.0;

// === Application ===

struct App {
    window: Option<Arc<Window>>,
    viewport: Viewport,
    input: WinitController,
    clock: Clock,
    ticker: FixedHz,
    fps: FpsCounter,
}

impl App {
    fn new(viewport: Viewport, tick_rate: f32) -> Self {
        Self {
            window: None,
            viewport,
            input: WinitController::new(),
            clock: Clock::new(),
            ticker: FixedHz::new(tick_rate),
            fps: FpsCounter::new(FPS_REPORT_INTERVAL),
        }
    }

    fn capture_pointer(&mut self, window: &Window) {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));

        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                self.input.set_captured(true);
            }
            Err(e) => warn!("Pointer capture unavailable, mouse look disabled: {}", e),
        }
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        for _ in 0..self.ticker.steps(delta) {
            self.viewport.tick();
        }

        // Rendering belongs to the host; hand the camera block to it here.
        let uniform = CameraUniform::from_camera(&self.viewport);
        trace!("Camera uniform ready ({} bytes)", uniform.as_bytes().len());

        if let Some(window) = &self.window {
            let [x, y, z] = uniform.position;
            window.set_title(&format!(
                "{} - ({:.2}, {:.2}, {:.2}) yaw {:.1} pitch {:.1}",
                self.viewport.config().title,
                x,
                y,
                z,
                self.viewport.yaw(),
                self.viewport.pitch()
            ));
        }

        if let Some(fps) = self.fps.frame(delta) {
            let (dx, dy) = self.input.mouse_delta();
            info!("FPS: {:.1} mouse delta ({:.1}, {:.1})", fps, dx, dy);
        }
        self.input.reset_deltas();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let config = self.viewport.config();
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(config.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
                .with_resizable(false),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.capture_pointer(&window);
        self.clock.reset();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.redraw(),
            event => {
                if let Some(input) = self.input.process_window_event(&event) {
                    if self.viewport.handle(input) == Some(Signal::Exit) {
                        event_loop.exit();
                    }
                }
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some(input) = self.input.process_device_event(&event) {
            self.viewport.handle(input);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    ensure!(
        cli.tick_rate.is_finite() && cli.tick_rate > 0.0,
        "Tick rate must be positive, got {}",
        cli.tick_rate
    );

    let viewport = Viewport::new(cli.viewport_config()?)?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(viewport, cli.tick_rate);

    info!("Viewport - Controls: WASD, Space/Ctrl, mouse to look, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
