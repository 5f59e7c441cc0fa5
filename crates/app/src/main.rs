//! Arena Rig - Main Entry Point
//!
//! Opens the shared output window, builds the camera ring around the
//! cylindrical screen and applies live adjustments from the keyboard every
//! tick. Drawing the cameras' views is left to the renderer that consumes the
//! scene.

mod arena;
mod settings;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use arena_core::FrameClock;
use arena_platform::{InputState, KeyBindings, Window, WindowConfig};
use arena_rig::CommandQueue;

use crate::arena::Arena;
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about = "Off-axis camera ring for a cylindrical screen")]
struct Args {
    /// Settings file with [window] and [rig] tables
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Build the rig, log its outputs and exit without opening a window
    #[arg(long)]
    headless: bool,

    /// Render a left/right pair per sector
    #[arg(long)]
    stereo: bool,

    /// Override the configured camera count
    #[arg(long)]
    cameras: Option<u32>,
}

struct App {
    window_config: WindowConfig,
    window: Option<Window>,
    arena: Arena,
    input: InputState,
    bindings: KeyBindings,
    queue: CommandQueue,
    clock: FrameClock,
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            window_config: settings.window,
            window: None,
            arena: Arena::new(settings.rig),
            input: InputState::new(),
            bindings: KeyBindings::default(),
            queue: CommandQueue::new(),
            clock: FrameClock::new(),
        }
    }

    fn update(&mut self) {
        self.clock.tick();
        self.bindings.sample(&self.input, &mut self.queue);
        if self.queue.is_empty() {
            return;
        }

        if self.arena.tick(&mut self.queue)
            && let Some(ref window) = self.window
        {
            window
                .inner()
                .set_title(&self.arena.title(&self.window_config.title));
            self.arena.log_outputs(window.width(), window.height());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            match Window::new(event_loop, &self.window_config) {
                Ok(window) => {
                    window
                        .inner()
                        .set_title(&self.arena.title(&self.window_config.title));
                    self.arena.log_outputs(window.width(), window.height());
                    info!("Initialization complete, entering main loop");
                    self.window = Some(window);
                }
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(
                    "Close requested after {} ticks ({:.1} per second), shutting down",
                    self.clock.ticks(),
                    self.clock.average_rate()
                );
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(ref mut window) = self.window {
                    window.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.input.release_all(),
            WindowEvent::RedrawRequested => self.update(),
            WindowEvent::KeyboardInput { event, .. } => {
                use winit::keyboard::PhysicalKey;
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.state.is_pressed() {
                        self.input.on_key_pressed(key);
                    } else {
                        self.input.on_key_released(key);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    arena_core::init_logging();
    let args = Args::parse();

    let settings = Settings::load(args.config.as_deref())?.finish(args.stereo, args.cameras)?;
    info!(
        "Starting arena rig: {} cameras, {}",
        settings.rig.camera_count,
        if settings.rig.use_stereo { "stereo" } else { "mono" }
    );

    if args.headless {
        let arena = Arena::new(settings.rig);
        arena.log_outputs(settings.window.width, settings.window.height);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    Ok(())
}
